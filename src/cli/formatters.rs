use crate::currency::format_currency;
use crate::ledger::Expense;

/// One-line rendering used by the add and list commands:
/// `[id] date | name | <symbol>amount | category | notes`.
pub fn expense_line(expense: &Expense, symbol: &str) -> String {
    format!(
        "[{}] {} | {} | {} | {} | {}",
        expense.id,
        expense.date,
        expense.name,
        format_currency(symbol, expense.amount),
        expense.category,
        expense.notes
    )
}

/// Bullet line for category and month summaries.
pub fn summary_line(label: &str, amount: f64, symbol: &str) -> String {
    format!(" - {}: {}", label, format_currency(symbol, amount))
}
