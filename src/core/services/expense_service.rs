//! Business logic helpers for recording and listing expenses.

use crate::core::services::{ServiceError, ServiceResult};
use crate::ledger::{Expense, ExpenseLedger, DEFAULT_CATEGORY};

/// Raw values collected from the user for a new expense.
#[derive(Debug, Clone, Default)]
pub struct ExpenseInput {
    pub name: String,
    pub amount: f64,
    pub category: String,
    pub date: Option<String>,
    pub notes: String,
}

/// Applies input defaults before handing expenses to the ledger.
pub struct ExpenseService;

impl ExpenseService {
    /// Records `input`, substituting `General` for a blank category and
    /// today for a blank date.
    pub fn record(ledger: &mut ExpenseLedger, input: ExpenseInput) -> ServiceResult<Expense> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(ServiceError::Invalid("Expense name is required".into()));
        }
        if !input.amount.is_finite() {
            return Err(ServiceError::Invalid(format!(
                "Amount must be a finite number, got {}",
                input.amount
            )));
        }

        let category = match input.category.trim() {
            "" => DEFAULT_CATEGORY,
            value => value,
        };
        let date = input
            .date
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty());

        let expense = ledger.add(name, input.amount, category, date, input.notes.trim())?;
        Ok(expense)
    }

    /// Returns the ledger's expenses, optionally only the most recent `limit`.
    pub fn recent(ledger: &ExpenseLedger, limit: Option<usize>) -> &[Expense] {
        ledger.list(limit)
    }
}
