use crate::{
    cli::{
        core::{CommandResult, LoopControl, ShellContext},
        formatters::summary_line,
        output,
    },
    core::services::SummaryService,
};

use super::expect_at_most;

pub fn show_total(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_at_most(args, 0, "total")?;
    let total = SummaryService::total(&context.ledger);
    output::info(format!("Total spent: {}", context.format_amount(total)));
    Ok(LoopControl::Continue)
}

pub fn category_summary(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_at_most(args, 0, "category")?;
    let rows = SummaryService::by_category(&context.ledger);
    print_summary(context, "Spending by category:", &rows);
    Ok(LoopControl::Continue)
}

pub fn month_summary(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_at_most(args, 0, "month")?;
    let rows = SummaryService::by_month(&context.ledger);
    print_summary(context, "Spending by month:", &rows);
    Ok(LoopControl::Continue)
}

fn print_summary(context: &ShellContext, title: &str, rows: &[(String, f64)]) {
    if rows.is_empty() {
        output::info("No records yet.");
        return;
    }
    output::info(title);
    for (label, amount) in rows {
        output::info(summary_line(label, *amount, context.symbol()));
    }
}
