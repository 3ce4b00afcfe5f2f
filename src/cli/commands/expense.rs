use crate::{
    cli::{
        core::{CommandError, CommandResult, LoopControl, ShellContext},
        formatters::expense_line,
        output,
        parsing::{parse_amount, parse_date, parse_limit},
    },
    core::services::{ExpenseInput, ExpenseService},
};

use super::expect_at_most;

const EMPTY_NAME: &str = "Expense name cannot be empty.";

pub fn add_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_at_most(args, 0, "add")?;

    let name = context.prompt_parsed("Expense name", |raw| {
        if raw.is_empty() {
            Err(EMPTY_NAME.to_string())
        } else {
            Ok(raw.to_string())
        }
    })?;
    let amount = context.prompt_parsed("Amount (numeric)", parse_amount)?;
    let category = context.prompt_text("Category (e.g., Food, Travel, Bills)")?;
    let date = context.prompt_parsed("Date (YYYY-MM-DD) [press enter for today]", parse_date)?;
    let notes = context.prompt_text("Notes (optional)")?;

    let input = ExpenseInput {
        name,
        amount,
        category,
        date,
        notes,
    };
    let expense = ExpenseService::record(&mut context.ledger, input)?;
    output::success("Added:");
    output::info(expense_line(&expense, context.symbol()));
    Ok(LoopControl::Continue)
}

/// Lists every expense, or the last N given inline (`list 5`) or at the prompt.
pub fn list_expenses(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_at_most(args, 1, "list [N]")?;

    let limit = match args.first() {
        Some(raw) => parse_limit(raw).map_err(CommandError::InvalidArguments)?,
        None => context.prompt_parsed("Show last N entries (press enter for all)", parse_limit)?,
    };

    let expenses = ExpenseService::recent(&context.ledger, limit);
    if expenses.is_empty() {
        output::info("No expenses recorded yet.");
        return Ok(LoopControl::Continue);
    }
    for expense in expenses {
        output::info(expense_line(expense, context.symbol()));
    }
    Ok(LoopControl::Continue)
}
