//! Handlers behind the main menu entries.

pub mod expense;
pub mod export;
pub mod summary;

use crate::cli::core::CommandError;

/// Fails with a usage message when more than `max` inline arguments were given.
pub(crate) fn expect_at_most(args: &[&str], max: usize, usage: &str) -> Result<(), CommandError> {
    if args.len() > max {
        return Err(CommandError::InvalidArguments(format!("Usage: {usage}")));
    }
    Ok(())
}
