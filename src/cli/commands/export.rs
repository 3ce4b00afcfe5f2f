use std::path::PathBuf;

use crate::cli::{
    core::{CommandResult, LoopControl, ShellContext},
    output,
};

use super::expect_at_most;

/// Copies the ledger to the inline path, the prompted path, or the
/// configured default when the prompt is left blank.
pub fn export_expenses(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_at_most(args, 1, "export [FILE]")?;

    let target = match args.first() {
        Some(raw) => PathBuf::from(raw),
        None => {
            let default = context.config.export_file.clone();
            let answer = context.prompt_text(&format!(
                "Export filename [default: {}]",
                default.display()
            ))?;
            if answer.is_empty() {
                default
            } else {
                PathBuf::from(answer)
            }
        }
    };

    let written = context.ledger.export(&target)?;
    output::success(format!("Exported to {}", written.display()));
    Ok(LoopControl::Continue)
}
