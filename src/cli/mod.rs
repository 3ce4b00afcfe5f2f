//! Interactive numbered-menu shell around the expense ledger.

pub mod commands;
pub mod core;
pub mod formatters;
pub mod io;
pub mod menus;
pub mod output;
pub mod parsing;
mod shell;

pub use self::core::{CliError, CliMode, CommandError, LoopControl, ShellContext};
pub use shell::{run_cli, run_shell, SCRIPT_ENV};
