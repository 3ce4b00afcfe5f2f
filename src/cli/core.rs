use std::io;

use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::{
    cli::{
        commands,
        io::{InteractivePrompts, MenuLine, PromptSource, ScriptPrompts},
        menus::{MainMenu, MenuAction},
        output,
    },
    config::{Config, ConfigError},
    core::services::ServiceError,
    currency::format_currency,
    errors::LedgerError,
    ledger::ExpenseLedger,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Fatal errors that end the shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Readline error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised while running a single menu action.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
    #[error("input cancelled")]
    Cancelled,
    #[error("end of input")]
    EndOfInput,
}

pub type CommandResult = Result<LoopControl, CommandError>;

impl From<ServiceError> for CommandError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Ledger(err) => CommandError::Ledger(err),
            ServiceError::Invalid(message) => CommandError::InvalidArguments(message),
        }
    }
}

/// State shared by every menu action for the lifetime of the shell.
pub struct ShellContext {
    pub mode: CliMode,
    pub ledger: ExpenseLedger,
    pub config: Config,
    pub menu: MainMenu,
    prompts: Box<dyn PromptSource>,
}

impl ShellContext {
    /// Builds a context reading from the terminal, or from stdin in script mode.
    pub fn new(mode: CliMode, ledger: ExpenseLedger, config: Config) -> Result<Self, CliError> {
        let menu = MainMenu::new();
        let prompts: Box<dyn PromptSource> = match mode {
            CliMode::Interactive => Box::new(InteractivePrompts::new(menu.command_names())?),
            CliMode::Script => Box::new(ScriptPrompts::new(io::stdin().lock())),
        };
        Ok(Self {
            mode,
            ledger,
            config,
            menu,
            prompts,
        })
    }

    pub fn with_prompts(
        mode: CliMode,
        ledger: ExpenseLedger,
        config: Config,
        prompts: Box<dyn PromptSource>,
    ) -> Self {
        Self {
            mode,
            ledger,
            config,
            menu: MainMenu::new(),
            prompts,
        }
    }

    pub fn read_menu_line(&mut self) -> Result<MenuLine, CommandError> {
        let prompt = self.menu.prompt();
        self.prompts.menu_line(&prompt)
    }

    /// Reads a trimmed answer; running out of input ends the session.
    pub fn prompt_text(&mut self, label: &str) -> Result<String, CommandError> {
        match self.prompts.text(label)? {
            Some(value) => Ok(value.trim().to_string()),
            None => Err(CommandError::EndOfInput),
        }
    }

    /// Re-prompts `label` until `parse` accepts the answer, printing its
    /// message after every rejection.
    pub fn prompt_parsed<T>(
        &mut self,
        label: &str,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> Result<T, CommandError> {
        loop {
            let raw = self.prompt_text(label)?;
            match parse(&raw) {
                Ok(value) => return Ok(value),
                Err(message) => self.print_warning(&message),
            }
        }
    }

    pub fn confirm_exit(&mut self) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        self.prompts.confirm("Exit expense tracker?", true)
    }

    pub fn dispatch(&mut self, action: MenuAction, args: &[&str]) -> CommandResult {
        match action {
            MenuAction::AddExpense => commands::expense::add_expense(self, args),
            MenuAction::ListExpenses => commands::expense::list_expenses(self, args),
            MenuAction::ShowTotal => commands::summary::show_total(self, args),
            MenuAction::CategorySummary => commands::summary::category_summary(self, args),
            MenuAction::MonthSummary => commands::summary::month_summary(self, args),
            MenuAction::Export => commands::export::export_expenses(self, args),
            MenuAction::Quit => {
                self.farewell();
                Ok(LoopControl::Exit)
            }
        }
    }

    /// Prints recoverable errors and keeps going; ledger and IO failures are
    /// returned as fatal.
    pub fn report_error(&mut self, err: CommandError) -> Result<LoopControl, CliError> {
        match err {
            CommandError::InvalidArguments(message) => {
                self.print_error(&message);
                Ok(LoopControl::Continue)
            }
            CommandError::Cancelled => {
                self.print_warning("Input cancelled.");
                Ok(LoopControl::Continue)
            }
            CommandError::EndOfInput => {
                output::blank_line();
                self.farewell();
                Ok(LoopControl::Exit)
            }
            CommandError::Ledger(err) => Err(err.into()),
            CommandError::Io(err) => Err(err.into()),
            CommandError::Readline(err) => Err(err.into()),
            CommandError::Prompt(err) => Err(err.into()),
        }
    }

    pub fn format_amount(&self, amount: f64) -> String {
        format_currency(&self.config.currency_symbol, amount)
    }

    pub fn symbol(&self) -> &str {
        &self.config.currency_symbol
    }

    pub(crate) fn print_warning(&self, message: &str) {
        output::warning(message);
    }

    pub(crate) fn print_error(&self, message: &str) {
        output::error(message);
    }

    fn farewell(&self) {
        output::info(format!(
            "Goodbye, your data is saved in {}",
            self.ledger.path().display()
        ));
    }
}
