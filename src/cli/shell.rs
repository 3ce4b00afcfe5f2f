use shell_words::split;

use crate::{
    cli::{
        core::{CliError, CliMode, CommandError, LoopControl, ShellContext},
        io::MenuLine,
        menus::MenuChoice,
        output,
    },
    config::ConfigManager,
    core::utils::ledger_file,
    ledger::ExpenseLedger,
};

/// When set, answers are read line by line from stdin and colors are off.
pub const SCRIPT_ENV: &str = "EXPENSE_TRACKER_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };
    if mode == CliMode::Script {
        output::disable_colors();
    }

    let config = ConfigManager::new().load_or_init()?;
    let ledger = ExpenseLedger::open(ledger_file(&config))?;
    let mut context = ShellContext::new(mode, ledger, config)?;
    run_shell(&mut context)
}

/// Shows the menu and runs the chosen actions until the user quits or the
/// input ends.
pub fn run_shell(context: &mut ShellContext) -> Result<(), CliError> {
    output::section("Expense Tracker");

    loop {
        output::blank_line();
        output::info(context.menu.render());

        let outcome = match context.read_menu_line() {
            Ok(MenuLine::Line(line)) => handle_line(context, &line),
            Ok(MenuLine::Interrupted) => match context.confirm_exit() {
                Ok(true) => Err(CommandError::EndOfInput),
                Ok(false) => Ok(LoopControl::Continue),
                Err(err) => Err(err),
            },
            Ok(MenuLine::EndOfInput) => Err(CommandError::EndOfInput),
            Err(err) => Err(err),
        };

        let control = match outcome {
            Ok(control) => control,
            Err(err) => context.report_error(err)?,
        };
        if control == LoopControl::Exit {
            break;
        }
    }

    Ok(())
}

fn handle_line(context: &mut ShellContext, line: &str) -> Result<LoopControl, CommandError> {
    let tokens = match split(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            context.print_warning(&format!("Could not parse input: {err}"));
            return Ok(LoopControl::Continue);
        }
    };

    let Some((choice, rest)) = tokens.split_first() else {
        context.print_error(&context.menu.invalid_choice_message());
        return Ok(LoopControl::Continue);
    };
    let args: Vec<&str> = rest.iter().map(String::as_str).collect();

    match context.menu.resolve(choice) {
        MenuChoice::Action(action) => {
            tracing::debug!(?action, args = args.len(), "dispatching menu action");
            context.dispatch(action, &args)
        }
        MenuChoice::Unknown { suggestion } => {
            context.print_error(&context.menu.invalid_choice_message());
            if let Some(name) = suggestion {
                output::info(format!("Did you mean `{name}`?"));
            }
            Ok(LoopControl::Continue)
        }
    }
}
