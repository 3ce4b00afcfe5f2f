use std::{
    borrow::Cow,
    io::{self, BufRead, Write},
};

use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::{ValidationContext, ValidationResult, Validator},
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};

use crate::cli::core::CommandError;

/// Outcome of reading the menu choice line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuLine {
    Line(String),
    Interrupted,
    EndOfInput,
}

/// Where the shell reads answers from.
pub trait PromptSource {
    fn menu_line(&mut self, prompt: &str) -> Result<MenuLine, CommandError>;

    /// Reads one free-form answer. `None` means the input is exhausted.
    fn text(&mut self, prompt: &str) -> Result<Option<String>, CommandError>;

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, CommandError>;
}

/// Terminal prompts: `rustyline` for the menu line, `dialoguer` for fields.
pub struct InteractivePrompts {
    editor: Editor<MenuHelper, DefaultHistory>,
    theme: ColorfulTheme,
}

impl InteractivePrompts {
    pub fn new(commands: Vec<&'static str>) -> Result<Self, ReadlineError> {
        let mut editor = Editor::<MenuHelper, DefaultHistory>::new()?;
        editor.set_helper(Some(MenuHelper::new(commands)));
        editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);
        Ok(Self {
            editor,
            theme: ColorfulTheme::default(),
        })
    }
}

impl PromptSource for InteractivePrompts {
    fn menu_line(&mut self, prompt: &str) -> Result<MenuLine, CommandError> {
        match self.editor.readline(&format!("{prompt}: ")) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    self.editor.add_history_entry(trimmed).ok();
                }
                Ok(MenuLine::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(MenuLine::Interrupted),
            Err(ReadlineError::Eof) => Ok(MenuLine::EndOfInput),
            Err(err) => Err(err.into()),
        }
    }

    fn text(&mut self, prompt: &str) -> Result<Option<String>, CommandError> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map(Some)
            .map_err(prompt_error)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, CommandError> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }
}

fn prompt_error(err: dialoguer::Error) -> CommandError {
    match err {
        dialoguer::Error::IO(source) if source.kind() == io::ErrorKind::Interrupted => {
            CommandError::Cancelled
        }
        other => CommandError::Prompt(other),
    }
}

/// Line-by-line answers from any reader, used when stdin is a script.
pub struct ScriptPrompts<R> {
    reader: R,
}

impl<R: BufRead> ScriptPrompts<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn next_line(&mut self, prompt: &str) -> Result<Option<String>, CommandError> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}: ")?;
        stdout.flush()?;

        let mut buffer = String::new();
        let read = self.reader.read_line(&mut buffer)?;
        writeln!(stdout)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(
            buffer.trim_end_matches(|c: char| c == '\n' || c == '\r').to_string(),
        ))
    }
}

impl<R: BufRead> PromptSource for ScriptPrompts<R> {
    fn menu_line(&mut self, prompt: &str) -> Result<MenuLine, CommandError> {
        Ok(match self.next_line(prompt)? {
            Some(line) => MenuLine::Line(line),
            None => MenuLine::EndOfInput,
        })
    }

    fn text(&mut self, prompt: &str) -> Result<Option<String>, CommandError> {
        self.next_line(prompt)
    }

    fn confirm(&mut self, _prompt: &str, _default: bool) -> Result<bool, CommandError> {
        Ok(true)
    }
}

/// Tab completion over the menu keywords.
pub struct MenuHelper {
    commands: Vec<String>,
}

impl MenuHelper {
    fn new(names: Vec<&'static str>) -> Self {
        let mut commands: Vec<String> = names
            .into_iter()
            .map(|name| name.to_ascii_lowercase())
            .collect();
        commands.sort();
        commands.dedup();
        Self { commands }
    }

    fn candidates(&self, prefix: &str) -> Vec<Pair> {
        let needle = prefix.to_ascii_lowercase();
        self.commands
            .iter()
            .filter(|name| name.starts_with(&needle))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            })
            .collect()
    }
}

impl Helper for MenuHelper {}

impl Completer for MenuHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        // Only the first word is a menu keyword.
        if prefix.trim_start().contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        let start = prefix.len() - prefix.trim_start().len();
        Ok((start, self.candidates(&prefix[start..])))
    }
}

impl Hinter for MenuHelper {
    type Hint = String;
}

impl Highlighter for MenuHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for MenuHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        Ok(ValidationResult::Valid(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn script_prompts_read_lines_until_exhausted() {
        let mut prompts = ScriptPrompts::new(Cursor::new("1\r\nLunch\n"));
        assert_eq!(
            prompts.menu_line("Enter choice").expect("menu line"),
            MenuLine::Line("1".into())
        );
        assert_eq!(
            prompts.text("Expense name").expect("text"),
            Some("Lunch".into())
        );
        assert_eq!(prompts.text("Amount").expect("text"), None);
        assert_eq!(
            prompts.menu_line("Enter choice").expect("menu line"),
            MenuLine::EndOfInput
        );
    }

    #[test]
    fn script_prompts_confirm_without_reading() {
        let mut prompts = ScriptPrompts::new(Cursor::new("keep\n"));
        assert!(prompts.confirm("Exit?", false).expect("confirm"));
        assert_eq!(prompts.text("next").expect("text"), Some("keep".into()));
    }

    #[test]
    fn helper_completes_keyword_prefixes() {
        let helper = MenuHelper::new(vec!["export", "exit", "add", "Export"]);
        let names: Vec<String> = helper
            .candidates("ex")
            .into_iter()
            .map(|pair| pair.replacement)
            .collect();
        assert_eq!(names, vec!["exit", "export"]);
    }
}
