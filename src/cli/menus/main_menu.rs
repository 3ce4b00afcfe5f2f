use strsim::levenshtein;

/// Largest edit distance at which an unknown keyword earns a suggestion.
const SUGGESTION_DISTANCE: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    AddExpense,
    ListExpenses,
    ShowTotal,
    CategorySummary,
    MonthSummary,
    Export,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Action(MenuAction),
    Unknown { suggestion: Option<&'static str> },
}

#[derive(Clone)]
struct MenuEntry {
    key: &'static str,
    command: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
    action: MenuAction,
}

impl MenuEntry {
    fn matches(&self, token: &str) -> bool {
        self.key == token || self.command == token || self.aliases.contains(&token)
    }
}

/// The numbered main menu. Entries answer to their number, keyword, or alias.
pub struct MainMenu {
    entries: Vec<MenuEntry>,
}

impl MainMenu {
    pub fn new() -> Self {
        let entries = vec![
            MenuEntry {
                key: "1",
                command: "add",
                aliases: &[],
                description: "Add expense",
                action: MenuAction::AddExpense,
            },
            MenuEntry {
                key: "2",
                command: "list",
                aliases: &["ls"],
                description: "List expenses",
                action: MenuAction::ListExpenses,
            },
            MenuEntry {
                key: "3",
                command: "total",
                aliases: &[],
                description: "Show total spent",
                action: MenuAction::ShowTotal,
            },
            MenuEntry {
                key: "4",
                command: "category",
                aliases: &["categories"],
                description: "Summary by category",
                action: MenuAction::CategorySummary,
            },
            MenuEntry {
                key: "5",
                command: "month",
                aliases: &["months"],
                description: "Summary by month",
                action: MenuAction::MonthSummary,
            },
            MenuEntry {
                key: "6",
                command: "export",
                aliases: &[],
                description: "Export CSV",
                action: MenuAction::Export,
            },
            MenuEntry {
                key: "7",
                command: "quit",
                aliases: &["exit", "q"],
                description: "Quit",
                action: MenuAction::Quit,
            },
        ];
        Self { entries }
    }

    pub fn render(&self) -> String {
        let mut lines = vec![String::from("Choose an option:")];
        lines.extend(
            self.entries
                .iter()
                .map(|entry| format!("{}. {}", entry.key, entry.description)),
        );
        lines.join("\n")
    }

    pub fn prompt(&self) -> String {
        format!("Enter choice (1-{})", self.entries.len())
    }

    pub fn invalid_choice_message(&self) -> String {
        format!("Invalid choice. Enter 1-{}.", self.entries.len())
    }

    pub fn resolve(&self, token: &str) -> MenuChoice {
        let needle = token.trim().to_ascii_lowercase();
        if let Some(entry) = self.entries.iter().find(|entry| entry.matches(&needle)) {
            return MenuChoice::Action(entry.action);
        }
        MenuChoice::Unknown {
            suggestion: self.suggest(&needle),
        }
    }

    /// Keywords offered for tab completion.
    pub fn command_names(&self) -> Vec<&'static str> {
        self.entries
            .iter()
            .flat_map(|entry| std::iter::once(entry.command).chain(entry.aliases.iter().copied()))
            .collect()
    }

    fn suggest(&self, needle: &str) -> Option<&'static str> {
        if needle.is_empty() || needle.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        self.entries
            .iter()
            .map(|entry| (levenshtein(entry.command, needle), entry.command))
            .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, command)| command)
    }
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new()
    }
}
