use strsim::levenshtein;

const TITLE: &str = "PERSONAL FINANCE MANAGER";
const RULE_WIDTH: usize = 40;
const MAX_SUGGESTION_DISTANCE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddIncome,
    AddExpense,
    ShowBalance,
    ShowHistory,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Action(MenuAction),
    Unknown { suggestion: Option<&'static str> },
}

#[derive(Clone)]
struct MenuEntry {
    key: &'static str,
    command: &'static str,
    description: &'static str,
    action: MenuAction,
}

/// Numbered main menu; entries can be picked by number or by command name.
pub struct MainMenu {
    entries: Vec<MenuEntry>,
}

impl MainMenu {
    pub fn new() -> Self {
        let entries = vec![
            MenuEntry {
                key: "1",
                command: "income",
                description: "Add income",
                action: MenuAction::AddIncome,
            },
            MenuEntry {
                key: "2",
                command: "expense",
                description: "Add expense",
                action: MenuAction::AddExpense,
            },
            MenuEntry {
                key: "3",
                command: "balance",
                description: "Show balance",
                action: MenuAction::ShowBalance,
            },
            MenuEntry {
                key: "4",
                command: "history",
                description: "Show history",
                action: MenuAction::ShowHistory,
            },
            MenuEntry {
                key: "5",
                command: "exit",
                description: "Exit",
                action: MenuAction::Exit,
            },
        ];
        Self { entries }
    }

    pub fn prompt(&self) -> String {
        let last = self.entries.last().map(|entry| entry.key).unwrap_or("1");
        format!("Choose an action (1-{last}): ")
    }

    /// Menu text as printed before each prompt.
    pub fn render(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut lines = vec![rule.clone(), format!("{TITLE:^RULE_WIDTH$}"), rule];
        lines.extend(
            self.entries
                .iter()
                .map(|entry| format!("{}. {}", entry.key, entry.description)),
        );
        lines.join("\n")
    }

    pub fn resolve(&self, input: &str) -> MenuChoice {
        let needle = input.trim().to_lowercase();
        if let Some(entry) = self
            .entries
            .iter()
            .find(|entry| entry.key == needle || entry.command == needle)
        {
            return MenuChoice::Action(entry.action);
        }
        MenuChoice::Unknown {
            suggestion: self.suggest(&needle),
        }
    }

    fn suggest(&self, needle: &str) -> Option<&'static str> {
        if needle.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .map(|entry| (levenshtein(entry.command, needle), entry.command))
            .min_by_key(|(distance, _)| *distance)
            .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
            .map(|(_, command)| command)
    }
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new()
    }
}
