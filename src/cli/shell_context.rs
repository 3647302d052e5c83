use crate::cli::formatters::{format_history_line, format_money};
use crate::cli::io::LineReader;
use crate::cli::menus::{MainMenu, MenuAction, MenuChoice};
use crate::cli::output;
use crate::config::Config;
use crate::core::{parse_amount, LedgerManager};
use crate::errors::CliError;
use crate::ledger::TransactionKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// State owned by the shell loop: the ledger, its settings, and the menu.
pub struct ShellContext {
    mode: CliMode,
    manager: LedgerManager,
    config: Config,
    menu: MainMenu,
    pub(crate) running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode, manager: LedgerManager, config: Config) -> Self {
        Self {
            mode,
            manager,
            config,
            menu: MainMenu::new(),
            running: true,
        }
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn manager(&self) -> &LedgerManager {
        &self.manager
    }

    pub(crate) fn menu(&self) -> &MainMenu {
        &self.menu
    }

    pub(crate) fn handle_choice(
        &mut self,
        input: &str,
        reader: &mut dyn LineReader,
    ) -> Result<LoopControl, CliError> {
        match self.menu.resolve(input) {
            MenuChoice::Action(MenuAction::AddIncome) => {
                self.add_transaction(TransactionKind::Income, reader)
            }
            MenuChoice::Action(MenuAction::AddExpense) => {
                self.add_transaction(TransactionKind::Expense, reader)
            }
            MenuChoice::Action(MenuAction::ShowBalance) => {
                self.show_balance();
                Ok(LoopControl::Continue)
            }
            MenuChoice::Action(MenuAction::ShowHistory) => {
                self.show_history();
                Ok(LoopControl::Continue)
            }
            MenuChoice::Action(MenuAction::Exit) => Ok(LoopControl::Exit),
            MenuChoice::Unknown { suggestion } => {
                output::error("Unknown choice. Please try again.");
                if let Some(command) = suggestion {
                    output::info(format!("Did you mean `{}`?", command));
                }
                Ok(LoopControl::Continue)
            }
        }
    }

    fn add_transaction(
        &mut self,
        kind: TransactionKind,
        reader: &mut dyn LineReader,
    ) -> Result<LoopControl, CliError> {
        let (amount_prompt, category_prompt) = match kind {
            TransactionKind::Income => ("Income amount: ", "Category (salary, gift, other): "),
            TransactionKind::Expense => (
                "Expense amount: ",
                "Category (food, transport, entertainment): ",
            ),
        };

        let Some(raw_amount) = reader.read_line(amount_prompt)? else {
            return Ok(LoopControl::Exit);
        };
        let amount = match parse_amount(&raw_amount) {
            Ok(amount) => amount,
            Err(err) if err.is_input_error() => {
                output::error(format!("{err}. Enter a valid amount."));
                return Ok(LoopControl::Continue);
            }
            Err(err) => return Err(err.into()),
        };

        let Some(category) = reader.read_line(category_prompt)? else {
            return Ok(LoopControl::Exit);
        };

        let balance = match self.manager.record(amount, &category, kind) {
            Ok(balance) => balance,
            Err(err) if err.is_input_error() => {
                output::error(format!("{err}. Transaction not recorded."));
                return Ok(LoopControl::Continue);
            }
            Err(err) => return Err(err.into()),
        };
        output::success(format!(
            "Transaction recorded! Current balance: {}",
            self.money(balance)
        ));
        Ok(LoopControl::Continue)
    }

    fn show_balance(&self) {
        output::info(format!(
            "\nCurrent balance: {}",
            self.money(self.manager.balance())
        ));
    }

    fn show_history(&self) {
        let recent = self.manager.recent(self.config.history_limit);
        if recent.is_empty() {
            output::info("\nTransaction history is empty");
            return;
        }
        output::section("Transaction history:");
        output::separator();
        for (idx, txn) in recent.iter().enumerate() {
            output::info(format_history_line(
                idx + 1,
                txn,
                &self.config.currency_symbol,
            ));
        }
    }

    fn money(&self, value: f64) -> String {
        format_money(value, &self.config.currency_symbol)
    }
}
