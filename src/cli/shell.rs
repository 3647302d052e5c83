use std::{env, io};

use tracing::debug;

use crate::cli::io::{EditorReader, LineReader, ScriptReader};
use crate::cli::output::{self, OutputPreferences};
use crate::cli::shell_context::{CliMode, LoopControl, ShellContext};
use crate::config::ConfigManager;
use crate::core::LedgerManager;
use crate::errors::CliError;

/// When set, the shell reads menu input line by line from stdin.
pub const SCRIPT_ENV: &str = "POCKET_LEDGER_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };
    output::set_preferences(OutputPreferences {
        plain_mode: mode == CliMode::Script || env::var_os("NO_COLOR").is_some(),
    });

    let config_manager = ConfigManager::new()?;
    let config = config_manager.load()?;
    let ledger_path = config_manager.resolved_ledger_path(&config);
    debug!(path = %ledger_path.display(), ?mode, "starting shell");

    let manager = LedgerManager::open(&ledger_path)?;
    let mut context = ShellContext::new(mode, manager, config);

    match context.mode() {
        CliMode::Interactive => {
            let mut reader = EditorReader::new()?;
            run_loop(&mut context, &mut reader)
        }
        CliMode::Script => {
            let stdin = io::stdin();
            let mut reader = ScriptReader::new(stdin.lock());
            run_loop(&mut context, &mut reader)
        }
    }
}

/// Drives the menu until the user exits or input runs out.
///
/// Persistence failures are returned to the caller; invalid amounts are reported and skipped.
pub fn run_loop(context: &mut ShellContext, reader: &mut dyn LineReader) -> Result<(), CliError> {
    while context.running {
        output::section(context.menu().render());
        let prompt = context.menu().prompt();
        let Some(line) = reader.read_line(&prompt)? else {
            break;
        };
        if context.handle_choice(&line, reader)? == LoopControl::Exit {
            context.running = false;
        }
    }
    output::success("Goodbye! Your data is saved.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ledger::TransactionKind;
    use crate::storage::{JsonStorage, StorageBackend};
    use std::io::Cursor;
    use tempfile::TempDir;

    fn context_in(temp: &TempDir) -> ShellContext {
        let manager = LedgerManager::open(&temp.path().join("finances.json")).unwrap();
        ShellContext::new(CliMode::Script, manager, Config::default())
    }

    fn run_script(context: &mut ShellContext, script: &str) {
        let mut reader = ScriptReader::new(Cursor::new(script.to_string()));
        run_loop(context, &mut reader).unwrap();
    }

    #[test]
    fn records_income_and_expense_then_exits() {
        let temp = TempDir::new().unwrap();
        let mut context = context_in(&temp);
        run_script(&mut context, "1\n1000\nsalary\n2\n200\nfood\n3\n4\n5\n");

        assert!(!context.running);
        assert_eq!(context.manager().balance(), 800.0);

        let stored = JsonStorage::new(temp.path().join("finances.json"))
            .load()
            .unwrap()
            .unwrap();
        assert_eq!(stored.balance(), 800.0);
        assert_eq!(stored.transactions()[0].kind(), TransactionKind::Income);
        assert_eq!(stored.transactions()[1].category(), "food");
    }

    #[test]
    fn invalid_amount_keeps_loop_running() {
        let temp = TempDir::new().unwrap();
        let mut context = context_in(&temp);
        run_script(&mut context, "2\nabc\n1\n50\ngift\n5\n");

        assert_eq!(context.manager().transaction_count(), 1);
        assert_eq!(context.manager().balance(), 50.0);
    }

    #[test]
    fn overflowing_amount_is_reported_and_file_stays_loadable() {
        let temp = TempDir::new().unwrap();
        let mut context = context_in(&temp);
        run_script(&mut context, "1\n1e308\nbonus\n1\n1e308\nbonus\n3\n5\n");

        assert!(!context.running);
        assert_eq!(context.mode(), CliMode::Script);
        assert_eq!(context.manager().transaction_count(), 1);

        let reloaded = LedgerManager::open(&temp.path().join("finances.json")).unwrap();
        assert_eq!(reloaded.balance(), 1e308);
        assert_eq!(reloaded.transaction_count(), 1);
    }

    #[test]
    fn unknown_choices_and_end_of_input_are_handled() {
        let temp = TempDir::new().unwrap();
        let mut context = context_in(&temp);
        run_script(&mut context, "7\nbalanse\n");

        assert_eq!(context.manager().transaction_count(), 0);
        assert!(!temp.path().join("finances.json").exists());
    }

    #[test]
    fn end_of_input_mid_prompt_exits_without_recording() {
        let temp = TempDir::new().unwrap();
        let mut context = context_in(&temp);
        run_script(&mut context, "1\n10\n");

        assert!(!context.running);
        assert_eq!(context.manager().transaction_count(), 0);
    }
}
