use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Ledger;
use crate::errors::AppResult;
use crate::models::Amount;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Settle everything a worker is owed.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Pay { worker, yes } = cmd {
        let ledger = Ledger::open(&cfg.database)?;
        let w = ledger.find_worker(worker)?;

        let unpaid = ledger.list_work_records(w.id, true)?;
        if unpaid.is_empty() {
            info(format!("Nothing to settle for {}: balance is 0.00.", w.name));
            return Ok(());
        }
        let owed = unpaid
            .iter()
            .try_fold(Amount::ZERO, |acc, r| acc.checked_add(r.amount()?))?;

        if cfg.confirm_payments && !*yes {
            let prompt = format!(
                "Mark {} unpaid record(s) of {} as paid ({})? This cannot be undone.",
                unpaid.len(),
                w.name,
                owed
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let n = ledger.settle_payment(w.id)?;
        success(format!(
            "Payment recorded for {}: {} record(s), {} settled. Balance is now 0.00.",
            w.name, n, owed
        ));
    }

    Ok(())
}
