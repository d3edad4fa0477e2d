use crate::cli::parser::{Commands, JobAction};
use crate::config::Config;
use crate::core::Ledger;
use crate::errors::AppResult;
use crate::models::Amount;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Job { action } = cmd {
        match action {
            JobAction::Set { name, price } => {
                // parse before opening the store
                let price = Amount::parse(price)?;
                let ledger = Ledger::open(&cfg.database)?;
                let job = ledger.upsert_job_type(name, price)?;
                success(format!(
                    "Job type '{}' unit price set to {}.",
                    job.name, job.unit_price
                ));
            }
            JobAction::List => {
                let ledger = Ledger::open(&cfg.database)?;
                let jobs = ledger.list_job_types()?;
                if jobs.is_empty() {
                    info("No job types yet. Add one with `pieceledger job set <NAME> <PRICE>`.");
                    return Ok(());
                }

                let mut table = Table::new(vec![Column::left("JOB"), Column::right("PRICE")]);
                for j in jobs {
                    table.add_row(vec![j.name, j.unit_price.to_string()]);
                }
                print!("{}", table.render());
            }
        }
    }

    Ok(())
}
