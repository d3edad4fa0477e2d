use crate::cli::parser::{Commands, WorkerAction};
use crate::config::Config;
use crate::core::Ledger;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Worker { action } = cmd {
        let ledger = Ledger::open(&cfg.database)?;

        match action {
            WorkerAction::Add { name } => {
                let w = ledger.add_worker(name)?;
                success(format!("Worker '{}' added (id {}).", w.name, w.id));
            }
            WorkerAction::List => {
                let workers = ledger.list_workers()?;
                if workers.is_empty() {
                    info("No workers yet. Add one with `pieceledger worker add <NAME>`.");
                    return Ok(());
                }

                let mut table = Table::new(vec![Column::right("ID"), Column::left("NAME")]);
                for w in workers {
                    table.add_row(vec![w.id.to_string(), w.name]);
                }
                print!("{}", table.render());
            }
        }
    }

    Ok(())
}
