use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Ledger;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::parse::{parse_optional_amount, parse_quantity};

/// Log work for a worker (the "save record" action).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Record {
        worker,
        job,
        quantity,
        price,
    } = cmd
    {
        //
        // 1. Parse numeric input first: bad text never reaches the ledger
        //
        let qty = parse_quantity(quantity)?;
        let price = parse_optional_amount(price.as_ref())?;

        //
        // 2. Resolve the worker
        //
        let ledger = Ledger::open(&cfg.database)?;
        let w = ledger.find_worker(worker)?;

        //
        // 3. Upsert price (if given) and store the record
        //
        let rec = ledger.record_work(w.id, job, qty, price)?;

        let amount = rec.amount()?;
        success(format!(
            "Recorded {} × {} @ {} for {} ({}): {}",
            rec.quantity,
            rec.job_type,
            rec.unit_price,
            w.name,
            rec.date,
            amount
        ));
    }

    Ok(())
}
