use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Ledger;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_paid};
use crate::utils::formatting::yes_no;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Records { worker, unpaid } = cmd {
        let ledger = Ledger::open(&cfg.database)?;
        let w = ledger.find_worker(worker)?;
        let records = ledger.list_work_records(w.id, *unpaid)?;

        header(&w.name);

        if records.is_empty() {
            info("No work records.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::right("ID"),
            Column::left("DATE"),
            Column::left("JOB"),
            Column::right("QTY"),
            Column::right("PRICE"),
            Column::right("AMOUNT"),
            Column::left("PAID"),
        ]);

        let paid_flags: Vec<bool> = records.iter().map(|r| r.paid).collect();
        for r in &records {
            table.add_row(vec![
                r.id.to_string(),
                r.date.to_string(),
                r.job_type.clone(),
                r.quantity.to_string(),
                r.unit_price.to_string(),
                r.amount()?.to_string(),
                yes_no(r.paid).to_string(),
            ]);
        }

        let rendered = table.render();
        let mut lines = rendered.lines();
        // header + separator
        for l in lines.by_ref().take(2) {
            println!("{l}");
        }
        for (l, paid) in lines.zip(paid_flags) {
            println!("{}{}{}", color_for_paid(paid), l, RESET);
        }
    }

    Ok(())
}
