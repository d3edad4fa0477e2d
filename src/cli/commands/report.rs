use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Ledger;
use crate::errors::AppResult;
use crate::models::{Amount, ReportLine, ReportWindow, Worker, report_total};
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_balance};
use crate::utils::date;
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    worker: &'a Worker,
    window_days: u32,
    from: NaiveDate,
    to: NaiveDate,
    lines: &'a [ReportLine],
    total: Amount,
}

/// Pick the window from the flags; no flag means today.
fn resolve_window(cmd: &Commands, cfg: &Config) -> ReportWindow {
    match cmd {
        Commands::Report { week: true, .. } => ReportWindow::days(cfg.week_days),
        Commands::Report { month: true, .. } => ReportWindow::days(cfg.month_days),
        Commands::Report { days: Some(n), .. } => ReportWindow::days(*n),
        _ => ReportWindow::TODAY,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { worker, json, .. } = cmd {
        let window = resolve_window(cmd, cfg);
        let today = date::today();

        let ledger = Ledger::open(&cfg.database)?;
        let w = ledger.find_worker(worker)?;
        let lines = ledger.report_as_of(w.id, window, today)?;
        let total = report_total(&lines)?;

        if *json {
            let (from, to) = window.bounds(today)?;
            let out = JsonReport {
                worker: &w,
                window_days: window.len_days(),
                from,
                to,
                lines: &lines,
                total,
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
            return Ok(());
        }

        header(format!("{} ({})", w.name, window.describe()));

        if lines.is_empty() {
            info("No unpaid work in this period.");
        } else {
            let mut table = Table::new(vec![
                Column::left("JOB"),
                Column::right("QTY"),
                Column::right("PRICE"),
                Column::right("AMOUNT"),
            ]);
            for l in &lines {
                table.add_row(vec![
                    l.job_type.clone(),
                    l.quantity.to_string(),
                    l.unit_price.to_string(),
                    l.amount.to_string(),
                ]);
            }
            print!("{}", table.render());
        }

        println!(
            "{}{}{}",
            color_for_balance(total.cents()),
            bold(&format!("TOTAL: {total}")),
            RESET
        );
    }

    Ok(())
}
