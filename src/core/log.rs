use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 40;

/// Color of an audit row, by operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "worker_add" => Colour::Green,
        "job_set" => Colour::Cyan,
        "record_add" => Colour::Yellow,
        "payment" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(i64, String, String, String, String)> = entries
            .into_iter()
            .map(|(id, raw_date, operation, target, message)| {
                let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                    .map(|dt| dt.format("%F %T").to_string())
                    .unwrap_or(raw_date);

                let op_target = if target.is_empty() {
                    operation.clone()
                } else {
                    format!("{operation} ({target})")
                };

                (id, date, operation, truncate(&op_target, MAX_OP_WIDTH), message)
            })
            .collect();

        let id_w = rows.iter().map(|r| r.0.to_string().len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.1.chars().count()).max().unwrap_or(10);
        let op_w = rows.iter().map(|r| r.3.chars().count()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for (id, date, operation, op_target, message) in rows {
            let pad = op_w.saturating_sub(op_target.chars().count());
            let colored = color_for_operation(&operation).paint(op_target).to_string();

            println!(
                "{:>id_w$}  {:<date_w$}  {}{}  {}",
                id,
                date,
                colored,
                " ".repeat(pad),
                message,
                id_w = id_w,
                date_w = date_w,
            );
        }

        Ok(())
    }
}
