use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::Amount;
use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET, YELLOW};
use rusqlite::{Connection, OptionalExtension};
use std::fs;

/// Row counts and totals shown by `db --info`.
#[derive(Debug, Default)]
pub struct DbStats {
    pub workers: i64,
    pub job_types: i64,
    pub records: i64,
    pub unpaid_records: i64,
    pub unpaid_amount: Amount,
    pub orphan_records: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}

pub fn collect(pool: &DbPool) -> AppResult<DbStats> {
    let count = |sql: &str| -> rusqlite::Result<i64> { pool.conn.query_row(sql, [], |r| r.get(0)) };

    let unpaid_amount = outstanding(&pool.conn)?;

    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM work_records ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM work_records ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    Ok(DbStats {
        workers: count("SELECT COUNT(*) FROM workers")?,
        job_types: count("SELECT COUNT(*) FROM job_types")?,
        records: count("SELECT COUNT(*) FROM work_records")?,
        unpaid_records: count("SELECT COUNT(*) FROM work_records WHERE paid = 0")?,
        unpaid_amount,
        orphan_records: orphan_records(&pool.conn)?,
        first_date,
        last_date,
    })
}

/// Value of every unpaid record, summed per row in exact hundredths.
pub fn outstanding(conn: &Connection) -> AppResult<Amount> {
    let mut stmt = conn.prepare("SELECT quantity, unit_price FROM work_records WHERE paid = 0")?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, i64>(0)?, Amount::from_db(row.get(1)?)))
    })?;

    let mut total = Amount::ZERO;
    for r in rows {
        let (quantity, unit_price) = r?;
        total = total.checked_add(unit_price.times(quantity)?)?;
    }
    Ok(total)
}

/// Work records whose `worker_id` matches no worker.
/// Nothing in the ledger deletes workers, so these come from outside edits
/// or damaged files.
pub fn orphan_records(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row(
        "SELECT COUNT(*) FROM work_records
         WHERE worker_id NOT IN (SELECT id FROM workers)",
        [],
        |r| r.get(0),
    )?)
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    let stats = collect(pool)?;
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);
    println!("{}• Workers:{} {}{}{}", CYAN, RESET, GREEN, stats.workers, RESET);
    println!("{}• Job types:{} {}{}{}", CYAN, RESET, GREEN, stats.job_types, RESET);
    println!(
        "{}• Work records:{} {}{}{} ({} unpaid)",
        CYAN, RESET, GREEN, stats.records, RESET, stats.unpaid_records
    );
    println!(
        "{}• Outstanding:{} {}{}{}",
        CYAN, RESET, YELLOW, stats.unpaid_amount, RESET
    );

    if stats.orphan_records > 0 {
        println!(
            "{}• Orphan records:{} {}{}{}",
            CYAN, RESET, RED, stats.orphan_records, RESET
        );
    }

    let fmt = |d: Option<String>| d.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt(stats.first_date));
    println!("    to:   {}", fmt(stats.last_date));

    println!();
    Ok(())
}
