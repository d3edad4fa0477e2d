use crate::errors::{AppError, AppResult};
use crate::models::{Amount, JobType, ReportLine, WorkRecord, Worker};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const DATE_FMT: &str = "%Y-%m-%d";

fn date_to_db(date: &NaiveDate) -> String {
    date.format(DATE_FMT).to_string()
}

fn date_from_db(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, DATE_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.to_string())),
        )
    })
}

// ---------------------------
// Workers
// ---------------------------

fn map_worker(row: &Row) -> Result<Worker> {
    Ok(Worker {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}

pub fn select_workers(conn: &Connection) -> AppResult<Vec<Worker>> {
    let mut stmt = conn.prepare("SELECT id, name FROM workers ORDER BY name ASC")?;
    let rows = stmt.query_map([], map_worker)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert a worker and return its id. Duplicate names fail with
/// `ConstraintViolation`.
pub fn insert_worker(conn: &Connection, name: &str) -> AppResult<i64> {
    conn.execute("INSERT INTO workers (name) VALUES (?1)", [name])
        .map_err(|e| AppError::from_insert(e, &format!("worker '{name}' already exists")))?;
    Ok(conn.last_insert_rowid())
}

pub fn select_worker_by_id(conn: &Connection, id: i64) -> AppResult<Option<Worker>> {
    let w = conn
        .query_row(
            "SELECT id, name FROM workers WHERE id = ?1",
            [id],
            map_worker,
        )
        .optional()?;
    Ok(w)
}

pub fn select_worker_by_name(conn: &Connection, name: &str) -> AppResult<Option<Worker>> {
    let w = conn
        .query_row(
            "SELECT id, name FROM workers WHERE name = ?1",
            [name],
            map_worker,
        )
        .optional()?;
    Ok(w)
}

// ---------------------------
// Job types
// ---------------------------

pub fn select_job_types(conn: &Connection) -> AppResult<Vec<JobType>> {
    let mut stmt = conn.prepare("SELECT name, unit_price FROM job_types ORDER BY name ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok(JobType {
            name: row.get(0)?,
            unit_price: Amount::from_db(row.get(1)?),
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert a job type, or overwrite the price of an existing one.
pub fn upsert_job_type(conn: &Connection, name: &str, unit_price: Amount) -> AppResult<()> {
    conn.execute(
        "INSERT INTO job_types (name, unit_price)
         VALUES (?1, ?2)
         ON CONFLICT(name) DO UPDATE SET unit_price = excluded.unit_price",
        params![name, unit_price.to_db()],
    )?;
    Ok(())
}

pub fn select_job_type_price(conn: &Connection, name: &str) -> AppResult<Option<Amount>> {
    let price: Option<f64> = conn
        .query_row(
            "SELECT unit_price FROM job_types WHERE name = ?1",
            [name],
            |row| row.get(0),
        )
        .optional()?;
    Ok(price.map(Amount::from_db))
}

// ---------------------------
// Work records
// ---------------------------

fn map_work_record(row: &Row) -> Result<WorkRecord> {
    let date_str: String = row.get("date")?;

    Ok(WorkRecord {
        id: row.get("id")?,
        worker_id: row.get("worker_id")?,
        job_type: row.get("job_type")?,
        quantity: row.get("quantity")?,
        unit_price: Amount::from_db(row.get("unit_price")?),
        date: date_from_db(&date_str)?,
        paid: row.get::<_, i64>("paid")? != 0,
    })
}

pub fn insert_work_record(
    conn: &Connection,
    worker_id: i64,
    job_type: &str,
    quantity: i64,
    unit_price: Amount,
    date: &NaiveDate,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO work_records (worker_id, job_type, quantity, unit_price, date, paid)
         VALUES (?1, ?2, ?3, ?4, ?5, 0)",
        params![
            worker_id,
            job_type,
            quantity,
            unit_price.to_db(),
            date_to_db(date)
        ],
    )
    .map_err(|e| AppError::from_insert(e, "work record rejected"))?;
    Ok(conn.last_insert_rowid())
}

/// All records of a worker, newest first. `unpaid_only` hides settled rows.
pub fn select_work_records(
    conn: &Connection,
    worker_id: i64,
    unpaid_only: bool,
) -> AppResult<Vec<WorkRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, worker_id, job_type, quantity, unit_price, date, paid
         FROM work_records
         WHERE worker_id = ?1 AND (?2 = 0 OR paid = 0)
         ORDER BY date DESC, id DESC",
    )?;
    let rows = stmt.query_map(params![worker_id, unpaid_only], map_work_record)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Unpaid work of a worker between `from` and `to` (both inclusive),
/// one line per job type and snapshot price.
pub fn select_unpaid_summary(
    conn: &Connection,
    worker_id: i64,
    from: &NaiveDate,
    to: &NaiveDate,
) -> AppResult<Vec<ReportLine>> {
    let mut stmt = conn.prepare(
        "SELECT job_type, SUM(quantity), unit_price
         FROM work_records
         WHERE worker_id = ?1 AND paid = 0 AND date >= ?2 AND date <= ?3
         GROUP BY job_type, unit_price
         ORDER BY job_type ASC, unit_price ASC",
    )?;

    let rows = stmt.query_map(
        params![worker_id, date_to_db(from), date_to_db(to)],
        |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, i64>(1)?,
                Amount::from_db(row.get(2)?),
            ))
        },
    )?;

    let mut out = Vec::new();
    for r in rows {
        let (job_type, quantity, unit_price) = r?;
        out.push(ReportLine::new(job_type, quantity, unit_price)?);
    }
    Ok(out)
}

/// Flip every unpaid record of a worker to paid. Returns the rows changed.
pub fn mark_paid(conn: &Connection, worker_id: i64) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE work_records SET paid = 1 WHERE worker_id = ?1 AND paid = 0",
        [worker_id],
    )?;
    Ok(n)
}
