use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the ledger tables with the current schema when they are missing.
///
/// Tables created by older releases are left alone here; their missing
/// columns are added by the `migrate_add_*` steps below.
fn ensure_ledger_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS workers (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            name  TEXT UNIQUE
        );

        CREATE TABLE IF NOT EXISTS job_types (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT UNIQUE,
            unit_price  REAL NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS work_records (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            worker_id   INTEGER,
            job_type    TEXT,
            quantity    INTEGER,
            unit_price  REAL,
            date        TEXT,
            paid        INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )?;
    Ok(())
}

fn ensure_indexes(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_work_records_worker_paid_date
            ON work_records(worker_id, paid, date);
        "#,
    )?;
    Ok(())
}

/// Check if `table` has a column called `column`.
pub fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1)")?;
    let cols = stmt.query_map([table], |row| row.get::<_, String>(0))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Check if a migration `version` was already recorded in the log table.
fn migration_recorded(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Add `column` to `table` if it is missing, then mark `version` as applied.
fn add_column_if_missing(
    conn: &Connection,
    version: &str,
    table: &str,
    column: &str,
    definition: &str,
    message: &str,
) -> Result<Option<String>> {
    if column_exists(conn, table, column)? {
        return Ok(None);
    }

    conn.execute(
        &format!("ALTER TABLE {table} ADD COLUMN {column} {definition};"),
        [],
    )?;

    if !migration_recorded(conn, version)? {
        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
            [version, message],
        )?;
    }

    Ok(Some(format!("{version} → {message}")))
}

/// Older stores kept job types without a price.
fn migrate_add_unit_price_to_job_types(conn: &Connection) -> Result<Option<String>> {
    add_column_if_missing(
        conn,
        "0002_add_job_type_unit_price",
        "job_types",
        "unit_price",
        "REAL NOT NULL DEFAULT 0",
        "added 'unit_price' to job_types",
    )
}

/// Older stores had no settlement flag on work records.
fn migrate_add_paid_to_work_records(conn: &Connection) -> Result<Option<String>> {
    add_column_if_missing(
        conn,
        "0003_add_work_record_paid",
        "work_records",
        "paid",
        "INTEGER NOT NULL DEFAULT 0",
        "added 'paid' to work_records",
    )
}

/// Public entry point: run all pending migrations.
///
/// Safe to call on every start; on a current schema nothing changes.
/// Returns one line per migration applied by this call. Nothing is printed
/// here: commands such as `report --json` own stdout.
pub fn run_pending_migrations(conn: &Connection) -> Result<Vec<String>> {
    ensure_log_table(conn)?;
    ensure_ledger_tables(conn)?;

    let applied = [
        migrate_add_unit_price_to_job_types(conn)?,
        migrate_add_paid_to_work_records(conn)?,
    ];

    ensure_indexes(conn)?;
    Ok(applied.into_iter().flatten().collect())
}
