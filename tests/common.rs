#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use pieceledger::core::Ledger;
use rusqlite::Connection;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pl() -> Command {
    cargo_bin_cmd!("pieceledger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pieceledger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh ledger backed by a temp file
pub fn fresh_ledger(name: &str) -> Ledger {
    let db_path = setup_test_db(name);
    Ledger::open(&db_path).expect("open ledger")
}

/// Initialize DB through the CLI (test mode, config untouched)
pub fn init_cli_db(db_path: &str) {
    pl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Store layout written by releases that had no prices and no paid flag.
pub fn create_legacy_store(db_path: &str) {
    let conn = Connection::open(db_path).expect("open db");
    conn.execute_batch(
        r#"
        CREATE TABLE workers (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            name  TEXT UNIQUE
        );
        CREATE TABLE job_types (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            name  TEXT UNIQUE
        );
        CREATE TABLE work_records (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            worker_id   INTEGER,
            job_type    TEXT,
            quantity    INTEGER,
            unit_price  REAL,
            date        TEXT
        );

        INSERT INTO workers (name) VALUES ('Ayşe');
        INSERT INTO job_types (name) VALUES ('Kutu');
        INSERT INTO work_records (worker_id, job_type, quantity, unit_price, date)
            VALUES (1, 'Kutu', 10, 2.5, '2025-06-15');
        "#,
    )
    .expect("create legacy schema");
}
