use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite store and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = cfg.database.clone();

    println!("⚙️  Initializing pieceledger…");
    println!("🗄️  Database   : {}", &db_path);

    let pool = DbPool::new(&db_path)?;
    for applied in init_db(&pool.conn)? {
        success(format!("Migration applied: {applied}"));
    }

    println!("✅ Database initialized at {}", &db_path);

    // audit row is best effort
    let logged = log::audit(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );
    if let Err(e) = logged {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 pieceledger initialization completed!");
    Ok(())
}
