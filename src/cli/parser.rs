use clap::{Parser, Subcommand};

/// Command-line interface definition for pieceledger
#[derive(Parser)]
#[command(
    name = "pieceledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track piecework packaging jobs per worker, see what is owed and settle payments (SQLite)",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add or list workers
    Worker {
        #[command(subcommand)]
        action: WorkerAction,
    },

    /// Set or list job types and their unit prices
    Job {
        #[command(subcommand)]
        action: JobAction,
    },

    /// Log work done by a worker today
    Record {
        /// Worker name or id
        worker: String,

        /// Job type name
        job: String,

        /// Number of pieces (whole number > 0)
        quantity: String,

        /// Unit price; also becomes the job type's new price.
        /// Defaults to the job type's current price.
        #[arg(long = "price")]
        price: Option<String>,
    },

    /// List the work records of a worker
    Records {
        /// Worker name or id
        worker: String,

        #[arg(long = "unpaid", help = "Show only records not yet paid")]
        unpaid: bool,
    },

    /// Show what a worker is owed (unpaid work only)
    Report {
        /// Worker name or id
        worker: String,

        #[arg(long = "today", conflicts_with_all = ["week", "month", "days"], help = "Only today's work (default)")]
        today: bool,

        #[arg(long = "week", conflicts_with_all = ["month", "days"], help = "Last week (config: week_days)")]
        week: bool,

        #[arg(long = "month", conflicts_with = "days", help = "Last month (config: month_days)")]
        month: bool,

        #[arg(long = "days", value_name = "N", help = "Last N days")]
        days: Option<u32>,

        #[arg(long = "json", help = "Print the report as JSON")]
        json: bool,
    },

    /// Mark all unpaid work of a worker as paid
    Pay {
        /// Worker name or id
        worker: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum WorkerAction {
    /// Add a new worker
    Add {
        /// Unique worker name
        name: String,
    },
    /// List workers by name
    List,
}

#[derive(Subcommand)]
pub enum JobAction {
    /// Create a job type or update its unit price
    Set {
        name: String,
        /// Unit price, e.g. 2.50
        price: String,
    },
    /// List job types by name
    List,
}
