pub mod config;
pub mod ledger;
pub mod log;

pub use ledger::Ledger;
