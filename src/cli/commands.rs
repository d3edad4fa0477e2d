pub mod config;
pub mod db;
pub mod init;
pub mod job;
pub mod log;
pub mod pay;
pub mod record;
pub mod records;
pub mod report;
pub mod worker;
