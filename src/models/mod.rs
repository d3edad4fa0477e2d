pub mod amount;
pub mod job_type;
pub mod report;
pub mod window;
pub mod work_record;
pub mod worker;

pub use amount::Amount;
pub use job_type::JobType;
pub use report::{ReportLine, report_total};
pub use window::ReportWindow;
pub use work_record::WorkRecord;
pub use worker::Worker;
