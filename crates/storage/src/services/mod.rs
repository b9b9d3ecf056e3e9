pub mod dashboard;
pub mod ranking;
pub mod report;
pub mod report_worker;
