pub mod athlete;
pub mod claim;
pub mod common;
pub mod dashboard;
pub mod event;
pub mod ranking;
pub mod school;
pub mod user;
