pub mod athlete;
pub mod claim;
pub mod event;
pub mod ranking;
pub mod school;
pub mod user;
