pub mod athletes;
pub mod claims;
pub mod dashboard;
pub mod events;
pub mod ranking;
pub mod schools;
pub mod session;
pub mod users;
