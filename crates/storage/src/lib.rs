pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod seed;
pub mod services;

pub use database::{DataSet, Database};
