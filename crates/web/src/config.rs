use anyhow::{Context, Result};
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Anchor for the relative event dates of the seed data. Today when unset.
    pub seed_reference_date: Option<NaiveDate>,
    /// User the static session logs in as.
    pub session_user_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let seed_reference_date = match std::env::var("SEED_REFERENCE_DATE") {
            Ok(value) => Some(
                value
                    .parse()
                    .context("SEED_REFERENCE_DATE must be an ISO date (YYYY-MM-DD)")?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("PORT must be a number")?
                .parse()?,
            seed_reference_date,
            session_user_id: std::env::var("SESSION_USER_ID").unwrap_or_else(|_| "1".to_string()),
        })
    }
}
