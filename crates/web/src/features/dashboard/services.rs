use chrono::NaiveDate;
use storage::{Database, dto::dashboard::DashboardSummary, error::Result, services::dashboard};

/// Totals and highlights shown on the landing page
pub async fn get_summary(db: &Database, today: NaiveDate) -> Result<DashboardSummary> {
    let data = db.snapshot().await;
    Ok(dashboard::summary(&data, today))
}
