//! Runs report generation off the async executor.
//!
//! Each request gets its own worker, owns copies of its inputs and hands the
//! finished document back exactly once. There is no pooling, cancellation or
//! timeout: a failed job is retried by spawning a new worker.

use chrono::NaiveDate;
use tokio::task::JoinHandle;

use crate::error::ReportError;
use crate::models::{Athlete, School};
use crate::services::report::generate_school_report;

/// Message sent to a report worker.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub school: School,
    pub athletes: Vec<Athlete>,
    pub generated_on: NaiveDate,
}

/// A single in-flight report job. Consumed by [`ReportWorker::finish`].
pub struct ReportWorker {
    handle: JoinHandle<Result<Vec<u8>, ReportError>>,
}

impl ReportWorker {
    pub fn spawn(request: ReportRequest) -> Self {
        tracing::debug!(
            school = %request.school.value,
            athletes = request.athletes.len(),
            "Spawning report worker"
        );

        Self::spawn_job(move || {
            generate_school_report(&request.school, &request.athletes, request.generated_on)
        })
    }

    fn spawn_job<F>(job: F) -> Self
    where
        F: FnOnce() -> Result<Vec<u8>, ReportError> + Send + 'static,
    {
        Self {
            handle: tokio::task::spawn_blocking(job),
        }
    }

    /// Waits for the document. A panic inside the job surfaces as
    /// [`ReportError::Worker`] instead of tearing down the caller.
    pub async fn finish(self) -> Result<Vec<u8>, ReportError> {
        match self.handle.await {
            Ok(result) => result,
            Err(e) if e.is_panic() => Err(ReportError::Worker("report job panicked".to_string())),
            Err(e) => Err(ReportError::Worker(e.to_string())),
        }
    }
}

/// Spawns a worker for `request` and waits for its document.
pub async fn generate_in_background(request: ReportRequest) -> Result<Vec<u8>, ReportError> {
    let school = request.school.value.clone();
    let result = ReportWorker::spawn(request).finish().await;

    match &result {
        Ok(bytes) => tracing::info!(%school, bytes = bytes.len(), "Report generated"),
        Err(e) => tracing::error!(%school, error = %e, "Report generation failed"),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn request(athletes: Vec<Athlete>) -> ReportRequest {
        ReportRequest {
            school: seed::schools().remove(0),
            athletes,
            generated_on: NaiveDate::from_ymd_opt(2025, 3, 18).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_empty_request_yields_document() {
        let bytes = generate_in_background(request(Vec::new())).await.unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_request_with_athletes_yields_document() {
        let athletes = seed::generate_athletes(&seed::schools(), 2025, 30);
        let bytes = generate_in_background(request(athletes)).await.unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_job_error_is_returned() {
        let worker = ReportWorker::spawn_job(|| Err(ReportError::Render("boom".to_string())));
        let err = worker.finish().await.unwrap_err();
        assert!(matches!(err, ReportError::Render(_)));
    }

    #[tokio::test]
    async fn test_panicking_job_becomes_worker_error() {
        let worker = ReportWorker::spawn_job(|| panic!("renderer exploded"));
        let err = worker.finish().await.unwrap_err();
        assert!(matches!(err, ReportError::Worker(_)));
    }
}
