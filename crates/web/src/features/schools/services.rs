use chrono::NaiveDate;
use storage::{
    Database,
    dto::{
        common::PaginatedResponse,
        school::{CreateSchoolRequest, SchoolFilter, SchoolResponse, UpdateSchoolRequest},
    },
    error::Result,
    models::School,
    repository::school::SchoolRepository,
    services::report_worker,
};

pub async fn list_schools(db: &Database, filter: &SchoolFilter) -> Result<PaginatedResponse<SchoolResponse>> {
    let repo = SchoolRepository::new(db);
    repo.list(filter).await
}

pub async fn get_school(db: &Database, value: &str) -> Result<School> {
    let repo = SchoolRepository::new(db);
    repo.find_by_value(value).await
}

pub async fn create_school(db: &Database, request: &CreateSchoolRequest) -> Result<School> {
    let repo = SchoolRepository::new(db);
    let school = repo.create(request).await?;
    tracing::info!("Created school {}", school.value);
    Ok(school)
}

pub async fn update_school(db: &Database, value: &str, request: &UpdateSchoolRequest) -> Result<School> {
    let repo = SchoolRepository::new(db);
    repo.update(value, request).await
}

pub async fn delete_school(db: &Database, value: &str) -> Result<()> {
    let repo = SchoolRepository::new(db);
    repo.delete(value).await
}

/// Render the athlete report of a school on a background worker
pub async fn generate_report(db: &Database, value: &str, generated_on: NaiveDate) -> Result<Vec<u8>> {
    let repo = SchoolRepository::new(db);
    let request = repo.report_request(value, generated_on).await?;

    Ok(report_worker::generate_in_background(request).await?)
}
