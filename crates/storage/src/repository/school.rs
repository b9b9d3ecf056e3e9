use chrono::NaiveDate;

use crate::Database;
use crate::dto::common::PaginatedResponse;
use crate::dto::school::{CreateSchoolRequest, SchoolFilter, SchoolResponse, UpdateSchoolRequest};
use crate::error::{Result, StorageError};
use crate::models::{School, slugify};
use crate::services::report_worker::ReportRequest;

pub struct SchoolRepository<'a> {
    db: &'a Database,
}

impl<'a> SchoolRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub async fn list(&self, filter: &SchoolFilter) -> Result<PaginatedResponse<SchoolResponse>> {
        let data = self.db.snapshot().await;
        let term = filter
            .search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_default();

        let schools: Vec<SchoolResponse> = data
            .schools
            .iter()
            .filter(|s| s.label.to_lowercase().contains(&term))
            .map(|s| {
                let athletes = data.athletes.iter().filter(|a| a.escuela == s.label).count();
                SchoolResponse::new(s.clone(), athletes)
            })
            .collect();

        Ok(filter.pagination().paginate(schools))
    }

    pub async fn find_by_value(&self, value: &str) -> Result<School> {
        self.db
            .snapshot()
            .await
            .school_by_value(value)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    pub async fn create(&self, request: &CreateSchoolRequest) -> Result<School> {
        let label = request.name.trim().to_string();
        let value = slugify(&label);
        if value.is_empty() {
            return Err(StorageError::ConstraintViolation(
                "School name must contain letters or digits".to_string(),
            ));
        }

        self.db
            .update(|data| {
                if data.schools.iter().any(|s| s.value == value || s.label == label) {
                    return Err(StorageError::ConstraintViolation(format!(
                        "School '{}' already exists",
                        label
                    )));
                }

                let school = School {
                    value,
                    label,
                    logo_url: request.logo_url.clone(),
                    address: Some(request.address.trim().to_string()),
                    master_id: Some(request.master_id.clone()),
                };

                data.schools.push(school.clone());
                Ok(school)
            })
            .await
    }

    /// Update a school. A new name is carried over to the athletes that were
    /// listed under the old one.
    pub async fn update(&self, value: &str, request: &UpdateSchoolRequest) -> Result<School> {
        self.db
            .update(|data| {
                let new_label = request.name.as_deref().map(str::trim);
                if let Some(label) = new_label
                    && data.schools.iter().any(|s| s.value != value && s.label == label)
                {
                    return Err(StorageError::ConstraintViolation(format!(
                        "School '{}' already exists",
                        label
                    )));
                }

                let school = data
                    .schools
                    .iter_mut()
                    .find(|s| s.value == value)
                    .ok_or(StorageError::NotFound)?;
                let old_label = school.label.clone();

                if let Some(label) = new_label {
                    school.label = label.to_string();
                }
                if let Some(address) = &request.address {
                    school.address = Some(address.trim().to_string());
                }
                if let Some(master_id) = &request.master_id {
                    school.master_id = Some(master_id.clone());
                }
                if let Some(logo_url) = &request.logo_url {
                    school.logo_url = Some(logo_url.clone());
                }
                let updated = school.clone();

                for athlete in data.athletes.iter_mut().filter(|a| a.escuela == old_label) {
                    athlete.escuela = updated.label.clone();
                    athlete.logo_url = updated.logo_url.clone();
                }

                Ok(updated)
            })
            .await
    }

    /// Delete a school. Athletes keep the label they were registered with.
    pub async fn delete(&self, value: &str) -> Result<()> {
        self.db
            .update(|data| {
                let before = data.schools.len();
                data.schools.retain(|s| s.value != value);
                if data.schools.len() == before {
                    return Err(StorageError::NotFound);
                }
                Ok(())
            })
            .await
    }

    /// Copies the school and its athletes into a message for the report worker.
    pub async fn report_request(&self, value: &str, generated_on: NaiveDate) -> Result<ReportRequest> {
        let data = self.db.snapshot().await;
        let school = data.school_by_value(value).cloned().ok_or(StorageError::NotFound)?;
        let athletes = data.athletes_of_school(&school.label);

        Ok(ReportRequest {
            school,
            athletes,
            generated_on,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 18).unwrap()
    }

    fn create_request(name: &str) -> CreateSchoolRequest {
        CreateSchoolRequest {
            name: name.to_string(),
            address: "Av. Bolívar, Caracas".to_string(),
            master_id: "202503".to_string(),
            logo_url: None,
        }
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let db = Database::seeded(today());
        let repo = SchoolRepository::new(&db);
        let filter = SchoolFilter {
            search: Some("RYU".to_string()),
            page: 1,
            page_size: 100,
        };

        let page = repo.list(&filter).await.unwrap();
        assert!(!page.data.is_empty());
        assert!(page.data.iter().all(|s| s.label.to_lowercase().contains("ryu")));
    }

    #[tokio::test]
    async fn test_athlete_counts() {
        let db = Database::seeded(today());
        let repo = SchoolRepository::new(&db);
        let filter = SchoolFilter {
            search: None,
            page: 1,
            page_size: 100,
        };

        let page = repo.list(&filter).await.unwrap();
        let total: usize = page.data.iter().map(|s| s.athlete_count).sum();
        assert_eq!(total, 125);
    }

    #[tokio::test]
    async fn test_create_derives_slug_and_rejects_duplicates() {
        let db = Database::seeded(today());
        let repo = SchoolRepository::new(&db);

        let school = repo.create(&create_request("Dojo Águila Real")).await.unwrap();
        assert_eq!(school.value, "dojo-aguila-real");

        let err = repo.create(&create_request("Dojo Águila Real")).await.unwrap_err();
        assert!(matches!(err, StorageError::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn test_create_then_delete_round_trip() {
        let db = Database::seeded(today());
        let before = db.snapshot().await;
        let repo = SchoolRepository::new(&db);

        let school = repo.create(&create_request("Academia Kaizen")).await.unwrap();
        repo.delete(&school.value).await.unwrap();

        assert_eq!(*db.snapshot().await, *before);
    }

    #[tokio::test]
    async fn test_rename_follows_athletes() {
        let db = Database::seeded(today());
        let repo = SchoolRepository::new(&db);
        let request = UpdateSchoolRequest {
            name: Some("Okinawa Dojo Central".to_string()),
            address: None,
            master_id: None,
            logo_url: None,
        };

        let before = db.snapshot().await.athletes_of_school("Dojo Okinawa").len();
        repo.update("dojo-okinawa", &request).await.unwrap();

        let data = db.snapshot().await;
        assert!(data.athletes_of_school("Dojo Okinawa").is_empty());
        assert_eq!(data.athletes_of_school("Okinawa Dojo Central").len(), before);
    }

    #[tokio::test]
    async fn test_report_request_copies_school_athletes() {
        let db = Database::seeded(today());
        let repo = SchoolRepository::new(&db);

        let request = repo.report_request("shito-ryu-karate", today()).await.unwrap();
        assert_eq!(request.school.label, "Shito-Ryu Karate");
        assert!(!request.athletes.is_empty());
        assert!(request.athletes.iter().all(|a| a.escuela == "Shito-Ryu Karate"));

        assert!(repo.report_request("nope", today()).await.unwrap_err().is_not_found());
    }
}
