use chrono::Utc;

use crate::Database;
use crate::dto::athlete::{AssignRankingRequest, CreateAthleteRequest, UpdateAthleteRequest, to_count};
use crate::error::{Result, StorageError};
use crate::models::{Athlete, CedulaParts, School};

pub struct AthleteRepository<'a> {
    db: &'a Database,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// List all athletes
    pub async fn list(&self) -> Result<Vec<Athlete>> {
        let mut athletes = self.db.snapshot().await.athletes.clone();
        athletes.sort_by(|a, b| {
            a.apellidos
                .cmp(&b.apellidos)
                .then_with(|| a.nombres.cmp(&b.nombres))
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(athletes)
    }

    /// Find athlete by ID
    pub async fn find_by_id(&self, id: u32) -> Result<Athlete> {
        self.db
            .snapshot()
            .await
            .athletes
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    pub async fn create(&self, request: &CreateAthleteRequest) -> Result<Athlete> {
        self.db
            .update(|data| {
                let school = school_by_value(&data.schools, &request.escuela)?.clone();
                let cedula = CedulaParts::parse(&request.cedula).to_string();

                if data.athletes.iter().any(|a| a.cedula_parts() == CedulaParts::parse(&cedula)) {
                    return Err(StorageError::ConstraintViolation(format!(
                        "An athlete with cédula {} already exists",
                        cedula
                    )));
                }

                let athlete = Athlete {
                    id: data.athletes.iter().map(|a| a.id).max().unwrap_or(0) + 1,
                    nombres: request.nombres.trim().to_string(),
                    apellidos: request.apellidos.trim().to_string(),
                    edad: to_count(request.edad),
                    escuela: school.label,
                    cinturon: request.cinturon,
                    ranking: to_count(request.ranking),
                    cedula,
                    oro: 0,
                    plata: 0,
                    bronce: 0,
                    logo_url: school.logo_url,
                    registration_date: Utc::now(),
                };

                data.athletes.push(athlete.clone());
                Ok(athlete)
            })
            .await
    }

    pub async fn update(&self, id: u32, request: &UpdateAthleteRequest) -> Result<Athlete> {
        self.db
            .update(|data| {
                let school = match &request.escuela {
                    Some(value) => Some(school_by_value(&data.schools, value)?.clone()),
                    None => None,
                };

                // Uniqueness applies only when the cédula changes. Seeded cohorts share numbers.
                if let Some(cedula) = &request.cedula {
                    let parts = CedulaParts::parse(cedula);
                    let unchanged = data
                        .athletes
                        .iter()
                        .any(|a| a.id == id && a.cedula_parts() == parts);
                    if !unchanged && data.athletes.iter().any(|a| a.id != id && a.cedula_parts() == parts) {
                        return Err(StorageError::ConstraintViolation(format!(
                            "An athlete with cédula {} already exists",
                            parts
                        )));
                    }
                }

                let athlete = data
                    .athletes
                    .iter_mut()
                    .find(|a| a.id == id)
                    .ok_or(StorageError::NotFound)?;

                if let Some(nombres) = &request.nombres {
                    athlete.nombres = nombres.trim().to_string();
                }
                if let Some(apellidos) = &request.apellidos {
                    athlete.apellidos = apellidos.trim().to_string();
                }
                if let Some(edad) = request.edad {
                    athlete.edad = to_count(edad);
                }
                if let Some(school) = school {
                    athlete.escuela = school.label;
                    athlete.logo_url = school.logo_url;
                }
                if let Some(cinturon) = request.cinturon {
                    athlete.cinturon = cinturon;
                }
                if let Some(cedula) = &request.cedula {
                    athlete.cedula = CedulaParts::parse(cedula).to_string();
                }

                Ok(athlete.clone())
            })
            .await
    }

    /// Overwrite the points and medal tally of an athlete
    pub async fn assign_ranking(&self, id: u32, request: &AssignRankingRequest) -> Result<Athlete> {
        self.db
            .update(|data| {
                let athlete = data
                    .athletes
                    .iter_mut()
                    .find(|a| a.id == id)
                    .ok_or(StorageError::NotFound)?;

                athlete.ranking = to_count(request.ranking);
                athlete.oro = to_count(request.oro);
                athlete.plata = to_count(request.plata);
                athlete.bronce = to_count(request.bronce);

                Ok(athlete.clone())
            })
            .await
    }

    pub async fn delete(&self, id: u32) -> Result<()> {
        self.db
            .update(|data| {
                let before = data.athletes.len();
                data.athletes.retain(|a| a.id != id);
                if data.athletes.len() == before {
                    return Err(StorageError::NotFound);
                }
                Ok(())
            })
            .await
    }
}

fn school_by_value<'s>(schools: &'s [School], value: &str) -> Result<&'s School> {
    schools.iter().find(|s| s.value == value).ok_or_else(|| {
        StorageError::ConstraintViolation(format!("School '{}' does not exist", value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Belt;
    use chrono::NaiveDate;

    fn db() -> Database {
        Database::seeded(NaiveDate::from_ymd_opt(2025, 3, 18).unwrap())
    }

    fn create_request() -> CreateAthleteRequest {
        CreateAthleteRequest {
            nombres: "Rosa".to_string(),
            apellidos: "Quintero".to_string(),
            edad: 16,
            escuela: "bushido-vzla".to_string(),
            cinturon: Belt::Green,
            cedula: "e12.345.678".to_string(),
            ranking: 300,
        }
    }

    #[tokio::test]
    async fn test_create_resolves_school_and_normalizes_cedula() {
        let db = db();
        let repo = AthleteRepository::new(&db);

        let athlete = repo.create(&create_request()).await.unwrap();
        assert_eq!(athlete.escuela, "Bushido Vzla");
        assert_eq!(athlete.cedula, "E-12345678");
        assert_eq!((athlete.oro, athlete.plata, athlete.bronce), (0, 0, 0));
        assert_eq!(repo.find_by_id(athlete.id).await.unwrap(), athlete);
    }

    #[tokio::test]
    async fn test_create_with_unknown_school_is_rejected() {
        let db = db();
        let repo = AthleteRepository::new(&db);
        let mut request = create_request();
        request.escuela = "no-existe".to_string();

        let err = repo.create(&request).await.unwrap_err();
        assert!(matches!(err, StorageError::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn test_duplicate_cedula_is_rejected() {
        let db = db();
        let repo = AthleteRepository::new(&db);
        repo.create(&create_request()).await.unwrap();

        let mut again = create_request();
        again.cedula = "E-12345678".to_string();
        let err = repo.create(&again).await.unwrap_err();
        assert!(matches!(err, StorageError::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn test_assign_ranking() {
        let db = db();
        let repo = AthleteRepository::new(&db);
        let request = AssignRankingRequest {
            ranking: 2000,
            oro: 12,
            plata: 3,
            bronce: 1,
        };

        let athlete = repo.assign_ranking(202510, &request).await.unwrap();
        assert_eq!(athlete.ranking_key(), (2000, 12, 3, 1));
    }

    #[tokio::test]
    async fn test_update_moves_school_label_and_logo() {
        let db = db();
        let repo = AthleteRepository::new(&db);
        let request = UpdateAthleteRequest {
            nombres: None,
            apellidos: None,
            edad: Some(18),
            escuela: Some("wado-ryu-valencia".to_string()),
            cinturon: None,
            cedula: None,
        };

        let athlete = repo.update(202501, &request).await.unwrap();
        assert_eq!(athlete.escuela, "Wado-Ryu Valencia");
        assert_eq!(athlete.logo_url, None);
        assert_eq!(athlete.edad, 18);
    }

    #[tokio::test]
    async fn test_update_rejects_cedula_of_another_athlete() {
        let db = db();
        let before = db.snapshot().await;
        let repo = AthleteRepository::new(&db);
        let taken = repo.find_by_id(202502).await.unwrap().cedula;
        let request = UpdateAthleteRequest {
            nombres: None,
            apellidos: None,
            edad: None,
            escuela: None,
            cinturon: None,
            cedula: Some(taken),
        };

        let err = repo.update(202501, &request).await.unwrap_err();
        assert!(matches!(err, StorageError::ConstraintViolation(_)));
        assert_eq!(*db.snapshot().await, *before);

        let own = UpdateAthleteRequest {
            cedula: Some("21.100.001".to_string()),
            ..request
        };
        let athlete = repo.update(202501, &own).await.unwrap();
        assert_eq!(athlete.cedula, "V-21100001");
    }

    #[tokio::test]
    async fn test_create_then_delete_round_trip() {
        let db = db();
        let before = db.snapshot().await;
        let repo = AthleteRepository::new(&db);

        let athlete = repo.create(&create_request()).await.unwrap();
        repo.delete(athlete.id).await.unwrap();

        assert_eq!(*db.snapshot().await, *before);
    }

    #[tokio::test]
    async fn test_missing_athlete() {
        let db = db();
        let repo = AthleteRepository::new(&db);
        assert!(repo.find_by_id(1).await.unwrap_err().is_not_found());
        assert!(repo.delete(1).await.unwrap_err().is_not_found());
    }
}
