use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Athlete, Belt, Category, CedulaParts};

/// Athlete as returned by the API, with its derived fields filled in.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
    pub id: u32,
    pub nombres: String,
    pub apellidos: String,
    pub edad: u32,
    pub category: Category,
    pub escuela: String,
    pub cinturon: Belt,
    pub ranking: u32,
    pub cedula: String,
    pub cedula_parts: CedulaParts,
    pub oro: u32,
    pub plata: u32,
    pub bronce: u32,
    pub logo_url: Option<String>,
    pub registration_date: DateTime<Utc>,
}

impl From<Athlete> for AthleteResponse {
    fn from(athlete: Athlete) -> Self {
        Self {
            category: athlete.category(),
            cedula_parts: athlete.cedula_parts(),
            id: athlete.id,
            nombres: athlete.nombres,
            apellidos: athlete.apellidos,
            edad: athlete.edad,
            escuela: athlete.escuela,
            cinturon: athlete.cinturon,
            ranking: athlete.ranking,
            cedula: athlete.cedula,
            oro: athlete.oro,
            plata: athlete.plata,
            bronce: athlete.bronce,
            logo_url: athlete.logo_url,
            registration_date: athlete.registration_date,
        }
    }
}

/// Request payload for registering an athlete
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAthleteRequest {
    #[validate(length(min = 2, max = 255, message = "El nombre debe tener al menos 2 caracteres."))]
    pub nombres: String,

    #[validate(length(min = 2, max = 255, message = "El apellido debe tener al menos 2 caracteres."))]
    pub apellidos: String,

    #[validate(range(min = 0, max = 120, message = "La edad debe estar entre 0 y 120 años."))]
    pub edad: i64,

    /// School slug.
    #[validate(length(min = 1, message = "Debes seleccionar una escuela."))]
    pub escuela: String,

    pub cinturon: Belt,

    #[validate(custom(function = "validate_cedula"))]
    pub cedula: String,

    #[validate(range(min = 0, max = 4294967295i64, message = "El ranking debe estar entre 0 y 4294967295."))]
    #[serde(default)]
    pub ranking: i64,
}

/// Request payload for updating an athlete's profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAthleteRequest {
    #[validate(length(min = 2, max = 255))]
    pub nombres: Option<String>,

    #[validate(length(min = 2, max = 255))]
    pub apellidos: Option<String>,

    #[validate(range(min = 0, max = 120))]
    pub edad: Option<i64>,

    /// School slug.
    #[validate(length(min = 1))]
    pub escuela: Option<String>,

    pub cinturon: Option<Belt>,

    #[validate(custom(function = "validate_cedula"))]
    pub cedula: Option<String>,
}

/// Points and medal tally assigned from the ranking board.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AssignRankingRequest {
    #[validate(range(min = 0, max = 4294967295i64, message = "El ranking debe estar entre 0 y 4294967295."))]
    pub ranking: i64,

    #[validate(range(min = 0, max = 4294967295i64, message = "El número de medallas debe estar entre 0 y 4294967295."))]
    pub oro: i64,

    #[validate(range(min = 0, max = 4294967295i64, message = "El número de medallas debe estar entre 0 y 4294967295."))]
    pub plata: i64,

    #[validate(range(min = 0, max = 4294967295i64, message = "El número de medallas debe estar entre 0 y 4294967295."))]
    pub bronce: i64,
}

/// A document number of 6 to 9 digits, optionally prefixed by its type letter.
pub(crate) fn validate_cedula(cedula: &str) -> Result<(), validator::ValidationError> {
    let parts = CedulaParts::parse(cedula);
    let digits_ok = parts.number.chars().all(|c| c.is_ascii_digit());

    if digits_ok && (6..=9).contains(&parts.number.len()) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("invalid_cedula");
        error.message = Some("El documento debe tener entre 6 y 9 dígitos.".into());
        Err(error)
    }
}

/// Narrows a validated, non-negative request integer into the stored width.
pub(crate) fn to_count(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_ranking_rejects_negative_values() {
        let req = AssignRankingRequest {
            ranking: -1,
            oro: 0,
            plata: -2,
            bronce: 1,
        };

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("ranking"));
        assert!(fields.contains_key("plata"));
        assert!(!fields.contains_key("oro"));
        assert!(!fields.contains_key("bronce"));
    }

    #[test]
    fn test_assign_ranking_accepts_zero() {
        let req = AssignRankingRequest {
            ranking: 0,
            oro: 0,
            plata: 0,
            bronce: 0,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_assign_ranking_rejects_values_past_u32() {
        let req = AssignRankingRequest {
            ranking: i64::from(u32::MAX) + 1,
            oro: i64::from(u32::MAX),
            plata: 0,
            bronce: 10_000_000_000,
        };

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("ranking"));
        assert!(fields.contains_key("bronce"));
        assert!(!fields.contains_key("oro"));
    }

    #[test]
    fn test_create_athlete_flags_each_bad_field() {
        let req = CreateAthleteRequest {
            nombres: "A".to_string(),
            apellidos: "Salas".to_string(),
            edad: -3,
            escuela: String::new(),
            cinturon: Belt::White,
            cedula: "V-12".to_string(),
            ranking: 0,
        };

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("nombres"));
        assert!(fields.contains_key("edad"));
        assert!(fields.contains_key("escuela"));
        assert!(fields.contains_key("cedula"));
        assert!(!fields.contains_key("apellidos"));
    }

    #[test]
    fn test_cedula_rule() {
        assert!(validate_cedula("V-20100001").is_ok());
        assert!(validate_cedula("12.345.678").is_ok());
        assert!(validate_cedula("E-12a456").is_err());
        assert!(validate_cedula("1234567890").is_err());
    }

    #[test]
    fn test_to_count() {
        assert_eq!(to_count(-5), 0);
        assert_eq!(to_count(42), 42);
        assert_eq!(to_count(i64::MAX), u32::MAX);
    }
}
