use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use super::common::{PaginationParams, default_page, default_page_size};
use crate::models::{Belt, DocumentType, Role};

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserFilter {
    /// Case-insensitive substring of the full name or email.
    pub search: Option<String>,
    pub role: Option<Role>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl UserFilter {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.page, self.page_size)
    }
}

/// Request payload for inviting a user. The password is checked, never kept.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(email(message = "Por favor, introduce un correo electrónico válido."))]
    pub email: String,

    #[validate(length(min = 8, message = "La contraseña debe tener al menos 8 caracteres."))]
    pub password: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default = "default_role")]
    pub role: Role,
}

fn default_role() -> Role {
    Role::Student
}

/// Full profile edit. Students must also carry a school, a belt and a ranking.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_student_fields", skip_on_field_errors = false))]
pub struct UpdateUserRequest {
    #[validate(length(min = 2, max = 255, message = "El nombre debe tener al menos 2 caracteres."))]
    pub first_name: String,

    #[validate(length(min = 2, max = 255, message = "El apellido debe tener al menos 2 caracteres."))]
    pub last_name: String,

    #[validate(email(message = "Por favor, introduce un correo electrónico válido."))]
    pub email: String,

    pub role: Role,

    #[serde(default)]
    pub doc_type: DocumentType,

    #[validate(length(min = 6, max = 9, message = "El documento debe tener entre 6 y 9 dígitos."))]
    pub doc_number: String,

    #[validate(custom(function = "validate_not_in_future"))]
    pub date_of_birth: NaiveDate,

    pub school_id: Option<String>,

    pub belt: Option<Belt>,

    #[validate(range(min = 0, max = 4294967295i64, message = "El ranking debe estar entre 0 y 4294967295."))]
    pub ranking: Option<i64>,

    pub representative_id: Option<String>,
}

impl UpdateUserRequest {
    pub fn cedula(&self) -> String {
        format!("{}-{}", self.doc_type.as_char(), self.doc_number.replace('.', ""))
    }
}

fn validate_not_in_future(date: &NaiveDate) -> Result<(), ValidationError> {
    if *date <= Utc::now().date_naive() {
        Ok(())
    } else {
        let mut error = ValidationError::new("future_date");
        error.message = Some("La fecha de nacimiento no puede ser en el futuro.".into());
        Err(error)
    }
}

fn validate_student_fields(req: &UpdateUserRequest) -> Result<(), ValidationError> {
    if req.role != Role::Student {
        return Ok(());
    }

    let has_school = req.school_id.as_deref().is_some_and(|s| !s.is_empty());
    if has_school && req.belt.is_some() && req.ranking.is_some() {
        Ok(())
    } else {
        let mut error = ValidationError::new("student_fields");
        error.message = Some(
            "La escuela, el cinturón y el ranking son requeridos para el rol de alumno.".into(),
        );
        Err(error)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "La contraseña actual es requerida."))]
    pub current_password: String,

    #[validate(length(min = 8, message = "La nueva contraseña debe tener al menos 8 caracteres."))]
    pub new_password: String,

    #[validate(must_match(other = "new_password", message = "Las contraseñas no coinciden."))]
    pub confirm_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student_edit() -> UpdateUserRequest {
        UpdateUserRequest {
            first_name: "Ana".to_string(),
            last_name: "González".to_string(),
            email: "ana.gonzalez@example.com".to_string(),
            role: Role::Student,
            doc_type: DocumentType::V,
            doc_number: "21100001".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2014, 2, 2).unwrap(),
            school_id: Some("shito-ryu-karate".to_string()),
            belt: Some(Belt::Yellow),
            ranking: Some(1435),
            representative_id: None,
        }
    }

    #[test]
    fn test_valid_student_edit() {
        assert!(student_edit().validate().is_ok());
        assert_eq!(student_edit().cedula(), "V-21100001");
    }

    #[test]
    fn test_student_without_belt_is_rejected() {
        let mut req = student_edit();
        req.belt = None;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_non_student_does_not_need_athlete_fields() {
        let mut req = student_edit();
        req.role = Role::Representative;
        req.school_id = None;
        req.belt = None;
        req.ranking = None;
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_future_birth_date_is_rejected() {
        let mut req = student_edit();
        req.date_of_birth = Utc::now().date_naive() + chrono::Days::new(30);
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("date_of_birth"));
    }

    #[test]
    fn test_password_confirmation_must_match() {
        let req = ChangePasswordRequest {
            current_password: "secreto123".to_string(),
            new_password: "nuevaClave1".to_string(),
            confirm_password: "nuevaClave2".to_string(),
        };

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("confirm_password"));
        assert!(!fields.contains_key("new_password"));
    }

    #[test]
    fn test_short_new_password_is_rejected() {
        let req = ChangePasswordRequest {
            current_password: "x".to_string(),
            new_password: "corta".to_string(),
            confirm_password: "corta".to_string(),
        };

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("new_password"));
    }

    #[test]
    fn test_create_user_rules() {
        let req = CreateUserRequest {
            email: "no-es-correo".to_string(),
            password: "1234".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            role: Role::Student,
        };

        let errors = req.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 2);
    }
}
