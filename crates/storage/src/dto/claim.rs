use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::common::{PaginationParams, default_page, default_page_size};
use crate::models::{ClaimStatus, RepresentedType};

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClaimFilter {
    /// Case-insensitive substring of the subject.
    pub search: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl ClaimFilter {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.page, self.page_size)
    }
}

/// Request payload for filing a claim. The representative is the session user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateClaimRequest {
    pub represented_type: RepresentedType,

    /// Athlete id for students, school slug for schools.
    #[validate(length(min = 1, message = "Debes seleccionar a quién representas."))]
    pub represented_id: String,

    #[validate(length(min = 5, max = 255, message = "El asunto debe tener al menos 5 caracteres."))]
    pub subject: String,

    #[validate(length(min = 20, message = "La descripción debe tener al menos 20 caracteres."))]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateClaimRequest {
    #[validate(length(min = 5, max = 255, message = "El asunto debe tener al menos 5 caracteres."))]
    pub subject: String,

    #[validate(length(min = 20, message = "La descripción debe tener al menos 20 caracteres."))]
    pub description: String,

    pub status: ClaimStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_claim_rules() {
        let req = CreateClaimRequest {
            represented_type: RepresentedType::Student,
            represented_id: String::new(),
            subject: "Hola".to_string(),
            description: "Demasiado corta".to_string(),
        };

        let errors = req.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 3);
    }

    #[test]
    fn test_update_claim_accepts_valid_payload() {
        let req = UpdateClaimRequest {
            subject: "Cambio de categoría".to_string(),
            description: "Solicito revisar la categoría asignada por la edad.".to_string(),
            status: ClaimStatus::InProgress,
        };
        assert!(req.validate().is_ok());
    }
}
