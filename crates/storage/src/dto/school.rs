use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::common::{PaginationParams, default_page, default_page_size};
use crate::models::School;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SchoolFilter {
    /// Case-insensitive substring of the school name.
    pub search: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl SchoolFilter {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.page, self.page_size)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SchoolResponse {
    pub value: String,
    pub label: String,
    pub logo_url: Option<String>,
    pub address: Option<String>,
    pub master_id: Option<String>,
    pub athlete_count: usize,
}

impl SchoolResponse {
    pub fn new(school: School, athlete_count: usize) -> Self {
        Self {
            value: school.value,
            label: school.label,
            logo_url: school.logo_url,
            address: school.address,
            master_id: school.master_id,
            athlete_count,
        }
    }
}

/// Request payload for registering a school
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSchoolRequest {
    #[validate(length(min = 1, max = 255, message = "El nombre de la escuela es requerido."))]
    pub name: String,

    #[validate(length(min = 1, max = 500, message = "La dirección es requerida."))]
    pub address: String,

    #[validate(length(min = 1, message = "Debe seleccionar un director."))]
    pub master_id: String,

    #[validate(url)]
    #[validate(length(max = 500))]
    pub logo_url: Option<String>,
}

/// Request payload for updating a school. The slug never changes.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSchoolRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 500))]
    pub address: Option<String>,

    #[validate(length(min = 1))]
    pub master_id: Option<String>,

    #[validate(url)]
    #[validate(length(max = 500))]
    pub logo_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_school_requires_every_field() {
        let req = CreateSchoolRequest {
            name: String::new(),
            address: String::new(),
            master_id: String::new(),
            logo_url: Some("not a url".to_string()),
        };

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields.len(), 4);
    }
}
