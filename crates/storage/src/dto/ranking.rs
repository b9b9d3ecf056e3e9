use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::common::{PaginationParams, default_page, default_page_size};
use crate::models::{Athlete, Belt, Category, School};

/// Query accepted by the ranking board. Every filter is optional and they
/// combine with AND.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RankingFilter {
    /// Case-insensitive substring of the first names, last names or cédula.
    pub search: Option<String>,
    /// School slug. Matched against the athlete's school label.
    pub school: Option<String>,
    pub category: Option<Category>,
    /// Registration year.
    pub year: Option<i32>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl RankingFilter {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.page, self.page_size)
    }

    pub fn validate(&self) -> Result<(), String> {
        self.pagination().validate()?;

        if let Some(year) = self.year
            && !(1900..=9999).contains(&year)
        {
            return Err("year must be a four digit year".to_string());
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RankingEntry {
    /// 1-based position in the filtered board.
    pub position: u32,
    /// Whether the athlete is in the top three of the filtered board.
    pub podium: bool,
    pub athlete_id: u32,
    pub nombres: String,
    pub apellidos: String,
    pub edad: u32,
    pub category: Category,
    pub escuela: String,
    pub logo_url: Option<String>,
    pub cinturon: Belt,
    pub ranking: u32,
    pub oro: u32,
    pub plata: u32,
    pub bronce: u32,
}

impl RankingEntry {
    pub fn new(position: u32, athlete: Athlete) -> Self {
        Self {
            position,
            podium: position <= 3,
            athlete_id: athlete.id,
            category: athlete.category(),
            nombres: athlete.nombres,
            apellidos: athlete.apellidos,
            edad: athlete.edad,
            escuela: athlete.escuela,
            logo_url: athlete.logo_url,
            cinturon: athlete.cinturon,
            ranking: athlete.ranking,
            oro: athlete.oro,
            plata: athlete.plata,
            bronce: athlete.bronce,
        }
    }
}

/// Values the board's filter controls can take.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RankingFilterOptions {
    pub categories: Vec<Category>,
    pub years: Vec<i32>,
    pub schools: Vec<School>,
}
