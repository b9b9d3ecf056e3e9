use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Belt, Category, CedulaParts};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Athlete {
    pub id: u32,
    pub nombres: String,
    pub apellidos: String,
    pub edad: u32,
    /// Label of the school the athlete trains at.
    pub escuela: String,
    pub cinturon: Belt,
    pub ranking: u32,
    pub cedula: String,
    pub oro: u32,
    pub plata: u32,
    pub bronce: u32,
    pub logo_url: Option<String>,
    pub registration_date: DateTime<Utc>,
}

impl Athlete {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombres, self.apellidos)
    }

    pub fn category(&self) -> Category {
        Category::from_age(self.edad)
    }

    pub fn cedula_parts(&self) -> CedulaParts {
        CedulaParts::parse(&self.cedula)
    }

    pub fn registration_year(&self) -> i32 {
        self.registration_date.year()
    }

    /// Leaderboard key: points first, then gold, silver and bronze counts.
    pub fn ranking_key(&self) -> (u32, u32, u32, u32) {
        (self.ranking, self.oro, self.plata, self.bronce)
    }
}
