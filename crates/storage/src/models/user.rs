use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Belt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Master,
    Student,
    Representative,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Master, Role::Student, Role::Representative];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub cedula: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    /// School slug, only meaningful for students and masters.
    pub school_id: Option<String>,
    pub belt: Option<Belt>,
    pub ranking: Option<u32>,
    pub representative_id: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether this user may read every claim rather than only the ones they filed.
    pub fn sees_all_claims(&self) -> bool {
        matches!(self.role, Role::Admin | Role::Master)
    }
}
