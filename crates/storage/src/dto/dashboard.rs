use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::athlete::AthleteResponse;
use super::ranking::RankingEntry;
use crate::models::{Belt, Category, Role};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BeltCount {
    pub belt: Belt,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoleCount {
    pub role: Role,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// Landing page figures of the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardSummary {
    pub total_athletes: usize,
    pub total_schools: usize,
    pub total_events: usize,
    pub upcoming_events: usize,
    pub open_claims: usize,
    pub belt_distribution: Vec<BeltCount>,
    pub role_distribution: Vec<RoleCount>,
    pub categories: Vec<CategoryCount>,
    pub recent_athletes: Vec<AthleteResponse>,
    pub top_athletes: Vec<RankingEntry>,
}
