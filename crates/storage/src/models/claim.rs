use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Who a claim is filed on behalf of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RepresentedType {
    Student,
    School,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ClaimStatus {
    #[default]
    Submitted,
    InProgress,
    Resolved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claim {
    pub id: String,
    pub representative_id: String,
    pub representative_name: String,
    pub represented_id: String,
    pub represented_name: String,
    pub represented_type: RepresentedType,
    pub subject: String,
    pub description: String,
    pub status: ClaimStatus,
    pub submission_date: NaiveDate,
}
