use chrono::Utc;
use uuid::Uuid;

use crate::Database;
use crate::dto::claim::{ClaimFilter, CreateClaimRequest, UpdateClaimRequest};
use crate::dto::common::PaginatedResponse;
use crate::error::{Result, StorageError};
use crate::models::{Claim, ClaimStatus, RepresentedType, Role, User};
use crate::database::DataSet;

pub struct ClaimRepository<'a> {
    db: &'a Database,
}

fn visible_to(user: &User, claim: &Claim) -> bool {
    match user.role {
        Role::Admin | Role::Master => true,
        Role::Representative => claim.representative_id == user.id,
        Role::Student => false,
    }
}

fn represented_name(data: &DataSet, kind: RepresentedType, id: &str) -> Result<String> {
    let name = match kind {
        RepresentedType::Student => id
            .parse::<u32>()
            .ok()
            .and_then(|id| data.athletes.iter().find(|a| a.id == id))
            .map(|a| a.full_name()),
        RepresentedType::School => data.school_by_value(id).map(|s| s.label.clone()),
    };

    name.ok_or_else(|| {
        StorageError::ConstraintViolation(format!("Unknown represented {:?} '{}'", kind, id))
    })
}

impl<'a> ClaimRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Claims the user may read, most recent submission first
    pub async fn list_visible(&self, user: &User, filter: &ClaimFilter) -> Result<PaginatedResponse<Claim>> {
        let data = self.db.snapshot().await;
        let term = filter
            .search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_default();

        let mut claims: Vec<Claim> = data
            .claims
            .iter()
            .filter(|c| visible_to(user, c))
            .filter(|c| c.subject.to_lowercase().contains(&term))
            .cloned()
            .collect();
        claims.sort_by(|a, b| {
            b.submission_date
                .cmp(&a.submission_date)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(filter.pagination().paginate(claims))
    }

    pub async fn find_by_id(&self, user: &User, id: &str) -> Result<Claim> {
        self.db
            .snapshot()
            .await
            .claims
            .iter()
            .find(|c| c.id == id && visible_to(user, c))
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    /// File a claim on behalf of `user`.
    pub async fn create(&self, user: &User, request: &CreateClaimRequest) -> Result<Claim> {
        let represented_id = request.represented_id.trim().to_string();

        self.db
            .update(|data| {
                let represented_name =
                    represented_name(data, request.represented_type, &represented_id)?;

                let claim = Claim {
                    id: format!("claim-{}", Uuid::new_v4()),
                    representative_id: user.id.clone(),
                    representative_name: user.full_name(),
                    represented_id,
                    represented_name,
                    represented_type: request.represented_type,
                    subject: request.subject.trim().to_string(),
                    description: request.description.trim().to_string(),
                    status: ClaimStatus::Submitted,
                    submission_date: Utc::now().date_naive(),
                };

                data.claims.push(claim.clone());
                Ok(claim)
            })
            .await
    }

    pub async fn update(&self, user: &User, id: &str, request: &UpdateClaimRequest) -> Result<Claim> {
        self.db
            .update(|data| {
                let claim = data
                    .claims
                    .iter_mut()
                    .find(|c| c.id == id && visible_to(user, c))
                    .ok_or(StorageError::NotFound)?;

                claim.subject = request.subject.trim().to_string();
                claim.description = request.description.trim().to_string();
                claim.status = request.status;

                Ok(claim.clone())
            })
            .await
    }

    pub async fn delete(&self, user: &User, id: &str) -> Result<()> {
        self.db
            .update(|data| {
                let before = data.claims.len();
                data.claims.retain(|c| !(c.id == id && visible_to(user, c)));
                if data.claims.len() == before {
                    return Err(StorageError::NotFound);
                }
                Ok(())
            })
            .await
    }
}
