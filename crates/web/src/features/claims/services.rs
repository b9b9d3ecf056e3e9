use storage::{
    Database,
    dto::{
        claim::{ClaimFilter, CreateClaimRequest, UpdateClaimRequest},
        common::PaginatedResponse,
    },
    error::Result,
    models::{Claim, User},
    repository::claim::ClaimRepository,
};

/// Claims the session user is allowed to read
pub async fn list_claims(db: &Database, user: &User, filter: &ClaimFilter) -> Result<PaginatedResponse<Claim>> {
    let repo = ClaimRepository::new(db);
    repo.list_visible(user, filter).await
}

pub async fn get_claim(db: &Database, user: &User, id: &str) -> Result<Claim> {
    let repo = ClaimRepository::new(db);
    repo.find_by_id(user, id).await
}

pub async fn create_claim(db: &Database, user: &User, request: &CreateClaimRequest) -> Result<Claim> {
    let repo = ClaimRepository::new(db);
    let claim = repo.create(user, request).await?;
    tracing::info!("Claim {} filed by {} for {}", claim.id, claim.representative_id, claim.represented_id);
    Ok(claim)
}

pub async fn update_claim(db: &Database, user: &User, id: &str, request: &UpdateClaimRequest) -> Result<Claim> {
    let repo = ClaimRepository::new(db);
    repo.update(user, id, request).await
}

pub async fn delete_claim(db: &Database, user: &User, id: &str) -> Result<()> {
    let repo = ClaimRepository::new(db);
    repo.delete(user, id).await
}
