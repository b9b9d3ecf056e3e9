use storage::{
    Database,
    dto::athlete::{AssignRankingRequest, CreateAthleteRequest, UpdateAthleteRequest},
    error::Result,
    models::Athlete,
    repository::athlete::AthleteRepository,
};

/// List all athletes
pub async fn list_athletes(db: &Database) -> Result<Vec<Athlete>> {
    let repo = AthleteRepository::new(db);
    repo.list().await
}

/// Get athlete by id
pub async fn get_athlete(db: &Database, id: u32) -> Result<Athlete> {
    let repo = AthleteRepository::new(db);
    repo.find_by_id(id).await
}

/// Create a new athlete
pub async fn create_athlete(db: &Database, request: &CreateAthleteRequest) -> Result<Athlete> {
    let repo = AthleteRepository::new(db);
    let athlete = repo.create(request).await?;
    tracing::info!("Created athlete {} ({})", athlete.id, athlete.full_name());
    Ok(athlete)
}

/// Update an athlete
pub async fn update_athlete(
    db: &Database,
    id: u32,
    request: &UpdateAthleteRequest,
) -> Result<Athlete> {
    let repo = AthleteRepository::new(db);
    repo.update(id, request).await
}

/// Set the ranking points and medal counts of an athlete
pub async fn assign_ranking(
    db: &Database,
    id: u32,
    request: &AssignRankingRequest,
) -> Result<Athlete> {
    let repo = AthleteRepository::new(db);
    let athlete = repo.assign_ranking(id, request).await?;
    tracing::info!("Assigned {} points to athlete {}", athlete.ranking, athlete.id);
    Ok(athlete)
}

/// Delete an athlete
pub async fn delete_athlete(db: &Database, id: u32) -> Result<()> {
    let repo = AthleteRepository::new(db);
    repo.delete(id).await
}
