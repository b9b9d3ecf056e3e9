use storage::{
    Database,
    dto::{
        common::PaginatedResponse,
        ranking::{RankingEntry, RankingFilter, RankingFilterOptions},
    },
    error::Result,
    repository::ranking::RankingRepository,
};

/// Get the ranking board with filtering and pagination
pub async fn get_ranking(
    db: &Database,
    filter: &RankingFilter,
) -> Result<PaginatedResponse<RankingEntry>> {
    let repo = RankingRepository::new(db);
    repo.get_ranking(filter).await
}

pub async fn get_filter_options(db: &Database, current_year: i32) -> Result<RankingFilterOptions> {
    let repo = RankingRepository::new(db);
    repo.get_filter_options(current_year).await
}
