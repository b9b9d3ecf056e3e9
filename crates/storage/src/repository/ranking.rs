use crate::Database;
use crate::dto::common::PaginatedResponse;
use crate::dto::ranking::{RankingEntry, RankingFilter, RankingFilterOptions};
use crate::error::Result;
use crate::services::ranking;

pub struct RankingRepository<'a> {
    db: &'a Database,
}

impl<'a> RankingRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub async fn get_ranking(&self, filter: &RankingFilter) -> Result<PaginatedResponse<RankingEntry>> {
        let data = self.db.snapshot().await;
        Ok(ranking::ranking_board(&data.athletes, &data.schools, filter))
    }

    pub async fn get_filter_options(&self, current_year: i32) -> Result<RankingFilterOptions> {
        let data = self.db.snapshot().await;
        Ok(ranking::filter_options(&data.athletes, &data.schools, current_year))
    }
}
