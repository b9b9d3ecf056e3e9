//! Leaderboard ordering, filtering and paging over the in-memory athlete list.

use std::cmp::Reverse;

use crate::dto::common::PaginatedResponse;
use crate::dto::ranking::{RankingEntry, RankingFilter, RankingFilterOptions};
use crate::models::{Athlete, Category, School};

/// First registration year offered by the year filter.
pub const FIRST_RANKING_YEAR: i32 = 2020;
/// The year filter always reaches at least this year.
pub const MIN_LAST_RANKING_YEAR: i32 = 2025;

/// Orders athletes by points, then gold, silver and bronze, all descending.
///
/// The sort is stable, so athletes tied on all four keys keep their input order
/// and sorting an already sorted list is a no-op.
pub fn sort_ranking(mut athletes: Vec<Athlete>) -> Vec<Athlete> {
    athletes.sort_by_key(|a| Reverse(a.ranking_key()));
    athletes
}

/// Predicates of the ranking board, already resolved against the school list.
#[derive(Debug, Clone, Default)]
pub struct RankingCriteria {
    pub search: Option<String>,
    pub school_label: Option<String>,
    pub category: Option<Category>,
    pub year: Option<i32>,
}

impl RankingCriteria {
    pub fn matches(&self, athlete: &Athlete) -> bool {
        self.matches_search(athlete)
            && self.matches_school(athlete)
            && self.matches_category(athlete)
            && self.matches_year(athlete)
    }

    fn matches_search(&self, athlete: &Athlete) -> bool {
        let Some(term) = self.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) else {
            return true;
        };
        let term = term.to_lowercase();

        [&athlete.nombres, &athlete.apellidos, &athlete.cedula]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }

    fn matches_school(&self, athlete: &Athlete) -> bool {
        self.school_label
            .as_deref()
            .is_none_or(|label| athlete.escuela == label)
    }

    fn matches_category(&self, athlete: &Athlete) -> bool {
        self.category.is_none_or(|c| athlete.category() == c)
    }

    fn matches_year(&self, athlete: &Athlete) -> bool {
        self.year.is_none_or(|y| athlete.registration_year() == y)
    }
}

pub fn filter_athletes(athletes: Vec<Athlete>, criteria: &RankingCriteria) -> Vec<Athlete> {
    athletes.into_iter().filter(|a| criteria.matches(a)).collect()
}

/// Builds one page of the ranking board.
///
/// Positions are assigned after filtering, so the top three of whatever subset is
/// on screen are flagged as the podium. A school slug that does not exist yields
/// an empty board.
pub fn ranking_board(
    athletes: &[Athlete],
    schools: &[School],
    filter: &RankingFilter,
) -> PaginatedResponse<RankingEntry> {
    let school_label = match filter.school.as_deref().filter(|s| !s.is_empty()) {
        Some(value) => match schools.iter().find(|s| s.value == value) {
            Some(school) => Some(school.label.clone()),
            None => return filter.pagination().paginate(Vec::new()),
        },
        None => None,
    };

    let criteria = RankingCriteria {
        search: filter.search.clone(),
        school_label,
        category: filter.category,
        year: filter.year,
    };

    let entries = filter_athletes(sort_ranking(athletes.to_vec()), &criteria)
        .into_iter()
        .enumerate()
        .map(|(idx, athlete)| RankingEntry::new(idx as u32 + 1, athlete))
        .collect();

    filter.pagination().paginate(entries)
}

/// The top `n` athletes of the unfiltered board.
pub fn top_athletes(athletes: &[Athlete], n: usize) -> Vec<RankingEntry> {
    sort_ranking(athletes.to_vec())
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(idx, athlete)| RankingEntry::new(idx as u32 + 1, athlete))
        .collect()
}

/// Choices for the board's filter controls: the categories that actually occur
/// (in bracket order), the selectable years (newest first) and the schools.
pub fn filter_options(athletes: &[Athlete], schools: &[School], current_year: i32) -> RankingFilterOptions {
    let categories = Category::ALL
        .into_iter()
        .filter(|c| athletes.iter().any(|a| a.category() == *c))
        .collect();

    let last_year = current_year.max(MIN_LAST_RANKING_YEAR);
    let years = (FIRST_RANKING_YEAR..=last_year).rev().collect();

    RankingFilterOptions {
        categories,
        years,
        schools: schools.to_vec(),
    }
}
