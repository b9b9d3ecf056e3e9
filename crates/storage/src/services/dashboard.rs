use chrono::NaiveDate;

use crate::database::DataSet;
use crate::dto::athlete::AthleteResponse;
use crate::dto::dashboard::{BeltCount, CategoryCount, DashboardSummary, RoleCount};
use crate::models::{Belt, Category, ClaimStatus, Role};
use crate::services::ranking::top_athletes;

const RECENT_ATHLETES: usize = 5;
const TOP_ATHLETES: usize = 3;

pub fn summary(data: &DataSet, today: NaiveDate) -> DashboardSummary {
    let belt_distribution = Belt::ALL
        .into_iter()
        .map(|belt| BeltCount {
            belt,
            count: data.athletes.iter().filter(|a| a.cinturon == belt).count(),
        })
        .collect();

    let role_distribution = Role::ALL
        .into_iter()
        .map(|role| RoleCount {
            role,
            count: data.users.iter().filter(|u| u.role == role).count(),
        })
        .collect();

    let categories = Category::ALL
        .into_iter()
        .map(|category| CategoryCount {
            category,
            count: data.athletes.iter().filter(|a| a.category() == category).count(),
        })
        .collect();

    let mut recent = data.athletes.clone();
    recent.sort_by(|a, b| b.registration_date.cmp(&a.registration_date));
    let recent_athletes = recent
        .into_iter()
        .take(RECENT_ATHLETES)
        .map(AthleteResponse::from)
        .collect();

    DashboardSummary {
        total_athletes: data.athletes.len(),
        total_schools: data.schools.len(),
        total_events: data.events.len(),
        upcoming_events: data.events.iter().filter(|e| e.date >= today).count(),
        open_claims: data
            .claims
            .iter()
            .filter(|c| matches!(c.status, ClaimStatus::Submitted | ClaimStatus::InProgress))
            .count(),
        belt_distribution,
        role_distribution,
        categories,
        recent_athletes,
        top_athletes: top_athletes(&data.athletes, TOP_ATHLETES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_summary_counts_add_up() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 18).unwrap();
        let data = seed::dataset(today);
        let summary = summary(&data, today);

        assert_eq!(summary.total_athletes, 125);
        let belts: usize = summary.belt_distribution.iter().map(|b| b.count).sum();
        assert_eq!(belts, 125);
        let categories: usize = summary.categories.iter().map(|c| c.count).sum();
        assert_eq!(categories, 125);
        let roles: usize = summary.role_distribution.iter().map(|r| r.count).sum();
        assert_eq!(roles, data.users.len());

        assert_eq!(summary.open_claims, 2);
        assert_eq!(summary.recent_athletes.len(), 5);
        assert_eq!(summary.top_athletes.len(), 3);
    }

    #[test]
    fn test_recent_athletes_are_newest_first() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 18).unwrap();
        let summary = summary(&seed::dataset(today), today);
        let dates: Vec<_> = summary.recent_athletes.iter().map(|a| a.registration_date).collect();
        assert!(dates.windows(2).all(|w| w[0] >= w[1]));
    }
}
