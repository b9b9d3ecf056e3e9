use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::Database;
use crate::dto::common::PaginatedResponse;
use crate::dto::event::{
    CalendarDay, CalendarMonth, CreateEventRequest, EventFilter, UpdateEventRequest,
};
use crate::error::{Result, StorageError};
use crate::models::{EventStatus, KarateEvent};

pub struct EventRepository<'a> {
    db: &'a Database,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// List events, newest date first
    pub async fn list(&self, filter: &EventFilter) -> Result<PaginatedResponse<KarateEvent>> {
        let data = self.db.snapshot().await;
        let term = filter
            .search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_default();

        let mut events: Vec<KarateEvent> = data
            .events
            .iter()
            .filter(|e| {
                e.name.to_lowercase().contains(&term) || e.location.to_lowercase().contains(&term)
            })
            .filter(|e| filter.status.is_none_or(|status| e.status == status))
            .filter(|e| filter.event_type.is_none_or(|kind| e.event_type == kind))
            .cloned()
            .collect();
        events.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));

        Ok(filter.pagination().paginate(events))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<KarateEvent> {
        self.db
            .snapshot()
            .await
            .events
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    pub async fn create(&self, request: &CreateEventRequest) -> Result<KarateEvent> {
        let event = KarateEvent {
            id: format!("evt-{}", Uuid::new_v4()),
            name: request.name.trim().to_string(),
            description: request.description.trim().to_string(),
            date: request.date,
            location: request.location.trim().to_string(),
            event_type: request.event_type,
            status: EventStatus::Scheduled,
        };

        self.db
            .update(|data| {
                data.events.push(event.clone());
                Ok(event)
            })
            .await
    }

    pub async fn update(&self, id: &str, request: &UpdateEventRequest) -> Result<KarateEvent> {
        self.db
            .update(|data| {
                let event = data
                    .events
                    .iter_mut()
                    .find(|e| e.id == id)
                    .ok_or(StorageError::NotFound)?;

                if let Some(name) = &request.name {
                    event.name = name.trim().to_string();
                }
                if let Some(description) = &request.description {
                    event.description = description.trim().to_string();
                }
                if let Some(date) = request.date {
                    event.date = date;
                }
                if let Some(location) = &request.location {
                    event.location = location.trim().to_string();
                }
                if let Some(event_type) = request.event_type {
                    event.event_type = event_type;
                }
                if let Some(status) = request.status {
                    event.status = status;
                }

                Ok(event.clone())
            })
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.db
            .update(|data| {
                let before = data.events.len();
                data.events.retain(|e| e.id != id);
                if data.events.len() == before {
                    return Err(StorageError::NotFound);
                }
                Ok(())
            })
            .await
    }

    /// Events on or after `today`, soonest first.
    pub async fn upcoming(&self, today: NaiveDate, limit: usize) -> Result<Vec<KarateEvent>> {
        let mut events: Vec<KarateEvent> = self
            .db
            .snapshot()
            .await
            .events
            .iter()
            .filter(|e| e.date >= today)
            .cloned()
            .collect();
        events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        events.truncate(limit);
        Ok(events)
    }

    /// Days of the given month that have events, in date order.
    pub async fn calendar(&self, year: i32, month: u32) -> Result<Vec<CalendarDay>> {
        let data = self.db.snapshot().await;
        Ok(group_by_day(
            data.events
                .iter()
                .filter(|e| e.date.year() == year && e.date.month() == month),
        ))
    }

    /// All twelve months of `year`, each with its event days.
    pub async fn calendar_year(&self, year: i32) -> Result<Vec<CalendarMonth>> {
        let data = self.db.snapshot().await;
        let in_year: Vec<&KarateEvent> = data.events.iter().filter(|e| e.date.year() == year).collect();

        Ok((1..=12)
            .map(|month| CalendarMonth {
                month,
                days: group_by_day(in_year.iter().copied().filter(|e| e.date.month() == month)),
            })
            .collect())
    }
}

fn group_by_day<'e>(events: impl Iterator<Item = &'e KarateEvent>) -> Vec<CalendarDay> {
    let mut days: BTreeMap<NaiveDate, Vec<KarateEvent>> = BTreeMap::new();
    for event in events {
        days.entry(event.date).or_default().push(event.clone());
    }

    days.into_iter()
        .map(|(date, events)| CalendarDay { date, events })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventType;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 18).unwrap()
    }

    fn all() -> EventFilter {
        EventFilter {
            page: 1,
            page_size: 100,
            ..Default::default()
        }
    }

    fn create_request() -> CreateEventRequest {
        CreateEventRequest {
            name: "Copa Oriente".to_string(),
            description: "Torneo abierto para los dojos del oriente del país.".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 11, 8).unwrap(),
            location: "Cumaná, Sucre".to_string(),
            event_type: EventType::Competition,
        }
    }

    #[tokio::test]
    async fn test_list_sorted_by_date_descending() {
        let db = Database::seeded(today());
        let page = EventRepository::new(&db).list(&all()).await.unwrap();

        assert_eq!(page.pagination.total_items, 16);
        assert!(page.data.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[tokio::test]
    async fn test_filters_compose() {
        let db = Database::seeded(today());
        let filter = EventFilter {
            search: Some("caracas".to_string()),
            status: Some(EventStatus::Finished),
            event_type: Some(EventType::Competition),
            ..all()
        };

        let page = EventRepository::new(&db).list(&filter).await.unwrap();
        let ids: Vec<&str> = page.data.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["evt-009", "evt-004"]);
    }

    #[tokio::test]
    async fn test_create_is_scheduled_with_generated_id() {
        let db = Database::seeded(today());
        let event = EventRepository::new(&db).create(&create_request()).await.unwrap();

        assert!(event.id.starts_with("evt-"));
        assert_eq!(event.status, EventStatus::Scheduled);
    }

    #[tokio::test]
    async fn test_create_then_delete_round_trip() {
        let db = Database::seeded(today());
        let before = db.snapshot().await;
        let repo = EventRepository::new(&db);

        let event = repo.create(&create_request()).await.unwrap();
        repo.delete(&event.id).await.unwrap();

        assert_eq!(*db.snapshot().await, *before);
    }

    #[tokio::test]
    async fn test_update_status() {
        let db = Database::seeded(today());
        let repo = EventRepository::new(&db);
        let request = UpdateEventRequest {
            name: None,
            description: None,
            date: None,
            location: None,
            event_type: None,
            status: Some(EventStatus::Cancelled),
        };

        let event = repo.update("evt-001", &request).await.unwrap();
        assert_eq!(event.status, EventStatus::Cancelled);
        assert_eq!(event.name, "Campeonato Nacional Juvenil");

        assert!(repo.update("evt-999", &request).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_upcoming_is_ascending_and_limited() {
        let db = Database::seeded(today());
        let events = EventRepository::new(&db).upcoming(today(), 3).await.unwrap();

        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["evt-014", "evt-015", "evt-009"]);
    }

    #[tokio::test]
    async fn test_calendar_groups_by_day() {
        let db = Database::seeded(today());
        let days = EventRepository::new(&db).calendar(2025, 3).await.unwrap();

        let dates: Vec<u32> = days.iter().map(|d| d.date.day()).collect();
        assert_eq!(dates, vec![10, 15, 22]);
        assert!(days.iter().all(|d| d.events.len() == 1));

        let empty = EventRepository::new(&db).calendar(2030, 1).await.unwrap();
        assert!(empty.is_empty());
    }

    #[tokio::test]
    async fn test_year_view_has_every_month() {
        let db = Database::seeded(today());
        let repo = EventRepository::new(&db);
        let months = repo.calendar_year(2025).await.unwrap();

        assert_eq!(months.len(), 12);
        assert_eq!(months.iter().map(|m| m.month).collect::<Vec<_>>(), (1..=12).collect::<Vec<_>>());

        let march: Vec<u32> = months[2].days.iter().map(|d| d.date.day()).collect();
        assert_eq!(march, vec![10, 15, 22]);
        assert!(months[0].days.is_empty());

        let days: usize = months.iter().flat_map(|m| &m.days).map(|d| d.events.len()).sum();
        assert_eq!(days, 15);

        let previous = repo.calendar_year(2024).await.unwrap();
        assert_eq!(previous[10].days.len(), 1);
        assert_eq!(previous[10].days[0].events[0].id, "evt-004");
    }
}
