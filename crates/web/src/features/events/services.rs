use chrono::NaiveDate;
use storage::{
    Database,
    dto::{
        common::PaginatedResponse,
        event::{CalendarDay, CalendarMonth, CreateEventRequest, EventFilter, UpdateEventRequest},
    },
    error::Result,
    models::KarateEvent,
    repository::event::EventRepository,
};

pub async fn list_events(db: &Database, filter: &EventFilter) -> Result<PaginatedResponse<KarateEvent>> {
    let repo = EventRepository::new(db);
    repo.list(filter).await
}

pub async fn get_event(db: &Database, id: &str) -> Result<KarateEvent> {
    let repo = EventRepository::new(db);
    repo.find_by_id(id).await
}

pub async fn create_event(db: &Database, request: &CreateEventRequest) -> Result<KarateEvent> {
    let repo = EventRepository::new(db);
    let event = repo.create(request).await?;
    tracing::info!("Scheduled event {} on {}", event.id, event.date);
    Ok(event)
}

pub async fn update_event(db: &Database, id: &str, request: &UpdateEventRequest) -> Result<KarateEvent> {
    let repo = EventRepository::new(db);
    repo.update(id, request).await
}

pub async fn delete_event(db: &Database, id: &str) -> Result<()> {
    let repo = EventRepository::new(db);
    repo.delete(id).await
}

pub async fn upcoming_events(db: &Database, today: NaiveDate, limit: usize) -> Result<Vec<KarateEvent>> {
    let repo = EventRepository::new(db);
    repo.upcoming(today, limit).await
}

pub async fn calendar(db: &Database, year: i32, month: u32) -> Result<Vec<CalendarDay>> {
    let repo = EventRepository::new(db);
    repo.calendar(year, month).await
}

pub async fn calendar_year(db: &Database, year: i32) -> Result<Vec<CalendarMonth>> {
    let repo = EventRepository::new(db);
    repo.calendar_year(year).await
}
