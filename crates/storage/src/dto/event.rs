use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::common::{PaginationParams, default_page, default_page_size};
use crate::models::{EventStatus, EventType, KarateEvent};

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EventFilter {
    /// Case-insensitive substring of the name or location.
    pub search: Option<String>,
    pub status: Option<EventStatus>,
    #[serde(rename = "type")]
    pub event_type: Option<EventType>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl EventFilter {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.page, self.page_size)
    }
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UpcomingQuery {
    #[serde(default = "default_upcoming_limit")]
    pub limit: usize,
}

fn default_upcoming_limit() -> usize {
    5
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CalendarQuery {
    pub year: i32,
    /// 1 to 12.
    pub month: u32,
}

impl CalendarQuery {
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=12).contains(&self.month) {
            return Err("month must be between 1 and 12".to_string());
        }
        if NaiveDate::from_ymd_opt(self.year, self.month, 1).is_none() {
            return Err("year is out of range".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CalendarYearQuery {
    pub year: i32,
}

impl CalendarYearQuery {
    pub fn validate(&self) -> Result<(), String> {
        if NaiveDate::from_ymd_opt(self.year, 1, 1).is_none()
            || NaiveDate::from_ymd_opt(self.year, 12, 31).is_none()
        {
            return Err("year is out of range".to_string());
        }
        Ok(())
    }
}

/// One day of the calendar view that has at least one event.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub events: Vec<KarateEvent>,
}

/// One month of the year view. Every month is present, with or without events.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalendarMonth {
    /// 1 to 12.
    pub month: u32,
    pub days: Vec<CalendarDay>,
}

/// Request payload for scheduling an event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    #[validate(length(min = 3, max = 255, message = "El nombre debe tener al menos 3 caracteres."))]
    pub name: String,

    #[validate(length(min = 10, message = "La descripción debe tener al menos 10 caracteres."))]
    pub description: String,

    pub date: NaiveDate,

    #[validate(length(min = 3, max = 255, message = "La ubicación es requerida."))]
    pub location: String,

    #[serde(rename = "type")]
    pub event_type: EventType,
}

/// Request payload for editing an event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateEventRequest {
    #[validate(length(min = 3, max = 255, message = "El nombre debe tener al menos 3 caracteres."))]
    pub name: Option<String>,

    #[validate(length(min = 10, message = "La descripción debe tener al menos 10 caracteres."))]
    pub description: Option<String>,

    pub date: Option<NaiveDate>,

    #[validate(length(min = 3, max = 255, message = "La ubicación es requerida."))]
    pub location: Option<String>,

    #[serde(rename = "type")]
    pub event_type: Option<EventType>,

    pub status: Option<EventStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_event_minimum_lengths() {
        let req = CreateEventRequest {
            name: "Ab".to_string(),
            description: "corta".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
            location: "Caracas".to_string(),
            event_type: EventType::Competition,
        };

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("description"));
        assert!(!fields.contains_key("location"));
    }

    #[test]
    fn test_calendar_query_month_bounds() {
        assert!(CalendarQuery { year: 2025, month: 0 }.validate().is_err());
        assert!(CalendarQuery { year: 2025, month: 13 }.validate().is_err());
        assert!(CalendarQuery { year: 2025, month: 12 }.validate().is_ok());
    }
}
