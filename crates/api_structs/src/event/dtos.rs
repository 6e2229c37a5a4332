use chrono::{DateTime, Utc};
use flock_domain::{ChurchEvent, EventStatus, Frequency, RecurrencePattern, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChurchEventDTO {
    pub id: ID,
    pub church_id: ID,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub tags: Vec<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: EventStatus,
    pub recurrence: Option<RecurrencePattern>,
    pub parent_event_id: Option<ID>,
    pub service_id: Option<ID>,
    pub attendee_ids: Vec<ID>,
    pub team_ids: Vec<ID>,
    pub created: i64,
    pub updated: i64,
}

impl ChurchEventDTO {
    pub fn new(event: ChurchEvent) -> Self {
        Self {
            id: event.id,
            church_id: event.church_id,
            title: event.title,
            description: event.description,
            location: event.location,
            tags: event.tags,
            start_date: event.start_date,
            end_date: event.end_date,
            status: event.status,
            recurrence: event.recurrence,
            parent_event_id: event.parent_event_id,
            service_id: event.service_id,
            attendee_ids: event.attendee_ids,
            team_ids: event.team_ids,
            created: event.created,
            updated: event.updated,
        }
    }
}

/// The short form returned for events created in bulk
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EventSummaryDTO {
    pub id: ID,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl EventSummaryDTO {
    pub fn new(event: &ChurchEvent) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            start_date: event.start_date,
            end_date: event.end_date,
        }
    }
}

/// A recurrence pattern as sent by clients. Every field is optional here so
/// that a missing `frequency` can be reported as a client error.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceInputDTO {
    #[serde(default)]
    pub frequency: Option<Frequency>,
    #[serde(default)]
    pub interval: Option<u32>,
    #[serde(default)]
    pub days_of_week: Option<Vec<u32>>,
    #[serde(default)]
    pub days_of_month: Option<Vec<u32>>,
    #[serde(default)]
    pub months_of_year: Option<Vec<u32>>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub count: Option<u32>,
}
