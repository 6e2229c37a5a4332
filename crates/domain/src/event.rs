use crate::shared::{
    entity::{Entity, ID},
    recurrence::RecurrencePattern,
};
use chrono::{prelude::*, Duration};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Draft,
    Published,
    Cancelled,
}

impl Default for EventStatus {
    fn default() -> Self {
        Self::Draft
    }
}

#[derive(Debug, Clone)]
pub struct ChurchEvent {
    pub id: ID,
    pub church_id: ID,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub tags: Vec<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: EventStatus,
    /// Set on template events that recurring occurrences were generated from
    pub recurrence: Option<RecurrencePattern>,
    /// The template event this occurrence was generated from
    pub parent_event_id: Option<ID>,
    /// The service this event was generated from
    pub service_id: Option<ID>,
    pub attendee_ids: Vec<ID>,
    pub team_ids: Vec<ID>,
    pub created: i64,
    pub updated: i64,
}

impl ChurchEvent {
    pub fn new(
        church_id: ID,
        title: String,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        created: i64,
    ) -> Self {
        Self {
            id: Default::default(),
            church_id,
            title,
            description: None,
            location: None,
            tags: Vec::new(),
            start_date,
            end_date,
            status: Default::default(),
            recurrence: None,
            parent_event_id: None,
            service_id: None,
            attendee_ids: Vec::new(),
            team_ids: Vec::new(),
            created,
            updated: created,
        }
    }

    pub fn duration(&self) -> Duration {
        self.end_date - self.start_date
    }

    pub fn is_valid_timespan(&self) -> bool {
        self.start_date <= self.end_date
    }

    /// Creates an occurrence of this event starting at `start` and lasting as
    /// long as this event does.
    pub fn occurrence_at(&self, start: DateTime<Utc>, created: i64) -> Self {
        Self {
            id: Default::default(),
            church_id: self.church_id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            tags: self.tags.clone(),
            start_date: start,
            end_date: start + self.duration(),
            status: self.status,
            recurrence: None,
            parent_event_id: Some(self.id.clone()),
            service_id: self.service_id.clone(),
            attendee_ids: Vec::new(),
            team_ids: Vec::new(),
            created,
            updated: created,
        }
    }

    /// Checks if this event overlaps the window between `start` and `end`
    pub fn overlaps(&self, start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> bool {
        start.map(|start| self.end_date >= start).unwrap_or(true)
            && end.map(|end| self.start_date <= end).unwrap_or(true)
    }
}

impl Entity for ChurchEvent {
    fn id(&self) -> &ID {
        &self.id
    }
}
