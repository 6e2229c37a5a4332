use crate::dtos::{ChurchEventDTO, EventSummaryDTO, RecurrenceInputDTO};
use flock_domain::{ChurchEvent, EventStatus, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChurchEventResponse {
    pub event: ChurchEventDTO,
}

impl ChurchEventResponse {
    pub fn new(event: ChurchEvent) -> Self {
        Self {
            event: ChurchEventDTO::new(event),
        }
    }
}

pub mod create_event {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub church_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub title: String,
        #[serde(default)]
        pub description: Option<String>,
        #[serde(default)]
        pub location: Option<String>,
        #[serde(default)]
        pub tags: Option<Vec<String>>,
        pub start_date: String,
        pub end_date: String,
        #[serde(default)]
        pub status: Option<EventStatus>,
        #[serde(default)]
        pub attendee_ids: Option<Vec<ID>>,
        #[serde(default)]
        pub team_ids: Option<Vec<ID>>,
    }

    pub type APIResponse = ChurchEventResponse;
}

pub mod get_event {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    pub type APIResponse = ChurchEventResponse;
}

pub mod update_event {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    #[derive(Serialize, Deserialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub title: Option<String>,
        #[serde(default)]
        pub description: Option<String>,
        #[serde(default)]
        pub location: Option<String>,
        #[serde(default)]
        pub tags: Option<Vec<String>>,
        #[serde(default)]
        pub start_date: Option<String>,
        #[serde(default)]
        pub end_date: Option<String>,
        #[serde(default)]
        pub status: Option<EventStatus>,
        #[serde(default)]
        pub attendee_ids: Option<Vec<ID>>,
        #[serde(default)]
        pub team_ids: Option<Vec<ID>>,
    }

    pub type APIResponse = ChurchEventResponse;
}

pub mod delete_event {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    pub type APIResponse = ChurchEventResponse;
}

pub mod get_church_events {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub church_id: ID,
    }

    #[derive(Serialize, Deserialize, Debug, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        #[serde(default)]
        pub start_date: Option<String>,
        #[serde(default)]
        pub end_date: Option<String>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub events: Vec<ChurchEventDTO>,
    }

    impl APIResponse {
        pub fn new(events: Vec<ChurchEvent>) -> Self {
            Self {
                events: events.into_iter().map(ChurchEventDTO::new).collect(),
            }
        }
    }
}

pub mod create_recurring_events {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    #[derive(Serialize, Deserialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub recurrence: Option<RecurrenceInputDTO>,
        #[serde(default)]
        pub start_date: Option<String>,
        #[serde(default)]
        pub end_date: Option<String>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub events: Vec<EventSummaryDTO>,
    }

    impl APIResponse {
        pub fn new(events: &[ChurchEvent]) -> Self {
            Self {
                events: events.iter().map(EventSummaryDTO::new).collect(),
            }
        }
    }
}
