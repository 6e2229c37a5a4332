use crate::dtos::{EventSummaryDTO, ServiceDTO};
use flock_domain::{ChurchEvent, Service, ServiceSchedule, Tz, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse {
    pub service: ServiceDTO,
}

impl ServiceResponse {
    pub fn new(service: Service) -> Self {
        Self {
            service: ServiceDTO::new(service),
        }
    }
}

pub mod create_service {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub church_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        #[serde(default)]
        pub description: Option<String>,
        #[serde(default)]
        pub location: Option<String>,
        #[serde(default)]
        pub tags: Option<Vec<String>>,
        /// Defaults to the timezone of the church
        #[serde(default)]
        pub timezone: Option<Tz>,
        #[serde(default)]
        pub schedules: Option<Vec<ServiceSchedule>>,
    }

    pub type APIResponse = ServiceResponse;
}

pub mod get_service {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub service_id: ID,
    }

    pub type APIResponse = ServiceResponse;
}

pub mod update_service {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub service_id: ID,
    }

    #[derive(Serialize, Deserialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub description: Option<String>,
        #[serde(default)]
        pub location: Option<String>,
        #[serde(default)]
        pub tags: Option<Vec<String>>,
        #[serde(default)]
        pub timezone: Option<Tz>,
        #[serde(default)]
        pub schedules: Option<Vec<ServiceSchedule>>,
    }

    pub type APIResponse = ServiceResponse;
}

pub mod delete_service {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub service_id: ID,
    }

    pub type APIResponse = ServiceResponse;
}

pub mod create_service_events {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub service_id: ID,
    }

    #[derive(Serialize, Deserialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub start_date: Option<String>,
        #[serde(default)]
        pub end_date: Option<String>,
        /// Number of days with at least one scheduled service to generate,
        /// between 1 and `MAX_RECURRENCE_COUNT`
        #[serde(default)]
        pub occurrences: Option<usize>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub count: usize,
        pub events: Vec<EventSummaryDTO>,
    }

    impl APIResponse {
        pub fn new(events: &[ChurchEvent]) -> Self {
            Self {
                count: events.len(),
                events: events.iter().map(EventSummaryDTO::new).collect(),
            }
        }
    }
}
