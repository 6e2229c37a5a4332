use crate::{APIResponse, BaseClient, ServiceSchedule, Tz, ID};
use chrono::NaiveDate;
use flock_api_structs::*;
use flock_domain::date::format_date;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ServiceClient {
    base: Arc<BaseClient>,
}

pub struct CreateServiceInput {
    pub church_id: ID,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub tags: Option<Vec<String>>,
    pub timezone: Option<Tz>,
    pub schedules: Option<Vec<ServiceSchedule>>,
}

#[derive(Default)]
pub struct UpdateServiceInput {
    pub service_id: ID,
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub tags: Option<Vec<String>>,
    pub timezone: Option<Tz>,
    pub schedules: Option<Vec<ServiceSchedule>>,
}

pub struct CreateServiceEventsInput {
    pub service_id: ID,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub occurrences: Option<usize>,
}

impl ServiceClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateServiceInput) -> APIResponse<create_service::APIResponse> {
        let body = create_service::RequestBody {
            name: input.name,
            description: input.description,
            location: input.location,
            tags: input.tags,
            timezone: input.timezone,
            schedules: input.schedules,
        };
        self.base
            .post(
                body,
                format!("churches/{}/services", input.church_id),
                StatusCode::CREATED,
            )
            .await
    }

    pub async fn get(&self, service_id: ID) -> APIResponse<get_service::APIResponse> {
        self.base
            .get(format!("services/{}", service_id), StatusCode::OK)
            .await
    }

    pub async fn update(&self, input: UpdateServiceInput) -> APIResponse<update_service::APIResponse> {
        let body = update_service::RequestBody {
            name: input.name,
            description: input.description,
            location: input.location,
            tags: input.tags,
            timezone: input.timezone,
            schedules: input.schedules,
        };
        self.base
            .put(
                body,
                format!("services/{}", input.service_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, service_id: ID) -> APIResponse<delete_service::APIResponse> {
        self.base
            .delete(format!("services/{}", service_id), StatusCode::OK)
            .await
    }

    pub async fn create_events(
        &self,
        input: CreateServiceEventsInput,
    ) -> APIResponse<create_service_events::APIResponse> {
        let body = create_service_events::RequestBody {
            start_date: Some(format_date(&input.start_date)),
            end_date: input.end_date.as_ref().map(format_date),
            occurrences: input.occurrences,
        };
        self.base
            .post(
                body,
                format!("services/{}/events", input.service_id),
                StatusCode::CREATED,
            )
            .await
    }
}
