use crate::{APIResponse, BaseClient, EventStatus, RecurrenceInputDTO, ID};
use chrono::{DateTime, SecondsFormat, Utc};
use flock_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ChurchEventClient {
    base: Arc<BaseClient>,
}

pub struct CreateEventInput {
    pub church_id: ID,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub tags: Option<Vec<String>>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: Option<EventStatus>,
    pub attendee_ids: Option<Vec<ID>>,
    pub team_ids: Option<Vec<ID>>,
}

#[derive(Default)]
pub struct UpdateEventInput {
    pub event_id: ID,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub tags: Option<Vec<String>>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: Option<EventStatus>,
    pub attendee_ids: Option<Vec<ID>>,
    pub team_ids: Option<Vec<ID>>,
}

pub struct GetChurchEventsInput {
    pub church_id: ID,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

pub struct CreateRecurringEventsInput {
    pub event_id: ID,
    pub recurrence: RecurrenceInputDTO,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
}

fn format_datetime(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl ChurchEventClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateEventInput) -> APIResponse<create_event::APIResponse> {
        let body = create_event::RequestBody {
            title: input.title,
            description: input.description,
            location: input.location,
            tags: input.tags,
            start_date: format_datetime(input.start_date),
            end_date: format_datetime(input.end_date),
            status: input.status,
            attendee_ids: input.attendee_ids,
            team_ids: input.team_ids,
        };
        self.base
            .post(
                body,
                format!("churches/{}/events", input.church_id),
                StatusCode::CREATED,
            )
            .await
    }

    pub async fn get(&self, event_id: ID) -> APIResponse<get_event::APIResponse> {
        self.base
            .get(format!("events/{}", event_id), StatusCode::OK)
            .await
    }

    pub async fn get_by_church(
        &self,
        input: GetChurchEventsInput,
    ) -> APIResponse<get_church_events::APIResponse> {
        let query = get_church_events::QueryParams {
            start_date: input.start_date.map(format_datetime),
            end_date: input.end_date.map(format_datetime),
        };
        self.base
            .get_with_query(
                format!("churches/{}/events", input.church_id),
                &query,
                StatusCode::OK,
            )
            .await
    }

    pub async fn update(&self, input: UpdateEventInput) -> APIResponse<update_event::APIResponse> {
        let body = update_event::RequestBody {
            title: input.title,
            description: input.description,
            location: input.location,
            tags: input.tags,
            start_date: input.start_date.map(format_datetime),
            end_date: input.end_date.map(format_datetime),
            status: input.status,
            attendee_ids: input.attendee_ids,
            team_ids: input.team_ids,
        };
        self.base
            .put(body, format!("events/{}", input.event_id), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, event_id: ID) -> APIResponse<delete_event::APIResponse> {
        self.base
            .delete(format!("events/{}", event_id), StatusCode::OK)
            .await
    }

    pub async fn create_recurring(
        &self,
        input: CreateRecurringEventsInput,
    ) -> APIResponse<create_recurring_events::APIResponse> {
        let body = create_recurring_events::RequestBody {
            recurrence: Some(input.recurrence),
            start_date: Some(format_datetime(input.start_date)),
            end_date: input.end_date.map(format_datetime),
        };
        self.base
            .post(
                body,
                format!("events/{}/recurring", input.event_id),
                StatusCode::CREATED,
            )
            .await
    }
}
