use crate::error::FlockError;
use crate::shared::{
    auth::{protect_route, Permission},
    usecase::{execute_with_policy, PermissionBoundary, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use flock_api_structs::update_event::*;
use flock_domain::{date::parse_iso_datetime, ChurchEvent, EventStatus, ID};
use flock_infra::FlockContext;

pub async fn update_event_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<FlockContext>,
) -> Result<HttpResponse, FlockError> {
    let (_user, policy) = protect_route(&http_req, &ctx)?;

    let body = body.0;
    let usecase = UpdateEventUseCase {
        event_id: path.event_id.clone(),
        title: body.title,
        description: body.description,
        location: body.location,
        tags: body.tags,
        start_date: body.start_date,
        end_date: body.end_date,
        status: body.status,
        attendee_ids: body.attendee_ids,
        team_ids: body.team_ids,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(FlockError::from)
}

#[derive(Debug, Default)]
pub struct UpdateEventUseCase {
    pub event_id: ID,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub tags: Option<Vec<String>>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<EventStatus>,
    pub attendee_ids: Option<Vec<ID>>,
    pub team_ids: Option<Vec<ID>>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    EmptyTitle,
    InvalidDate(String),
    InvalidTimespan,
    StorageError,
}

impl From<UseCaseError> for FlockError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The event with id: {}, was not found.", id))
            }
            UseCaseError::EmptyTitle => Self::BadClientData("The event title cannot be empty".into()),
            UseCaseError::InvalidDate(date) => Self::BadClientData(format!(
                "The provided date: {}, is not a valid ISO 8601 date",
                date
            )),
            UseCaseError::InvalidTimespan => {
                Self::BadClientData("The event cannot end before it starts".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateEventUseCase {
    type Response = ChurchEvent;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateEvent";

    async fn execute(&mut self, ctx: &FlockContext) -> Result<Self::Response, Self::Error> {
        let mut event = ctx
            .repos
            .events
            .find(&self.event_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.event_id.clone()))?;

        if let Some(title) = &self.title {
            let title = title.trim();
            if title.is_empty() {
                return Err(UseCaseError::EmptyTitle);
            }
            event.title = title.to_string();
        }
        if let Some(start_date) = &self.start_date {
            event.start_date = parse_iso_datetime(start_date)
                .map_err(|_| UseCaseError::InvalidDate(start_date.clone()))?;
        }
        if let Some(end_date) = &self.end_date {
            event.end_date = parse_iso_datetime(end_date)
                .map_err(|_| UseCaseError::InvalidDate(end_date.clone()))?;
        }
        if !event.is_valid_timespan() {
            return Err(UseCaseError::InvalidTimespan);
        }
        if let Some(description) = &self.description {
            event.description = Some(description.clone());
        }
        if let Some(location) = &self.location {
            event.location = Some(location.clone());
        }
        if let Some(tags) = &self.tags {
            event.tags = tags.clone();
        }
        if let Some(status) = self.status {
            event.status = status;
        }
        if let Some(attendee_ids) = &self.attendee_ids {
            event.attendee_ids = attendee_ids.clone();
        }
        if let Some(team_ids) = &self.team_ids {
            event.team_ids = team_ids.clone();
        }
        event.updated = ctx.sys.get_timestamp_millis();

        ctx.repos
            .events
            .save(&event)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(event)
    }
}

impl PermissionBoundary for UpdateEventUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::UpdateEvent]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::prelude::*;
    use flock_infra::StaticTimeSys;
    use std::sync::Arc;

    async fn setup() -> (FlockContext, ChurchEvent) {
        let mut ctx = FlockContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys(1000));
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap();
        let event = ChurchEvent::new(
            ID::new(),
            "Choir practice".into(),
            start,
            start + chrono::Duration::hours(2),
            0,
        );
        ctx.repos.events.insert(&event).await.unwrap();
        (ctx, event)
    }

    #[actix_web::main]
    #[test]
    async fn updates_given_fields() {
        let (ctx, event) = setup().await;

        let mut usecase = UpdateEventUseCase {
            event_id: event.id.clone(),
            status: Some(EventStatus::Cancelled),
            end_date: Some("2024-03-01T21:00:00Z".into()),
            ..Default::default()
        };
        let res = usecase.execute(&ctx).await.unwrap();

        assert_eq!(res.title, "Choir practice");
        assert_eq!(res.status, EventStatus::Cancelled);
        assert_eq!(res.end_date, Utc.with_ymd_and_hms(2024, 3, 1, 21, 0, 0).unwrap());
        assert_eq!(res.updated, 1000);
        let stored = ctx.repos.events.find(&event.id).await.unwrap();
        assert_eq!(stored.status, EventStatus::Cancelled);
    }

    #[actix_web::main]
    #[test]
    async fn rejects_end_before_start() {
        let (ctx, event) = setup().await;

        let mut usecase = UpdateEventUseCase {
            event_id: event.id.clone(),
            end_date: Some("2024-02-01".into()),
            ..Default::default()
        };
        let res = usecase.execute(&ctx).await;

        assert_eq!(res.unwrap_err(), UseCaseError::InvalidTimespan);
        let stored = ctx.repos.events.find(&event.id).await.unwrap();
        assert_eq!(stored.end_date, event.end_date);
    }
}
