use crate::error::FlockError;
use crate::shared::{
    auth::{protect_route, Permission},
    usecase::{execute_with_policy, PermissionBoundary, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use flock_api_structs::create_event::*;
use flock_domain::{date::parse_iso_datetime, ChurchEvent, EventStatus, ID};
use flock_infra::FlockContext;

pub async fn create_event_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<FlockContext>,
) -> Result<HttpResponse, FlockError> {
    let (_user, policy) = protect_route(&http_req, &ctx)?;

    let body = body.0;
    let usecase = CreateEventUseCase {
        church_id: path.church_id.clone(),
        title: body.title,
        description: body.description,
        location: body.location,
        tags: body.tags.unwrap_or_default(),
        start_date: body.start_date,
        end_date: body.end_date,
        status: body.status.unwrap_or_default(),
        attendee_ids: body.attendee_ids.unwrap_or_default(),
        team_ids: body.team_ids.unwrap_or_default(),
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|event| HttpResponse::Created().json(APIResponse::new(event)))
        .map_err(FlockError::from)
}

#[derive(Debug)]
pub struct CreateEventUseCase {
    pub church_id: ID,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub tags: Vec<String>,
    pub start_date: String,
    pub end_date: String,
    pub status: EventStatus,
    pub attendee_ids: Vec<ID>,
    pub team_ids: Vec<ID>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    ChurchNotFound(ID),
    EmptyTitle,
    InvalidDate(String),
    InvalidTimespan,
    StorageError,
}

impl From<UseCaseError> for FlockError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::ChurchNotFound(id) => {
                Self::NotFound(format!("The church with id: {}, was not found.", id))
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
impl UseCase for CreateEventUseCase {
    type Response = ChurchEvent;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateEvent";

    async fn execute(&mut self, ctx: &FlockContext) -> Result<Self::Response, Self::Error> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(UseCaseError::EmptyTitle);
        }
        let start = parse_iso_datetime(&self.start_date)
            .map_err(|_| UseCaseError::InvalidDate(self.start_date.clone()))?;
        let end = parse_iso_datetime(&self.end_date)
            .map_err(|_| UseCaseError::InvalidDate(self.end_date.clone()))?;

        if ctx.repos.churches.find(&self.church_id).await.is_none() {
            return Err(UseCaseError::ChurchNotFound(self.church_id.clone()));
        }

        let mut event = ChurchEvent::new(
            self.church_id.clone(),
            title.to_string(),
            start,
            end,
            ctx.sys.get_timestamp_millis(),
        );
        if !event.is_valid_timespan() {
            return Err(UseCaseError::InvalidTimespan);
        }
        event.description = self.description.clone();
        event.location = self.location.clone();
        event.tags = self.tags.clone();
        event.status = self.status;
        event.attendee_ids = self.attendee_ids.clone();
        event.team_ids = self.team_ids.clone();

        ctx.repos
            .events
            .insert(&event)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(event)
    }
}

impl PermissionBoundary for CreateEventUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::CreateEvent]
    }
}
