use crate::error::FlockError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{DateTime, Utc};
use flock_api_structs::get_church_events::*;
use flock_domain::{date::parse_iso_datetime, ChurchEvent, ID};
use flock_infra::FlockContext;

pub async fn get_church_events_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    query: web::Query<QueryParams>,
    ctx: web::Data<FlockContext>,
) -> Result<HttpResponse, FlockError> {
    protect_route(&http_req, &ctx)?;

    let query = query.into_inner();
    let usecase = GetChurchEventsUseCase {
        church_id: path.church_id.clone(),
        start_date: query.start_date,
        end_date: query.end_date,
    };

    execute(usecase, &ctx)
        .await
        .map(|events| HttpResponse::Ok().json(APIResponse::new(events)))
        .map_err(FlockError::from)
}

#[derive(Debug)]
pub struct GetChurchEventsUseCase {
    pub church_id: ID,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    ChurchNotFound(ID),
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
            UseCaseError::InvalidDate(date) => Self::BadClientData(format!(
                "The provided date: {}, is not a valid ISO 8601 date",
                date
            )),
            UseCaseError::InvalidTimespan => {
                Self::BadClientData("The endDate cannot be before the startDate".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

fn parse_optional(date: &Option<String>) -> Result<Option<DateTime<Utc>>, UseCaseError> {
    date.as_ref()
        .map(|d| parse_iso_datetime(d).map_err(|_| UseCaseError::InvalidDate(d.clone())))
        .transpose()
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetChurchEventsUseCase {
    type Response = Vec<ChurchEvent>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetChurchEvents";

    async fn execute(&mut self, ctx: &FlockContext) -> Result<Self::Response, Self::Error> {
        let start = parse_optional(&self.start_date)?;
        let end = parse_optional(&self.end_date)?;
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                return Err(UseCaseError::InvalidTimespan);
            }
        }

        if ctx.repos.churches.find(&self.church_id).await.is_none() {
            return Err(UseCaseError::ChurchNotFound(self.church_id.clone()));
        }

        ctx.repos
            .events
            .find_by_church(&self.church_id, start, end)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
