use crate::error::FlockError;
use crate::shared::{
    auth::{protect_route, Permission},
    usecase::{execute_with_policy, PermissionBoundary, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use flock_api_structs::create_recurring_events::*;
use flock_api_structs::dtos::RecurrenceInputDTO;
use flock_domain::{
    calculate_dates, date::parse_iso_datetime, ChurchEvent, InvalidRecurrenceError,
    RecurrencePattern, ID,
};
use flock_infra::FlockContext;
use tracing::info;

pub async fn create_recurring_events_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<FlockContext>,
) -> Result<HttpResponse, FlockError> {
    let (_user, policy) = protect_route(&http_req, &ctx)?;

    let body = body.0;
    let usecase = CreateRecurringEventsUseCase {
        event_id: path.event_id.clone(),
        recurrence: body.recurrence,
        start_date: body.start_date,
        end_date: body.end_date,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|events| HttpResponse::Created().json(APIResponse::new(&events)))
        .map_err(FlockError::from)
}

/// Generates occurrences of a template event following a recurrence pattern
/// and stores them as new events pointing back at the template.
#[derive(Debug)]
pub struct CreateRecurringEventsUseCase {
    pub event_id: ID,
    pub recurrence: Option<RecurrenceInputDTO>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    MissingFrequency,
    MissingStartDate,
    InvalidDate(String),
    InvalidRecurrence(InvalidRecurrenceError),
    NoOccurrences,
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for FlockError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingFrequency => {
                Self::BadClientData("A recurrence with a frequency is required".into())
            }
            UseCaseError::MissingStartDate => {
                Self::BadClientData("A startDate is required".into())
            }
            UseCaseError::InvalidDate(date) => Self::BadClientData(format!(
                "The provided date: {}, is not a valid ISO 8601 date",
                date
            )),
            UseCaseError::InvalidRecurrence(e) => {
                Self::BadClientData(format!("Invalid recurrence: {}", e))
            }
            UseCaseError::NoOccurrences => Self::BadClientData(
                "The recurrence does not produce any dates in the given period".into(),
            ),
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The event with id: {}, was not found.", id))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

impl CreateRecurringEventsUseCase {
    fn parse_date(date: &str) -> Result<chrono::DateTime<chrono::Utc>, UseCaseError> {
        parse_iso_datetime(date).map_err(|_| UseCaseError::InvalidDate(date.to_string()))
    }

    fn pattern(&self) -> Result<RecurrencePattern, UseCaseError> {
        let input = self
            .recurrence
            .as_ref()
            .ok_or(UseCaseError::MissingFrequency)?;
        let frequency = input
            .frequency
            .clone()
            .ok_or(UseCaseError::MissingFrequency)?;

        let mut pattern = RecurrencePattern::new(frequency);
        pattern.interval = input.interval.unwrap_or(1);
        pattern.days_of_week = input.days_of_week.clone();
        pattern.days_of_month = input.days_of_month.clone();
        pattern.months_of_year = input.months_of_year.clone();
        pattern.count = input.count;
        pattern.end_date = input
            .end_date
            .as_deref()
            .map(Self::parse_date)
            .transpose()?;
        pattern.validate().map_err(UseCaseError::InvalidRecurrence)?;

        Ok(pattern)
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateRecurringEventsUseCase {
    type Response = Vec<ChurchEvent>;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateRecurringEvents";

    async fn execute(&mut self, ctx: &FlockContext) -> Result<Self::Response, Self::Error> {
        let pattern = self.pattern()?;
        let start = self
            .start_date
            .as_deref()
            .ok_or(UseCaseError::MissingStartDate)
            .and_then(Self::parse_date)?;
        let end = self.end_date.as_deref().map(Self::parse_date).transpose()?;

        let mut template = ctx
            .repos
            .events
            .find(&self.event_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.event_id.clone()))?;

        let dates = calculate_dates(start, end, &pattern, &ctx.config.recurrence_bounds);
        if dates.is_empty() {
            return Err(UseCaseError::NoOccurrences);
        }

        let now = ctx.sys.get_timestamp_millis();
        let events = dates
            .into_iter()
            .map(|date| template.occurrence_at(date, now))
            .collect::<Vec<_>>();

        ctx.repos
            .events
            .insert_many(&events)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        info!(
            "Created {} occurrences of event: {}",
            events.len(),
            template.id
        );

        template.recurrence = Some(pattern);
        template.updated = now;
        ctx.repos
            .events
            .save(&template)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(events)
    }
}

impl PermissionBoundary for CreateRecurringEventsUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::CreateEvent]
    }
}
