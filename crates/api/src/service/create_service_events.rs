use crate::error::FlockError;
use crate::shared::{
    auth::{protect_route, Permission},
    usecase::{execute_with_policy, PermissionBoundary, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::NaiveDate;
use flock_api_structs::create_service_events::*;
use flock_domain::{date::parse_iso_date, ChurchEvent, ID, MAX_RECURRENCE_COUNT};
use flock_infra::FlockContext;
use tracing::info;

pub async fn create_service_events_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<FlockContext>,
) -> Result<HttpResponse, FlockError> {
    let (_user, policy) = protect_route(&http_req, &ctx)?;

    let body = body.0;
    let usecase = CreateServiceEventsUseCase {
        service_id: path.service_id.clone(),
        start_date: body.start_date,
        end_date: body.end_date,
        occurrences: body.occurrences,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|events| HttpResponse::Created().json(APIResponse::new(&events)))
        .map_err(FlockError::from)
}

/// Expands the weekly schedules of a service into events within the
/// requested window and stores them.
#[derive(Debug)]
pub struct CreateServiceEventsUseCase {
    pub service_id: ID,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Days with at least one scheduled slot, at most `MAX_RECURRENCE_COUNT`
    pub occurrences: Option<usize>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    NoSchedules,
    MissingStartDate,
    InvalidDate(String),
    InvalidOccurrences,
    StorageError,
}

impl From<UseCaseError> for FlockError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The service with id: {}, was not found.", id))
            }
            UseCaseError::NoSchedules => {
                Self::BadClientData("The service does not have any schedules".into())
            }
            UseCaseError::MissingStartDate => {
                Self::BadClientData("A startDate is required".into())
            }
            UseCaseError::InvalidDate(date) => Self::BadClientData(format!(
                "The provided date: {}, is not a valid ISO 8601 date",
                date
            )),
            UseCaseError::InvalidOccurrences => Self::BadClientData(format!(
                "occurrences must be between 1 and {}",
                MAX_RECURRENCE_COUNT
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

fn parse_date(date: &str) -> Result<NaiveDate, UseCaseError> {
    parse_iso_date(date).map_err(|_| UseCaseError::InvalidDate(date.to_string()))
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateServiceEventsUseCase {
    type Response = Vec<ChurchEvent>;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateServiceEvents";

    async fn execute(&mut self, ctx: &FlockContext) -> Result<Self::Response, Self::Error> {
        let service = ctx
            .repos
            .services
            .find(&self.service_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.service_id.clone()))?;
        if service.schedules().is_empty() {
            return Err(UseCaseError::NoSchedules);
        }

        let window_start = self
            .start_date
            .as_deref()
            .ok_or(UseCaseError::MissingStartDate)
            .and_then(parse_date)?;
        let window_end = self.end_date.as_deref().map(parse_date).transpose()?;
        if let Some(occurrences) = self.occurrences {
            if occurrences < 1 || occurrences > MAX_RECURRENCE_COUNT as usize {
                return Err(UseCaseError::InvalidOccurrences);
            }
        }

        let events = service.generate_events(
            window_start,
            window_end,
            self.occurrences,
            &ctx.config.recurrence_bounds,
            ctx.sys.get_timestamp_millis(),
        );

        ctx.repos
            .events
            .insert_many(&events)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        info!(
            "Generated {} events from service: {}",
            events.len(),
            service.id
        );

        Ok(events)
    }
}

impl PermissionBoundary for CreateServiceEventsUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::CreateEvent]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::prelude::*;
    use flock_domain::{Service, ServiceSchedule, TimeOfDay};

    fn schedule(day_of_week: u32, start: &str, end: &str) -> ServiceSchedule {
        ServiceSchedule::new(
            day_of_week,
            start.parse::<TimeOfDay>().unwrap(),
            end.parse::<TimeOfDay>().unwrap(),
        )
    }

    async fn insert_service(ctx: &FlockContext, schedules: Vec<ServiceSchedule>) -> Service {
        let mut service = Service::new(ID::new(), "Sunday worship".into(), chrono_tz::UTC, 0);
        service.set_schedules(schedules).unwrap();
        ctx.repos.services.insert(&service).await.unwrap();
        service
    }

    fn usecase(service_id: &ID, occurrences: Option<usize>) -> CreateServiceEventsUseCase {
        CreateServiceEventsUseCase {
            service_id: service_id.clone(),
            start_date: Some("2024-01-01".into()),
            end_date: None,
            occurrences,
        }
    }

    #[actix_web::main]
    #[test]
    async fn one_occurrence_covers_every_slot_of_the_day() {
        let ctx = FlockContext::create_inmemory();
        let service = insert_service(
            &ctx,
            vec![schedule(0, "09:00", "10:00"), schedule(0, "11:00", "12:00")],
        )
        .await;

        let events = usecase(&service.id, Some(1)).execute(&ctx).await.unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0].start_date,
            Utc.with_ymd_and_hms(2024, 1, 7, 9, 0, 0).unwrap()
        );
        assert_eq!(
            events[1].start_date,
            Utc.with_ymd_and_hms(2024, 1, 7, 11, 0, 0).unwrap()
        );
        for event in &events {
            assert_eq!(event.service_id, Some(service.id.clone()));
            assert!(ctx.repos.events.find(&event.id).await.is_some());
        }
    }

    #[actix_web::main]
    #[test]
    async fn respects_the_window_end() {
        let ctx = FlockContext::create_inmemory();
        let service = insert_service(&ctx, vec![schedule(0, "10:00", "11:30")]).await;

        let mut usecase = usecase(&service.id, None);
        usecase.end_date = Some("2024-01-31".into());
        let events = usecase.execute(&ctx).await.unwrap();

        // Sundays 7, 14, 21 and 28
        assert_eq!(events.len(), 4);
    }

    #[actix_web::main]
    #[test]
    async fn rejects_invalid_requests() {
        let ctx = FlockContext::create_inmemory();
        let empty = insert_service(&ctx, Vec::new()).await;
        assert_eq!(
            usecase(&empty.id, None).execute(&ctx).await.unwrap_err(),
            UseCaseError::NoSchedules
        );

        let service = insert_service(&ctx, vec![schedule(0, "10:00", "11:00")]).await;
        assert_eq!(
            usecase(&service.id, Some(0)).execute(&ctx).await.unwrap_err(),
            UseCaseError::InvalidOccurrences
        );

        let too_many = Some(MAX_RECURRENCE_COUNT as usize + 1);
        assert_eq!(
            usecase(&service.id, too_many).execute(&ctx).await.unwrap_err(),
            UseCaseError::InvalidOccurrences
        );

        let mut missing_start = usecase(&service.id, None);
        missing_start.start_date = None;
        assert_eq!(
            missing_start.execute(&ctx).await.unwrap_err(),
            UseCaseError::MissingStartDate
        );

        let unknown = ID::new();
        assert_eq!(
            usecase(&unknown, None).execute(&ctx).await.unwrap_err(),
            UseCaseError::NotFound(unknown)
        );
    }
}
