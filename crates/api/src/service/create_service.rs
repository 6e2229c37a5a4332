use crate::error::FlockError;
use crate::shared::{
    auth::{protect_route, Permission},
    usecase::{execute_with_policy, PermissionBoundary, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use flock_api_structs::create_service::*;
use flock_domain::{Service, ServiceSchedule, ServiceScheduleError, Tz, ID};
use flock_infra::FlockContext;

pub async fn create_service_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<FlockContext>,
) -> Result<HttpResponse, FlockError> {
    let (_user, policy) = protect_route(&http_req, &ctx)?;

    let body = body.0;
    let usecase = CreateServiceUseCase {
        church_id: path.church_id.clone(),
        name: body.name,
        description: body.description,
        location: body.location,
        tags: body.tags.unwrap_or_default(),
        timezone: body.timezone,
        schedules: body.schedules.unwrap_or_default(),
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|service| HttpResponse::Created().json(APIResponse::new(service)))
        .map_err(FlockError::from)
}

#[derive(Debug)]
pub struct CreateServiceUseCase {
    pub church_id: ID,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub tags: Vec<String>,
    pub timezone: Option<Tz>,
    pub schedules: Vec<ServiceSchedule>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    ChurchNotFound(ID),
    EmptyName,
    InvalidSchedules(ServiceScheduleError),
    StorageError,
}

impl From<UseCaseError> for FlockError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::ChurchNotFound(id) => {
                Self::NotFound(format!("The church with id: {}, was not found.", id))
            }
            UseCaseError::EmptyName => {
                Self::BadClientData("The service name cannot be empty".into())
            }
            UseCaseError::InvalidSchedules(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateServiceUseCase {
    type Response = Service;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateService";

    async fn execute(&mut self, ctx: &FlockContext) -> Result<Self::Response, Self::Error> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(UseCaseError::EmptyName);
        }
        let church = ctx
            .repos
            .churches
            .find(&self.church_id)
            .await
            .ok_or_else(|| UseCaseError::ChurchNotFound(self.church_id.clone()))?;

        let mut service = Service::new(
            church.id,
            name.to_string(),
            self.timezone.unwrap_or(church.timezone),
            ctx.sys.get_timestamp_millis(),
        );
        service
            .set_schedules(self.schedules.clone())
            .map_err(UseCaseError::InvalidSchedules)?;
        service.description = self.description.clone();
        service.location = self.location.clone();
        service.tags = self.tags.clone();

        ctx.repos
            .services
            .insert(&service)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(service)
    }
}

impl PermissionBoundary for CreateServiceUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::CreateService]
    }
}
