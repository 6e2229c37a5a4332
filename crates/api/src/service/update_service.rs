use crate::error::FlockError;
use crate::shared::{
    auth::{protect_route, Permission},
    usecase::{execute_with_policy, PermissionBoundary, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use flock_api_structs::update_service::*;
use flock_domain::{Service, ServiceSchedule, ServiceScheduleError, Tz, ID};
use flock_infra::FlockContext;

pub async fn update_service_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<FlockContext>,
) -> Result<HttpResponse, FlockError> {
    let (_user, policy) = protect_route(&http_req, &ctx)?;

    let body = body.0;
    let usecase = UpdateServiceUseCase {
        service_id: path.service_id.clone(),
        name: body.name,
        description: body.description,
        location: body.location,
        tags: body.tags,
        timezone: body.timezone,
        schedules: body.schedules,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|service| HttpResponse::Ok().json(APIResponse::new(service)))
        .map_err(FlockError::from)
}

#[derive(Debug, Default)]
pub struct UpdateServiceUseCase {
    pub service_id: ID,
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub tags: Option<Vec<String>>,
    pub timezone: Option<Tz>,
    pub schedules: Option<Vec<ServiceSchedule>>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    EmptyName,
    InvalidSchedules(ServiceScheduleError),
    StorageError,
}

impl From<UseCaseError> for FlockError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The service with id: {}, was not found.", id))
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
impl UseCase for UpdateServiceUseCase {
    type Response = Service;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateService";

    async fn execute(&mut self, ctx: &FlockContext) -> Result<Self::Response, Self::Error> {
        let mut service = ctx
            .repos
            .services
            .find(&self.service_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.service_id.clone()))?;

        if let Some(name) = &self.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(UseCaseError::EmptyName);
            }
            service.name = name.to_string();
        }
        if let Some(schedules) = &self.schedules {
            service
                .set_schedules(schedules.clone())
                .map_err(UseCaseError::InvalidSchedules)?;
        }
        if let Some(description) = &self.description {
            service.description = Some(description.clone());
        }
        if let Some(location) = &self.location {
            service.location = Some(location.clone());
        }
        if let Some(tags) = &self.tags {
            service.tags = tags.clone();
        }
        if let Some(timezone) = self.timezone {
            service.timezone = timezone;
        }
        service.updated = ctx.sys.get_timestamp_millis();

        ctx.repos
            .services
            .save(&service)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(service)
    }
}

impl PermissionBoundary for UpdateServiceUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::UpdateService]
    }
}
