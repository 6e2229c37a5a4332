use crate::error::FlockError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use flock_api_structs::get_service::*;
use flock_domain::{Service, ID};
use flock_infra::FlockContext;

pub async fn get_service_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<FlockContext>,
) -> Result<HttpResponse, FlockError> {
    protect_route(&http_req, &ctx)?;

    let usecase = GetServiceUseCase {
        service_id: path.service_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|service| HttpResponse::Ok().json(APIResponse::new(service)))
        .map_err(FlockError::from)
}

#[derive(Debug)]
pub struct GetServiceUseCase {
    pub service_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for FlockError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The service with id: {}, was not found.", id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetServiceUseCase {
    type Response = Service;

    type Error = UseCaseError;

    const NAME: &'static str = "GetService";

    async fn execute(&mut self, ctx: &FlockContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .services
            .find(&self.service_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.service_id.clone()))
    }
}
