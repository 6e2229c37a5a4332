use crate::error::FlockError;
use crate::shared::{
    auth::{protect_route, Permission},
    usecase::{execute_with_policy, PermissionBoundary, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use flock_api_structs::delete_service::*;
use flock_domain::{Service, ID};
use flock_infra::FlockContext;

pub async fn delete_service_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<FlockContext>,
) -> Result<HttpResponse, FlockError> {
    let (_user, policy) = protect_route(&http_req, &ctx)?;

    let usecase = DeleteServiceUseCase {
        service_id: path.service_id.clone(),
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|service| HttpResponse::Ok().json(APIResponse::new(service)))
        .map_err(FlockError::from)
}

/// Deletes the service. Events already generated from it are kept.
#[derive(Debug)]
pub struct DeleteServiceUseCase {
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
impl UseCase for DeleteServiceUseCase {
    type Response = Service;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteService";

    async fn execute(&mut self, ctx: &FlockContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .services
            .delete(&self.service_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.service_id.clone()))
    }
}

impl PermissionBoundary for DeleteServiceUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::DeleteService]
    }
}
