use crate::error::FlockError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use flock_api_structs::get_church::*;
use flock_domain::{Church, ID};
use flock_infra::FlockContext;

pub async fn get_church_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<FlockContext>,
) -> Result<HttpResponse, FlockError> {
    protect_route(&http_req, &ctx)?;

    let usecase = GetChurchUseCase {
        church_id: path.church_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|church| HttpResponse::Ok().json(APIResponse::new(church)))
        .map_err(FlockError::from)
}

#[derive(Debug)]
pub struct GetChurchUseCase {
    pub church_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for FlockError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The church with id: {}, was not found.", id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetChurchUseCase {
    type Response = Church;

    type Error = UseCaseError;

    const NAME: &'static str = "GetChurch";

    async fn execute(&mut self, ctx: &FlockContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .churches
            .find(&self.church_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.church_id.clone()))
    }
}
