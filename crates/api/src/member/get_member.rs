use crate::error::FlockError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use flock_api_structs::get_member::*;
use flock_domain::{Member, ID};
use flock_infra::FlockContext;

pub async fn get_member_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<FlockContext>,
) -> Result<HttpResponse, FlockError> {
    protect_route(&http_req, &ctx)?;

    let usecase = GetMemberUseCase {
        member_id: path.member_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|member| HttpResponse::Ok().json(APIResponse::new(member)))
        .map_err(FlockError::from)
}

#[derive(Debug)]
pub struct GetMemberUseCase {
    pub member_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for FlockError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The member with id: {}, was not found.", id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetMemberUseCase {
    type Response = Member;

    type Error = UseCaseError;

    const NAME: &'static str = "GetMember";

    async fn execute(&mut self, ctx: &FlockContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .members
            .find(&self.member_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.member_id.clone()))
    }
}
