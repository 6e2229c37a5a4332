use crate::error::FlockError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use flock_api_structs::get_team::*;
use flock_domain::{Team, ID};
use flock_infra::FlockContext;

pub async fn get_team_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<FlockContext>,
) -> Result<HttpResponse, FlockError> {
    protect_route(&http_req, &ctx)?;

    let usecase = GetTeamUseCase {
        team_id: path.team_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|team| HttpResponse::Ok().json(APIResponse::new(team)))
        .map_err(FlockError::from)
}

#[derive(Debug)]
pub struct GetTeamUseCase {
    pub team_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for FlockError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The team with id: {}, was not found.", id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetTeamUseCase {
    type Response = Team;

    type Error = UseCaseError;

    const NAME: &'static str = "GetTeam";

    async fn execute(&mut self, ctx: &FlockContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .teams
            .find(&self.team_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.team_id.clone()))
    }
}
