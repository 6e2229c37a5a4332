use crate::error::FlockError;
use crate::shared::{
    auth::{protect_route, Permission},
    usecase::{execute_with_policy, PermissionBoundary, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use flock_api_structs::delete_team::*;
use flock_domain::{Team, ID};
use flock_infra::FlockContext;

pub async fn delete_team_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<FlockContext>,
) -> Result<HttpResponse, FlockError> {
    let (_user, policy) = protect_route(&http_req, &ctx)?;

    let usecase = DeleteTeamUseCase {
        team_id: path.team_id.clone(),
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|team| HttpResponse::Ok().json(APIResponse::new(team)))
        .map_err(FlockError::from)
}

#[derive(Debug)]
pub struct DeleteTeamUseCase {
    pub team_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for FlockError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The team with id: {}, was not found.", id))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteTeamUseCase {
    type Response = Team;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteTeam";

    async fn execute(&mut self, ctx: &FlockContext) -> Result<Self::Response, Self::Error> {
        let team = ctx
            .repos
            .teams
            .delete(&self.team_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.team_id.clone()))?;

        // Events keep running without the team
        ctx.repos
            .events
            .remove_team(&team.id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(team)
    }
}

impl PermissionBoundary for DeleteTeamUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::DeleteTeam]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::prelude::*;
    use flock_domain::ChurchEvent;

    #[actix_web::main]
    #[test]
    async fn deletes_team_and_unassigns_events() {
        let ctx = FlockContext::create_inmemory();
        let church_id = ID::new();
        let team = Team::new(church_id.clone(), "Worship".into(), 0);
        ctx.repos.teams.insert(&team).await.unwrap();
        let start = Utc.with_ymd_and_hms(2024, 1, 7, 10, 0, 0).unwrap();
        let mut event = ChurchEvent::new(church_id, "Service".into(), start, start, 0);
        event.team_ids.push(team.id.clone());
        ctx.repos.events.insert(&event).await.unwrap();

        let mut usecase = DeleteTeamUseCase {
            team_id: team.id.clone(),
        };
        assert!(usecase.execute(&ctx).await.is_ok());

        assert!(ctx.repos.teams.find(&team.id).await.is_none());
        let event = ctx.repos.events.find(&event.id).await.unwrap();
        assert!(event.team_ids.is_empty());
    }
}
