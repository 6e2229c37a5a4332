use crate::error::FlockError;
use crate::shared::{
    auth::{protect_route, Permission},
    usecase::{execute_with_policy, PermissionBoundary, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use flock_api_structs::remove_team_member::*;
use flock_domain::{Team, ID};
use flock_infra::FlockContext;

pub async fn remove_team_member_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<FlockContext>,
) -> Result<HttpResponse, FlockError> {
    let (_user, policy) = protect_route(&http_req, &ctx)?;

    let path = path.into_inner();
    let usecase = RemoveTeamMemberUseCase {
        team_id: path.team_id,
        member_id: path.member_id,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|team| HttpResponse::Ok().json(APIResponse::new(team)))
        .map_err(FlockError::from)
}

#[derive(Debug)]
pub struct RemoveTeamMemberUseCase {
    pub team_id: ID,
    pub member_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    TeamNotFound(ID),
    NotOnTeam(ID),
    StorageError,
}

impl From<UseCaseError> for FlockError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::TeamNotFound(id) => {
                Self::NotFound(format!("The team with id: {}, was not found.", id))
            }
            UseCaseError::NotOnTeam(id) => Self::NotFound(format!(
                "The member with id: {}, is not on the team.",
                id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for RemoveTeamMemberUseCase {
    type Response = Team;

    type Error = UseCaseError;

    const NAME: &'static str = "RemoveTeamMember";

    async fn execute(&mut self, ctx: &FlockContext) -> Result<Self::Response, Self::Error> {
        let mut team = ctx
            .repos
            .teams
            .find(&self.team_id)
            .await
            .ok_or_else(|| UseCaseError::TeamNotFound(self.team_id.clone()))?;

        if !team.remove_member(&self.member_id) {
            return Err(UseCaseError::NotOnTeam(self.member_id.clone()));
        }

        ctx.repos
            .teams
            .save(&team)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(team)
    }
}

impl PermissionBoundary for RemoveTeamMemberUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::UpdateTeam]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[actix_web::main]
    #[test]
    async fn removes_member() {
        let ctx = FlockContext::create_inmemory();
        let member_id = ID::new();
        let mut team = Team::new(ID::new(), "Worship".into(), 0);
        team.add_member(member_id.clone());
        ctx.repos.teams.insert(&team).await.unwrap();

        let mut usecase = RemoveTeamMemberUseCase {
            team_id: team.id.clone(),
            member_id: member_id.clone(),
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert!(res.member_ids.is_empty());

        let res = usecase.execute(&ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::NotOnTeam(member_id));
    }
}
