use crate::error::FlockError;
use crate::shared::{
    auth::{protect_route, Permission},
    usecase::{execute_with_policy, PermissionBoundary, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use flock_api_structs::add_team_member::*;
use flock_domain::{Team, ID};
use flock_infra::FlockContext;

pub async fn add_team_member_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<FlockContext>,
) -> Result<HttpResponse, FlockError> {
    let (_user, policy) = protect_route(&http_req, &ctx)?;

    let path = path.into_inner();
    let usecase = AddTeamMemberUseCase {
        team_id: path.team_id,
        member_id: path.member_id,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|team| HttpResponse::Ok().json(APIResponse::new(team)))
        .map_err(FlockError::from)
}

#[derive(Debug)]
pub struct AddTeamMemberUseCase {
    pub team_id: ID,
    pub member_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    TeamNotFound(ID),
    MemberNotFound(ID),
    AlreadyOnTeam(ID),
    StorageError,
}

impl From<UseCaseError> for FlockError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::TeamNotFound(id) => {
                Self::NotFound(format!("The team with id: {}, was not found.", id))
            }
            UseCaseError::MemberNotFound(id) => Self::NotFound(format!(
                "The member with id: {}, was not found in the church of the team.",
                id
            )),
            UseCaseError::AlreadyOnTeam(id) => Self::Conflict(format!(
                "The member with id: {}, is already on the team.",
                id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for AddTeamMemberUseCase {
    type Response = Team;

    type Error = UseCaseError;

    const NAME: &'static str = "AddTeamMember";

    async fn execute(&mut self, ctx: &FlockContext) -> Result<Self::Response, Self::Error> {
        let mut team = ctx
            .repos
            .teams
            .find(&self.team_id)
            .await
            .ok_or_else(|| UseCaseError::TeamNotFound(self.team_id.clone()))?;

        match ctx.repos.members.find(&self.member_id).await {
            Some(member) if member.church_id == team.church_id => (),
            _ => return Err(UseCaseError::MemberNotFound(self.member_id.clone())),
        }

        if !team.add_member(self.member_id.clone()) {
            return Err(UseCaseError::AlreadyOnTeam(self.member_id.clone()));
        }

        ctx.repos
            .teams
            .save(&team)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(team)
    }
}

impl PermissionBoundary for AddTeamMemberUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::UpdateTeam]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use flock_domain::Member;

    #[actix_web::main]
    #[test]
    async fn adds_member_once() {
        let ctx = FlockContext::create_inmemory();
        let church_id = ID::new();
        let team = Team::new(church_id.clone(), "Worship".into(), 0);
        ctx.repos.teams.insert(&team).await.unwrap();
        let member = Member::new(church_id, "Miriam".into(), "Levi".into(), 0);
        ctx.repos.members.insert(&member).await.unwrap();

        let mut usecase = AddTeamMemberUseCase {
            team_id: team.id.clone(),
            member_id: member.id.clone(),
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.member_ids, vec![member.id.clone()]);

        let res = usecase.execute(&ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::AlreadyOnTeam(member.id));
    }

    #[actix_web::main]
    #[test]
    async fn rejects_member_of_other_church() {
        let ctx = FlockContext::create_inmemory();
        let team = Team::new(ID::new(), "Worship".into(), 0);
        ctx.repos.teams.insert(&team).await.unwrap();
        let member = Member::new(ID::new(), "Miriam".into(), "Levi".into(), 0);
        ctx.repos.members.insert(&member).await.unwrap();

        let mut usecase = AddTeamMemberUseCase {
            team_id: team.id.clone(),
            member_id: member.id.clone(),
        };
        let res = usecase.execute(&ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::MemberNotFound(member.id));
    }
}
