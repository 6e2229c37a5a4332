use crate::error::FlockError;
use crate::shared::{
    auth::{protect_route, Permission},
    usecase::{execute_with_policy, PermissionBoundary, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use flock_api_structs::delete_member::*;
use flock_domain::{Member, ID};
use flock_infra::FlockContext;

pub async fn delete_member_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<FlockContext>,
) -> Result<HttpResponse, FlockError> {
    let (_user, policy) = protect_route(&http_req, &ctx)?;

    let usecase = DeleteMemberUseCase {
        member_id: path.member_id.clone(),
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|member| HttpResponse::Ok().json(APIResponse::new(member)))
        .map_err(FlockError::from)
}

/// Deletes the member and removes it from teams and event attendee lists
#[derive(Debug)]
pub struct DeleteMemberUseCase {
    pub member_id: ID,
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
                Self::NotFound(format!("The member with id: {}, was not found.", id))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteMemberUseCase {
    type Response = Member;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteMember";

    async fn execute(&mut self, ctx: &FlockContext) -> Result<Self::Response, Self::Error> {
        let member = ctx
            .repos
            .members
            .delete(&self.member_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.member_id.clone()))?;

        ctx.repos
            .teams
            .remove_member(&member.id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        ctx.repos
            .events
            .remove_attendee(&member.id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(member)
    }
}

impl PermissionBoundary for DeleteMemberUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::DeleteMember]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::prelude::*;
    use flock_domain::{ChurchEvent, Team};

    #[actix_web::main]
    #[test]
    async fn removes_member_from_teams_and_events() {
        let ctx = FlockContext::create_inmemory();
        let church_id = ID::new();
        let member = Member::new(church_id.clone(), "Ruth".into(), "Moab".into(), 0);
        ctx.repos.members.insert(&member).await.unwrap();
        let mut team = Team::new(church_id.clone(), "Worship".into(), 0);
        team.add_member(member.id.clone());
        ctx.repos.teams.insert(&team).await.unwrap();
        let start = Utc.with_ymd_and_hms(2024, 1, 7, 10, 0, 0).unwrap();
        let mut event = ChurchEvent::new(church_id, "Picnic".into(), start, start, 0);
        event.attendee_ids.push(member.id.clone());
        ctx.repos.events.insert(&event).await.unwrap();

        let mut usecase = DeleteMemberUseCase {
            member_id: member.id.clone(),
        };
        assert!(usecase.execute(&ctx).await.is_ok());

        assert!(ctx.repos.members.find(&member.id).await.is_none());
        let team = ctx.repos.teams.find(&team.id).await.unwrap();
        assert!(team.member_ids.is_empty());
        let event = ctx.repos.events.find(&event.id).await.unwrap();
        assert!(event.attendee_ids.is_empty());

        let res = usecase.execute(&ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::NotFound(member.id));
    }
}
