use crate::error::FlockError;
use crate::shared::{
    auth::{protect_route, Permission},
    usecase::{execute_with_policy, PermissionBoundary, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use flock_api_structs::delete_church::*;
use flock_domain::{Church, ID};
use flock_infra::FlockContext;
use tracing::info;

pub async fn delete_church_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<FlockContext>,
) -> Result<HttpResponse, FlockError> {
    let (_user, policy) = protect_route(&http_req, &ctx)?;

    let usecase = DeleteChurchUseCase {
        church_id: path.church_id.clone(),
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|church| HttpResponse::Ok().json(APIResponse::new(church)))
        .map_err(FlockError::from)
}

/// Deletes the church together with its members, teams, events and services
#[derive(Debug)]
pub struct DeleteChurchUseCase {
    pub church_id: ID,
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
                Self::NotFound(format!("The church with id: {}, was not found.", id))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteChurchUseCase {
    type Response = Church;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteChurch";

    async fn execute(&mut self, ctx: &FlockContext) -> Result<Self::Response, Self::Error> {
        if ctx.repos.churches.find(&self.church_id).await.is_none() {
            return Err(UseCaseError::NotFound(self.church_id.clone()));
        }

        let repos = &ctx.repos;
        let members = repos
            .members
            .delete_by_church(&self.church_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        let teams = repos
            .teams
            .delete_by_church(&self.church_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        let events = repos
            .events
            .delete_by_church(&self.church_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        let services = repos
            .services
            .delete_by_church(&self.church_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        info!(
            members = members.deleted_count,
            teams = teams.deleted_count,
            events = events.deleted_count,
            services = services.deleted_count,
            "Deleted church content"
        );

        repos
            .churches
            .delete(&self.church_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.church_id.clone()))
    }
}

impl PermissionBoundary for DeleteChurchUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::DeleteChurch]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::prelude::*;
    use flock_domain::{ChurchEvent, Member, Service, Team};

    #[actix_web::main]
    #[test]
    async fn deletes_church_with_content() {
        let ctx = FlockContext::create_inmemory();
        let church = Church::new("Grace Chapel".into(), 0);
        ctx.repos.churches.insert(&church).await.unwrap();
        let member = Member::new(church.id.clone(), "Ruth".into(), "Moab".into(), 0);
        ctx.repos.members.insert(&member).await.unwrap();
        let team = Team::new(church.id.clone(), "Worship".into(), 0);
        ctx.repos.teams.insert(&team).await.unwrap();
        let service = Service::new(church.id.clone(), "Sunday".into(), church.timezone, 0);
        ctx.repos.services.insert(&service).await.unwrap();
        let start = Utc.with_ymd_and_hms(2024, 1, 7, 10, 0, 0).unwrap();
        let event = ChurchEvent::new(church.id.clone(), "Picnic".into(), start, start, 0);
        ctx.repos.events.insert(&event).await.unwrap();

        let other_church = Church::new("Hope Church".into(), 0);
        ctx.repos.churches.insert(&other_church).await.unwrap();
        let other_member = Member::new(other_church.id.clone(), "Lydia".into(), "T".into(), 0);
        ctx.repos.members.insert(&other_member).await.unwrap();

        let mut usecase = DeleteChurchUseCase {
            church_id: church.id.clone(),
        };
        assert!(usecase.execute(&ctx).await.is_ok());

        assert!(ctx.repos.churches.find(&church.id).await.is_none());
        assert!(ctx.repos.members.find(&member.id).await.is_none());
        assert!(ctx.repos.teams.find(&team.id).await.is_none());
        assert!(ctx.repos.services.find(&service.id).await.is_none());
        assert!(ctx.repos.events.find(&event.id).await.is_none());
        assert!(ctx.repos.churches.find(&other_church.id).await.is_some());
        assert!(ctx.repos.members.find(&other_member.id).await.is_some());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_church() {
        let ctx = FlockContext::create_inmemory();
        let church_id = ID::new();

        let mut usecase = DeleteChurchUseCase {
            church_id: church_id.clone(),
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::NotFound(church_id)
        );
    }
}
