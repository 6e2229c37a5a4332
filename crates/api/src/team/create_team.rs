use crate::error::FlockError;
use crate::shared::{
    auth::{protect_route, Permission},
    usecase::{execute_with_policy, PermissionBoundary, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use flock_api_structs::create_team::*;
use flock_domain::{Team, ID};
use flock_infra::FlockContext;

pub async fn create_team_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<FlockContext>,
) -> Result<HttpResponse, FlockError> {
    let (_user, policy) = protect_route(&http_req, &ctx)?;

    let body = body.0;
    let usecase = CreateTeamUseCase {
        church_id: path.church_id.clone(),
        name: body.name,
        description: body.description,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|team| HttpResponse::Created().json(APIResponse::new(team)))
        .map_err(FlockError::from)
}

#[derive(Debug)]
pub struct CreateTeamUseCase {
    pub church_id: ID,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    ChurchNotFound(ID),
    EmptyName,
    StorageError,
}

impl From<UseCaseError> for FlockError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::ChurchNotFound(id) => {
                Self::NotFound(format!("The church with id: {}, was not found.", id))
            }
            UseCaseError::EmptyName => Self::BadClientData("The team name cannot be empty".into()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateTeamUseCase {
    type Response = Team;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateTeam";

    async fn execute(&mut self, ctx: &FlockContext) -> Result<Self::Response, Self::Error> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(UseCaseError::EmptyName);
        }
        if ctx.repos.churches.find(&self.church_id).await.is_none() {
            return Err(UseCaseError::ChurchNotFound(self.church_id.clone()));
        }

        let mut team = Team::new(
            self.church_id.clone(),
            name.to_string(),
            ctx.sys.get_timestamp_millis(),
        );
        team.description = self.description.clone();

        ctx.repos
            .teams
            .insert(&team)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(team)
    }
}

impl PermissionBoundary for CreateTeamUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::CreateTeam]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use flock_domain::Church;

    #[actix_web::main]
    #[test]
    async fn creates_team_in_existing_church() {
        let ctx = FlockContext::create_inmemory();
        let church = Church::new("Grace Chapel".into(), 0);
        ctx.repos.churches.insert(&church).await.unwrap();

        let mut usecase = CreateTeamUseCase {
            church_id: church.id.clone(),
            name: "Hospitality".into(),
            description: None,
        };
        let team = usecase.execute(&ctx).await.unwrap();
        assert!(team.member_ids.is_empty());
        assert!(ctx.repos.teams.find(&team.id).await.is_some());

        usecase.church_id = ID::new();
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::ChurchNotFound(usecase.church_id.clone())
        );
    }
}
