use crate::error::FlockError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use flock_api_structs::get_church_members::*;
use flock_domain::{Member, ID};
use flock_infra::FlockContext;

pub async fn get_church_members_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<FlockContext>,
) -> Result<HttpResponse, FlockError> {
    protect_route(&http_req, &ctx)?;

    let usecase = GetChurchMembersUseCase {
        church_id: path.church_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|members| HttpResponse::Ok().json(APIResponse::new(members)))
        .map_err(FlockError::from)
}

/// Lists the members of a church ordered by last and first name
#[derive(Debug)]
pub struct GetChurchMembersUseCase {
    pub church_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    ChurchNotFound(ID),
    StorageError,
}

impl From<UseCaseError> for FlockError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::ChurchNotFound(id) => {
                Self::NotFound(format!("The church with id: {}, was not found.", id))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetChurchMembersUseCase {
    type Response = Vec<Member>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetChurchMembers";

    async fn execute(&mut self, ctx: &FlockContext) -> Result<Self::Response, Self::Error> {
        if ctx.repos.churches.find(&self.church_id).await.is_none() {
            return Err(UseCaseError::ChurchNotFound(self.church_id.clone()));
        }

        let mut members = ctx
            .repos
            .members
            .find_by_church(&self.church_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        members.sort_by(|a, b| {
            (&a.last_name, &a.first_name).cmp(&(&b.last_name, &b.first_name))
        });

        Ok(members)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use flock_domain::Church;

    #[actix_web::main]
    #[test]
    async fn lists_members_by_name() {
        let ctx = FlockContext::create_inmemory();
        let church = Church::new("Grace Chapel".into(), 0);
        ctx.repos.churches.insert(&church).await.unwrap();
        for (first, last) in [("Simeon", "Temple"), ("Anna", "Temple"), ("Ruth", "Moab")] {
            let member = Member::new(church.id.clone(), first.into(), last.into(), 0);
            ctx.repos.members.insert(&member).await.unwrap();
        }

        let mut usecase = GetChurchMembersUseCase {
            church_id: church.id.clone(),
        };
        let members = usecase.execute(&ctx).await.unwrap();

        let names = members.iter().map(|m| m.full_name()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Ruth Moab", "Anna Temple", "Simeon Temple"]);
    }
}
