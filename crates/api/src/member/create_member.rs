use crate::error::FlockError;
use crate::shared::{
    auth::{protect_route, Permission},
    usecase::{execute_with_policy, PermissionBoundary, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use flock_api_structs::create_member::*;
use flock_domain::{Member, ID};
use flock_infra::FlockContext;

pub async fn create_member_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<FlockContext>,
) -> Result<HttpResponse, FlockError> {
    let (_user, policy) = protect_route(&http_req, &ctx)?;

    let body = body.0;
    let usecase = CreateMemberUseCase {
        church_id: path.church_id.clone(),
        first_name: body.first_name,
        last_name: body.last_name,
        email: body.email,
        phone: body.phone,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|member| HttpResponse::Created().json(APIResponse::new(member)))
        .map_err(FlockError::from)
}

#[derive(Debug)]
pub struct CreateMemberUseCase {
    pub church_id: ID,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
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
            UseCaseError::EmptyName => {
                Self::BadClientData("Both first and last name must be given".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateMemberUseCase {
    type Response = Member;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateMember";

    async fn execute(&mut self, ctx: &FlockContext) -> Result<Self::Response, Self::Error> {
        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        if first_name.is_empty() || last_name.is_empty() {
            return Err(UseCaseError::EmptyName);
        }
        if ctx.repos.churches.find(&self.church_id).await.is_none() {
            return Err(UseCaseError::ChurchNotFound(self.church_id.clone()));
        }

        let mut member = Member::new(
            self.church_id.clone(),
            first_name.to_string(),
            last_name.to_string(),
            ctx.sys.get_timestamp_millis(),
        );
        member.email = self.email.clone();
        member.phone = self.phone.clone();

        ctx.repos
            .members
            .insert(&member)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(member)
    }
}

impl PermissionBoundary for CreateMemberUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::CreateMember]
    }
}
