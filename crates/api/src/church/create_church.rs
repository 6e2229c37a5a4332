use crate::error::FlockError;
use crate::shared::{
    auth::{protect_route, Permission},
    usecase::{execute_with_policy, PermissionBoundary, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono_tz::{Tz, UTC};
use flock_api_structs::create_church::*;
use flock_domain::Church;
use flock_infra::FlockContext;

pub async fn create_church_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<FlockContext>,
) -> Result<HttpResponse, FlockError> {
    let (_user, policy) = protect_route(&http_req, &ctx)?;

    let body = body.0;
    let usecase = CreateChurchUseCase {
        name: body.name,
        address: body.address,
        timezone: body.timezone.unwrap_or(UTC),
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|church| HttpResponse::Created().json(APIResponse::new(church)))
        .map_err(FlockError::from)
}

#[derive(Debug)]
pub struct CreateChurchUseCase {
    pub name: String,
    pub address: Option<String>,
    pub timezone: Tz,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    EmptyName,
    StorageError,
}

impl From<UseCaseError> for FlockError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmptyName => Self::BadClientData("The church name cannot be empty".into()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateChurchUseCase {
    type Response = Church;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateChurch";

    async fn execute(&mut self, ctx: &FlockContext) -> Result<Self::Response, Self::Error> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(UseCaseError::EmptyName);
        }

        let mut church = Church::new(name.to_string(), ctx.sys.get_timestamp_millis());
        church.address = self.address.clone();
        church.timezone = self.timezone;

        ctx.repos
            .churches
            .insert(&church)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(church)
    }
}

impl PermissionBoundary for CreateChurchUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::CreateChurch]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use flock_infra::StaticTimeSys;
    use std::sync::Arc;

    #[actix_web::main]
    #[test]
    async fn creates_church() {
        let mut ctx = FlockContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys(1000));

        let mut usecase = CreateChurchUseCase {
            name: " Grace Chapel ".into(),
            address: Some("Church street 1".into()),
            timezone: chrono_tz::Europe::Oslo,
        };
        let church = usecase.execute(&ctx).await.unwrap();

        assert_eq!(church.name, "Grace Chapel");
        assert_eq!(church.created, 1000);
        assert_eq!(church.timezone, chrono_tz::Europe::Oslo);
        assert!(ctx.repos.churches.find(&church.id).await.is_some());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_empty_name() {
        let ctx = FlockContext::create_inmemory();

        let mut usecase = CreateChurchUseCase {
            name: "  ".into(),
            address: None,
            timezone: UTC,
        };
        let res = usecase.execute(&ctx).await;

        assert_eq!(res.unwrap_err(), UseCaseError::EmptyName);
    }
}
