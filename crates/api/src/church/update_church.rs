use crate::error::FlockError;
use crate::shared::{
    auth::{protect_route, Permission},
    usecase::{execute_with_policy, PermissionBoundary, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono_tz::Tz;
use flock_api_structs::update_church::*;
use flock_domain::{Church, ID};
use flock_infra::FlockContext;

pub async fn update_church_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<FlockContext>,
) -> Result<HttpResponse, FlockError> {
    let (_user, policy) = protect_route(&http_req, &ctx)?;

    let body = body.0;
    let usecase = UpdateChurchUseCase {
        church_id: path.church_id.clone(),
        name: body.name,
        address: body.address,
        timezone: body.timezone,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|church| HttpResponse::Ok().json(APIResponse::new(church)))
        .map_err(FlockError::from)
}

#[derive(Debug)]
pub struct UpdateChurchUseCase {
    pub church_id: ID,
    pub name: Option<String>,
    pub address: Option<String>,
    pub timezone: Option<Tz>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    EmptyName,
    StorageError,
}

impl From<UseCaseError> for FlockError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The church with id: {}, was not found.", id))
            }
            UseCaseError::EmptyName => Self::BadClientData("The church name cannot be empty".into()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateChurchUseCase {
    type Response = Church;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateChurch";

    async fn execute(&mut self, ctx: &FlockContext) -> Result<Self::Response, Self::Error> {
        let mut church = ctx
            .repos
            .churches
            .find(&self.church_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.church_id.clone()))?;

        if let Some(name) = &self.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(UseCaseError::EmptyName);
            }
            church.name = name.to_string();
        }
        if let Some(address) = &self.address {
            church.address = Some(address.clone());
        }
        if let Some(timezone) = self.timezone {
            church.timezone = timezone;
        }
        church.updated = ctx.sys.get_timestamp_millis();

        ctx.repos
            .churches
            .save(&church)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(church)
    }
}

impl PermissionBoundary for UpdateChurchUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::UpdateChurch]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[actix_web::main]
    #[test]
    async fn updates_given_fields() {
        let ctx = FlockContext::create_inmemory();
        let church = Church::new("Grace Chapel".into(), 0);
        ctx.repos.churches.insert(&church).await.unwrap();

        let mut usecase = UpdateChurchUseCase {
            church_id: church.id.clone(),
            name: None,
            address: Some("Church street 2".into()),
            timezone: Some(chrono_tz::America::New_York),
        };
        let res = usecase.execute(&ctx).await.unwrap();

        assert_eq!(res.name, "Grace Chapel");
        assert_eq!(res.address, Some("Church street 2".into()));
        let stored = ctx.repos.churches.find(&church.id).await.unwrap();
        assert_eq!(stored.timezone, chrono_tz::America::New_York);
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_church() {
        let ctx = FlockContext::create_inmemory();

        let church_id = ID::new();
        let mut usecase = UpdateChurchUseCase {
            church_id: church_id.clone(),
            name: Some("Other".into()),
            address: None,
            timezone: None,
        };
        let res = usecase.execute(&ctx).await;

        assert_eq!(res.unwrap_err(), UseCaseError::NotFound(church_id));
    }
}
