use crate::{APIResponse, BaseClient, Tz, ID};
use flock_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ChurchClient {
    base: Arc<BaseClient>,
}

pub struct CreateChurchInput {
    pub name: String,
    pub address: Option<String>,
    pub timezone: Option<Tz>,
}

pub struct UpdateChurchInput {
    pub church_id: ID,
    pub name: Option<String>,
    pub address: Option<String>,
    pub timezone: Option<Tz>,
}

impl ChurchClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateChurchInput) -> APIResponse<create_church::APIResponse> {
        let body = create_church::RequestBody {
            name: input.name,
            address: input.address,
            timezone: input.timezone,
        };
        self.base
            .post(body, "churches".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get(&self, church_id: ID) -> APIResponse<get_church::APIResponse> {
        self.base
            .get(format!("churches/{}", church_id), StatusCode::OK)
            .await
    }

    pub async fn update(&self, input: UpdateChurchInput) -> APIResponse<update_church::APIResponse> {
        let body = update_church::RequestBody {
            name: input.name,
            address: input.address,
            timezone: input.timezone,
        };
        self.base
            .put(
                body,
                format!("churches/{}", input.church_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, church_id: ID) -> APIResponse<delete_church::APIResponse> {
        self.base
            .delete(format!("churches/{}", church_id), StatusCode::OK)
            .await
    }
}
