use crate::{APIResponse, BaseClient, ID};
use flock_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct MemberClient {
    base: Arc<BaseClient>,
}

pub struct CreateMemberInput {
    pub church_id: ID,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl MemberClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateMemberInput) -> APIResponse<create_member::APIResponse> {
        let body = create_member::RequestBody {
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
        };
        self.base
            .post(
                body,
                format!("churches/{}/members", input.church_id),
                StatusCode::CREATED,
            )
            .await
    }

    pub async fn get(&self, member_id: ID) -> APIResponse<get_member::APIResponse> {
        self.base
            .get(format!("members/{}", member_id), StatusCode::OK)
            .await
    }

    pub async fn get_by_church(
        &self,
        church_id: ID,
    ) -> APIResponse<get_church_members::APIResponse> {
        self.base
            .get(format!("churches/{}/members", church_id), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, member_id: ID) -> APIResponse<delete_member::APIResponse> {
        self.base
            .delete(format!("members/{}", member_id), StatusCode::OK)
            .await
    }
}
