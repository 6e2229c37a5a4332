use crate::{APIResponse, BaseClient, ID};
use flock_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct TeamClient {
    base: Arc<BaseClient>,
}

pub struct CreateTeamInput {
    pub church_id: ID,
    pub name: String,
    pub description: Option<String>,
}

impl TeamClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateTeamInput) -> APIResponse<create_team::APIResponse> {
        let body = create_team::RequestBody {
            name: input.name,
            description: input.description,
        };
        self.base
            .post(
                body,
                format!("churches/{}/teams", input.church_id),
                StatusCode::CREATED,
            )
            .await
    }

    pub async fn get(&self, team_id: ID) -> APIResponse<get_team::APIResponse> {
        self.base
            .get(format!("teams/{}", team_id), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, team_id: ID) -> APIResponse<delete_team::APIResponse> {
        self.base
            .delete(format!("teams/{}", team_id), StatusCode::OK)
            .await
    }

    pub async fn add_member(
        &self,
        team_id: ID,
        member_id: ID,
    ) -> APIResponse<add_team_member::APIResponse> {
        self.base
            .put(
                (),
                format!("teams/{}/members/{}", team_id, member_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn remove_member(
        &self,
        team_id: ID,
        member_id: ID,
    ) -> APIResponse<remove_team_member::APIResponse> {
        self.base
            .delete(
                format!("teams/{}/members/{}", team_id, member_id),
                StatusCode::OK,
            )
            .await
    }
}
