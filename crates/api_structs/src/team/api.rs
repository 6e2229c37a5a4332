use crate::dtos::TeamDTO;
use flock_domain::{Team, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    pub team: TeamDTO,
}

impl TeamResponse {
    pub fn new(team: Team) -> Self {
        Self {
            team: TeamDTO::new(team),
        }
    }
}

pub mod create_team {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub church_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        #[serde(default)]
        pub description: Option<String>,
    }

    pub type APIResponse = TeamResponse;
}

pub mod get_team {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub team_id: ID,
    }

    pub type APIResponse = TeamResponse;
}

pub mod delete_team {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub team_id: ID,
    }

    pub type APIResponse = TeamResponse;
}

pub mod add_team_member {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub team_id: ID,
        pub member_id: ID,
    }

    pub type APIResponse = TeamResponse;
}

pub mod remove_team_member {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub team_id: ID,
        pub member_id: ID,
    }

    pub type APIResponse = TeamResponse;
}
