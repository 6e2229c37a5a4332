use crate::dtos::ChurchDTO;
use flock_domain::{Church, Tz, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChurchResponse {
    pub church: ChurchDTO,
}

impl ChurchResponse {
    pub fn new(church: Church) -> Self {
        Self {
            church: ChurchDTO::new(church),
        }
    }
}

pub mod create_church {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        #[serde(default)]
        pub address: Option<String>,
        #[serde(default)]
        pub timezone: Option<Tz>,
    }

    pub type APIResponse = ChurchResponse;
}

pub mod get_church {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub church_id: ID,
    }

    pub type APIResponse = ChurchResponse;
}

pub mod update_church {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub church_id: ID,
    }

    #[derive(Serialize, Deserialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub address: Option<String>,
        #[serde(default)]
        pub timezone: Option<Tz>,
    }

    pub type APIResponse = ChurchResponse;
}

pub mod delete_church {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub church_id: ID,
    }

    pub type APIResponse = ChurchResponse;
}
