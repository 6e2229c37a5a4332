use crate::dtos::MemberDTO;
use flock_domain::{Member, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub member: MemberDTO,
}

impl MemberResponse {
    pub fn new(member: Member) -> Self {
        Self {
            member: MemberDTO::new(member),
        }
    }
}

pub mod create_member {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub church_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub first_name: String,
        pub last_name: String,
        #[serde(default)]
        pub email: Option<String>,
        #[serde(default)]
        pub phone: Option<String>,
    }

    pub type APIResponse = MemberResponse;
}

pub mod get_member {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub member_id: ID,
    }

    pub type APIResponse = MemberResponse;
}

pub mod delete_member {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub member_id: ID,
    }

    pub type APIResponse = MemberResponse;
}

pub mod get_church_members {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub church_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub members: Vec<MemberDTO>,
    }

    impl APIResponse {
        pub fn new(members: Vec<Member>) -> Self {
            Self {
                members: members.into_iter().map(MemberDTO::new).collect(),
            }
        }
    }
}
