use flock_domain::{Member, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MemberDTO {
    pub id: ID,
    pub church_id: ID,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created: i64,
}

impl MemberDTO {
    pub fn new(member: Member) -> Self {
        Self {
            id: member.id,
            church_id: member.church_id,
            first_name: member.first_name,
            last_name: member.last_name,
            email: member.email,
            phone: member.phone,
            created: member.created,
        }
    }
}
