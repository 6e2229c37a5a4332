use flock_domain::{Team, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TeamDTO {
    pub id: ID,
    pub church_id: ID,
    pub name: String,
    pub description: Option<String>,
    pub member_ids: Vec<ID>,
    pub created: i64,
}

impl TeamDTO {
    pub fn new(team: Team) -> Self {
        Self {
            id: team.id,
            church_id: team.church_id,
            name: team.name,
            description: team.description,
            member_ids: team.member_ids,
            created: team.created,
        }
    }
}
