use flock_domain::{Church, Tz, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChurchDTO {
    pub id: ID,
    pub name: String,
    pub address: Option<String>,
    pub timezone: Tz,
    pub created: i64,
    pub updated: i64,
}

impl ChurchDTO {
    pub fn new(church: Church) -> Self {
        Self {
            id: church.id,
            name: church.name,
            address: church.address,
            timezone: church.timezone,
            created: church.created,
            updated: church.updated,
        }
    }
}
