use crate::shared::entity::{Entity, ID};
use chrono_tz::{Tz, UTC};

#[derive(Debug, Clone)]
pub struct Church {
    pub id: ID,
    pub name: String,
    pub address: Option<String>,
    /// Default timezone for the services of this `Church`
    pub timezone: Tz,
    pub created: i64,
    pub updated: i64,
}

impl Church {
    pub fn new(name: String, created: i64) -> Self {
        Self {
            id: Default::default(),
            name,
            address: None,
            timezone: UTC,
            created,
            updated: created,
        }
    }
}

impl Entity for Church {
    fn id(&self) -> &ID {
        &self.id
    }
}
