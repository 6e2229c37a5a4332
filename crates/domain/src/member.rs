use crate::shared::entity::{Entity, ID};

#[derive(Debug, Clone)]
pub struct Member {
    pub id: ID,
    pub church_id: ID,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created: i64,
}

impl Member {
    pub fn new(church_id: ID, first_name: String, last_name: String, created: i64) -> Self {
        Self {
            id: Default::default(),
            church_id,
            first_name,
            last_name,
            email: None,
            phone: None,
            created,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for Member {
    fn id(&self) -> &ID {
        &self.id
    }
}
