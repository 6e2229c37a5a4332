use crate::shared::entity::{Entity, ID};

/// A group of `Member`s serving together, e.g. worship or hospitality
#[derive(Debug, Clone)]
pub struct Team {
    pub id: ID,
    pub church_id: ID,
    pub name: String,
    pub description: Option<String>,
    pub member_ids: Vec<ID>,
    pub created: i64,
}

impl Team {
    pub fn new(church_id: ID, name: String, created: i64) -> Self {
        Self {
            id: Default::default(),
            church_id,
            name,
            description: None,
            member_ids: Vec::new(),
            created,
        }
    }

    /// Returns false if the member was already on the team
    pub fn add_member(&mut self, member_id: ID) -> bool {
        if self.member_ids.contains(&member_id) {
            return false;
        }
        self.member_ids.push(member_id);
        true
    }

    /// Returns false if the member was not on the team
    pub fn remove_member(&mut self, member_id: &ID) -> bool {
        let len = self.member_ids.len();
        self.member_ids.retain(|id| id != member_id);
        self.member_ids.len() != len
    }
}

impl Entity for Team {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn adds_and_removes_members_once() {
        let mut team = Team::new(ID::new(), "Worship".into(), 0);
        let member = ID::new();
        assert!(team.add_member(member.clone()));
        assert!(!team.add_member(member.clone()));
        assert_eq!(team.member_ids.len(), 1);
        assert!(team.remove_member(&member));
        assert!(!team.remove_member(&member));
        assert!(team.member_ids.is_empty());
    }
}
