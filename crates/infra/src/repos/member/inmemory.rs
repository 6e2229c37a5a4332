use super::IMemberRepo;
use crate::repos::shared::{inmemory_repo::*, repo::DeleteResult};
use flock_domain::{Member, ID};

pub struct InMemoryMemberRepo {
    members: std::sync::Mutex<Vec<Member>>,
}

impl InMemoryMemberRepo {
    pub fn new() -> Self {
        Self {
            members: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IMemberRepo for InMemoryMemberRepo {
    async fn insert(&self, member: &Member) -> anyhow::Result<()> {
        insert(member, &self.members);
        Ok(())
    }

    async fn find(&self, member_id: &ID) -> Option<Member> {
        find(member_id, &self.members)
    }

    async fn find_by_church(&self, church_id: &ID) -> anyhow::Result<Vec<Member>> {
        Ok(find_by(&self.members, |m| m.church_id == *church_id))
    }

    async fn delete(&self, member_id: &ID) -> Option<Member> {
        delete(member_id, &self.members)
    }

    async fn delete_by_church(&self, church_id: &ID) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.members, |m| m.church_id == *church_id))
    }
}
