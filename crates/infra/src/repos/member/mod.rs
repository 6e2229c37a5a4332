mod inmemory;
mod mongo;

pub use inmemory::InMemoryMemberRepo;
pub use mongo::MongoMemberRepo;

use crate::repos::shared::repo::DeleteResult;
use flock_domain::{Member, ID};

#[async_trait::async_trait]
pub trait IMemberRepo: Send + Sync {
    async fn insert(&self, member: &Member) -> anyhow::Result<()>;
    async fn find(&self, member_id: &ID) -> Option<Member>;
    async fn find_by_church(&self, church_id: &ID) -> anyhow::Result<Vec<Member>>;
    async fn delete(&self, member_id: &ID) -> Option<Member>;
    async fn delete_by_church(&self, church_id: &ID) -> anyhow::Result<DeleteResult>;
}
