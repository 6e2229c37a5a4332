mod inmemory;
mod mongo;

pub use inmemory::InMemoryTeamRepo;
pub use mongo::MongoTeamRepo;

use crate::repos::shared::repo::DeleteResult;
use flock_domain::{Team, ID};

#[async_trait::async_trait]
pub trait ITeamRepo: Send + Sync {
    async fn insert(&self, team: &Team) -> anyhow::Result<()>;
    async fn save(&self, team: &Team) -> anyhow::Result<()>;
    async fn find(&self, team_id: &ID) -> Option<Team>;
    async fn find_by_church(&self, church_id: &ID) -> anyhow::Result<Vec<Team>>;
    async fn delete(&self, team_id: &ID) -> Option<Team>;
    async fn delete_by_church(&self, church_id: &ID) -> anyhow::Result<DeleteResult>;
    /// Removes the member from every team it is on
    async fn remove_member(&self, member_id: &ID) -> anyhow::Result<()>;
}
