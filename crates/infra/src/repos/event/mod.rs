mod inmemory;
mod mongo;

pub use inmemory::InMemoryEventRepo;
pub use mongo::MongoEventRepo;

use crate::repos::shared::repo::DeleteResult;
use chrono::{DateTime, Utc};
use flock_domain::{ChurchEvent, ID};

#[async_trait::async_trait]
pub trait IEventRepo: Send + Sync {
    async fn insert(&self, e: &ChurchEvent) -> anyhow::Result<()>;
    /// Stores a batch of generated events. The batch is not atomic.
    async fn insert_many(&self, events: &[ChurchEvent]) -> anyhow::Result<()>;
    async fn save(&self, e: &ChurchEvent) -> anyhow::Result<()>;
    async fn find(&self, event_id: &ID) -> Option<ChurchEvent>;
    /// Events of the church overlapping the optional window, ordered by start
    async fn find_by_church(
        &self,
        church_id: &ID,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> anyhow::Result<Vec<ChurchEvent>>;
    async fn delete(&self, event_id: &ID) -> Option<ChurchEvent>;
    async fn delete_by_church(&self, church_id: &ID) -> anyhow::Result<DeleteResult>;
    /// Removes the member from the attendees of every event
    async fn remove_attendee(&self, member_id: &ID) -> anyhow::Result<()>;
    /// Removes the team from every event it is assigned to
    async fn remove_team(&self, team_id: &ID) -> anyhow::Result<()>;
}
