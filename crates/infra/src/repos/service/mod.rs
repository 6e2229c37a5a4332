mod inmemory;
mod mongo;

pub use inmemory::InMemoryServiceRepo;
pub use mongo::MongoServiceRepo;

use crate::repos::shared::repo::DeleteResult;
use flock_domain::{Service, ID};

#[async_trait::async_trait]
pub trait IServiceRepo: Send + Sync {
    async fn insert(&self, service: &Service) -> anyhow::Result<()>;
    async fn save(&self, service: &Service) -> anyhow::Result<()>;
    async fn find(&self, service_id: &ID) -> Option<Service>;
    async fn find_by_church(&self, church_id: &ID) -> anyhow::Result<Vec<Service>>;
    async fn delete(&self, service_id: &ID) -> Option<Service>;
    async fn delete_by_church(&self, church_id: &ID) -> anyhow::Result<DeleteResult>;
}
