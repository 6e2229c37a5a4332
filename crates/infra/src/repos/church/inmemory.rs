use super::IChurchRepo;
use crate::repos::shared::inmemory_repo::*;
use flock_domain::{Church, ID};

pub struct InMemoryChurchRepo {
    churches: std::sync::Mutex<Vec<Church>>,
}

impl InMemoryChurchRepo {
    pub fn new() -> Self {
        Self {
            churches: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IChurchRepo for InMemoryChurchRepo {
    async fn insert(&self, church: &Church) -> anyhow::Result<()> {
        insert(church, &self.churches);
        Ok(())
    }

    async fn save(&self, church: &Church) -> anyhow::Result<()> {
        save(church, &self.churches);
        Ok(())
    }

    async fn find(&self, church_id: &ID) -> Option<Church> {
        find(church_id, &self.churches)
    }

    async fn delete(&self, church_id: &ID) -> Option<Church> {
        delete(church_id, &self.churches)
    }
}
