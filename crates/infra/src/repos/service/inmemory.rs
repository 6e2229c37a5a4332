use super::IServiceRepo;
use crate::repos::shared::{inmemory_repo::*, repo::DeleteResult};
use flock_domain::{Service, ID};

pub struct InMemoryServiceRepo {
    services: std::sync::Mutex<Vec<Service>>,
}

impl InMemoryServiceRepo {
    pub fn new() -> Self {
        Self {
            services: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IServiceRepo for InMemoryServiceRepo {
    async fn insert(&self, service: &Service) -> anyhow::Result<()> {
        insert(service, &self.services);
        Ok(())
    }

    async fn save(&self, service: &Service) -> anyhow::Result<()> {
        save(service, &self.services);
        Ok(())
    }

    async fn find(&self, service_id: &ID) -> Option<Service> {
        find(service_id, &self.services)
    }

    async fn find_by_church(&self, church_id: &ID) -> anyhow::Result<Vec<Service>> {
        Ok(find_by(&self.services, |s| s.church_id == *church_id))
    }

    async fn delete(&self, service_id: &ID) -> Option<Service> {
        delete(service_id, &self.services)
    }

    async fn delete_by_church(&self, church_id: &ID) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.services, |s| s.church_id == *church_id))
    }
}
