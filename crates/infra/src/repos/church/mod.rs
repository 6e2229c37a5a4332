mod inmemory;
mod mongo;

pub use inmemory::InMemoryChurchRepo;
pub use mongo::MongoChurchRepo;

use flock_domain::{Church, ID};

#[async_trait::async_trait]
pub trait IChurchRepo: Send + Sync {
    async fn insert(&self, church: &Church) -> anyhow::Result<()>;
    async fn save(&self, church: &Church) -> anyhow::Result<()>;
    async fn find(&self, church_id: &ID) -> Option<Church>;
    async fn delete(&self, church_id: &ID) -> Option<Church>;
}

#[cfg(test)]
mod tests {
    use crate::repos::create_test_repos;
    use flock_domain::{Church, Entity};

    #[tokio::test]
    async fn create_and_delete() {
        for repos in create_test_repos().await {
            let church = Church::new("Grace Chapel".into(), 0);

            // Insert
            assert!(repos.churches.insert(&church).await.is_ok());

            // Find
            let res = repos.churches.find(&church.id).await.unwrap();
            assert!(res.eq(&church));
            assert_eq!(res.name, "Grace Chapel");

            // Delete
            let res = repos.churches.delete(&church.id).await;
            assert!(res.unwrap().eq(&church));
            assert!(repos.churches.find(&church.id).await.is_none());
            assert!(repos.churches.delete(&church.id).await.is_none());
        }
    }

    #[tokio::test]
    async fn update() {
        for repos in create_test_repos().await {
            let mut church = Church::new("Grace Chapel".into(), 0);
            assert!(repos.churches.insert(&church).await.is_ok());

            church.address = Some("Church street 1".into());
            church.timezone = chrono_tz::Europe::Oslo;
            church.updated = 10;
            assert!(repos.churches.save(&church).await.is_ok());

            let res = repos.churches.find(&church.id).await.unwrap();
            assert_eq!(res.address, church.address);
            assert_eq!(res.timezone, chrono_tz::Europe::Oslo);
            assert_eq!(res.updated, 10);
        }
    }
}
