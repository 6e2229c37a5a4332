mod church;
mod event;
mod member;
mod service;
mod shared;
mod team;

pub use church::IChurchRepo;
use church::{InMemoryChurchRepo, MongoChurchRepo};
pub use event::IEventRepo;
use event::{InMemoryEventRepo, MongoEventRepo};
pub use member::IMemberRepo;
use member::{InMemoryMemberRepo, MongoMemberRepo};
use mongodb::{options::ClientOptions, Client};
pub use service::IServiceRepo;
use service::{InMemoryServiceRepo, MongoServiceRepo};
pub use shared::repo::DeleteResult;
use std::sync::Arc;
pub use team::ITeamRepo;
use team::{InMemoryTeamRepo, MongoTeamRepo};
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub churches: Arc<dyn IChurchRepo>,
    pub members: Arc<dyn IMemberRepo>,
    pub teams: Arc<dyn ITeamRepo>,
    pub events: Arc<dyn IEventRepo>,
    pub services: Arc<dyn IServiceRepo>,
}

impl Repos {
    pub async fn create_mongodb(connection_string: &str, db_name: &str) -> anyhow::Result<Self> {
        let client_options = ClientOptions::parse(connection_string).await?;
        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);

        // This is needed to make sure that db is ready when opening server
        info!("DB CHECKING CONNECTION ...");
        db.collection::<mongodb::bson::Document>("server-start")
            .insert_one(
                mongodb::bson::doc! {
                    "server-start": 1
                },
                None,
            )
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self {
            churches: Arc::new(MongoChurchRepo::new(&db)),
            members: Arc::new(MongoMemberRepo::new(&db)),
            teams: Arc::new(MongoTeamRepo::new(&db)),
            events: Arc::new(MongoEventRepo::new(&db)),
            services: Arc::new(MongoServiceRepo::new(&db)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            churches: Arc::new(InMemoryChurchRepo::new()),
            members: Arc::new(InMemoryMemberRepo::new()),
            teams: Arc::new(InMemoryTeamRepo::new()),
            events: Arc::new(InMemoryEventRepo::new()),
            services: Arc::new(InMemoryServiceRepo::new()),
        }
    }
}

/// Creates the inmemory repos, and the mongo repos as well when
/// `MONGODB_URI` points at a running database
#[cfg(test)]
pub(crate) async fn create_test_repos() -> Vec<Repos> {
    let mut repos = vec![Repos::create_inmemory()];
    if let Ok(uri) = std::env::var("MONGODB_URI") {
        match Repos::create_mongodb(&uri, "flock-test").await {
            Ok(mongo) => repos.push(mongo),
            Err(e) => tracing::warn!("Skipping mongo repos in tests: {:?}", e),
        }
    }
    repos
}
