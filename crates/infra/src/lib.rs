mod config;
mod repos;
mod system;

pub use config::Config;
pub use repos::{
    DeleteResult, IChurchRepo, IEventRepo, IMemberRepo, IServiceRepo, ITeamRepo, Repos,
};
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tracing::info;

#[derive(Clone)]
pub struct FlockContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

struct ContextParams {
    pub mongodb_uri: String,
    pub mongodb_db_name: String,
}

impl FlockContext {
    async fn create(params: ContextParams) -> anyhow::Result<Self> {
        let repos = Repos::create_mongodb(&params.mongodb_uri, &params.mongodb_db_name).await?;
        Ok(Self {
            repos,
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<FlockContext> {
    let mongodb_uri = std::env::var("MONGODB_URI")
        .map_err(|_| anyhow::Error::msg("MONGODB_URI env var to be present."))?;
    let mongodb_db_name = std::env::var("MONGODB_DB_NAME").unwrap_or_else(|_| {
        info!("Did not find MONGODB_DB_NAME environment variable. Going to use: flock");
        "flock".into()
    });

    FlockContext::create(ContextParams {
        mongodb_uri,
        mongodb_db_name,
    })
    .await
}
