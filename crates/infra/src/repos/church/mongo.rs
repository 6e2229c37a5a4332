use super::IChurchRepo;
use crate::repos::shared::mongo_repo::{self, MongoDocument};
use chrono_tz::Tz;
use flock_domain::{Church, ID};
use mongodb::{bson::Document, Collection, Database};
use serde::{Deserialize, Serialize};

pub struct MongoChurchRepo {
    collection: Collection<Document>,
}

impl MongoChurchRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("churches"),
        }
    }
}

#[async_trait::async_trait]
impl IChurchRepo for MongoChurchRepo {
    async fn insert(&self, church: &Church) -> anyhow::Result<()> {
        mongo_repo::insert::<_, ChurchMongo>(&self.collection, church).await
    }

    async fn save(&self, church: &Church) -> anyhow::Result<()> {
        mongo_repo::save::<_, ChurchMongo>(&self.collection, church).await
    }

    async fn find(&self, church_id: &ID) -> Option<Church> {
        mongo_repo::find::<_, ChurchMongo>(&self.collection, church_id).await
    }

    async fn delete(&self, church_id: &ID) -> Option<Church> {
        mongo_repo::delete::<_, ChurchMongo>(&self.collection, church_id).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ChurchMongo {
    _id: String,
    name: String,
    address: Option<String>,
    timezone: Tz,
    created: i64,
    updated: i64,
}

impl MongoDocument<Church> for ChurchMongo {
    fn to_domain(self) -> anyhow::Result<Church> {
        Ok(Church {
            id: self._id.parse()?,
            name: self.name,
            address: self.address,
            timezone: self.timezone,
            created: self.created,
            updated: self.updated,
        })
    }

    fn from_domain(church: &Church) -> Self {
        Self {
            _id: church.id.as_string(),
            name: church.name.clone(),
            address: church.address.clone(),
            timezone: church.timezone,
            created: church.created,
            updated: church.updated,
        }
    }

    fn get_id_filter(&self) -> Document {
        mongodb::bson::doc! {
            "_id": &self._id
        }
    }
}
