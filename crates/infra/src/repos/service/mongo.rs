use super::IServiceRepo;
use crate::repos::shared::{
    mongo_repo::{self, MongoDocument},
    repo::DeleteResult,
};
use chrono_tz::Tz;
use flock_domain::{Service, ServiceSchedule, ID};
use mongodb::{
    bson::{doc, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

pub struct MongoServiceRepo {
    collection: Collection<Document>,
}

impl MongoServiceRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("services"),
        }
    }
}

#[async_trait::async_trait]
impl IServiceRepo for MongoServiceRepo {
    async fn insert(&self, service: &Service) -> anyhow::Result<()> {
        mongo_repo::insert::<_, ServiceMongo>(&self.collection, service).await
    }

    async fn save(&self, service: &Service) -> anyhow::Result<()> {
        mongo_repo::save::<_, ServiceMongo>(&self.collection, service).await
    }

    async fn find(&self, service_id: &ID) -> Option<Service> {
        mongo_repo::find::<_, ServiceMongo>(&self.collection, service_id).await
    }

    async fn find_by_church(&self, church_id: &ID) -> anyhow::Result<Vec<Service>> {
        let filter = doc! {
            "church_id": church_id.as_string()
        };
        mongo_repo::find_many_by::<_, ServiceMongo>(&self.collection, filter).await
    }

    async fn delete(&self, service_id: &ID) -> Option<Service> {
        mongo_repo::delete::<_, ServiceMongo>(&self.collection, service_id).await
    }

    async fn delete_by_church(&self, church_id: &ID) -> anyhow::Result<DeleteResult> {
        let filter = doc! {
            "church_id": church_id.as_string()
        };
        mongo_repo::delete_many_by(&self.collection, filter).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ServiceMongo {
    _id: String,
    church_id: String,
    name: String,
    description: Option<String>,
    location: Option<String>,
    tags: Vec<String>,
    timezone: Tz,
    schedules: Vec<ServiceSchedule>,
    created: i64,
    updated: i64,
}

impl MongoDocument<Service> for ServiceMongo {
    fn to_domain(self) -> anyhow::Result<Service> {
        let mut service = Service::new(self.church_id.parse()?, self.name, self.timezone, self.created);
        service.id = self._id.parse()?;
        service.description = self.description;
        service.location = self.location;
        service.tags = self.tags;
        service.updated = self.updated;
        service.set_schedules(self.schedules)?;
        Ok(service)
    }

    fn from_domain(service: &Service) -> Self {
        Self {
            _id: service.id.as_string(),
            church_id: service.church_id.as_string(),
            name: service.name.clone(),
            description: service.description.clone(),
            location: service.location.clone(),
            tags: service.tags.clone(),
            timezone: service.timezone,
            schedules: service.schedules().to_vec(),
            created: service.created,
            updated: service.updated,
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": &self._id
        }
    }
}
