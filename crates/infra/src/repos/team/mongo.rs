use super::ITeamRepo;
use crate::repos::shared::{
    mongo_repo::{self, MongoDocument},
    repo::DeleteResult,
};
use flock_domain::{Team, ID};
use mongodb::{
    bson::{doc, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

pub struct MongoTeamRepo {
    collection: Collection<Document>,
}

impl MongoTeamRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("teams"),
        }
    }
}

#[async_trait::async_trait]
impl ITeamRepo for MongoTeamRepo {
    async fn insert(&self, team: &Team) -> anyhow::Result<()> {
        mongo_repo::insert::<_, TeamMongo>(&self.collection, team).await
    }

    async fn save(&self, team: &Team) -> anyhow::Result<()> {
        mongo_repo::save::<_, TeamMongo>(&self.collection, team).await
    }

    async fn find(&self, team_id: &ID) -> Option<Team> {
        mongo_repo::find::<_, TeamMongo>(&self.collection, team_id).await
    }

    async fn find_by_church(&self, church_id: &ID) -> anyhow::Result<Vec<Team>> {
        let filter = doc! {
            "church_id": church_id.as_string()
        };
        mongo_repo::find_many_by::<_, TeamMongo>(&self.collection, filter).await
    }

    async fn delete(&self, team_id: &ID) -> Option<Team> {
        mongo_repo::delete::<_, TeamMongo>(&self.collection, team_id).await
    }

    async fn delete_by_church(&self, church_id: &ID) -> anyhow::Result<DeleteResult> {
        let filter = doc! {
            "church_id": church_id.as_string()
        };
        mongo_repo::delete_many_by(&self.collection, filter).await
    }

    async fn remove_member(&self, member_id: &ID) -> anyhow::Result<()> {
        let filter = doc! {
            "member_ids": member_id.as_string()
        };
        let update = doc! {
            "$pull": {
                "member_ids": member_id.as_string()
            }
        };
        mongo_repo::update_many(&self.collection, filter, update).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct TeamMongo {
    _id: String,
    church_id: String,
    name: String,
    description: Option<String>,
    member_ids: Vec<String>,
    created: i64,
}

impl MongoDocument<Team> for TeamMongo {
    fn to_domain(self) -> anyhow::Result<Team> {
        Ok(Team {
            id: self._id.parse()?,
            church_id: self.church_id.parse()?,
            name: self.name,
            description: self.description,
            member_ids: self
                .member_ids
                .iter()
                .map(|id| id.parse::<ID>())
                .collect::<Result<_, _>>()?,
            created: self.created,
        })
    }

    fn from_domain(team: &Team) -> Self {
        Self {
            _id: team.id.as_string(),
            church_id: team.church_id.as_string(),
            name: team.name.clone(),
            description: team.description.clone(),
            member_ids: team.member_ids.iter().map(|id| id.as_string()).collect(),
            created: team.created,
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": &self._id
        }
    }
}
