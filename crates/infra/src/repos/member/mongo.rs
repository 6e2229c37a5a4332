use super::IMemberRepo;
use crate::repos::shared::{
    mongo_repo::{self, MongoDocument},
    repo::DeleteResult,
};
use flock_domain::{Member, ID};
use mongodb::{
    bson::{doc, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

pub struct MongoMemberRepo {
    collection: Collection<Document>,
}

impl MongoMemberRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("members"),
        }
    }
}

#[async_trait::async_trait]
impl IMemberRepo for MongoMemberRepo {
    async fn insert(&self, member: &Member) -> anyhow::Result<()> {
        mongo_repo::insert::<_, MemberMongo>(&self.collection, member).await
    }

    async fn find(&self, member_id: &ID) -> Option<Member> {
        mongo_repo::find::<_, MemberMongo>(&self.collection, member_id).await
    }

    async fn find_by_church(&self, church_id: &ID) -> anyhow::Result<Vec<Member>> {
        let filter = doc! {
            "church_id": church_id.as_string()
        };
        mongo_repo::find_many_by::<_, MemberMongo>(&self.collection, filter).await
    }

    async fn delete(&self, member_id: &ID) -> Option<Member> {
        mongo_repo::delete::<_, MemberMongo>(&self.collection, member_id).await
    }

    async fn delete_by_church(&self, church_id: &ID) -> anyhow::Result<DeleteResult> {
        let filter = doc! {
            "church_id": church_id.as_string()
        };
        mongo_repo::delete_many_by(&self.collection, filter).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct MemberMongo {
    _id: String,
    church_id: String,
    first_name: String,
    last_name: String,
    email: Option<String>,
    phone: Option<String>,
    created: i64,
}

impl MongoDocument<Member> for MemberMongo {
    fn to_domain(self) -> anyhow::Result<Member> {
        Ok(Member {
            id: self._id.parse()?,
            church_id: self.church_id.parse()?,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            created: self.created,
        })
    }

    fn from_domain(member: &Member) -> Self {
        Self {
            _id: member.id.as_string(),
            church_id: member.church_id.as_string(),
            first_name: member.first_name.clone(),
            last_name: member.last_name.clone(),
            email: member.email.clone(),
            phone: member.phone.clone(),
            created: member.created,
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": &self._id
        }
    }
}
