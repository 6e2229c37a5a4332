use super::IEventRepo;
use crate::repos::shared::{
    mongo_repo::{self, MongoDocument},
    repo::DeleteResult,
};
use chrono::{DateTime, TimeZone, Utc};
use flock_domain::{ChurchEvent, EventStatus, RecurrencePattern, ID};
use mongodb::{
    bson::{doc, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

pub struct MongoEventRepo {
    collection: Collection<Document>,
}

impl MongoEventRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("church-events"),
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for MongoEventRepo {
    async fn insert(&self, e: &ChurchEvent) -> anyhow::Result<()> {
        mongo_repo::insert::<_, ChurchEventMongo>(&self.collection, e).await
    }

    async fn insert_many(&self, events: &[ChurchEvent]) -> anyhow::Result<()> {
        mongo_repo::insert_many::<_, ChurchEventMongo>(&self.collection, events).await
    }

    async fn save(&self, e: &ChurchEvent) -> anyhow::Result<()> {
        mongo_repo::save::<_, ChurchEventMongo>(&self.collection, e).await
    }

    async fn find(&self, event_id: &ID) -> Option<ChurchEvent> {
        mongo_repo::find::<_, ChurchEventMongo>(&self.collection, event_id).await
    }

    async fn find_by_church(
        &self,
        church_id: &ID,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> anyhow::Result<Vec<ChurchEvent>> {
        let mut filter = doc! {
            "church_id": church_id.as_string()
        };
        if let Some(start) = start {
            filter.insert("end_ts", doc! { "$gte": start.timestamp_millis() });
        }
        if let Some(end) = end {
            filter.insert("start_ts", doc! { "$lte": end.timestamp_millis() });
        }

        let mut events =
            mongo_repo::find_many_by::<_, ChurchEventMongo>(&self.collection, filter).await?;
        events.sort_by_key(|e| e.start_date);
        Ok(events)
    }

    async fn delete(&self, event_id: &ID) -> Option<ChurchEvent> {
        mongo_repo::delete::<_, ChurchEventMongo>(&self.collection, event_id).await
    }

    async fn delete_by_church(&self, church_id: &ID) -> anyhow::Result<DeleteResult> {
        let filter = doc! {
            "church_id": church_id.as_string()
        };
        mongo_repo::delete_many_by(&self.collection, filter).await
    }

    async fn remove_attendee(&self, member_id: &ID) -> anyhow::Result<()> {
        let filter = doc! {
            "attendee_ids": member_id.as_string()
        };
        let update = doc! {
            "$pull": {
                "attendee_ids": member_id.as_string()
            }
        };
        mongo_repo::update_many(&self.collection, filter, update).await
    }

    async fn remove_team(&self, team_id: &ID) -> anyhow::Result<()> {
        let filter = doc! {
            "team_ids": team_id.as_string()
        };
        let update = doc! {
            "$pull": {
                "team_ids": team_id.as_string()
            }
        };
        mongo_repo::update_many(&self.collection, filter, update).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ChurchEventMongo {
    _id: String,
    church_id: String,
    title: String,
    description: Option<String>,
    location: Option<String>,
    tags: Vec<String>,
    start_ts: i64,
    end_ts: i64,
    status: EventStatus,
    recurrence: Option<RecurrencePattern>,
    parent_event_id: Option<String>,
    service_id: Option<String>,
    attendee_ids: Vec<String>,
    team_ids: Vec<String>,
    created: i64,
    updated: i64,
}

fn parse_ids(ids: &[String]) -> anyhow::Result<Vec<ID>> {
    ids.iter()
        .map(|id| id.parse::<ID>().map_err(anyhow::Error::new))
        .collect()
}

fn parse_timestamp(millis: i64) -> anyhow::Result<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| anyhow::Error::msg(format!("Invalid timestamp: {}", millis)))
}

impl MongoDocument<ChurchEvent> for ChurchEventMongo {
    fn to_domain(self) -> anyhow::Result<ChurchEvent> {
        Ok(ChurchEvent {
            id: self._id.parse()?,
            church_id: self.church_id.parse()?,
            title: self.title,
            description: self.description,
            location: self.location,
            tags: self.tags,
            start_date: parse_timestamp(self.start_ts)?,
            end_date: parse_timestamp(self.end_ts)?,
            status: self.status,
            recurrence: self.recurrence,
            parent_event_id: self.parent_event_id.map(|id| id.parse()).transpose()?,
            service_id: self.service_id.map(|id| id.parse()).transpose()?,
            attendee_ids: parse_ids(&self.attendee_ids)?,
            team_ids: parse_ids(&self.team_ids)?,
            created: self.created,
            updated: self.updated,
        })
    }

    fn from_domain(event: &ChurchEvent) -> Self {
        Self {
            _id: event.id.as_string(),
            church_id: event.church_id.as_string(),
            title: event.title.clone(),
            description: event.description.clone(),
            location: event.location.clone(),
            tags: event.tags.clone(),
            start_ts: event.start_date.timestamp_millis(),
            end_ts: event.end_date.timestamp_millis(),
            status: event.status,
            recurrence: event.recurrence.clone(),
            parent_event_id: event.parent_event_id.as_ref().map(|id| id.as_string()),
            service_id: event.service_id.as_ref().map(|id| id.as_string()),
            attendee_ids: event.attendee_ids.iter().map(|id| id.as_string()).collect(),
            team_ids: event.team_ids.iter().map(|id| id.as_string()).collect(),
            created: event.created,
            updated: event.updated,
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": &self._id
        }
    }
}
