use super::repo::DeleteResult;
use anyhow::Result;
use flock_domain::ID;
use futures::stream::StreamExt;
use mongodb::{
    bson::{self, doc, Document},
    Collection, Cursor,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::error;

/// The persisted shape of a domain entity `E`
pub trait MongoDocument<E>: Serialize + DeserializeOwned {
    fn to_domain(self) -> Result<E>;
    fn from_domain(entity: &E) -> Self;
    fn get_id_filter(&self) -> Document;
}

pub fn id_filter(id: &ID) -> Document {
    doc! {
        "_id": id.as_string()
    }
}

fn entity_to_persistence<E, D: MongoDocument<E>>(entity: &E) -> Result<Document> {
    let raw = D::from_domain(entity);
    Ok(bson::to_document(&raw)?)
}

fn persistence_to_entity<E, D: MongoDocument<E>>(doc: Document) -> Result<E> {
    let raw: D = bson::from_document(doc)?;
    raw.to_domain()
}

pub async fn insert<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    entity: &E,
) -> Result<()> {
    let doc = entity_to_persistence::<E, D>(entity)?;
    collection.insert_one(doc, None).await?;
    Ok(())
}

/// Inserts all the entities with a single `insert_many`. Documents written
/// before a failing one are not rolled back.
pub async fn insert_many<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    entities: &[E],
) -> Result<()> {
    if entities.is_empty() {
        return Ok(());
    }
    let docs = entities
        .iter()
        .map(entity_to_persistence::<E, D>)
        .collect::<Result<Vec<_>>>()?;
    collection.insert_many(docs, None).await?;
    Ok(())
}

pub async fn save<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    entity: &E,
) -> Result<()> {
    let raw = D::from_domain(entity);
    let filter = raw.get_id_filter();
    let doc = bson::to_document(&raw)?;
    collection.replace_one(filter, doc, None).await?;
    Ok(())
}

pub async fn update_many(
    collection: &Collection<Document>,
    filter: Document,
    update: Document,
) -> Result<()> {
    collection
        .update_many(filter, update, None)
        .await
        .map(|_| ())
        .map_err(anyhow::Error::new)
}

pub async fn find<E, D: MongoDocument<E>>(collection: &Collection<Document>, id: &ID) -> Option<E> {
    find_one_by::<E, D>(collection, id_filter(id)).await
}

pub async fn find_one_by<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    filter: Document,
) -> Option<E> {
    match collection.find_one(filter, None).await {
        Ok(Some(doc)) => to_domain_or_log::<E, D>(doc),
        Ok(None) => None,
        Err(e) => {
            error!("Unable to query document: {:?}", e);
            None
        }
    }
}

pub async fn find_many_by<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    filter: Document,
) -> Result<Vec<E>> {
    let cursor = collection.find(filter, None).await?;
    Ok(consume_cursor::<E, D>(cursor).await)
}

pub async fn delete<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    id: &ID,
) -> Option<E> {
    match collection.find_one_and_delete(id_filter(id), None).await {
        Ok(Some(doc)) => to_domain_or_log::<E, D>(doc),
        Ok(None) => None,
        Err(e) => {
            error!("Unable to delete document: {:?}", e);
            None
        }
    }
}

pub async fn delete_many_by(
    collection: &Collection<Document>,
    filter: Document,
) -> Result<DeleteResult> {
    let res = collection.delete_many(filter, None).await?;
    Ok(DeleteResult {
        deleted_count: res.deleted_count,
    })
}

fn to_domain_or_log<E, D: MongoDocument<E>>(doc: Document) -> Option<E> {
    match persistence_to_entity::<E, D>(doc) {
        Ok(entity) => Some(entity),
        Err(e) => {
            error!("Stored document could not be read: {:?}", e);
            None
        }
    }
}

async fn consume_cursor<E, D: MongoDocument<E>>(mut cursor: Cursor<Document>) -> Vec<E> {
    let mut entities = vec![];
    while let Some(result) = cursor.next().await {
        match result {
            Ok(document) => {
                if let Some(entity) = to_domain_or_log::<E, D>(document) {
                    entities.push(entity);
                }
            }
            Err(e) => {
                error!("Error reading from cursor: {:?}", e);
            }
        }
    }

    entities
}
