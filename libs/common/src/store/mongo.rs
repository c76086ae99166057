//! MongoDB-backed document store

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Client, Collection, Database,
    bson::{Bson, Document, doc},
};
use tracing::debug;

use super::{DocumentStore, UpdateOutcome};
use crate::error::{DatabaseError, DatabaseResult};

/// Document store over a single MongoDB database
///
/// The client is created once at startup and cloned cheaply; it is never
/// closed while the process runs.
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    database: Database,
}

impl MongoStore {
    /// Create a new store over the named database
    pub fn new(client: Client, database: &str) -> Self {
        let database = client.database(database);
        Self { client, database }
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection::<Document>(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_one(&self, collection: &str, document: Document) -> DatabaseResult<Bson> {
        debug!("insert_one into {}", collection);
        let result = self
            .collection(collection)
            .insert_one(document, None)
            .await
            .map_err(DatabaseError::Query)?;
        Ok(result.inserted_id)
    }

    async fn find_many(&self, collection: &str, filter: Document) -> DatabaseResult<Vec<Document>> {
        debug!("find_many in {} with {}", collection, filter);
        let cursor = self
            .collection(collection)
            .find(filter, None)
            .await
            .map_err(DatabaseError::Query)?;
        cursor.try_collect().await.map_err(DatabaseError::Query)
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> DatabaseResult<Option<Document>> {
        debug!("find_one in {} with {}", collection, filter);
        self.collection(collection)
            .find_one(filter, None)
            .await
            .map_err(DatabaseError::Query)
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        fields: Document,
    ) -> DatabaseResult<UpdateOutcome> {
        debug!("update_one in {} with {}", collection, filter);
        let result = self
            .collection(collection)
            .update_one(filter, doc! { "$set": fields }, None)
            .await
            .map_err(DatabaseError::Query)?;
        Ok(UpdateOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    async fn delete_one(&self, collection: &str, filter: Document) -> DatabaseResult<u64> {
        debug!("delete_one in {} with {}", collection, filter);
        let result = self
            .collection(collection)
            .delete_one(filter, None)
            .await
            .map_err(DatabaseError::Query)?;
        Ok(result.deleted_count)
    }

    async fn ping(&self) -> DatabaseResult<()> {
        crate::database::health_check(&self.client).await.map(|_| ())
    }
}
