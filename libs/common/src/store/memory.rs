//! In-process document store
//!
//! Keeps collections in memory with the same single-document semantics as
//! [`MongoStore`](super::MongoStore): top-level equality filters, `$set`
//! style updates and ObjectId assignment on insert. Used by tests.

use async_trait::async_trait;
use mongodb::bson::{Bson, Document, oid::ObjectId};
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};
use tracing::debug;

use super::{DocumentStore, UpdateOutcome};
use crate::error::{DatabaseError, DatabaseResult};

/// In-memory document store
#[derive(Clone, Default)]
pub struct MemoryStore {
    collections: Arc<RwLock<HashMap<String, Vec<Document>>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held in a collection
    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .map(|collections| collections.get(collection).map_or(0, Vec::len))
            .unwrap_or(0)
    }

    /// Whether a collection holds no documents
    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }
}

/// Equality on every top-level filter field. Numeric types are not coerced.
fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

fn poisoned<T>(_: T) -> DatabaseError {
    DatabaseError::Configuration("memory store lock poisoned".to_string())
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_one(&self, collection: &str, document: Document) -> DatabaseResult<Bson> {
        let id = match document.get("_id") {
            Some(id) => id.clone(),
            None => Bson::ObjectId(ObjectId::new()),
        };

        let mut stored = Document::new();
        stored.insert("_id", id.clone());
        for (key, value) in document {
            if key != "_id" {
                stored.insert(key, value);
            }
        }

        debug!("memory insert_one into {}", collection);
        self.collections
            .write()
            .map_err(poisoned)?
            .entry(collection.to_string())
            .or_default()
            .push(stored);

        Ok(id)
    }

    async fn find_many(&self, collection: &str, filter: Document) -> DatabaseResult<Vec<Document>> {
        let collections = self.collections.read().map_err(poisoned)?;
        Ok(collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|document| matches(document, &filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> DatabaseResult<Option<Document>> {
        let collections = self.collections.read().map_err(poisoned)?;
        Ok(collections.get(collection).and_then(|documents| {
            documents
                .iter()
                .find(|document| matches(document, &filter))
                .cloned()
        }))
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        fields: Document,
    ) -> DatabaseResult<UpdateOutcome> {
        let mut collections = self.collections.write().map_err(poisoned)?;
        let Some(document) = collections
            .get_mut(collection)
            .and_then(|documents| documents.iter_mut().find(|d| matches(d, &filter)))
        else {
            return Ok(UpdateOutcome::default());
        };

        let mut changed = false;
        for (key, value) in fields {
            if document.get(&key) != Some(&value) {
                document.insert(key, value);
                changed = true;
            }
        }

        Ok(UpdateOutcome {
            matched_count: 1,
            modified_count: u64::from(changed),
        })
    }

    async fn delete_one(&self, collection: &str, filter: Document) -> DatabaseResult<u64> {
        let mut collections = self.collections.write().map_err(poisoned)?;
        let Some(documents) = collections.get_mut(collection) else {
            return Ok(0);
        };

        match documents.iter().position(|d| matches(d, &filter)) {
            Some(index) => {
                documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn ping(&self) -> DatabaseResult<()> {
        Ok(())
    }
}
