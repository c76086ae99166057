//! Document store abstraction
//!
//! Services talk to collections through [`DocumentStore`] so the HTTP layer
//! never depends on the driver directly. Every operation is a single
//! round-trip; there are no retries and no multi-document transactions.

use async_trait::async_trait;
use mongodb::bson::{Bson, Document, doc, oid::ObjectId};

use crate::error::{DatabaseError, DatabaseResult};

pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Result of a single-document update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateOutcome {
    /// Number of documents matched by the filter (0 or 1)
    pub matched_count: u64,
    /// Number of documents actually changed
    pub modified_count: u64,
}

/// Single-document operations over named collections
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document and return its `_id`
    async fn insert_one(&self, collection: &str, document: Document) -> DatabaseResult<Bson>;

    /// Return every document matching the filter
    async fn find_many(&self, collection: &str, filter: Document) -> DatabaseResult<Vec<Document>>;

    /// Return the first document matching the filter
    async fn find_one(&self, collection: &str, filter: Document)
    -> DatabaseResult<Option<Document>>;

    /// Replace the given top-level fields on the first matching document
    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        fields: Document,
    ) -> DatabaseResult<UpdateOutcome>;

    /// Delete the first matching document and return the deleted count
    async fn delete_one(&self, collection: &str, filter: Document) -> DatabaseResult<u64>;

    /// Check that the store is reachable
    async fn ping(&self) -> DatabaseResult<()>;
}

/// Parse a hex identifier, failing fast before any store round-trip
pub fn parse_object_id(id: &str) -> DatabaseResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| DatabaseError::InvalidId(id.to_string()))
}

/// Build an `_id` equality filter from a hex identifier
pub fn id_filter(id: &str) -> DatabaseResult<Document> {
    let oid = parse_object_id(id)?;
    Ok(doc! { "_id": oid })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_object_id_accepts_hex() {
        let oid = parse_object_id("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        assert_eq!(oid.to_hex(), "65a1f0c2e4b0a1b2c3d4e5f6");
    }

    #[test]
    fn parse_object_id_rejects_malformed() {
        for id in ["", "123", "not-an-object-id", "65a1f0c2e4b0a1b2c3d4e5fz"] {
            assert!(matches!(
                parse_object_id(id),
                Err(DatabaseError::InvalidId(_))
            ));
        }
    }

    #[test]
    fn id_filter_targets_underscore_id() {
        let filter = id_filter("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        assert!(matches!(filter.get("_id"), Some(Bson::ObjectId(_))));
    }
}
