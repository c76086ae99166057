//! Tutor repository for document store operations

use common::{
    error::DatabaseResult,
    store::{DocumentStore, UpdateOutcome, id_filter},
};
use mongodb::bson::{Bson, Document, doc};
use std::sync::Arc;
use tracing::info;

use super::TUTORS_COLLECTION;

/// Tutor repository
#[derive(Clone)]
pub struct TutorRepository {
    store: Arc<dyn DocumentStore>,
}

impl TutorRepository {
    /// Create a new tutor repository
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Insert a tutor profile as given
    pub async fn create(&self, tutor: Document) -> DatabaseResult<Bson> {
        self.store.insert_one(TUTORS_COLLECTION, tutor).await
    }

    /// Get all tutors
    pub async fn get_all(&self) -> DatabaseResult<Vec<Document>> {
        self.store.find_many(TUTORS_COLLECTION, doc! {}).await
    }

    /// Find a tutor by email; any one match when several share it
    pub async fn find_by_email(&self, email: &str) -> DatabaseResult<Option<Document>> {
        info!("Finding tutor by email: {}", email);
        self.store
            .find_one(TUTORS_COLLECTION, doc! { "email": email })
            .await
    }

    /// Find a tutor by ID
    pub async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<Document>> {
        let filter = id_filter(id)?;
        self.store.find_one(TUTORS_COLLECTION, filter).await
    }

    /// Replace the given fields on a tutor
    pub async fn update(&self, id: &str, fields: Document) -> DatabaseResult<UpdateOutcome> {
        let filter = id_filter(id)?;
        info!("Updating tutor: {}", id);
        self.store.update_one(TUTORS_COLLECTION, filter, fields).await
    }

    /// Delete a tutor by ID
    pub async fn delete(&self, id: &str) -> DatabaseResult<u64> {
        let filter = id_filter(id)?;
        info!("Deleting tutor: {}", id);
        self.store.delete_one(TUTORS_COLLECTION, filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{error::DatabaseError, store::MemoryStore};

    fn repository() -> (MemoryStore, TutorRepository) {
        let store = MemoryStore::new();
        let repository = TutorRepository::new(Arc::new(store.clone()));
        (store, repository)
    }

    #[tokio::test]
    async fn malformed_id_never_reaches_store() {
        let (store, repository) = repository();
        repository
            .create(doc! { "email": "tutor@example.com" })
            .await
            .unwrap();

        assert!(matches!(
            repository.find_by_id("nope").await,
            Err(DatabaseError::InvalidId(_))
        ));
        assert!(matches!(
            repository.update("nope", doc! { "price": 1 }).await,
            Err(DatabaseError::InvalidId(_))
        ));
        assert!(matches!(
            repository.delete("nope").await,
            Err(DatabaseError::InvalidId(_))
        ));
        assert_eq!(store.len(TUTORS_COLLECTION), 1);
    }

    #[tokio::test]
    async fn find_by_email_returns_a_match() {
        let (_, repository) = repository();
        repository
            .create(doc! { "email": "tutor@example.com", "language": "Italian" })
            .await
            .unwrap();

        let found = repository.find_by_email("tutor@example.com").await.unwrap();
        assert_eq!(
            found.and_then(|d| d.get_str("language").ok().map(str::to_string)),
            Some("Italian".to_string())
        );
        assert!(
            repository
                .find_by_email("nobody@example.com")
                .await
                .unwrap()
                .is_none()
        );
    }
}
