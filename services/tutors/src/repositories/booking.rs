//! Booking repository for document store operations

use common::{error::DatabaseResult, store::DocumentStore};
use mongodb::bson::{Bson, Document, doc};
use std::sync::Arc;
use tracing::info;

use super::BOOKINGS_COLLECTION;

/// Booking repository
#[derive(Clone)]
pub struct BookingRepository {
    store: Arc<dyn DocumentStore>,
}

impl BookingRepository {
    /// Create a new booking repository
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Insert a booking as given
    pub async fn create(&self, booking: Document) -> DatabaseResult<Bson> {
        self.store.insert_one(BOOKINGS_COLLECTION, booking).await
    }

    /// Get every booking recorded under an email
    pub async fn find_by_email(&self, email: &str) -> DatabaseResult<Vec<Document>> {
        info!("Finding bookings for email: {}", email);
        self.store
            .find_many(BOOKINGS_COLLECTION, doc! { "email": email })
            .await
    }
}
