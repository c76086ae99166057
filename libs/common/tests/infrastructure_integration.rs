//! Integration tests for the infrastructure components
//!
//! These tests verify that a MongoDB deployment is reachable and supports the
//! single-document operations the services rely on. They are skipped unless
//! `MONGODB_URI` is set.

use common::{
    database::{DatabaseConfig, health_check, init_client},
    store::{DocumentStore, MongoStore, id_filter},
};
use mongodb::bson::{Bson, doc};

const COLLECTION: &str = "integration_test_tutors";

/// Test that verifies MongoDB is accessible and can perform basic operations
#[tokio::test]
async fn test_infrastructure_integration() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var("MONGODB_URI").is_err() {
        eprintln!("Skipping integration test: MONGODB_URI not set");
        return Ok(());
    }

    let db_config = DatabaseConfig::from_env()?;
    let client = init_client(&db_config).await?;

    // Verify MongoDB connectivity
    assert!(health_check(&client).await?, "Database health check failed");

    let store = MongoStore::new(client, &db_config.database);

    // Insert and read back
    let inserted = store
        .insert_one(COLLECTION, doc! { "email": "integration@example.com", "price": 20 })
        .await?;
    let Bson::ObjectId(oid) = inserted else {
        panic!("expected ObjectId, got {inserted:?}");
    };
    let filter = id_filter(&oid.to_hex())?;

    let found = store.find_one(COLLECTION, filter.clone()).await?;
    assert_eq!(
        found.as_ref().and_then(|d| d.get_str("email").ok()),
        Some("integration@example.com"),
        "MongoDB insert/find test failed"
    );

    // Update a single field
    let outcome = store
        .update_one(COLLECTION, filter.clone(), doc! { "price": 25 })
        .await?;
    assert_eq!(outcome.matched_count, 1, "MongoDB update test failed");

    // Clean up - delete the document
    assert_eq!(store.delete_one(COLLECTION, filter.clone()).await?, 1);

    // Verify the document is deleted
    assert!(store.find_one(COLLECTION, filter).await?.is_none());

    Ok(())
}
