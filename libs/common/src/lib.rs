//! Common library for the tutor marketplace backend
//!
//! This crate provides the document store layer shared by the services:
//! MongoDB connectivity, the [`store::DocumentStore`] abstraction with its
//! MongoDB and in-memory implementations, and the store error types.

pub mod database;
pub mod error;
pub mod store;

/// Example usage of the store layer
///
/// ```rust,no_run
/// use common::database::{DatabaseConfig, init_client};
/// use common::store::{DocumentStore, MongoStore};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig::from_env()?;
///     let client = init_client(&config).await?;
///     let store = MongoStore::new(client, &config.database);
///     store.ping().await?;
///     Ok(())
/// }
/// ```
pub fn example_usage() {}
