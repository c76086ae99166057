//! Custom error types for the common library
//!
//! This module defines the error types returned by the document store layer
//! so services can map them onto their own response types.

use mongodb::error::Error as MongoError;
use thiserror::Error;

/// Custom error type for document store operations
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error occurred while establishing the store client
    #[error("Database connection error: {0}")]
    Connection(#[source] MongoError),

    /// Error occurred during a store round-trip
    #[error("Database query error: {0}")]
    Query(#[source] MongoError),

    /// Identifier is not a well-formed ObjectId
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// Payload could not be converted to or from a BSON document
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Database configuration error: {0}")]
    Configuration(String),
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;
