//! Tutors service
//!
//! HTTP backend for the tutoring marketplace: cookie-based login, tutor
//! profile CRUD and authenticated bookings over a document store.

pub mod config;
pub mod error;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
