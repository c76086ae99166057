//! Application state shared across handlers

use common::store::DocumentStore;
use std::sync::Arc;

use crate::{
    config::CookiePolicy,
    jwt::JwtService,
    repositories::{BookingRepository, TutorRepository},
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub jwt_service: JwtService,
    pub cookie_policy: CookiePolicy,
    pub tutor_repository: TutorRepository,
    pub booking_repository: BookingRepository,
}

impl AppState {
    /// Wire repositories over a shared store
    pub fn new(
        store: Arc<dyn DocumentStore>,
        jwt_service: JwtService,
        cookie_policy: CookiePolicy,
    ) -> Self {
        Self {
            jwt_service,
            cookie_policy,
            tutor_repository: TutorRepository::new(store.clone()),
            booking_repository: BookingRepository::new(store),
        }
    }
}
