//! Repositories for document store operations

pub mod booking;
pub mod tutor;

pub use booking::BookingRepository;
pub use tutor::TutorRepository;

/// Collection holding tutor profiles
pub const TUTORS_COLLECTION: &str = "tutors";

/// Collection holding bookings
pub const BOOKINGS_COLLECTION: &str = "bokedItem";
