pub mod book;
pub mod review;
pub mod user;

pub use book::{Book, NewBook, DEFAULT_COVER_IMAGE};
pub use review::{NewReview, Review, ReviewRecord};
pub use user::{Author, User};

/// Generates a fresh record identity
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
