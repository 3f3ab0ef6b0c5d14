//! Review ranking for a books-and-reviews catalog.
//!
//! The core is [`ranker::rank`], a pure stable ordering of reviews by one of
//! four [`SortMode`]s. Around it sit the data model, an in-memory association
//! index ([`Catalog`]) and page-level queries ([`api`]).

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod ranker;

pub use catalog::{Catalog, CatalogSnapshot};
pub use config::{Config, RatingBounds};
pub use error::{Error, Result};
pub use ranker::{rank, rank_by, rank_records, SortMode};
