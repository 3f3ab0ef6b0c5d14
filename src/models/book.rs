// src/models/book.rs
use serde::{Deserialize, Serialize};

/// Cover shown for books created without an image reference
pub const DEFAULT_COVER_IMAGE: &str = "/assets/default_cover.png";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: String,        // Unique ID for the book
    pub author_id: String, // Author the book belongs to
    pub title: String,     // Book title
    pub pages: u32,        // Page count
    pub year: i32,         // Publication year
    pub image: String,     // Cover-image reference
}

/// Fields supplied when a book is created; identity and author come from the catalog.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct NewBook {
    pub title: String,
    pub pages: u32,
    pub year: i32,
    #[serde(default)]
    pub image: Option<String>,
}

impl NewBook {
    pub fn new(title: impl Into<String>, pages: u32, year: i32) -> Self {
        Self {
            title: title.into(),
            pages,
            year,
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

impl Book {
    pub(crate) fn new(author_id: impl Into<String>, new: NewBook) -> Self {
        Self {
            id: super::new_id(),
            author_id: author_id.into(),
            title: new.title,
            pages: new.pages,
            year: new.year,
            image: new
                .image
                .unwrap_or_else(|| DEFAULT_COVER_IMAGE.to_string()),
        }
    }
}
