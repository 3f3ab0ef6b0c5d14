// src/models/review.rs
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::RatingBounds;
use crate::error::{Error, Result};

/// A validated review. Fields are read-only once built: the rating has been
/// checked against the configured bounds and the creation time never changes.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Review {
    id: String,
    user_id: String,
    book_id: String,
    title: String,
    text: String,
    rating: u8,
    created_at: DateTime<Utc>,
}

/// Fields a user supplies when posting a review.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewReview {
    pub title: String,
    pub text: String,
    pub rating: i64,
}

/// A review as handed over by an upstream source, before validation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReviewRecord {
    pub id: String,
    pub user_id: String,
    pub book_id: String,
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl NewReview {
    pub fn new(title: impl Into<String>, text: impl Into<String>, rating: i64) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            rating,
        }
    }
}

impl Review {
    /// Builds a review with a fresh identity. `created_at` is injected by the caller.
    pub fn new(
        user_id: impl Into<String>,
        book_id: impl Into<String>,
        new: NewReview,
        created_at: DateTime<Utc>,
        bounds: &RatingBounds,
    ) -> Result<Self> {
        ReviewRecord {
            id: super::new_id(),
            user_id: user_id.into(),
            book_id: book_id.into(),
            title: new.title,
            text: new.text,
            rating: Some(new.rating),
            created_at: Some(created_at),
        }
        .validate(bounds)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn book_id(&self) -> &str {
        &self.book_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Calendar date the review was posted on
    pub fn posted_on(&self) -> NaiveDate {
        self.created_at.date_naive()
    }
}

impl ReviewRecord {
    /// Checks presence of rating and timestamp and the rating bounds.
    pub fn validate(self, bounds: &RatingBounds) -> Result<Review> {
        let raw = self
            .rating
            .ok_or_else(|| Error::invalid_record(&self.id, "missing rating"))?;
        let rating = u8::try_from(raw)
            .ok()
            .filter(|r| bounds.contains(*r))
            .ok_or_else(|| {
                Error::invalid_record(
                    &self.id,
                    format!("rating {} outside {}..={}", raw, bounds.min, bounds.max),
                )
            })?;
        let created_at = self
            .created_at
            .ok_or_else(|| Error::invalid_record(&self.id, "missing creation timestamp"))?;

        Ok(Review {
            id: self.id,
            user_id: self.user_id,
            book_id: self.book_id,
            title: self.title,
            text: self.text,
            rating,
            created_at,
        })
    }
}

impl From<&Review> for ReviewRecord {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id.clone(),
            user_id: review.user_id.clone(),
            book_id: review.book_id.clone(),
            title: review.title.clone(),
            text: review.text.clone(),
            rating: Some(i64::from(review.rating)),
            created_at: Some(review.created_at),
        }
    }
}
