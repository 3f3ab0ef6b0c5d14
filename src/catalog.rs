//! In-memory association index over users, authors, books and reviews.
//!
//! The catalog enforces the reference invariants (every review points at an
//! existing user and book, every book at an existing author) and hands out
//! review sets in creation order for the ranker to order.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{Author, Book, NewBook, NewReview, Review, ReviewRecord, User};

/// Plain serialisable form of a catalog.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogSnapshot {
    pub users: Vec<User>,
    pub authors: Vec<Author>,
    pub books: Vec<Book>,
    pub reviews: Vec<ReviewRecord>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    config: Config,
    users: Vec<User>,
    authors: Vec<Author>,
    books: Vec<Book>,
    reviews: Vec<Review>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn add_user(&mut self, name: impl Into<String>) -> User {
        let user = User::new(name);
        debug!(user_id = %user.id, "user added");
        self.users.push(user.clone());
        user
    }

    pub fn add_author(&mut self, name: impl Into<String>) -> Author {
        let author = Author::new(name);
        debug!(author_id = %author.id, "author added");
        self.authors.push(author.clone());
        author
    }

    pub fn add_book(&mut self, author_id: &str, new: NewBook) -> Result<Book> {
        if self.author(author_id).is_none() {
            return Err(Error::not_found("author", author_id));
        }
        let book = Book::new(author_id, new);
        debug!(book_id = %book.id, author_id, "book added");
        self.books.push(book.clone());
        Ok(book)
    }

    /// Posts a review. `created_at` is the posting time; the catalog keeps no clock.
    pub fn add_review(
        &mut self,
        user_id: &str,
        book_id: &str,
        new: NewReview,
        created_at: DateTime<Utc>,
    ) -> Result<Review> {
        if self.user(user_id).is_none() {
            return Err(Error::not_found("user", user_id));
        }
        if self.book(book_id).is_none() {
            return Err(Error::not_found("book", book_id));
        }
        let review = Review::new(user_id, book_id, new, created_at, &self.config.ratings)?;
        debug!(review_id = review.id(), user_id, book_id, "review added");
        self.reviews.push(review.clone());
        Ok(review)
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn author(&self, id: &str) -> Option<&Author> {
        self.authors.iter().find(|a| a.id == id)
    }

    pub fn book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn review(&self, id: &str) -> Option<&Review> {
        self.reviews.iter().find(|r| r.id() == id)
    }

    pub fn books_by_author(&self, author_id: &str) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|b| b.author_id == author_id)
            .collect()
    }

    pub fn reviews_for_user(&self, user_id: &str) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|r| r.user_id() == user_id)
            .collect()
    }

    pub fn reviews_for_book(&self, book_id: &str) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|r| r.book_id() == book_id)
            .collect()
    }

    /// Removes a single review and returns it. Nothing else is touched.
    pub fn delete_review(&mut self, review_id: &str) -> Result<Review> {
        let pos = self
            .reviews
            .iter()
            .position(|r| r.id() == review_id)
            .ok_or_else(|| Error::not_found("review", review_id))?;
        let removed = self.reviews.remove(pos);
        info!(review_id, user_id = removed.user_id(), "review deleted");
        Ok(removed)
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            users: self.users.clone(),
            authors: self.authors.clone(),
            books: self.books.clone(),
            reviews: self.reviews.iter().map(ReviewRecord::from).collect(),
        }
    }

    /// Rebuilds a catalog from a snapshot, checking ids, references and ratings.
    pub fn from_snapshot(snapshot: CatalogSnapshot, config: Config) -> Result<Self> {
        config.validate()?;
        check_unique("user", snapshot.users.iter().map(|u| u.id.as_str()))?;
        check_unique("author", snapshot.authors.iter().map(|a| a.id.as_str()))?;
        check_unique("book", snapshot.books.iter().map(|b| b.id.as_str()))?;
        check_unique("review", snapshot.reviews.iter().map(|r| r.id.as_str()))?;

        let mut catalog = Self {
            config,
            users: snapshot.users,
            authors: snapshot.authors,
            books: Vec::with_capacity(snapshot.books.len()),
            reviews: Vec::with_capacity(snapshot.reviews.len()),
        };

        for book in snapshot.books {
            if catalog.author(&book.author_id).is_none() {
                return Err(Error::not_found("author", book.author_id));
            }
            catalog.books.push(book);
        }

        for record in snapshot.reviews {
            if catalog.user(&record.user_id).is_none() {
                return Err(Error::not_found("user", record.user_id));
            }
            if catalog.book(&record.book_id).is_none() {
                return Err(Error::not_found("book", record.book_id));
            }
            let review = record.validate(&catalog.config.ratings)?;
            catalog.reviews.push(review);
        }

        info!(
            users = catalog.users.len(),
            books = catalog.books.len(),
            reviews = catalog.reviews.len(),
            "catalog loaded from snapshot"
        );
        Ok(catalog)
    }
}

fn check_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(Error::InvalidArgument(format!("duplicate {} id {}", kind, id)));
        }
    }
    Ok(())
}
