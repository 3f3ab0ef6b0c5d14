//! Page-level queries over the catalog.
//!
//! These assemble what a user or book page shows: the owner record and its
//! reviews, ordered by the page's `sort` parameter and joined with the book and
//! reviewer each review refers to.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::models::{Book, Review, User};
use crate::ranker::{rank, SortMode};

/// Query parameters of a user page, e.g. `?sort=highest_rating`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserReviewsQuery {
    pub user_id: String,
    #[serde(default)]
    pub sort: Option<String>,
}

/// One review as listed on a page
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ReviewEntry {
    pub review: Review,
    pub book_title: String,
    pub book_image: String,
    pub reviewer: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct UserReviewsPage {
    pub user: User,
    pub sort: Option<SortMode>,
    pub reviews: Vec<ReviewEntry>,
}

#[derive(Serialize, Debug, Clone)]
pub struct BookReviewsPage {
    pub book: Book,
    pub sort: Option<SortMode>,
    pub reviews: Vec<ReviewEntry>,
}

/// Sort links offered on a review listing, in display order
pub fn sort_links() -> Vec<(SortMode, &'static str)> {
    SortMode::ALL.iter().map(|m| (*m, m.label())).collect()
}

pub fn user_reviews(catalog: &Catalog, query: &UserReviewsQuery) -> Result<UserReviewsPage> {
    debug!(user_id = %query.user_id, sort = ?query.sort, "user reviews requested");
    let user = catalog
        .user(&query.user_id)
        .ok_or_else(|| Error::not_found("user", query.user_id.as_str()))?;
    let sort = resolve_sort(catalog, query.sort.as_deref())?;
    let reviews = ordered(catalog.reviews_for_user(&user.id), sort);

    Ok(UserReviewsPage {
        user: user.clone(),
        sort,
        reviews: entries(catalog, reviews)?,
    })
}

pub fn book_reviews(catalog: &Catalog, book_id: &str, sort: Option<&str>) -> Result<BookReviewsPage> {
    debug!(book_id, sort = ?sort, "book reviews requested");
    let book = catalog
        .book(book_id)
        .ok_or_else(|| Error::not_found("book", book_id))?;
    let sort = resolve_sort(catalog, sort)?;
    let reviews = ordered(catalog.reviews_for_book(book_id), sort);

    Ok(BookReviewsPage {
        book: book.clone(),
        sort,
        reviews: entries(catalog, reviews)?,
    })
}

/// Deletes a review and returns the id of the user whose page the caller
/// should go back to.
pub fn delete_review(catalog: &mut Catalog, review_id: &str) -> Result<String> {
    let removed = catalog.delete_review(review_id)?;
    info!(review_id, user_id = removed.user_id(), "returning to user page");
    Ok(removed.user_id().to_string())
}

// An explicit but unknown sort is an error; an absent one falls back to config.
fn resolve_sort(catalog: &Catalog, sort: Option<&str>) -> Result<Option<SortMode>> {
    match sort {
        Some(raw) => raw.parse::<SortMode>().map(Some),
        None => Ok(catalog.config().default_sort),
    }
}

fn ordered(reviews: Vec<&Review>, sort: Option<SortMode>) -> Vec<&Review> {
    match sort {
        Some(mode) => rank(&reviews, mode),
        None => reviews,
    }
}

fn entries(catalog: &Catalog, reviews: Vec<&Review>) -> Result<Vec<ReviewEntry>> {
    reviews
        .into_iter()
        .map(|review| -> Result<ReviewEntry> {
            let book = catalog
                .book(review.book_id())
                .ok_or_else(|| Error::not_found("book", review.book_id()))?;
            let user = catalog
                .user(review.user_id())
                .ok_or_else(|| Error::not_found("user", review.user_id()))?;
            Ok(ReviewEntry {
                review: review.clone(),
                book_title: book.title.clone(),
                book_image: book.image.clone(),
                reviewer: user.name.clone(),
            })
        })
        .collect()
}
