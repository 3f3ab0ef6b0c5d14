// Shared setup for integration tests
#![allow(dead_code)]

use bookreviews::models::{Book, NewBook, NewReview, Review, User};
use bookreviews::Catalog;
use chrono::{DateTime, TimeZone, Utc};

pub fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2019, 5, day, hour, 0, 0).unwrap()
}

pub struct Library {
    pub catalog: Catalog,
    pub user: User,
    pub books: [Book; 3],
}

/// One author with three books and one user, no reviews yet
pub fn library() -> Library {
    let mut catalog = Catalog::new();
    let user = catalog.add_user("Anony-moose");
    let author = catalog.add_author("John Flapjacks");
    let books = [
        NewBook::new("Veronica Mars", 10, 2012),
        NewBook::new("Mars Aquatic", 120, 1964),
        NewBook::new("Trip to Mars", 480, 2020).with_image("/covers/trip_to_mars.jpg"),
    ]
    .map(|new| catalog.add_book(&author.id, new).unwrap());
    Library {
        catalog,
        user,
        books,
    }
}

/// Posts the three reviews used across the page scenarios, with the given
/// ratings, at 2019-05-10 18:00, 2019-05-10 10:00 and 2019-05-11 18:00.
pub fn post_three(lib: &mut Library, user_id: &str, ratings: [i64; 3]) -> [Review; 3] {
    let posts = [
        ("Wow!", "THIS BOOK IS AWESOME!", at(10, 18)),
        (
            "Disappointing...",
            "This book seemed like it was more about drones than Mars.",
            at(10, 10),
        ),
        ("All the way home!", "This book went to the market!", at(11, 18)),
    ];
    let mut out = Vec::new();
    for (i, (title, text, when)) in posts.into_iter().enumerate() {
        let review = lib
            .catalog
            .add_review(user_id, &lib.books[i].id, NewReview::new(title, text, ratings[i]), when)
            .unwrap();
        out.push(review);
    }
    out.try_into().unwrap()
}
