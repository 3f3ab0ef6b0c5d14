use std::collections::HashSet;

use bookreviews::models::{NewReview, Review};
use bookreviews::{rank, RatingBounds, SortMode};
use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

// (rating, minutes after a fixed base time)
fn build(specs: &[(i64, i64)]) -> Vec<Review> {
    let base = Utc.with_ymd_and_hms(2019, 5, 10, 0, 0, 0).unwrap();
    specs
        .iter()
        .enumerate()
        .map(|(i, (rating, minutes))| {
            Review::new(
                "user",
                "book",
                NewReview::new(format!("review {}", i), "text", *rating),
                base + Duration::minutes(*minutes),
                &RatingBounds::default(),
            )
            .unwrap()
        })
        .collect()
}

fn ids(reviews: &[Review]) -> Vec<&str> {
    reviews.iter().map(Review::id).collect()
}

fn specs() -> impl Strategy<Value = Vec<(i64, i64)>> {
    proptest::collection::vec((1i64..=5, 0i64..500), 0..40)
}

proptest! {
    #[test]
    fn newest_is_reverse_of_oldest(raw in specs()) {
        let mut seen = HashSet::new();
        let distinct: Vec<_> = raw.into_iter().filter(|(_, m)| seen.insert(*m)).collect();
        let reviews = build(&distinct);

        let newest = rank(&reviews, SortMode::Newest);
        let mut oldest = rank(&reviews, SortMode::Oldest);
        oldest.reverse();
        prop_assert_eq!(ids(&newest), ids(&oldest));
    }

    #[test]
    fn highest_is_reverse_of_lowest(raw in specs()) {
        let mut seen = HashSet::new();
        let distinct: Vec<_> = raw.into_iter().filter(|spec| seen.insert(*spec)).collect();
        let reviews = build(&distinct);

        let highest = rank(&reviews, SortMode::HighestRating);
        let mut lowest = rank(&reviews, SortMode::LowestRating);
        lowest.reverse();
        prop_assert_eq!(ids(&highest), ids(&lowest));
    }

    #[test]
    fn ranking_is_idempotent(raw in specs()) {
        let reviews = build(&raw);
        for mode in SortMode::ALL {
            let once = rank(&reviews, mode);
            let twice = rank(&once, mode);
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn ranking_is_a_permutation(raw in specs()) {
        let reviews = build(&raw);
        let mut expected = ids(&reviews);
        expected.sort_unstable();
        for mode in SortMode::ALL {
            let ranked = rank(&reviews, mode);
            let mut got = ids(&ranked);
            got.sort_unstable();
            prop_assert_eq!(&got, &expected);
        }
    }

    #[test]
    fn highest_rating_orders_by_rating_then_recency(raw in specs()) {
        let ranked = rank(&build(&raw), SortMode::HighestRating);
        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.rating() >= b.rating());
            if a.rating() == b.rating() {
                prop_assert!(a.created_at() >= b.created_at());
            }
        }
    }

    #[test]
    fn lowest_rating_orders_by_rating_then_age(raw in specs()) {
        let ranked = rank(&build(&raw), SortMode::LowestRating);
        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.rating() <= b.rating());
            if a.rating() == b.rating() {
                prop_assert!(a.created_at() <= b.created_at());
            }
        }
    }
}

#[test]
fn empty_input_ranks_to_empty() {
    for mode in SortMode::ALL {
        assert!(rank::<Review>(&[], mode).is_empty());
    }
}
