use chrono::NaiveDate;
use truckfinder_core::service::review_service::LATEST_REVIEWS_LIMIT;
use truckfinder_core::{
    latest_reviews, list_reviews, rating_summary, submit_review, Catalog, Review, ReviewBoard,
    ReviewDraft, ReviewError, ReviewQuery, ReviewSort,
};

fn review(id: &str, rating: u8, date: &str) -> Review {
    Review {
        id: id.to_string(),
        truck_id: "t1".to_string(),
        user_id: format!("user-{id}"),
        username: format!("User {id}"),
        user_image: None,
        rating,
        comment: "tasty".to_string(),
        date: date.to_string(),
        reply: None,
    }
}

fn inbox() -> Vec<Review> {
    vec![
        review("a", 4, "2024-02-01"),
        review("b", 5, "2024-03-10"),
        review("c", 2, "garbled"),
        review("d", 5, "2023-12-24"),
        review("e", 4, "2024-03-10T18:00:00"),
    ]
}

fn ids(reviews: &[&Review]) -> Vec<String> {
    reviews.iter().map(|review| review.id.clone()).collect()
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn newest_first_puts_undated_last() {
    let reviews = inbox();
    let listed = list_reviews(&reviews, &ReviewQuery::default());
    assert_eq!(ids(&listed), vec!["e", "b", "a", "d", "c"]);
}

#[test]
fn oldest_first_also_puts_undated_last() {
    let reviews = inbox();
    let query = ReviewQuery {
        sort: ReviewSort::Oldest,
        ..ReviewQuery::default()
    };
    assert_eq!(ids(&list_reviews(&reviews, &query)), vec!["d", "a", "b", "e", "c"]);
}

#[test]
fn rating_sorts_are_stable() {
    let reviews = inbox();
    let highest = ReviewQuery {
        sort: ReviewSort::Highest,
        ..ReviewQuery::default()
    };
    assert_eq!(ids(&list_reviews(&reviews, &highest)), vec!["b", "d", "a", "e", "c"]);

    let lowest = ReviewQuery {
        sort: ReviewSort::Lowest,
        ..ReviewQuery::default()
    };
    assert_eq!(ids(&list_reviews(&reviews, &lowest)), vec!["c", "a", "e", "b", "d"]);
}

#[test]
fn rating_filter_is_exact() {
    let reviews = inbox();
    let query = ReviewQuery {
        rating: Some(5),
        sort: ReviewSort::Oldest,
    };
    assert_eq!(ids(&list_reviews(&reviews, &query)), vec!["d", "b"]);

    let none = ReviewQuery {
        rating: Some(1),
        ..ReviewQuery::default()
    };
    assert!(list_reviews(&reviews, &none).is_empty());
}

#[test]
fn review_sort_parses_names() {
    assert_eq!("Highest".parse::<ReviewSort>().unwrap(), ReviewSort::Highest);
    assert!("random".parse::<ReviewSort>().is_err());
}

#[test]
fn latest_reviews_are_capped() {
    let catalog = Catalog::sample().unwrap();
    let latest = latest_reviews(&catalog.reviews, LATEST_REVIEWS_LIMIT);
    assert_eq!(ids(&latest), vec!["r6", "r1", "r5"]);
}

#[test]
fn summary_counts_per_star_and_averages() {
    let reviews = inbox();
    let summary = rating_summary(&reviews);
    assert_eq!(summary.count, 5);
    assert_eq!(summary.average, 4.0);
    assert_eq!(summary.count_for(5), 2);
    assert_eq!(summary.count_for(4), 2);
    assert_eq!(summary.count_for(2), 1);
    assert_eq!(summary.count_for(1), 0);
    assert_eq!(summary.count_for(9), 0);

    let empty = rating_summary(&Vec::<Review>::new());
    assert_eq!(empty.count, 0);
    assert_eq!(empty.average, 0.0);
}

#[test]
fn submit_review_validates_rating_and_comment() {
    let draft = ReviewDraft {
        truck_id: "1".to_string(),
        user_id: "u1".to_string(),
        username: "Sarah M.".to_string(),
        rating: 4,
        comment: "  Lovely pies  ".to_string(),
    };

    let created = submit_review(draft.clone(), day(2024, 4, 2)).unwrap();
    assert_eq!(created.comment, "Lovely pies");
    assert_eq!(created.date, "2024-04-02");
    assert_eq!(created.truck_id, "1");
    assert!(created.reply.is_none());

    let zero = ReviewDraft {
        rating: 0,
        ..draft.clone()
    };
    assert_eq!(
        submit_review(zero, day(2024, 4, 2)).unwrap_err(),
        ReviewError::InvalidRating(0)
    );

    let blank = ReviewDraft {
        comment: "   ".to_string(),
        ..draft
    };
    assert_eq!(
        submit_review(blank, day(2024, 4, 2)).unwrap_err(),
        ReviewError::EmptyComment
    );
}

#[test]
fn board_copies_truck_reviews_and_accepts_replies() {
    let catalog = Catalog::sample().unwrap();
    let mut board = ReviewBoard::for_truck(&catalog, "1");
    assert_eq!(board.reviews().len(), 3);

    let replied = board
        .reply("r2", "  Thanks for waiting!  ", day(2024, 3, 1))
        .unwrap();
    let reply = replied.reply.as_ref().unwrap();
    assert_eq!(reply.text, "Thanks for waiting!");
    assert_eq!(reply.date, "2024-03-01");

    let original = catalog.reviews.iter().find(|review| review.id == "r2").unwrap();
    assert!(original.reply.is_none());
}

#[test]
fn board_rejects_blank_and_unknown_replies() {
    let catalog = Catalog::sample().unwrap();
    let mut board = ReviewBoard::for_truck(&catalog, "1");

    assert_eq!(
        board.reply("r2", " \n ", day(2024, 3, 1)).unwrap_err(),
        ReviewError::EmptyReply
    );
    assert_eq!(
        board.reply("r3", "Thanks!", day(2024, 3, 1)).unwrap_err(),
        ReviewError::ReviewNotFound("r3".to_string())
    );
}

#[test]
fn board_summary_matches_sample_reviews() {
    let catalog = Catalog::sample().unwrap();
    let board = ReviewBoard::for_truck(&catalog, "1");
    let summary = board.summary();
    assert_eq!(summary.count, 3);
    assert_eq!(summary.average, 4.0);

    let five_star = board.list(&ReviewQuery {
        rating: Some(5),
        ..ReviewQuery::default()
    });
    assert_eq!(ids(&five_star), vec!["r1"]);
}

#[test]
fn summary_ignores_out_of_range_ratings() {
    let mut reviews = inbox();
    reviews.push(review("f", 0, "2024-03-11"));
    reviews.push(review("g", 9, "2024-03-12"));

    let summary = rating_summary(&reviews);
    assert_eq!(summary.count, 5);
    assert_eq!(summary.by_star.iter().sum::<usize>(), summary.count);
    assert_eq!(summary.average, 4.0);
}
