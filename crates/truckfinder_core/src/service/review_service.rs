//! Review listing, submission and owner replies.
//!
//! # Responsibility
//! - Filter and order reviews for the truck page and the owner inbox.
//! - Summarize ratings for the review panel.
//! - Validate new reviews and owner replies against a private review copy.
//!
//! # Invariants
//! - Sorting is stable; reviews with unparseable dates sort last by date.
//! - Replies never touch the catalog snapshot.

use crate::catalog::Catalog;
use crate::format::{average_rating, parse_timestamp};
use crate::model::review::{Review, ReviewReply, MAX_REVIEW_RATING, MIN_REVIEW_RATING};
use chrono::{NaiveDate, NaiveDateTime};
use log::info;
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Reviews shown on the home page.
pub const LATEST_REVIEWS_LIMIT: usize = 3;
const REVIEW_DATE_FORMAT: &str = "%Y-%m-%d";

/// Review submission and reply errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewError {
    InvalidRating(u8),
    EmptyComment,
    EmptyReply,
    ReviewNotFound(String),
}

impl Display for ReviewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRating(rating) => {
                write!(f, "rating must be between 1 and 5, got {rating}")
            }
            Self::EmptyComment => write!(f, "review comment cannot be empty"),
            Self::EmptyReply => write!(f, "reply text cannot be empty"),
            Self::ReviewNotFound(id) => write!(f, "review not found: {id}"),
        }
    }
}

impl Error for ReviewError {}

/// Ordering options of the owner review inbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewSort {
    #[default]
    Newest,
    Oldest,
    Highest,
    Lowest,
}

impl ReviewSort {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Highest => "highest",
            Self::Lowest => "lowest",
        }
    }

    fn compare(self, left: &Review, right: &Review) -> Ordering {
        match self {
            Self::Newest => compare_dates(left, right, true),
            Self::Oldest => compare_dates(left, right, false),
            Self::Highest => right.rating.cmp(&left.rating),
            Self::Lowest => left.rating.cmp(&right.rating),
        }
    }
}

impl FromStr for ReviewSort {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "highest" => Ok(Self::Highest),
            "lowest" => Ok(Self::Lowest),
            other => Err(format!(
                "unsupported review sort `{other}`; expected newest|oldest|highest|lowest"
            )),
        }
    }
}

// Undated reviews always trail dated ones, whatever the direction.
fn compare_dates(left: &Review, right: &Review, newest_first: bool) -> Ordering {
    match (review_timestamp(left), review_timestamp(right)) {
        (Some(left), Some(right)) if newest_first => right.cmp(&left),
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn review_timestamp(review: &Review) -> Option<NaiveDateTime> {
    parse_timestamp(&review.date)
}

/// Filter and sort options for [`list_reviews`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewQuery {
    /// Keep only reviews with exactly this star rating.
    pub rating: Option<u8>,
    pub sort: ReviewSort,
}

/// Filters by exact rating, then stable-sorts.
pub fn list_reviews<'a, I>(reviews: I, query: &ReviewQuery) -> Vec<&'a Review>
where
    I: IntoIterator<Item = &'a Review>,
{
    let mut listed = reviews
        .into_iter()
        .filter(|review| query.rating.map_or(true, |rating| review.rating == rating))
        .collect::<Vec<_>>();
    listed.sort_by(|left, right| query.sort.compare(left, right));
    listed
}

/// Most recent `limit` reviews across the catalog.
pub fn latest_reviews(reviews: &[Review], limit: usize) -> Vec<&Review> {
    let mut latest = list_reviews(reviews, &ReviewQuery::default());
    latest.truncate(limit);
    latest
}

/// Aggregate figures of the review panel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RatingSummary {
    pub count: usize,
    /// Mean rating rounded to one decimal; `0.0` without reviews.
    pub average: f64,
    /// Count per star, index 0 holding 1-star reviews.
    pub by_star: [usize; 5],
}

impl RatingSummary {
    /// Number of reviews with `stars` stars; 0 outside `1..=5`.
    pub fn count_for(&self, stars: u8) -> usize {
        if !(MIN_REVIEW_RATING..=MAX_REVIEW_RATING).contains(&stars) {
            return 0;
        }
        self.by_star[usize::from(stars - 1)]
    }
}

pub fn rating_summary<'a, I>(reviews: I) -> RatingSummary
where
    I: IntoIterator<Item = &'a Review>,
{
    let mut by_star = [0usize; 5];
    let mut ratings = Vec::new();
    // Out-of-range ratings are left out of every figure.
    for review in reviews {
        if !(MIN_REVIEW_RATING..=MAX_REVIEW_RATING).contains(&review.rating) {
            continue;
        }
        by_star[usize::from(review.rating - 1)] += 1;
        ratings.push(f64::from(review.rating));
    }

    RatingSummary {
        count: ratings.len(),
        average: average_rating(&ratings),
        by_star,
    }
}

/// Customer input for a new review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    pub truck_id: String,
    pub user_id: String,
    pub username: String,
    pub rating: u8,
    pub comment: String,
}

/// Validates `draft` and materializes a review dated `date`.
pub fn submit_review(draft: ReviewDraft, date: NaiveDate) -> Result<Review, ReviewError> {
    if !(MIN_REVIEW_RATING..=MAX_REVIEW_RATING).contains(&draft.rating) {
        return Err(ReviewError::InvalidRating(draft.rating));
    }
    let comment = draft.comment.trim();
    if comment.is_empty() {
        return Err(ReviewError::EmptyComment);
    }

    let review = Review {
        id: Uuid::new_v4().to_string(),
        truck_id: draft.truck_id,
        user_id: draft.user_id,
        username: draft.username,
        user_image: None,
        rating: draft.rating,
        comment: comment.to_string(),
        date: date.format(REVIEW_DATE_FORMAT).to_string(),
        reply: None,
    };
    info!(
        "event=review_submit module=reviews status=ok truck_id={} review_id={} rating={}",
        review.truck_id, review.id, review.rating
    );
    Ok(review)
}

/// Owner inbox holding a private copy of one truck's reviews.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReviewBoard {
    reviews: Vec<Review>,
}

impl ReviewBoard {
    pub fn new(reviews: Vec<Review>) -> Self {
        Self { reviews }
    }

    /// Copies the reviews of `truck_id` out of the catalog.
    pub fn for_truck(catalog: &Catalog, truck_id: &str) -> Self {
        Self::new(catalog.reviews_for(truck_id).into_iter().cloned().collect())
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn list(&self, query: &ReviewQuery) -> Vec<&Review> {
        list_reviews(&self.reviews, query)
    }

    pub fn summary(&self) -> RatingSummary {
        rating_summary(&self.reviews)
    }

    /// Attaches (or replaces) the owner reply on one review.
    pub fn reply(
        &mut self,
        review_id: &str,
        text: &str,
        date: NaiveDate,
    ) -> Result<&Review, ReviewError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ReviewError::EmptyReply);
        }

        let review = self
            .reviews
            .iter_mut()
            .find(|review| review.id == review_id)
            .ok_or_else(|| ReviewError::ReviewNotFound(review_id.to_string()))?;
        review.reply = Some(ReviewReply {
            text: text.to_string(),
            date: date.format(REVIEW_DATE_FORMAT).to_string(),
        });
        info!(
            "event=review_reply module=reviews status=ok review_id={review_id} truck_id={}",
            review.truck_id
        );
        Ok(&*review)
    }

    /// Adds a freshly submitted review to the board.
    pub fn push(&mut self, review: Review) {
        self.reviews.push(review);
    }
}
