//! Review domain model.
//!
//! # Invariants
//! - `rating` is an integer in `1..=5`.
//! - `truck_id` is a lookup key only; a review never owns its truck.

use serde::{Deserialize, Serialize};

pub const MIN_REVIEW_RATING: u8 = 1;
pub const MAX_REVIEW_RATING: u8 = 5;

/// Owner response attached to a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewReply {
    pub text: String,
    pub date: String,
}

/// Customer review of one truck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    /// Weak reference to [`crate::FoodTruck::id`].
    pub truck_id: String,
    pub user_id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_image: Option<String>,
    pub rating: u8,
    pub comment: String,
    /// ISO-8601 date or datetime string.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<ReviewReply>,
}

impl Review {
    pub fn has_reply(&self) -> bool {
        self.reply.is_some()
    }
}
