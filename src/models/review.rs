// src/models/review.rs
use serde::{Deserialize, Serialize};

use crate::models::author::Author;
use crate::models::game::Game;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,       // Server-assigned ID
    pub rating: i32,      // 1-5 by convention; the client does not validate bounds
    pub content: String,  // Free-text body of the review
    /// The reviewer, present when the query selected it (game details do).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    /// The reviewed game, present when the query selected it (author history does).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<Game>,
}

/// Mean of the ratings, or `None` when there are no reviews to average.
pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let total: i64 = reviews.iter().map(|review| i64::from(review.rating)).sum();
    Some(total as f64 / reviews.len() as f64)
}
