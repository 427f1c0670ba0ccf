// src/models/review.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const MAX_RATING: u8 = 5;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,
    pub name: String, // author shown under the comment
    pub rating: u8,
    pub comment: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_approved")]
    pub approved: bool,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDateTime,
}

fn default_approved() -> bool {
    true
}

/// Body of `POST /api/reviews/`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewReview {
    pub name: String,
    pub rating: u8,
    pub comment: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl NewReview {
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(1..=MAX_RATING).contains(&self.rating) {
            return Err("La note doit être comprise entre 1 et 5");
        }
        if let Some(email) = &self.email {
            if !crate::validation::is_valid_email(email) {
                return Err("Format d'email invalide");
            }
        }
        Ok(())
    }

    /// New reviews are published immediately.
    pub fn into_review(self, id: String, created_at: NaiveDateTime) -> Review {
        Review {
            id,
            name: self.name,
            rating: self.rating,
            comment: self.comment,
            email: self.email,
            approved: true,
            created_at,
        }
    }
}

/// Number of filled and empty stars drawn for `rating`.
pub fn star_counts(rating: u8) -> (usize, usize) {
    let filled = rating.min(MAX_RATING) as usize;
    (filled, MAX_RATING as usize - filled)
}

/// Mean rating of `reviews`, 0.0 when there are none.
pub fn average_rating(reviews: &[Review]) -> f32 {
    if reviews.is_empty() {
        return 0.0;
    }
    let total: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    total as f32 / reviews.len() as f32
}
