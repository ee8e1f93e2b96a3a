use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::user::UserId;
use crate::errors::DomainError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewTarget {
    Service,
    Product,
    Professional,
}

/// A review left by a user for a service, product, or professional.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub user_id: UserId,
    pub user_name: String,
    pub rating: u8,
    pub comment: String,
    pub date: DateTime<Utc>,
    pub target_id: String,
    pub target_type: ReviewTarget,
}

impl Review {
    /// Builds a review after checking the rating range and that the comment
    /// is not blank.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        user_id: UserId,
        user_name: impl Into<String>,
        rating: u8,
        comment: impl Into<String>,
        target_id: impl Into<String>,
        target_type: ReviewTarget,
    ) -> Result<Self, DomainError> {
        if !(1..=5).contains(&rating) {
            return Err(DomainError::RatingOutOfRange { rating });
        }

        let comment = comment.into();
        if comment.trim().is_empty() {
            return Err(DomainError::InvariantViolation(
                "review comment must not be blank".to_string(),
            ));
        }

        Ok(Self {
            id: id.into(),
            user_id,
            user_name: user_name.into(),
            rating,
            comment,
            date: Utc::now(),
            target_id: target_id.into(),
            target_type,
        })
    }
}
