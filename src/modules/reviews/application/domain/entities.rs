use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::non_blank;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Review {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub vendor_id: Uuid,
    pub booking_id: Uuid,
    pub rating: i32,
    pub title: Option<String>,
    pub comment: Option<String>,
    pub images: Vec<String>,
    pub service_category: Option<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub would_recommend: Option<bool>,
    pub quality_rating: Option<i32>,
    pub value_rating: Option<i32>,
    pub communication_rating: Option<i32>,
    pub timeliness_rating: Option<i32>,
    pub helpful_count: i32,
    pub not_helpful_count: i32,
    pub vendor_response: Option<String>,
    pub vendor_response_at: Option<DateTime<Utc>>,
    pub is_verified: bool,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReviewValidationError {
    #[error("{0}")]
    Rating(String),

    #[error("{0}")]
    Field(String),
}

fn check_rating(name: &str, value: Option<i32>) -> Result<(), ReviewValidationError> {
    match value {
        Some(v) if !(MIN_RATING..=MAX_RATING).contains(&v) => Err(ReviewValidationError::Rating(
            format!("{name} must be between {MIN_RATING} and {MAX_RATING}"),
        )),
        _ => Ok(()),
    }
}

/// Trims entries and drops the blank ones.
fn clean_list(values: Vec<String>) -> Vec<String> {
    values.iter().filter_map(|v| non_blank(v)).collect()
}

/// Body of `POST /reviews`.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct ReviewRequest {
    pub vendor_id: Uuid,
    pub booking_id: Uuid,
    #[schema(minimum = 1, maximum = 5, example = 5)]
    pub rating: i32,
    pub title: Option<String>,
    pub comment: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub service_category: Option<String>,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    pub would_recommend: Option<bool>,
    pub quality_rating: Option<i32>,
    pub value_rating: Option<i32>,
    pub communication_rating: Option<i32>,
    pub timeliness_rating: Option<i32>,
}

/// A validated review by `customer_id`; verified and published on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub customer_id: Uuid,
    pub vendor_id: Uuid,
    pub booking_id: Uuid,
    pub rating: i32,
    pub title: Option<String>,
    pub comment: Option<String>,
    pub images: Vec<String>,
    pub service_category: Option<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub would_recommend: Option<bool>,
    pub quality_rating: Option<i32>,
    pub value_rating: Option<i32>,
    pub communication_rating: Option<i32>,
    pub timeliness_rating: Option<i32>,
}

impl NewReview {
    pub fn from_request(
        customer_id: Uuid,
        request: ReviewRequest,
    ) -> Result<Self, ReviewValidationError> {
        check_rating("Rating", Some(request.rating))?;
        check_rating("Quality rating", request.quality_rating)?;
        check_rating("Value rating", request.value_rating)?;
        check_rating("Communication rating", request.communication_rating)?;
        check_rating("Timeliness rating", request.timeliness_rating)?;

        Ok(Self {
            customer_id,
            vendor_id: request.vendor_id,
            booking_id: request.booking_id,
            rating: request.rating,
            title: request.title.as_deref().and_then(non_blank),
            comment: request.comment.as_deref().and_then(non_blank),
            images: clean_list(request.images),
            service_category: request.service_category.as_deref().and_then(non_blank),
            pros: clean_list(request.pros),
            cons: clean_list(request.cons),
            would_recommend: request.would_recommend,
            quality_rating: request.quality_rating,
            value_rating: request.value_rating,
            communication_rating: request.communication_rating,
            timeliness_rating: request.timeliness_rating,
        })
    }
}

/// Body of `PUT /reviews/{id}`. The vendor, booking and moderation flags are fixed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct ReviewChanges {
    pub rating: Option<i32>,
    pub title: Option<String>,
    pub comment: Option<String>,
    pub images: Option<Vec<String>>,
    pub service_category: Option<String>,
    pub pros: Option<Vec<String>>,
    pub cons: Option<Vec<String>>,
    pub would_recommend: Option<bool>,
    pub quality_rating: Option<i32>,
    pub value_rating: Option<i32>,
    pub communication_rating: Option<i32>,
    pub timeliness_rating: Option<i32>,
}

impl ReviewChanges {
    pub fn is_empty(&self) -> bool {
        self == &ReviewChanges::default()
    }
}

impl Review {
    pub fn apply(
        &mut self,
        changes: ReviewChanges,
        now: DateTime<Utc>,
    ) -> Result<(), ReviewValidationError> {
        check_rating("Rating", changes.rating)?;
        check_rating("Quality rating", changes.quality_rating)?;
        check_rating("Value rating", changes.value_rating)?;
        check_rating("Communication rating", changes.communication_rating)?;
        check_rating("Timeliness rating", changes.timeliness_rating)?;

        if let Some(rating) = changes.rating {
            self.rating = rating;
        }
        if let Some(title) = changes.title {
            self.title = non_blank(&title);
        }
        if let Some(comment) = changes.comment {
            self.comment = non_blank(&comment);
        }
        if let Some(images) = changes.images {
            self.images = clean_list(images);
        }
        if let Some(category) = changes.service_category {
            self.service_category = non_blank(&category);
        }
        if let Some(pros) = changes.pros {
            self.pros = clean_list(pros);
        }
        if let Some(cons) = changes.cons {
            self.cons = clean_list(cons);
        }
        if changes.would_recommend.is_some() {
            self.would_recommend = changes.would_recommend;
        }
        if changes.quality_rating.is_some() {
            self.quality_rating = changes.quality_rating;
        }
        if changes.value_rating.is_some() {
            self.value_rating = changes.value_rating;
        }
        if changes.communication_rating.is_some() {
            self.communication_rating = changes.communication_rating;
        }
        if changes.timeliness_rating.is_some() {
            self.timeliness_rating = changes.timeliness_rating;
        }

        self.updated_at = now;
        Ok(())
    }
}

/// Body of `POST /reviews/{id}/response`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct VendorResponseRequest {
    #[schema(example = "Thank you for choosing us!")]
    pub response: String,
}

/// Body of `POST /reviews/{id}/helpful`.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct HelpfulVote {
    pub is_helpful: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct HelpfulCounts {
    pub helpful_count: i32,
    pub not_helpful_count: i32,
}
