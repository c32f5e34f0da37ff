use serde::Serialize;
use utoipa::ToSchema;

use super::entities::Review;

/// Average and count of a vendor's visible reviews.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingSummary {
    pub average: f64,
    pub count: i32,
}

impl RatingSummary {
    /// Average rounded half away from zero to one decimal; `0.0` with no ratings.
    pub fn from_ratings(ratings: &[i32]) -> Self {
        if ratings.is_empty() {
            return Self {
                average: 0.0,
                count: 0,
            };
        }

        let sum: i64 = ratings.iter().map(|r| i64::from(*r)).sum();
        let average = sum as f64 / ratings.len() as f64;

        Self {
            average: round_one_decimal(average),
            count: ratings.len() as i32,
        }
    }
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, ToSchema)]
pub struct RatingDistribution {
    #[serde(rename = "5")]
    pub five: u32,
    #[serde(rename = "4")]
    pub four: u32,
    #[serde(rename = "3")]
    pub three: u32,
    #[serde(rename = "2")]
    pub two: u32,
    #[serde(rename = "1")]
    pub one: u32,
}

impl RatingDistribution {
    fn record(&mut self, rating: i32) {
        match rating {
            5 => self.five += 1,
            4 => self.four += 1,
            3 => self.three += 1,
            2 => self.two += 1,
            1 => self.one += 1,
            _ => {}
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct VendorReviewStats {
    pub total_reviews: u32,
    pub average_rating: f64,
    pub rating_distribution: RatingDistribution,
    pub verified_reviews: u32,
    pub reviews_with_images: u32,
    pub would_recommend_count: u32,
}

impl VendorReviewStats {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let ratings: Vec<i32> = reviews.iter().map(|r| r.rating).collect();
        let mut stats = VendorReviewStats {
            total_reviews: reviews.len() as u32,
            average_rating: RatingSummary::from_ratings(&ratings).average,
            ..Default::default()
        };

        for review in reviews {
            stats.rating_distribution.record(review.rating);
            if review.is_verified {
                stats.verified_reviews += 1;
            }
            if !review.images.is_empty() {
                stats.reviews_with_images += 1;
            }
            if review.would_recommend == Some(true) {
                stats.would_recommend_count += 1;
            }
        }

        stats
    }
}
