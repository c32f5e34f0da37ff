//! Engagement-based ranking for the idea feed.
//!
//! `score = 0.3·views + 0.5·likes + 0.2·shares − 0.1·days_since_creation`
//!
//! Scores are computed per request over a bounded window of candidates and
//! never stored.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::entities::Idea;

const VIEW_WEIGHT: f64 = 0.3;
const LIKE_WEIGHT: f64 = 0.5;
const SHARE_WEIGHT: f64 = 0.2;
const AGE_PENALTY_PER_DAY: f64 = 0.1;
const SECONDS_PER_DAY: f64 = 86_400.0;

pub fn trending_score(idea: &Idea, now: DateTime<Utc>) -> f64 {
    let age_days = (now - idea.created_at).num_milliseconds() as f64 / 1000.0 / SECONDS_PER_DAY;

    VIEW_WEIGHT * f64::from(idea.view_count)
        + LIKE_WEIGHT * f64::from(idea.like_count)
        + SHARE_WEIGHT * f64::from(idea.share_count)
        - AGE_PENALTY_PER_DAY * age_days
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TrendingIdea {
    #[serde(flatten)]
    pub idea: Idea,
    pub trending_score: f64,
}

fn scored(ideas: Vec<Idea>, now: DateTime<Utc>) -> Vec<TrendingIdea> {
    ideas
        .into_iter()
        .map(|idea| TrendingIdea {
            trending_score: trending_score(&idea, now),
            idea,
        })
        .collect()
}

/// Highest score first. Equal scores keep their input order.
pub fn rank_by_trending(ideas: Vec<Idea>, now: DateTime<Utc>) -> Vec<TrendingIdea> {
    let mut ranked = scored(ideas, now);
    ranked.sort_by(|a, b| b.trending_score.total_cmp(&a.trending_score));
    ranked
}

/// Lowest score first. Equal scores still keep their input order.
pub fn rank_by_trending_ascending(ideas: Vec<Idea>, now: DateTime<Utc>) -> Vec<TrendingIdea> {
    let mut ranked = scored(ideas, now);
    ranked.sort_by(|a, b| a.trending_score.total_cmp(&b.trending_score));
    ranked
}
