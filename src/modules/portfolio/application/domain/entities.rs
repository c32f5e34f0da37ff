use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::non_blank;

/// One picture of a showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PortfolioItem {
    #[schema(example = "https://cdn.example.com/portfolio/lotus-1.jpg")]
    pub image_url: String,
    pub caption: Option<String>,
    pub alt_text: Option<String>,
    /// Display order, ascending.
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub is_primary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Portfolio {
    pub id: Uuid,
    pub vendor_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub items: Vec<PortfolioItem>,
    pub project_date: Option<NaiveDate>,
    pub venue: Option<String>,
    pub client_name: Option<String>,
    pub budget: Option<f64>,
    pub duration: Option<String>,
    pub team_size: Option<i32>,
    pub challenges: Option<String>,
    pub solutions: Option<String>,
    pub testimonials: Option<String>,
    /// Highlighted on the vendor's own page.
    pub is_featured: bool,
    pub view_count: i32,
    pub like_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Owner-editable fields, shared by creation and updates.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct PortfolioDetails {
    #[schema(example = "Sunset wedding at Bentota")]
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub items: Option<Vec<PortfolioItem>>,
    pub project_date: Option<NaiveDate>,
    pub venue: Option<String>,
    pub client_name: Option<String>,
    pub budget: Option<f64>,
    pub duration: Option<String>,
    pub team_size: Option<i32>,
    pub challenges: Option<String>,
    pub solutions: Option<String>,
    pub testimonials: Option<String>,
    pub is_featured: Option<bool>,
}

impl PortfolioDetails {
    pub fn is_empty(&self) -> bool {
        self == &PortfolioDetails::default()
    }

    /// Checks the fields that are present; absent fields are left untouched on update.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err("Title cannot be empty".into());
            }
        }
        if let Some(items) = &self.items {
            if items.iter().any(|i| i.image_url.trim().is_empty()) {
                return Err("Every portfolio item needs an image URL".into());
            }
        }
        if self.budget.is_some_and(|b| !b.is_finite() || b < 0.0) {
            return Err("Budget must be non-negative".into());
        }
        if self.team_size.is_some_and(|t| t < 1) {
            return Err("Team size must be at least 1".into());
        }
        Ok(())
    }

    /// Trims tags and drops blank ones; sorts items by position.
    pub fn normalized(mut self) -> Self {
        if let Some(tags) = self.tags.take() {
            self.tags = Some(tags.iter().filter_map(|t| non_blank(t)).collect());
        }
        if let Some(items) = self.items.as_mut() {
            items.sort_by_key(|i| i.position);
        }
        if let Some(title) = self.title.take() {
            self.title = Some(title.trim().to_string());
        }
        self
    }
}

/// A validated project ready to be inserted for `vendor_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPortfolio {
    pub vendor_id: Uuid,
    pub title: String,
    pub details: PortfolioDetails,
}

impl NewPortfolio {
    pub fn from_details(vendor_id: Uuid, details: PortfolioDetails) -> Result<Self, String> {
        details.validate()?;

        let title = details
            .title
            .as_deref()
            .and_then(non_blank)
            .ok_or("Title is required")?;

        Ok(Self {
            vendor_id,
            title,
            details: details.normalized(),
        })
    }
}

/// Counters returned after a like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct PortfolioLikes {
    pub portfolio_id: Uuid,
    pub like_count: i32,
}
