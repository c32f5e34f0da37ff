use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::shared::pagination::SortOrder;
use crate::shared::validation::non_blank;

/// Filters for a vendor's own project listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioFilter {
    /// Case-insensitive match on title, description, client name or venue.
    pub search: Option<String>,
    pub category: Option<String>,
    /// Matches projects carrying any of these tags.
    pub tags: Vec<String>,
    pub is_featured: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PortfolioSortField {
    #[default]
    CreatedAt,
    ProjectDate,
    ViewCount,
    LikeCount,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PortfolioSort {
    pub field: PortfolioSortField,
    pub order: SortOrder,
}

/// Query string of `GET /vendors/portfolio`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PortfolioListQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    /// Comma separated, e.g. `outdoor,kandyan`.
    pub tags: Option<String>,
    pub is_featured: Option<bool>,
    #[param(value_type = Option<String>)]
    pub sort_by: Option<PortfolioSortField>,
    #[param(value_type = Option<String>)]
    pub sort_order: Option<SortOrder>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl PortfolioListQuery {
    pub fn filter(&self) -> PortfolioFilter {
        PortfolioFilter {
            search: self.search.as_deref().and_then(non_blank),
            category: self.category.as_deref().and_then(non_blank),
            tags: self
                .tags
                .as_deref()
                .map(|t| t.split(',').filter_map(non_blank).collect())
                .unwrap_or_default(),
            is_featured: self.is_featured,
        }
    }

    pub fn sort(&self) -> PortfolioSort {
        PortfolioSort {
            field: self.sort_by.unwrap_or_default(),
            order: self.sort_order.unwrap_or_default(),
        }
    }
}
