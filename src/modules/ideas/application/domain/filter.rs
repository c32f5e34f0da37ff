use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::entities::{IdeaCategory, IdeaType};
use crate::shared::pagination::SortOrder;

/// Filters for the public idea listing; only active, published ideas are listed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdeaFilter {
    pub search: Option<String>,
    pub idea_type: Option<IdeaType>,
    pub category: Option<IdeaCategory>,
    pub tag: Option<String>,
    pub is_featured: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum IdeaSortBy {
    #[default]
    Trending,
    Latest,
    /// Views, then likes.
    Popular,
    Views,
    Likes,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdeaSort {
    pub by: IdeaSortBy,
    pub order: SortOrder,
}

impl IdeaSort {
    pub fn is_trending(&self) -> bool {
        self.by == IdeaSortBy::Trending
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IdeaListQuery {
    /// Matches title, content, excerpt and tags.
    pub search: Option<String>,
    #[serde(rename = "type")]
    #[param(value_type = Option<String>)]
    pub idea_type: Option<IdeaType>,
    #[param(value_type = Option<String>)]
    pub category: Option<IdeaCategory>,
    pub tag: Option<String>,
    pub is_featured: Option<bool>,
    #[param(value_type = Option<String>)]
    pub sort_by: Option<IdeaSortBy>,
    #[param(value_type = Option<String>)]
    pub order: Option<SortOrder>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl IdeaListQuery {
    pub fn filter(&self) -> IdeaFilter {
        let trimmed = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        IdeaFilter {
            search: trimmed(&self.search),
            idea_type: self.idea_type,
            category: self.category,
            tag: trimmed(&self.tag),
            is_featured: self.is_featured,
        }
    }

    pub fn sort(&self) -> IdeaSort {
        IdeaSort {
            by: self.sort_by.unwrap_or_default(),
            order: self.order.unwrap_or_default(),
        }
    }
}
