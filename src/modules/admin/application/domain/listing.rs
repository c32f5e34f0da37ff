use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::modules::auth::application::domain::entities::Role;
use crate::modules::ideas::application::domain::{IdeaCategory, IdeaType};
use crate::shared::pagination::SortOrder;

fn trimmed(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

// =====================================================
// Users
// =====================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListFilter {
    /// Case-insensitive match on name or email.
    pub search: Option<String>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserSortField {
    #[default]
    CreatedAt,
    Name,
    Email,
    LastLoginAt,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserSort {
    pub field: UserSortField,
    pub order: SortOrder,
}

/// Query string of `GET /admin/users`. Inactive accounts are listed too.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AdminUserListQuery {
    pub search: Option<String>,
    #[param(value_type = Option<String>)]
    pub role: Option<Role>,
    pub is_active: Option<bool>,
    #[param(value_type = Option<String>)]
    pub sort_by: Option<UserSortField>,
    #[param(value_type = Option<String>)]
    pub sort_order: Option<SortOrder>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl AdminUserListQuery {
    pub fn filter(&self) -> UserListFilter {
        UserListFilter {
            search: trimmed(&self.search),
            role: self.role,
            is_active: self.is_active,
        }
    }

    pub fn sort(&self) -> UserSort {
        UserSort {
            field: self.sort_by.unwrap_or_default(),
            order: self.sort_order.unwrap_or_default(),
        }
    }
}

// =====================================================
// Content
// =====================================================

/// Admin view over ideas: drafts and published ideas alike.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentFilter {
    /// Case-insensitive match on title, content or excerpt.
    pub search: Option<String>,
    pub idea_type: Option<IdeaType>,
    pub category: Option<IdeaCategory>,
    pub is_published: Option<bool>,
    pub is_featured: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContentSortField {
    #[default]
    CreatedAt,
    PublishedAt,
    Title,
    ViewCount,
    LikeCount,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentSort {
    pub field: ContentSortField,
    pub order: SortOrder,
}

/// Query string of `GET /admin/content`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AdminContentListQuery {
    pub search: Option<String>,
    #[serde(rename = "type")]
    #[param(value_type = Option<String>)]
    pub idea_type: Option<IdeaType>,
    #[param(value_type = Option<String>)]
    pub category: Option<IdeaCategory>,
    pub is_published: Option<bool>,
    pub is_featured: Option<bool>,
    #[param(value_type = Option<String>)]
    pub sort_by: Option<ContentSortField>,
    #[param(value_type = Option<String>)]
    pub sort_order: Option<SortOrder>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl AdminContentListQuery {
    pub fn filter(&self) -> ContentFilter {
        ContentFilter {
            search: trimmed(&self.search),
            idea_type: self.idea_type,
            category: self.category,
            is_published: self.is_published,
            is_featured: self.is_featured,
        }
    }

    pub fn sort(&self) -> ContentSort {
        ContentSort {
            field: self.sort_by.unwrap_or_default(),
            order: self.sort_order.unwrap_or_default(),
        }
    }
}
