use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::entities::InquiryStatus;
use crate::shared::pagination::SortOrder;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InquiryFilter {
    pub search: Option<String>,
    pub status: Option<InquiryStatus>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum InquirySortField {
    #[default]
    LastMessageAt,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InquirySort {
    pub field: InquirySortField,
    pub order: SortOrder,
}

/// Query string of `GET /inquiries`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InquiryListQuery {
    /// Matches subject, message and special requirements.
    pub search: Option<String>,
    #[param(value_type = Option<String>)]
    pub status: Option<InquiryStatus>,
    #[param(value_type = Option<String>)]
    pub sort_by: Option<InquirySortField>,
    #[param(value_type = Option<String>)]
    pub sort_order: Option<SortOrder>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl InquiryListQuery {
    pub fn filter(&self) -> InquiryFilter {
        InquiryFilter {
            search: self
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            status: self.status,
        }
    }

    pub fn sort(&self) -> InquirySort {
        InquirySort {
            field: self.sort_by.unwrap_or_default(),
            order: self.sort_order.unwrap_or_default(),
        }
    }
}
