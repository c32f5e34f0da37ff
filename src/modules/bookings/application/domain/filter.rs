use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::entities::{BookingStatus, PaymentStatus};
use crate::shared::pagination::SortOrder;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingFilter {
    pub search: Option<String>,
    pub status: Option<BookingStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub service_category: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BookingSortField {
    #[default]
    BookingDate,
    CreatedAt,
    TotalAmount,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingSort {
    pub field: BookingSortField,
    pub order: SortOrder,
}

/// Query string of `GET /bookings`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookingListQuery {
    /// Matches service name, venue, notes and special requirements.
    pub search: Option<String>,
    #[param(value_type = Option<String>)]
    pub status: Option<BookingStatus>,
    #[param(value_type = Option<String>)]
    pub payment_status: Option<PaymentStatus>,
    pub service_category: Option<String>,
    /// Earliest booking date, inclusive.
    pub start_date: Option<NaiveDate>,
    /// Latest booking date, inclusive.
    pub end_date: Option<NaiveDate>,
    #[param(value_type = Option<String>)]
    pub sort_by: Option<BookingSortField>,
    #[param(value_type = Option<String>)]
    pub sort_order: Option<SortOrder>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl BookingListQuery {
    pub fn filter(&self) -> BookingFilter {
        BookingFilter {
            search: self
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            status: self.status,
            payment_status: self.payment_status,
            service_category: self.service_category.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }

    pub fn sort(&self) -> BookingSort {
        BookingSort {
            field: self.sort_by.unwrap_or_default(),
            order: self.sort_order.unwrap_or_default(),
        }
    }
}
