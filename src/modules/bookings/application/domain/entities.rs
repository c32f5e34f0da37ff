use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use super::payment::PaymentState;
use crate::modules::vendors::application::domain::default_currency;
use crate::shared::validation::{is_valid_time_of_day, non_blank};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 5] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::InProgress,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::InProgress => "in_progress",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// `pending → confirmed → in_progress → completed`, and
    /// `pending | confirmed → cancelled`.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Confirmed, InProgress)
                | (InProgress, Completed)
                | (Pending, Cancelled)
                | (Confirmed, Cancelled)
        )
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookingStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown booking status '{s}'"))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Partial,
    Paid,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Partial => "partial",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Refunded => "refunded",
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PaymentStatus::Pending),
            "partial" => Ok(PaymentStatus::Partial),
            "paid" => Ok(PaymentStatus::Paid),
            "refunded" => Ok(PaymentStatus::Refunded),
            other => Err(format!("unknown payment status '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookingPackage {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub inclusions: Vec<String>,
    pub duration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Booking {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub vendor_id: Uuid,
    pub service_name: String,
    pub service_category: String,
    pub booking_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub venue: Option<String>,
    pub guest_count: Option<i32>,
    pub total_amount: f64,
    pub currency: String,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub paid_amount: f64,
    pub remaining_amount: f64,
    pub packages: Vec<BookingPackage>,
    pub special_requirements: Option<String>,
    pub notes: Option<String>,
    pub cancellation_reason: Option<String>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub cancelled_by: Option<Uuid>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingChangeError {
    #[error("Cannot change booking status from {from} to {to}")]
    InvalidTransition {
        from: BookingStatus,
        to: BookingStatus,
    },

    #[error("{0}")]
    Invalid(String),
}

impl Booking {
    /// Applies a party's changes. Status moves are checked against the
    /// booking state machine; a paid amount re-derives the payment state.
    pub fn apply(
        &mut self,
        changes: BookingChanges,
        changed_by: Uuid,
        now: DateTime<Utc>,
    ) -> Result<(), BookingChangeError> {
        changes.validate().map_err(BookingChangeError::Invalid)?;

        if let Some(next) = changes.status {
            if next != self.status {
                if !self.status.can_transition_to(next) {
                    return Err(BookingChangeError::InvalidTransition {
                        from: self.status,
                        to: next,
                    });
                }
                match next {
                    BookingStatus::Cancelled => {
                        self.cancelled_at = Some(now);
                        self.cancelled_by = Some(changed_by);
                    }
                    BookingStatus::Completed => self.completed_at = Some(now),
                    _ => {}
                }
                self.status = next;
            }
        }

        if let Some(status) = changes.payment_status {
            self.payment_status = status;
        }

        if let Some(paid) = changes.paid_amount {
            let state = PaymentState::derive(self.total_amount, paid, self.payment_status);
            self.paid_amount = paid;
            self.remaining_amount = state.remaining_amount;
            self.payment_status = state.status;
        }

        if let Some(notes) = changes.notes {
            self.notes = Some(notes);
        }
        if let Some(reason) = changes.cancellation_reason {
            self.cancellation_reason = Some(reason);
        }
        if let Some(venue) = changes.venue {
            self.venue = Some(venue);
        }
        if let Some(count) = changes.guest_count {
            self.guest_count = Some(count);
        }
        if let Some(requirements) = changes.special_requirements {
            self.special_requirements = Some(requirements);
        }

        self.updated_at = now;
        Ok(())
    }
}

/// Body of `POST /bookings`.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct BookingRequest {
    pub vendor_id: Uuid,
    #[schema(example = "Full day photography")]
    pub service_name: String,
    #[schema(example = "photography")]
    pub service_category: String,
    pub booking_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[schema(example = "09:00")]
    pub start_time: Option<String>,
    #[schema(example = "18:00")]
    pub end_time: Option<String>,
    pub venue: Option<String>,
    pub guest_count: Option<i32>,
    pub total_amount: f64,
    pub currency: Option<String>,
    pub special_requirements: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub packages: Vec<BookingPackage>,
}

/// A validated booking request from `customer_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub customer_id: Uuid,
    pub vendor_id: Uuid,
    pub service_name: String,
    pub service_category: String,
    pub booking_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub venue: Option<String>,
    pub guest_count: Option<i32>,
    pub total_amount: f64,
    pub currency: String,
    pub special_requirements: Option<String>,
    pub notes: Option<String>,
    pub packages: Vec<BookingPackage>,
}

impl NewBooking {
    pub fn from_request(customer_id: Uuid, request: BookingRequest) -> Result<Self, String> {
        let service_name =
            non_blank(&request.service_name).ok_or("Service name is required")?;
        let service_category =
            non_blank(&request.service_category).ok_or("Service category is required")?;

        if !request.total_amount.is_finite() || request.total_amount < 0.0 {
            return Err("Total amount must be a non-negative number".into());
        }
        if request
            .end_date
            .is_some_and(|end| end < request.booking_date)
        {
            return Err("End date cannot be before the booking date".into());
        }
        for time in [&request.start_time, &request.end_time].into_iter().flatten() {
            if !is_valid_time_of_day(time) {
                return Err(format!("Invalid time '{time}', expected HH:MM"));
            }
        }
        if request.guest_count.is_some_and(|g| g < 0) {
            return Err("Guest count cannot be negative".into());
        }
        if request
            .packages
            .iter()
            .any(|p| p.name.trim().is_empty() || !p.price.is_finite() || p.price < 0.0)
        {
            return Err("Every package needs a name and a non-negative price".into());
        }

        Ok(Self {
            customer_id,
            vendor_id: request.vendor_id,
            service_name,
            service_category,
            booking_date: request.booking_date,
            end_date: request.end_date,
            start_time: request.start_time,
            end_time: request.end_time,
            venue: request.venue,
            guest_count: request.guest_count,
            total_amount: request.total_amount,
            currency: request
                .currency
                .and_then(|c| non_blank(&c))
                .unwrap_or_else(default_currency),
            special_requirements: request.special_requirements,
            notes: request.notes,
            packages: request.packages,
        })
    }
}

/// Body of `PUT /bookings/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct BookingChanges {
    pub status: Option<BookingStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub paid_amount: Option<f64>,
    pub notes: Option<String>,
    pub cancellation_reason: Option<String>,
    pub venue: Option<String>,
    pub guest_count: Option<i32>,
    pub special_requirements: Option<String>,
}

impl BookingChanges {
    pub fn is_empty(&self) -> bool {
        self == &BookingChanges::default()
    }

    fn validate(&self) -> Result<(), String> {
        if self
            .paid_amount
            .is_some_and(|paid| !paid.is_finite() || paid < 0.0)
        {
            return Err("Paid amount must be a non-negative number".into());
        }
        if self.guest_count.is_some_and(|g| g < 0) {
            return Err("Guest count cannot be negative".into());
        }
        Ok(())
    }
}

/// What reviews need to know about a booking.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRef {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub vendor_id: Uuid,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct BookingStats {
    pub total: u64,
    pub pending: u64,
    pub confirmed: u64,
    pub in_progress: u64,
    pub completed: u64,
    pub cancelled: u64,
}

impl BookingStats {
    pub fn from_counts(counts: &[(BookingStatus, u64)]) -> Self {
        let mut stats = BookingStats::default();
        for (status, count) in counts {
            stats.total += count;
            match status {
                BookingStatus::Pending => stats.pending += count,
                BookingStatus::Confirmed => stats.confirmed += count,
                BookingStatus::InProgress => stats.in_progress += count,
                BookingStatus::Completed => stats.completed += count,
                BookingStatus::Cancelled => stats.cancelled += count,
            }
        }
        stats
    }
}
