use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::non_blank;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    #[default]
    Pending,
    Replied,
    Closed,
}

impl InquiryStatus {
    pub const ALL: [InquiryStatus; 3] = [
        InquiryStatus::Pending,
        InquiryStatus::Replied,
        InquiryStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryStatus::Pending => "pending",
            InquiryStatus::Replied => "replied",
            InquiryStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InquiryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InquiryStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown inquiry status '{s}'"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
        }
    }
}

impl FromStr for Urgency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Urgency::Low),
            "medium" => Ok(Urgency::Medium),
            "high" => Ok(Urgency::High),
            other => Err(format!("unknown urgency '{other}'")),
        }
    }
}

/// One entry of the conversation thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InquiryMessage {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub message: String,
    #[serde(default)]
    pub attachments: Vec<String>,
    #[serde(default)]
    pub is_read: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl InquiryMessage {
    fn new(sender_id: Uuid, message: String, attachments: Vec<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender_id,
            message,
            attachments,
            is_read: false,
            read_at: None,
            created_at: now,
        }
    }

    pub fn is_unread_for(&self, reader: Uuid) -> bool {
        self.sender_id != reader && !self.is_read
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Inquiry {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub vendor_id: Uuid,
    pub subject: String,
    pub message: String,
    pub attachments: Vec<String>,
    pub status: InquiryStatus,
    pub messages: Vec<InquiryMessage>,
    pub wedding_date: Option<NaiveDate>,
    pub guest_count: Option<i32>,
    pub budget: Option<f64>,
    pub venue: Option<String>,
    pub special_requirements: Option<String>,
    pub preferred_contact_method: Option<String>,
    pub urgency: Option<Urgency>,
    pub last_message_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub closed_by: Option<Uuid>,
    pub closed_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Inquiry {
    /// Appends to the thread. The first answer to a pending inquiry marks it replied.
    pub fn add_message(
        &mut self,
        sender_id: Uuid,
        request: MessageRequest,
        now: DateTime<Utc>,
    ) -> Result<(), String> {
        let message = non_blank(&request.message).ok_or("Message cannot be empty")?;

        self.messages
            .push(InquiryMessage::new(sender_id, message, request.attachments, now));
        self.last_message_at = now;
        if self.status == InquiryStatus::Pending {
            self.status = InquiryStatus::Replied;
        }
        self.updated_at = now;
        Ok(())
    }

    /// Marks the messages `reader` received as read; returns how many changed.
    pub fn mark_read(&mut self, reader: Uuid, now: DateTime<Utc>) -> usize {
        let mut changed = 0;
        for message in self.messages.iter_mut().filter(|m| m.is_unread_for(reader)) {
            message.is_read = true;
            message.read_at = Some(now);
            changed += 1;
        }
        if changed > 0 {
            self.updated_at = now;
        }
        changed
    }

    pub fn has_unread_for(&self, reader: Uuid) -> bool {
        self.messages.iter().any(|m| m.is_unread_for(reader))
    }

    pub fn change_status(&mut self, change: StatusChange, changed_by: Uuid, now: DateTime<Utc>) {
        if change.status == InquiryStatus::Closed {
            if self.status != InquiryStatus::Closed {
                self.closed_at = Some(now);
                self.closed_by = Some(changed_by);
            }
            if change.closed_reason.is_some() {
                self.closed_reason = change.closed_reason;
            }
        } else {
            self.closed_at = None;
            self.closed_by = None;
            self.closed_reason = None;
        }
        self.status = change.status;
        self.updated_at = now;
    }
}

/// Body of `POST /inquiries`.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct InquiryRequest {
    pub vendor_id: Uuid,
    #[schema(example = "Availability for February")]
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub attachments: Vec<String>,
    pub wedding_date: Option<NaiveDate>,
    pub guest_count: Option<i32>,
    pub budget: Option<f64>,
    pub venue: Option<String>,
    pub special_requirements: Option<String>,
    #[schema(example = "phone")]
    pub preferred_contact_method: Option<String>,
    pub urgency: Option<Urgency>,
}

/// A validated inquiry whose thread already holds the opening message.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInquiry {
    pub customer_id: Uuid,
    pub vendor_id: Uuid,
    pub subject: String,
    pub message: String,
    pub attachments: Vec<String>,
    pub messages: Vec<InquiryMessage>,
    pub wedding_date: Option<NaiveDate>,
    pub guest_count: Option<i32>,
    pub budget: Option<f64>,
    pub venue: Option<String>,
    pub special_requirements: Option<String>,
    pub preferred_contact_method: Option<String>,
    pub urgency: Option<Urgency>,
    pub created_at: DateTime<Utc>,
}

impl NewInquiry {
    pub fn from_request(
        customer_id: Uuid,
        request: InquiryRequest,
        now: DateTime<Utc>,
    ) -> Result<Self, String> {
        let subject = non_blank(&request.subject).ok_or("Subject is required")?;
        let message = non_blank(&request.message).ok_or("Message is required")?;

        if request.guest_count.is_some_and(|g| g < 0) {
            return Err("Guest count cannot be negative".into());
        }
        if request.budget.is_some_and(|b| !b.is_finite() || b < 0.0) {
            return Err("Budget must be a non-negative amount".into());
        }

        let opening = InquiryMessage::new(customer_id, message.clone(), request.attachments.clone(), now);

        Ok(Self {
            customer_id,
            vendor_id: request.vendor_id,
            subject,
            message,
            attachments: request.attachments,
            messages: vec![opening],
            wedding_date: request.wedding_date,
            guest_count: request.guest_count,
            budget: request.budget,
            venue: request.venue,
            special_requirements: request.special_requirements,
            preferred_contact_method: request.preferred_contact_method,
            urgency: request.urgency,
            created_at: now,
        })
    }
}

/// Body of `POST /inquiries/{id}/messages`.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct MessageRequest {
    pub message: String,
    #[serde(default)]
    pub attachments: Vec<String>,
}

/// Body of `PUT /inquiries/{id}/status`.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct StatusChange {
    pub status: InquiryStatus,
    pub closed_reason: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct UnreadCount {
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::stubs::sample_inquiry;

    fn message(text: &str) -> MessageRequest {
        MessageRequest {
            message: text.into(),
            attachments: vec![],
        }
    }

    #[test]
    fn opening_message_mirrors_the_request() {
        let customer = Uuid::new_v4();
        let now = Utc::now();
        let new = NewInquiry::from_request(
            customer,
            InquiryRequest {
                vendor_id: Uuid::new_v4(),
                subject: " Dates ".into(),
                message: "Are you free on 14 Feb?".into(),
                attachments: vec!["https://img.example/hall.jpg".into()],
                wedding_date: None,
                guest_count: Some(200),
                budget: None,
                venue: None,
                special_requirements: None,
                preferred_contact_method: None,
                urgency: Some(Urgency::High),
            },
            now,
        )
        .unwrap();

        assert_eq!(new.subject, "Dates");
        assert_eq!(new.messages.len(), 1);
        assert_eq!(new.messages[0].sender_id, customer);
        assert_eq!(new.messages[0].message, "Are you free on 14 Feb?");
        assert_eq!(new.messages[0].attachments.len(), 1);
        assert!(!new.messages[0].is_read);
    }

    #[test]
    fn reply_moves_pending_to_replied() {
        let vendor_owner = Uuid::new_v4();
        let mut inquiry = sample_inquiry(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let now = Utc::now();

        inquiry.add_message(vendor_owner, message("Yes, we are"), now).unwrap();

        assert_eq!(inquiry.status, InquiryStatus::Replied);
        assert_eq!(inquiry.messages.len(), 2);
        assert_eq!(inquiry.last_message_at, now);
    }

    #[test]
    fn closed_inquiry_stays_closed_on_new_message() {
        let mut inquiry = sample_inquiry(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        inquiry.status = InquiryStatus::Closed;

        inquiry
            .add_message(Uuid::new_v4(), message("One more thing"), Utc::now())
            .unwrap();

        assert_eq!(inquiry.status, InquiryStatus::Closed);
    }

    #[test]
    fn blank_message_is_rejected() {
        let mut inquiry = sample_inquiry(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        assert!(inquiry.add_message(Uuid::new_v4(), message("  "), Utc::now()).is_err());
        assert_eq!(inquiry.messages.len(), 1);
    }

    #[test]
    fn mark_read_skips_own_messages() {
        let customer = Uuid::new_v4();
        let vendor_owner = Uuid::new_v4();
        let mut inquiry = sample_inquiry(Uuid::new_v4(), customer, Uuid::new_v4());
        inquiry
            .add_message(vendor_owner, message("Yes, we are"), Utc::now())
            .unwrap();

        assert!(inquiry.has_unread_for(customer));
        assert_eq!(inquiry.mark_read(customer, Utc::now()), 1);
        assert!(!inquiry.has_unread_for(customer));
        // the opening message is still unread for the vendor side
        assert!(inquiry.has_unread_for(vendor_owner));
        assert!(!inquiry.messages[0].is_read);
    }

    #[test]
    fn closing_records_who_and_when() {
        let mut inquiry = sample_inquiry(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let closer = Uuid::new_v4();

        inquiry.change_status(
            StatusChange {
                status: InquiryStatus::Closed,
                closed_reason: Some("Booked elsewhere".into()),
            },
            closer,
            Utc::now(),
        );
        assert_eq!(inquiry.closed_by, Some(closer));
        assert!(inquiry.closed_at.is_some());

        inquiry.change_status(
            StatusChange {
                status: InquiryStatus::Replied,
                closed_reason: None,
            },
            closer,
            Utc::now(),
        );
        assert_eq!(inquiry.closed_at, None);
        assert_eq!(inquiry.closed_reason, None);
    }
}
