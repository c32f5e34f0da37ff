use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::non_blank;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RsvpStatus {
    #[default]
    Pending,
    Confirmed,
    Declined,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TimelineStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

fn required(value: &str, field: &str) -> Result<String, String> {
    non_blank(value).ok_or_else(|| format!("{field} is required"))
}

fn optional(value: Option<String>) -> Option<String> {
    value.as_deref().and_then(non_blank)
}

fn amount(value: f64, field: &str) -> Result<f64, String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{field} must be a non-negative amount"));
    }
    Ok(value)
}

// ============================================================================
// Budget
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BudgetItem {
    pub id: Uuid,
    pub category: String,
    pub subcategory: Option<String>,
    pub item: String,
    pub planned_amount: f64,
    #[serde(default)]
    pub actual_amount: f64,
    pub vendor: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub is_paid: bool,
    pub paid_date: Option<NaiveDate>,
    pub payment_method: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BudgetItemInput {
    #[schema(example = "photography")]
    pub category: String,
    pub subcategory: Option<String>,
    #[schema(example = "Album and prints")]
    pub item: String,
    pub planned_amount: f64,
    pub actual_amount: Option<f64>,
    pub vendor: Option<String>,
    pub notes: Option<String>,
    pub is_paid: Option<bool>,
    pub paid_date: Option<NaiveDate>,
    pub payment_method: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct BudgetItemChanges {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub item: Option<String>,
    pub planned_amount: Option<f64>,
    pub actual_amount: Option<f64>,
    pub vendor: Option<String>,
    pub notes: Option<String>,
    pub is_paid: Option<bool>,
    pub paid_date: Option<NaiveDate>,
    pub payment_method: Option<String>,
}

impl BudgetItem {
    pub fn from_input(id: Uuid, input: BudgetItemInput) -> Result<Self, String> {
        Ok(Self {
            id,
            category: required(&input.category, "Category")?,
            subcategory: optional(input.subcategory),
            item: required(&input.item, "Item")?,
            planned_amount: amount(input.planned_amount, "Planned amount")?,
            actual_amount: amount(input.actual_amount.unwrap_or(0.0), "Actual amount")?,
            vendor: optional(input.vendor),
            notes: optional(input.notes),
            is_paid: input.is_paid.unwrap_or(false),
            paid_date: input.paid_date,
            payment_method: optional(input.payment_method),
        })
    }

    pub fn apply(&mut self, changes: BudgetItemChanges) -> Result<(), String> {
        if let Some(category) = changes.category {
            self.category = required(&category, "Category")?;
        }
        if let Some(item) = changes.item {
            self.item = required(&item, "Item")?;
        }
        if let Some(planned) = changes.planned_amount {
            self.planned_amount = amount(planned, "Planned amount")?;
        }
        if let Some(actual) = changes.actual_amount {
            self.actual_amount = amount(actual, "Actual amount")?;
        }
        if changes.subcategory.is_some() {
            self.subcategory = optional(changes.subcategory);
        }
        if changes.vendor.is_some() {
            self.vendor = optional(changes.vendor);
        }
        if changes.notes.is_some() {
            self.notes = optional(changes.notes);
        }
        if let Some(is_paid) = changes.is_paid {
            self.is_paid = is_paid;
        }
        if changes.paid_date.is_some() {
            self.paid_date = changes.paid_date;
        }
        if changes.payment_method.is_some() {
            self.payment_method = optional(changes.payment_method);
        }
        Ok(())
    }
}

// ============================================================================
// Guests
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Guest {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub relationship: Option<String>,
    /// Family, friends, colleagues...
    pub category: Option<String>,
    #[serde(default)]
    pub plus_one: bool,
    pub plus_one_name: Option<String>,
    pub dietary_restrictions: Option<String>,
    pub meal_preference: Option<String>,
    pub seating_group: Option<String>,
    pub table_number: Option<i32>,
    #[serde(default)]
    pub rsvp_status: RsvpStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GuestInput {
    #[schema(example = "Nimali Perera")]
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub relationship: Option<String>,
    pub category: Option<String>,
    pub plus_one: Option<bool>,
    pub plus_one_name: Option<String>,
    pub dietary_restrictions: Option<String>,
    pub meal_preference: Option<String>,
    pub seating_group: Option<String>,
    pub table_number: Option<i32>,
    pub rsvp_status: Option<RsvpStatus>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct GuestChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub relationship: Option<String>,
    pub category: Option<String>,
    pub plus_one: Option<bool>,
    pub plus_one_name: Option<String>,
    pub dietary_restrictions: Option<String>,
    pub meal_preference: Option<String>,
    pub seating_group: Option<String>,
    pub table_number: Option<i32>,
    pub rsvp_status: Option<RsvpStatus>,
    pub notes: Option<String>,
}

impl Guest {
    pub fn from_input(id: Uuid, input: GuestInput) -> Result<Self, String> {
        Ok(Self {
            id,
            name: required(&input.name, "Name")?,
            email: optional(input.email),
            phone: optional(input.phone),
            relationship: optional(input.relationship),
            category: optional(input.category),
            plus_one: input.plus_one.unwrap_or(false),
            plus_one_name: optional(input.plus_one_name),
            dietary_restrictions: optional(input.dietary_restrictions),
            meal_preference: optional(input.meal_preference),
            seating_group: optional(input.seating_group),
            table_number: input.table_number,
            rsvp_status: input.rsvp_status.unwrap_or_default(),
            notes: optional(input.notes),
        })
    }

    pub fn apply(&mut self, changes: GuestChanges) -> Result<(), String> {
        if let Some(name) = changes.name {
            self.name = required(&name, "Name")?;
        }
        let text_fields = [
            (&mut self.email, changes.email),
            (&mut self.phone, changes.phone),
            (&mut self.relationship, changes.relationship),
            (&mut self.category, changes.category),
            (&mut self.plus_one_name, changes.plus_one_name),
            (&mut self.dietary_restrictions, changes.dietary_restrictions),
            (&mut self.meal_preference, changes.meal_preference),
            (&mut self.seating_group, changes.seating_group),
            (&mut self.notes, changes.notes),
        ];
        for (field, value) in text_fields {
            if value.is_some() {
                *field = optional(value);
            }
        }
        if let Some(plus_one) = changes.plus_one {
            self.plus_one = plus_one;
        }
        if changes.table_number.is_some() {
            self.table_number = changes.table_number;
        }
        if let Some(status) = changes.rsvp_status {
            self.rsvp_status = status;
        }
        Ok(())
    }
}

// ============================================================================
// Timeline
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TimelineItem {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub category: Option<String>,
    pub priority: Option<Priority>,
    pub assigned_to: Option<String>,
    pub vendor: Option<String>,
    #[serde(default)]
    pub status: TimelineStatus,
    pub completed_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TimelineItemInput {
    #[schema(example = "Book the photographer")]
    pub title: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub category: Option<String>,
    pub priority: Option<Priority>,
    pub assigned_to: Option<String>,
    pub vendor: Option<String>,
    pub status: Option<TimelineStatus>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct TimelineItemChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub priority: Option<Priority>,
    pub assigned_to: Option<String>,
    pub vendor: Option<String>,
    pub status: Option<TimelineStatus>,
    pub completed_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl TimelineItem {
    pub fn from_input(id: Uuid, input: TimelineItemInput) -> Result<Self, String> {
        Ok(Self {
            id,
            title: required(&input.title, "Title")?,
            description: optional(input.description),
            due_date: input.due_date,
            category: optional(input.category),
            priority: input.priority,
            assigned_to: optional(input.assigned_to),
            vendor: optional(input.vendor),
            status: input.status.unwrap_or_default(),
            completed_date: None,
            notes: optional(input.notes),
        })
    }

    pub fn apply(&mut self, changes: TimelineItemChanges) -> Result<(), String> {
        if let Some(title) = changes.title {
            self.title = required(&title, "Title")?;
        }
        let text_fields = [
            (&mut self.description, changes.description),
            (&mut self.category, changes.category),
            (&mut self.assigned_to, changes.assigned_to),
            (&mut self.vendor, changes.vendor),
            (&mut self.notes, changes.notes),
        ];
        for (field, value) in text_fields {
            if value.is_some() {
                *field = optional(value);
            }
        }
        if let Some(due_date) = changes.due_date {
            self.due_date = due_date;
        }
        if changes.priority.is_some() {
            self.priority = changes.priority;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if changes.completed_date.is_some() {
            self.completed_date = changes.completed_date;
        }
        Ok(())
    }

    /// Past its due date and not completed.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status != TimelineStatus::Completed && self.due_date < today
    }
}

// ============================================================================
// Checklist
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChecklistItem {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub priority: Option<Priority>,
    #[schema(example = "2 hours")]
    pub estimated_time: Option<String>,
    pub assigned_to: Option<String>,
    pub vendor: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
    pub completed_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChecklistItemInput {
    #[schema(example = "Order invitation cards")]
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub priority: Option<Priority>,
    pub estimated_time: Option<String>,
    pub assigned_to: Option<String>,
    pub vendor: Option<String>,
    pub is_completed: Option<bool>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ChecklistItemChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub priority: Option<Priority>,
    pub estimated_time: Option<String>,
    pub assigned_to: Option<String>,
    pub vendor: Option<String>,
    pub is_completed: Option<bool>,
    pub completed_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl ChecklistItem {
    pub fn from_input(id: Uuid, input: ChecklistItemInput) -> Result<Self, String> {
        Ok(Self {
            id,
            title: required(&input.title, "Title")?,
            description: optional(input.description),
            category: optional(input.category),
            priority: input.priority,
            estimated_time: optional(input.estimated_time),
            assigned_to: optional(input.assigned_to),
            vendor: optional(input.vendor),
            is_completed: input.is_completed.unwrap_or(false),
            completed_date: None,
            notes: optional(input.notes),
        })
    }

    pub fn apply(&mut self, changes: ChecklistItemChanges) -> Result<(), String> {
        if let Some(title) = changes.title {
            self.title = required(&title, "Title")?;
        }
        let text_fields = [
            (&mut self.description, changes.description),
            (&mut self.category, changes.category),
            (&mut self.estimated_time, changes.estimated_time),
            (&mut self.assigned_to, changes.assigned_to),
            (&mut self.vendor, changes.vendor),
            (&mut self.notes, changes.notes),
        ];
        for (field, value) in text_fields {
            if value.is_some() {
                *field = optional(value);
            }
        }
        if changes.priority.is_some() {
            self.priority = changes.priority;
        }
        if let Some(done) = changes.is_completed {
            self.is_completed = done;
        }
        if changes.completed_date.is_some() {
            self.completed_date = changes.completed_date;
        }
        Ok(())
    }
}
