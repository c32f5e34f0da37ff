use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::items::{BudgetItem, ChecklistItem, Guest, TimelineItem};
use super::progress::PlanningProgress;
use crate::shared::validation::non_blank;

/// A user's wedding plan. Each user has at most one active plan.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Planning {
    pub id: Uuid,
    pub user_id: Uuid,
    pub wedding_date: NaiveDate,
    pub venue: Option<String>,
    pub guest_count: Option<i32>,
    pub budget: Option<f64>,
    pub style: Option<String>,
    pub theme: Option<String>,
    pub colors: Vec<String>,
    pub notes: Option<String>,
    pub budget_items: Vec<BudgetItem>,
    pub guests: Vec<Guest>,
    pub timeline: Vec<TimelineItem>,
    pub checklist: Vec<ChecklistItem>,
    pub progress: PlanningProgress,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn check_figures(guest_count: Option<i32>, budget: Option<f64>) -> Result<(), String> {
    if guest_count.is_some_and(|c| c < 0) {
        return Err("Guest count cannot be negative".into());
    }
    if budget.is_some_and(|b| !b.is_finite() || b < 0.0) {
        return Err("Budget must be a non-negative amount".into());
    }
    Ok(())
}

fn clean_colors(colors: Vec<String>) -> Vec<String> {
    colors.iter().filter_map(|c| non_blank(c)).collect()
}

/// Body of `POST /planning`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PlanningRequest {
    #[schema(example = "2026-12-05")]
    pub wedding_date: NaiveDate,
    pub venue: Option<String>,
    pub guest_count: Option<i32>,
    pub budget: Option<f64>,
    pub style: Option<String>,
    pub theme: Option<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    pub notes: Option<String>,
}

/// A validated plan, inserted with empty sections and zero progress.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlanning {
    pub user_id: Uuid,
    pub wedding_date: NaiveDate,
    pub venue: Option<String>,
    pub guest_count: Option<i32>,
    pub budget: Option<f64>,
    pub style: Option<String>,
    pub theme: Option<String>,
    pub colors: Vec<String>,
    pub notes: Option<String>,
}

impl NewPlanning {
    pub fn from_request(user_id: Uuid, request: PlanningRequest) -> Result<Self, String> {
        check_figures(request.guest_count, request.budget)?;

        let text = |value: Option<String>| value.as_deref().and_then(non_blank);

        Ok(Self {
            user_id,
            wedding_date: request.wedding_date,
            venue: text(request.venue),
            guest_count: request.guest_count,
            budget: request.budget,
            style: text(request.style),
            theme: text(request.theme),
            colors: clean_colors(request.colors),
            notes: text(request.notes),
        })
    }
}

/// Body of `PUT /planning`. Section lists are edited through their own endpoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct PlanningChanges {
    pub wedding_date: Option<NaiveDate>,
    pub venue: Option<String>,
    pub guest_count: Option<i32>,
    pub budget: Option<f64>,
    pub style: Option<String>,
    pub theme: Option<String>,
    pub colors: Option<Vec<String>>,
    pub notes: Option<String>,
}

impl PlanningChanges {
    pub fn is_empty(&self) -> bool {
        self == &PlanningChanges::default()
    }
}

impl Planning {
    pub fn apply(&mut self, changes: PlanningChanges, now: DateTime<Utc>) -> Result<(), String> {
        check_figures(changes.guest_count, changes.budget)?;

        if let Some(date) = changes.wedding_date {
            self.wedding_date = date;
        }
        for (field, value) in [
            (&mut self.venue, changes.venue),
            (&mut self.style, changes.style),
            (&mut self.theme, changes.theme),
            (&mut self.notes, changes.notes),
        ] {
            if let Some(value) = value {
                *field = non_blank(&value);
            }
        }
        if changes.guest_count.is_some() {
            self.guest_count = changes.guest_count;
        }
        if changes.budget.is_some() {
            self.budget = changes.budget;
        }
        if let Some(colors) = changes.colors {
            self.colors = clean_colors(colors);
        }

        self.updated_at = now;
        Ok(())
    }

    /// Recomputes every section percentage from the current lists.
    pub fn refresh_progress(&mut self) {
        self.progress = PlanningProgress::compute(self);
    }
}
