use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entities::Planning;
use super::items::{RsvpStatus, TimelineStatus};

/// `round(100 * completed / total)`, `0` for an empty list.
pub fn completion_percentage(completed: usize, total: usize) -> i32 {
    if total == 0 {
        return 0;
    }
    let ratio = completed.min(total) as f64 / total as f64;
    (ratio * 100.0).round() as i32
}

/// Per-section completion, always derived from the section lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PlanningProgress {
    pub budget: i32,
    pub guests: i32,
    pub timeline: i32,
    pub checklist: i32,
}

impl PlanningProgress {
    pub fn compute(plan: &Planning) -> Self {
        let budget = &plan.budget_items;
        let guests = &plan.guests;
        let timeline = &plan.timeline;
        let checklist = &plan.checklist;

        Self {
            budget: completion_percentage(budget.iter().filter(|i| i.is_paid).count(), budget.len()),
            guests: completion_percentage(
                guests
                    .iter()
                    .filter(|g| g.rsvp_status == RsvpStatus::Confirmed)
                    .count(),
                guests.len(),
            ),
            timeline: completion_percentage(
                timeline
                    .iter()
                    .filter(|t| t.status == TimelineStatus::Completed)
                    .count(),
                timeline.len(),
            ),
            checklist: completion_percentage(
                checklist.iter().filter(|c| c.is_completed).count(),
                checklist.len(),
            ),
        }
    }

    pub fn overall(&self) -> i32 {
        let sum = self.budget + self.guests + self.timeline + self.checklist;
        (sum as f64 / 4.0).round() as i32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BudgetStats {
    pub total: f64,
    pub spent: f64,
    pub remaining: f64,
    pub progress: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct GuestStats {
    pub total: usize,
    pub confirmed: usize,
    pub pending: usize,
    pub progress: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TimelineStats {
    pub total: usize,
    pub completed: usize,
    pub overdue: usize,
    pub progress: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ChecklistStats {
    pub total: usize,
    pub completed: usize,
    pub progress: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PlanningStats {
    pub budget: BudgetStats,
    pub guests: GuestStats,
    pub timeline: TimelineStats,
    pub checklist: ChecklistStats,
    pub overall_progress: i32,
}

impl PlanningStats {
    pub fn from_planning(plan: &Planning, today: NaiveDate) -> Self {
        let progress = plan.progress;

        let total: f64 = plan.budget_items.iter().map(|i| i.planned_amount).sum();
        let spent: f64 = plan.budget_items.iter().map(|i| i.actual_amount).sum();

        let rsvp = |status: RsvpStatus| plan.guests.iter().filter(|g| g.rsvp_status == status).count();

        Self {
            budget: BudgetStats {
                total,
                spent,
                remaining: total - spent,
                progress: progress.budget,
            },
            guests: GuestStats {
                total: plan.guests.len(),
                confirmed: rsvp(RsvpStatus::Confirmed),
                pending: rsvp(RsvpStatus::Pending),
                progress: progress.guests,
            },
            timeline: TimelineStats {
                total: plan.timeline.len(),
                completed: plan
                    .timeline
                    .iter()
                    .filter(|t| t.status == TimelineStatus::Completed)
                    .count(),
                overdue: plan.timeline.iter().filter(|t| t.is_overdue(today)).count(),
                progress: progress.timeline,
            },
            checklist: ChecklistStats {
                total: plan.checklist.len(),
                completed: plan.checklist.iter().filter(|c| c.is_completed).count(),
                progress: progress.checklist,
            },
            overall_progress: progress.overall(),
        }
    }
}
