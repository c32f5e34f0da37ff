use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use super::entities::Planning;
use super::items::{
    BudgetItem, BudgetItemChanges, BudgetItemInput, ChecklistItem, ChecklistItemChanges,
    ChecklistItemInput, Guest, GuestChanges, GuestInput, TimelineItem, TimelineItemChanges,
    TimelineItemInput,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PlanningSection {
    Budget,
    Guests,
    Timeline,
    Checklist,
}

impl PlanningSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanningSection::Budget => "budget",
            PlanningSection::Guests => "guests",
            PlanningSection::Timeline => "timeline",
            PlanningSection::Checklist => "checklist",
        }
    }
}

impl fmt::Display for PlanningSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanningSection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "budget" => Ok(PlanningSection::Budget),
            "guests" => Ok(PlanningSection::Guests),
            "timeline" => Ok(PlanningSection::Timeline),
            "checklist" => Ok(PlanningSection::Checklist),
            other => Err(format!(
                "Unknown planning section '{other}', expected budget, guests, timeline or checklist"
            )),
        }
    }
}

/// An entry of one of the plan's section lists.
pub trait PlanItem: Sized {
    type Input: DeserializeOwned;
    type Changes: DeserializeOwned;

    fn id(&self) -> Uuid;
    fn create(id: Uuid, input: Self::Input) -> Result<Self, String>;
    fn update(&mut self, changes: Self::Changes) -> Result<(), String>;
}

macro_rules! plan_item {
    ($item:ty, $input:ty, $changes:ty) => {
        impl PlanItem for $item {
            type Input = $input;
            type Changes = $changes;

            fn id(&self) -> Uuid {
                self.id
            }

            fn create(id: Uuid, input: $input) -> Result<Self, String> {
                <$item>::from_input(id, input)
            }

            fn update(&mut self, changes: $changes) -> Result<(), String> {
                self.apply(changes)
            }
        }
    };
}

plan_item!(BudgetItem, BudgetItemInput, BudgetItemChanges);
plan_item!(Guest, GuestInput, GuestChanges);
plan_item!(TimelineItem, TimelineItemInput, TimelineItemChanges);
plan_item!(ChecklistItem, ChecklistItemInput, ChecklistItemChanges);

fn decode<T: DeserializeOwned>(value: Json) -> Result<T, String> {
    serde_json::from_value(value).map_err(|e| format!("Invalid item: {e}"))
}

fn decode_all<T: DeserializeOwned>(values: Vec<Json>) -> Result<Vec<T>, String> {
    if values.is_empty() {
        return Err("At least one item is required".into());
    }
    values.into_iter().map(decode).collect()
}

/// Body of `POST /planning/{section}`; item shape depends on the section.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SectionItemsBody {
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<Json>,
}

/// Body of `PUT /planning/{section}/{item_id}`; a partial item of the section.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct ItemChangesBody(pub Json);

#[derive(Debug, Clone)]
pub enum SectionItems {
    Budget(Vec<BudgetItemInput>),
    Guests(Vec<GuestInput>),
    Timeline(Vec<TimelineItemInput>),
    Checklist(Vec<ChecklistItemInput>),
}

impl SectionItems {
    pub fn parse(section: PlanningSection, items: Vec<Json>) -> Result<Self, String> {
        Ok(match section {
            PlanningSection::Budget => SectionItems::Budget(decode_all(items)?),
            PlanningSection::Guests => SectionItems::Guests(decode_all(items)?),
            PlanningSection::Timeline => SectionItems::Timeline(decode_all(items)?),
            PlanningSection::Checklist => SectionItems::Checklist(decode_all(items)?),
        })
    }
}

#[derive(Debug, Clone)]
pub enum SectionItemChanges {
    Budget(BudgetItemChanges),
    Guests(GuestChanges),
    Timeline(TimelineItemChanges),
    Checklist(ChecklistItemChanges),
}

impl SectionItemChanges {
    pub fn parse(section: PlanningSection, changes: Json) -> Result<Self, String> {
        if !changes.is_object() {
            return Err("Item changes must be an object".into());
        }
        Ok(match section {
            PlanningSection::Budget => SectionItemChanges::Budget(decode(changes)?),
            PlanningSection::Guests => SectionItemChanges::Guests(decode(changes)?),
            PlanningSection::Timeline => SectionItemChanges::Timeline(decode(changes)?),
            PlanningSection::Checklist => SectionItemChanges::Checklist(decode(changes)?),
        })
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanningItemError {
    #[error("Item not found")]
    NotFound,

    #[error("{0}")]
    Invalid(String),
}

fn push_all<T: PlanItem>(list: &mut Vec<T>, inputs: Vec<T::Input>) -> Result<(), String> {
    let created = inputs
        .into_iter()
        .map(|input| T::create(Uuid::new_v4(), input))
        .collect::<Result<Vec<_>, _>>()?;
    list.extend(created);
    Ok(())
}

fn update_one<T: PlanItem>(
    list: &mut [T],
    item_id: Uuid,
    changes: T::Changes,
) -> Result<(), PlanningItemError> {
    list.iter_mut()
        .find(|item| item.id() == item_id)
        .ok_or(PlanningItemError::NotFound)?
        .update(changes)
        .map_err(PlanningItemError::Invalid)
}

fn remove_one<T: PlanItem>(list: &mut Vec<T>, item_id: Uuid) -> Result<(), PlanningItemError> {
    let position = list
        .iter()
        .position(|item| item.id() == item_id)
        .ok_or(PlanningItemError::NotFound)?;
    list.remove(position);
    Ok(())
}

impl Planning {
    /// Appends all items or none; each gets a fresh id.
    pub fn add_items(&mut self, items: SectionItems, now: DateTime<Utc>) -> Result<(), String> {
        match items {
            SectionItems::Budget(inputs) => push_all(&mut self.budget_items, inputs)?,
            SectionItems::Guests(inputs) => push_all(&mut self.guests, inputs)?,
            SectionItems::Timeline(inputs) => push_all(&mut self.timeline, inputs)?,
            SectionItems::Checklist(inputs) => push_all(&mut self.checklist, inputs)?,
        }
        self.touch(now);
        Ok(())
    }

    pub fn update_item(
        &mut self,
        item_id: Uuid,
        changes: SectionItemChanges,
        now: DateTime<Utc>,
    ) -> Result<(), PlanningItemError> {
        match changes {
            SectionItemChanges::Budget(c) => update_one(&mut self.budget_items, item_id, c)?,
            SectionItemChanges::Guests(c) => update_one(&mut self.guests, item_id, c)?,
            SectionItemChanges::Timeline(c) => update_one(&mut self.timeline, item_id, c)?,
            SectionItemChanges::Checklist(c) => update_one(&mut self.checklist, item_id, c)?,
        }
        self.touch(now);
        Ok(())
    }

    pub fn remove_item(
        &mut self,
        section: PlanningSection,
        item_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<(), PlanningItemError> {
        match section {
            PlanningSection::Budget => remove_one(&mut self.budget_items, item_id)?,
            PlanningSection::Guests => remove_one(&mut self.guests, item_id)?,
            PlanningSection::Timeline => remove_one(&mut self.timeline, item_id)?,
            PlanningSection::Checklist => remove_one(&mut self.checklist, item_id)?,
        }
        self.touch(now);
        Ok(())
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.refresh_progress();
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::planning::application::domain::items::RsvpStatus;
    use crate::tests::support::stubs::sample_planning;
    use serde_json::json;

    fn guests(names: &[&str]) -> SectionItems {
        SectionItems::parse(
            PlanningSection::Guests,
            names.iter().map(|n| json!({ "name": n })).collect(),
        )
        .unwrap()
    }

    #[test]
    fn section_names() {
        assert_eq!("timeline".parse::<PlanningSection>(), Ok(PlanningSection::Timeline));
        assert!("vendors".parse::<PlanningSection>().is_err());
    }

    #[test]
    fn items_must_match_the_section() {
        let err = SectionItems::parse(
            PlanningSection::Timeline,
            vec![json!({ "title": "Book the band" })],
        )
        .unwrap_err();
        assert!(err.starts_with("Invalid item"));

        assert!(SectionItems::parse(PlanningSection::Budget, vec![]).is_err());
    }

    #[test]
    fn added_items_get_ids_and_progress() {
        let mut plan = sample_planning(Uuid::new_v4(), Uuid::new_v4());

        plan.add_items(guests(&["Nimali", "Kasun"]), Utc::now()).unwrap();
        assert_eq!(plan.guests.len(), 2);
        assert_ne!(plan.guests[0].id, plan.guests[1].id);
        assert_eq!(plan.progress.guests, 0);

        let first = plan.guests[0].id;
        plan.update_item(
            first,
            SectionItemChanges::parse(PlanningSection::Guests, json!({ "rsvp_status": "confirmed" }))
                .unwrap(),
            Utc::now(),
        )
        .unwrap();

        assert_eq!(plan.guests[0].rsvp_status, RsvpStatus::Confirmed);
        assert_eq!(plan.progress.guests, 50);
    }

    #[test]
    fn invalid_item_adds_nothing() {
        let mut plan = sample_planning(Uuid::new_v4(), Uuid::new_v4());

        assert!(plan.add_items(guests(&["Nimali", " "]), Utc::now()).is_err());
        assert!(plan.guests.is_empty());
    }

    #[test]
    fn unknown_item_is_not_found() {
        let mut plan = sample_planning(Uuid::new_v4(), Uuid::new_v4());
        plan.add_items(guests(&["Nimali"]), Utc::now()).unwrap();

        assert_eq!(
            plan.remove_item(PlanningSection::Guests, Uuid::new_v4(), Utc::now()),
            Err(PlanningItemError::NotFound)
        );
        assert_eq!(
            plan.remove_item(PlanningSection::Budget, plan.guests[0].id, Utc::now()),
            Err(PlanningItemError::NotFound)
        );

        let id = plan.guests[0].id;
        plan.remove_item(PlanningSection::Guests, id, Utc::now()).unwrap();
        assert!(plan.guests.is_empty());
    }
}
