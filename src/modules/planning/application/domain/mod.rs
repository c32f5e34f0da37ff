pub mod entities;
pub mod items;
pub mod progress;
pub mod section;

pub use entities::*;
pub use items::*;
pub use progress::{completion_percentage, PlanningProgress, PlanningStats};
pub use section::{
    ItemChangesBody, PlanItem, PlanningItemError, PlanningSection, SectionItemChanges,
    SectionItems, SectionItemsBody,
};
