pub mod age;
pub mod eligible;
pub mod error;
pub mod history;
pub mod inventory;
pub mod plan;

pub mod prelude {
    pub use crate::age::older_than;
    pub use crate::eligible::eligible_releases;
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::history::{DeployDates, parse_history};
    pub use crate::inventory::parse_inventory;
    pub use crate::plan::{DeletionPlan, PlanEntry, build_plan, intersect};
}
