//! In-memory planning engine and the plan it records.

pub mod engine;
pub mod plan;

pub use engine::PlanEngine;
pub use plan::{ResourceKind, ResourcePlan, ResourceRecord};
