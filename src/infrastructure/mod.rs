//! Infrastructure layer: concrete capability implementations.
//!
//! The crate ships one engine, [`planner::PlanEngine`], which records
//! declarations into a [`planner::ResourcePlan`] instead of provisioning
//! anything. Engines over real providers live outside this crate and
//! implement the same capability traits.

pub mod planner;
