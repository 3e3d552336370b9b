//! Domain layer containing hosting descriptors and capability contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Configuration-time descriptors and the merge rules
//! - [`capabilities`] - Provisioning capability trait definitions
//!
//! # Design Principles
//!
//! - The domain layer has no dependency on infrastructure
//! - Capability traits define contracts implemented by the infrastructure layer
//! - Composition logic lives in services (see [`crate::application::services`])
//! - All descriptors are immutable once produced; one assembly invocation
//!   shares no mutable state with another

pub mod capabilities;
pub mod entities;
