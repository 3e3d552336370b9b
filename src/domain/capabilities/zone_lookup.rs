//! Capability trait for resolving pre-existing DNS hosting zones.

use crate::domain::entities::ResolvedZone;
use crate::error::HostingError;

/// Looks up an existing DNS hosting zone by name.
///
/// Read-only: implementations never create or mutate zones. The composition
/// core does not validate zone existence locally; an engine backed by a real
/// provider fails at apply time when the zone is missing.
///
/// # Implementations
///
/// - [`crate::infrastructure::planner::PlanEngine`] - records the lookup in the plan
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait ZoneLookup: Send + Sync {
    /// Returns a handle to the zone named `zone_name`.
    ///
    /// # Errors
    ///
    /// Returns [`HostingError::Provisioning`] when the engine cannot declare
    /// the lookup.
    fn lookup(&self, zone_name: &str) -> Result<ResolvedZone, HostingError>;
}
