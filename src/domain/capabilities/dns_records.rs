//! Capability trait for DNS record declarations.

use crate::domain::entities::{DistributionHandle, RecordHandle, ResolvedZone};
use crate::error::HostingError;

/// Declares DNS records inside a resolved hosting zone.
///
/// # Implementations
///
/// - [`crate::infrastructure::planner::PlanEngine`] - records the record declaration
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait DnsRecords: Send + Sync {
    /// Declares an alias record at `record_name` within `zone` pointing at
    /// the distribution's edge endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HostingError::Provisioning`] when the engine cannot declare
    /// the record.
    fn create_alias(
        &self,
        zone: &ResolvedZone,
        record_name: &str,
        target: &DistributionHandle,
    ) -> Result<RecordHandle, HostingError>;
}
