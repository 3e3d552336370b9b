//! Capability trait for CDN distributions.

use crate::domain::entities::{BucketHandle, DistributionConfig, DistributionHandle};
use crate::error::HostingError;

/// Creates a CDN distribution fronting the origin bucket.
///
/// # Implementations
///
/// - [`crate::infrastructure::planner::PlanEngine`] - records the distribution declaration
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait Distributions: Send + Sync {
    /// Declares a distribution serving `origin` with the given assembled
    /// configuration and returns its handle, including the provider domain
    /// name of the edge endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HostingError::Provisioning`] when the engine cannot declare
    /// the distribution. Malformed configurations fail at apply time.
    fn create(
        &self,
        name: &str,
        origin: &BucketHandle,
        config: &DistributionConfig,
    ) -> Result<DistributionHandle, HostingError>;
}
