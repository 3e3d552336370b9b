//! Capability trait for content deployment with cache invalidation.

use crate::domain::entities::{BucketHandle, ContentSource, DeploymentHandle, DistributionHandle};
use crate::error::HostingError;

/// Deploys site assets into the origin bucket and invalidates the
/// distribution that serves them.
///
/// The deployment must reference the already declared distribution so that
/// every deployment triggers a cache invalidation scoped to the changed
/// paths (or a full invalidation, depending on provider capability).
/// Reversing that ordering breaks invalidation.
///
/// # Implementations
///
/// - [`crate::infrastructure::planner::PlanEngine`] - records the deployment declaration
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait ContentDeployer: Send + Sync {
    /// Declares a deployment of `sources` (in list order) into `destination`,
    /// bound to `distribution` for invalidation.
    ///
    /// # Errors
    ///
    /// Returns [`HostingError::Provisioning`] when the engine cannot declare
    /// the deployment.
    fn deploy(
        &self,
        sources: &[ContentSource],
        destination: &BucketHandle,
        distribution: &DistributionHandle,
    ) -> Result<DeploymentHandle, HostingError>;
}
