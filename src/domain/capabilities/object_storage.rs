//! Capability trait for origin storage buckets.

use crate::domain::entities::BucketHandle;
use crate::error::HostingError;

/// Creates the origin storage bucket that holds the site's static assets.
///
/// Buckets carry the default security posture: private, public access
/// blocked, not publicly listable. The composition exposes no further bucket
/// configuration.
///
/// # Implementations
///
/// - [`crate::infrastructure::planner::PlanEngine`] - records the bucket declaration
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait ObjectStorage: Send + Sync {
    /// Declares a private bucket under the given logical name.
    ///
    /// # Errors
    ///
    /// Returns [`HostingError::Provisioning`] when the engine cannot declare
    /// the bucket.
    fn create_bucket(&self, name: &str) -> Result<BucketHandle, HostingError>;
}
