//! Capability trait for TLS certificate references and issuance.

use crate::domain::entities::{ResolvedCertificate, ResolvedZone};
use crate::error::HostingError;

/// Produces certificate handles, either by wrapping an existing identifier
/// or by requesting a new DNS-validated certificate.
///
/// Issuance is long-running at apply time; at declaration time both
/// operations return immediately usable forward references.
///
/// # Implementations
///
/// - [`crate::infrastructure::planner::PlanEngine`] - records certificate declarations
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait CertificateAuthority: Send + Sync {
    /// Wraps a caller-supplied certificate identifier verbatim.
    ///
    /// No validation that the identifier actually covers the site URL; that
    /// is the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`HostingError::Provisioning`] when the engine cannot declare
    /// the reference.
    fn reuse(&self, certificate_arn: &str) -> Result<ResolvedCertificate, HostingError>;

    /// Requests a new certificate scoped to `domain_name`, validated via DNS
    /// records in `zone`.
    ///
    /// # Errors
    ///
    /// Returns [`HostingError::Provisioning`] when the engine cannot declare
    /// the request. Validation timeouts surface at apply time, not here.
    fn request(
        &self,
        domain_name: &str,
        zone: &ResolvedZone,
    ) -> Result<ResolvedCertificate, HostingError>;
}
