//! Certificate resolution service.

use std::sync::Arc;

use tracing::info;

use crate::domain::capabilities::CertificateAuthority;
use crate::domain::entities::{ResolvedCertificate, ResolvedZone, SiteSpec};
use crate::error::HostingError;

/// Where the site's certificate comes from.
///
/// The two paths are mutually exclusive and jointly exhaustive: every spec
/// maps to exactly one variant, and resolution produces exactly one handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CertificateSource {
    /// Reuse a caller-supplied certificate identifier verbatim.
    Reused { certificate_arn: String },
    /// Request a new DNS-validated certificate scoped to the site URL.
    Provisioned { domain_name: String },
}

impl CertificateSource {
    /// Derives the source from a site spec: a present `certificate_arn`
    /// means reuse, absence means provisioning scoped to `site_url`.
    pub fn from_spec(spec: &SiteSpec) -> Self {
        match &spec.certificate_arn {
            Some(arn) => Self::Reused {
                certificate_arn: arn.clone(),
            },
            None => Self::Provisioned {
                domain_name: spec.site_url.clone(),
            },
        }
    }
}

/// Resolves a [`CertificateSource`] to the single certificate handle the
/// distribution will carry.
pub struct CertificateResolver<C: CertificateAuthority> {
    authority: Arc<C>,
}

impl<C: CertificateAuthority> CertificateResolver<C> {
    /// Creates a new certificate resolver.
    pub fn new(authority: Arc<C>) -> Self {
        Self { authority }
    }

    /// Resolves `source` against the already resolved zone.
    ///
    /// The zone is only consulted on the provisioning path, for DNS
    /// validation records.
    ///
    /// # Errors
    ///
    /// Returns [`HostingError::Provisioning`] when the declaration fails.
    /// Validation timeouts belong to the apply phase, not to this call.
    pub fn resolve(
        &self,
        source: CertificateSource,
        zone: &ResolvedZone,
    ) -> Result<ResolvedCertificate, HostingError> {
        match source {
            CertificateSource::Reused { certificate_arn } => {
                info!(certificate = %certificate_arn, "reusing existing certificate");
                self.authority.reuse(&certificate_arn)
            }
            CertificateSource::Provisioned { domain_name } => {
                info!(domain = %domain_name, zone = %zone.name, "requesting dns-validated certificate");
                self.authority.request(&domain_name, zone)
            }
        }
    }
}
