//! Static website hosting assembly service.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::services::certificate_resolver::{CertificateResolver, CertificateSource};
use crate::application::services::edge_auth::EdgeAuthBuilder;
use crate::application::services::zone_resolver::ZoneResolver;
use crate::domain::capabilities::{
    CertificateAuthority, ContentDeployer, Distributions, DnsRecords, EdgeFunctions, ObjectStorage,
    ZoneLookup,
};
use crate::domain::entities::{
    merge_edge_bindings, DistributionConfig, EdgeBinding, HostingOutput, SiteSpec,
};
use crate::error::HostingError;
use crate::utils::logical_id::logical_id;

/// Assembles one static website hosting declaration: origin bucket,
/// distribution, content deployment with cache invalidation, and the DNS
/// alias record.
///
/// Execution is single-threaded and synchronous; every resolution (zone
/// lookup, certificate issuance, deployment) is deferred to the engine's
/// apply phase. Invocations for different sites share no state.
pub struct HostingService<Z, CA, EF, OS, DI, CD, DR>
where
    Z: ZoneLookup,
    CA: CertificateAuthority,
    EF: EdgeFunctions,
    OS: ObjectStorage,
    DI: Distributions,
    CD: ContentDeployer,
    DR: DnsRecords,
{
    zone_resolver: ZoneResolver<Z>,
    certificate_resolver: CertificateResolver<CA>,
    edge_auth: EdgeAuthBuilder<EF>,
    storage: Arc<OS>,
    distributions: Arc<DI>,
    deployer: Arc<CD>,
    dns: Arc<DR>,
}

impl<Z, CA, EF, OS, DI, CD, DR> HostingService<Z, CA, EF, OS, DI, CD, DR>
where
    Z: ZoneLookup,
    CA: CertificateAuthority,
    EF: EdgeFunctions,
    OS: ObjectStorage,
    DI: Distributions,
    CD: ContentDeployer,
    DR: DnsRecords,
{
    /// Creates a hosting service over the given capability implementations.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        zones: Arc<Z>,
        certificates: Arc<CA>,
        edge_functions: Arc<EF>,
        storage: Arc<OS>,
        distributions: Arc<DI>,
        deployer: Arc<CD>,
        dns: Arc<DR>,
    ) -> Self {
        Self {
            zone_resolver: ZoneResolver::new(zones),
            certificate_resolver: CertificateResolver::new(certificates),
            edge_auth: EdgeAuthBuilder::new(edge_functions),
            storage,
            distributions,
            deployer,
            dns,
        }
    }

    /// Declares the full hosting setup for `spec` and returns the
    /// distribution identifier, the assembly's single observable result.
    ///
    /// Ordering is load-bearing in two places: the certificate is resolved
    /// against the already resolved zone, and the content deployment
    /// references the already declared distribution so that every deployment
    /// carries a cache invalidation.
    ///
    /// # Errors
    ///
    /// Returns [`HostingError::Provisioning`] when any declaration is
    /// rejected by the engine. No retries are attempted here.
    pub fn provision(&self, spec: &SiteSpec) -> Result<HostingOutput, HostingError> {
        info!(site = %spec.site_url, zone = %spec.zone_name, "assembling static website hosting");

        let zone = self.zone_resolver.resolve(&spec.zone_name)?;

        let certificate = self
            .certificate_resolver
            .resolve(CertificateSource::from_spec(spec), &zone)?;

        let auth_binding = spec
            .basic_auth
            .as_ref()
            .map(|credentials| self.edge_auth.build(&spec.site_url, credentials))
            .transpose()?;

        let edge_bindings = merge_edge_bindings(self.override_bindings(spec), auth_binding);
        debug!(
            site = %spec.site_url,
            bindings = edge_bindings.as_ref().map_or(0, Vec::len),
            "merged edge binding list"
        );

        let bucket = self
            .storage
            .create_bucket(&logical_id("websitebucket", &spec.site_url))?;

        let config = DistributionConfig::assemble(
            &spec.site_url,
            certificate,
            edge_bindings,
            spec.distribution_overrides.as_ref(),
        );

        let distribution = self.distributions.create(
            &logical_id("distribution", &spec.site_url),
            &bucket,
            &config,
        )?;

        // Deployment references the distribution, never the other way round.
        self.deployer
            .deploy(&spec.content_sources, &bucket, &distribution)?;

        self.dns.create_alias(&zone, &spec.site_url, &distribution)?;

        info!(
            site = %spec.site_url,
            distribution = %distribution.id,
            "static website hosting assembled"
        );

        Ok(HostingOutput {
            distribution_id: distribution.id,
        })
    }

    fn override_bindings<'a>(&self, spec: &'a SiteSpec) -> &'a [EdgeBinding] {
        spec.distribution_overrides
            .as_ref()
            .and_then(|o| o.default_behavior.as_ref())
            .map_or(&[], |b| b.edge_bindings.as_slice())
    }
}
