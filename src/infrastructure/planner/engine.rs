//! In-memory declaration engine recording resources into a [`ResourcePlan`].
//!
//! `PlanEngine` implements every capability trait by recording the requested
//! declaration instead of touching a provider. It backs the integration
//! tests and doubles as synth output for callers that want to inspect or
//! diff the declaration graph; engines over real providers implement the
//! same traits outside this crate.

use std::sync::Mutex;

use serde_json::json;
use tracing::{debug, info};

use super::plan::{ResourceKind, ResourcePlan, ResourceRecord};
use crate::domain::capabilities::{
    CertificateAuthority, ContentDeployer, Distributions, DnsRecords, EdgeFunctions,
    FunctionRuntime, ObjectStorage, ZoneLookup,
};
use crate::domain::entities::{
    BucketHandle, ContentSource, DeploymentHandle, DistributionConfig, DistributionHandle,
    FunctionVersion, RecordHandle, ResolvedCertificate, ResolvedZone, ResourceId,
};
use crate::error::HostingError;
use crate::utils::logical_id::logical_id;

/// Version label assigned to published edge functions.
const FUNCTION_VERSION: &str = "1";

/// Records declarations; never provisions anything.
///
/// All identifiers derive deterministically from the declaration input, so
/// identical assemblies produce identical plans. Re-declaring a resource
/// with an identical record is a no-op (reapply converges); re-declaring an
/// id with different content is rejected.
#[derive(Default)]
pub struct PlanEngine {
    resources: Mutex<Vec<ResourceRecord>>,
}

impl PlanEngine {
    /// Creates an empty engine.
    pub fn new() -> Self {
        debug!("using PlanEngine (declarations are recorded, not applied)");
        Self::default()
    }

    /// Snapshot of everything declared so far.
    ///
    /// # Errors
    ///
    /// Returns [`HostingError::Internal`] if the plan lock is poisoned.
    pub fn plan(&self) -> Result<ResourcePlan, HostingError> {
        let resources = self.lock()?;
        Ok(ResourcePlan {
            resources: resources.clone(),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<ResourceRecord>>, HostingError> {
        self.resources
            .lock()
            .map_err(|_| HostingError::internal("plan lock poisoned", json!({})))
    }

    fn declare(&self, record: ResourceRecord) -> Result<(), HostingError> {
        let mut resources = self.lock()?;

        if let Some(existing) = resources.iter().find(|r| r.id == record.id) {
            if *existing == record {
                debug!(id = %record.id, "identical re-declaration, keeping existing record");
                return Ok(());
            }
            return Err(HostingError::validation(
                "conflicting declaration for logical id",
                json!({ "id": record.id.as_str() }),
            ));
        }

        info!(id = %record.id, kind = ?record.kind, "declared resource");
        resources.push(record);
        Ok(())
    }
}

impl ZoneLookup for PlanEngine {
    fn lookup(&self, zone_name: &str) -> Result<ResolvedZone, HostingError> {
        let id = ResourceId::new(logical_id("zone", zone_name));

        self.declare(ResourceRecord {
            id: id.clone(),
            kind: ResourceKind::HostedZone,
            attributes: json!({ "zone_name": zone_name }),
            depends_on: vec![],
        })?;

        Ok(ResolvedZone {
            id,
            name: zone_name.to_string(),
        })
    }
}

impl CertificateAuthority for PlanEngine {
    fn reuse(&self, certificate_arn: &str) -> Result<ResolvedCertificate, HostingError> {
        // The handle wraps the caller-supplied identifier verbatim.
        let id = ResourceId::new(certificate_arn);

        self.declare(ResourceRecord {
            id: id.clone(),
            kind: ResourceKind::CertificateReference,
            attributes: json!({ "certificate_arn": certificate_arn }),
            depends_on: vec![],
        })?;

        Ok(ResolvedCertificate { id })
    }

    fn request(
        &self,
        domain_name: &str,
        zone: &ResolvedZone,
    ) -> Result<ResolvedCertificate, HostingError> {
        let id = ResourceId::new(logical_id("certificate", domain_name));

        self.declare(ResourceRecord {
            id: id.clone(),
            kind: ResourceKind::Certificate,
            attributes: json!({
                "domain_name": domain_name,
                "hosted_zone": zone.id.as_str(),
                "validation": "dns",
            }),
            depends_on: vec![zone.id.clone()],
        })?;

        Ok(ResolvedCertificate { id })
    }
}

impl EdgeFunctions for PlanEngine {
    fn publish(
        &self,
        name: &str,
        handler: &str,
        runtime: FunctionRuntime,
        code: &str,
    ) -> Result<FunctionVersion, HostingError> {
        let id = ResourceId::new(name);

        self.declare(ResourceRecord {
            id: id.clone(),
            kind: ResourceKind::EdgeFunction,
            attributes: json!({
                "handler": handler,
                "runtime": runtime.as_str(),
                "code": code,
                "version": FUNCTION_VERSION,
            }),
            depends_on: vec![],
        })?;

        Ok(FunctionVersion {
            id,
            version: FUNCTION_VERSION.to_string(),
        })
    }
}

impl ObjectStorage for PlanEngine {
    fn create_bucket(&self, name: &str) -> Result<BucketHandle, HostingError> {
        let id = ResourceId::new(name);

        self.declare(ResourceRecord {
            id: id.clone(),
            kind: ResourceKind::Bucket,
            attributes: json!({ "public_access": "blocked" }),
            depends_on: vec![],
        })?;

        Ok(BucketHandle { id })
    }
}

impl Distributions for PlanEngine {
    fn create(
        &self,
        name: &str,
        origin: &BucketHandle,
        config: &DistributionConfig,
    ) -> Result<DistributionHandle, HostingError> {
        let id = ResourceId::new(name);

        let mut depends_on = vec![origin.id.clone(), config.certificate.id.clone()];
        if let Some(bindings) = &config.default_behavior.edge_bindings {
            depends_on.extend(bindings.iter().map(|b| b.function_version.id.clone()));
        }

        let config_value = serde_json::to_value(config).map_err(|e| {
            HostingError::internal(
                "failed to serialize distribution config",
                json!({ "reason": e.to_string() }),
            )
        })?;

        self.declare(ResourceRecord {
            id: id.clone(),
            kind: ResourceKind::Distribution,
            attributes: json!({ "origin": origin.id.as_str(), "config": config_value }),
            depends_on,
        })?;

        Ok(DistributionHandle {
            domain_name: format!("{}.edge.invalid", id),
            id,
        })
    }
}

impl ContentDeployer for PlanEngine {
    fn deploy(
        &self,
        sources: &[ContentSource],
        destination: &BucketHandle,
        distribution: &DistributionHandle,
    ) -> Result<DeploymentHandle, HostingError> {
        let id = ResourceId::new(logical_id("deployment", destination.id.as_str()));

        let sources_value = serde_json::to_value(sources).map_err(|e| {
            HostingError::internal(
                "failed to serialize content sources",
                json!({ "reason": e.to_string() }),
            )
        })?;

        self.declare(ResourceRecord {
            id: id.clone(),
            kind: ResourceKind::Deployment,
            attributes: json!({
                "sources": sources_value,
                "destination": destination.id.as_str(),
                "invalidates": distribution.id.as_str(),
            }),
            depends_on: vec![destination.id.clone(), distribution.id.clone()],
        })?;

        Ok(DeploymentHandle { id })
    }
}

impl DnsRecords for PlanEngine {
    fn create_alias(
        &self,
        zone: &ResolvedZone,
        record_name: &str,
        target: &DistributionHandle,
    ) -> Result<RecordHandle, HostingError> {
        let id = ResourceId::new(logical_id("aliasrecord", record_name));

        self.declare(ResourceRecord {
            id: id.clone(),
            kind: ResourceKind::DnsRecord,
            attributes: json!({
                "record_name": record_name,
                "record_type": "A",
                "alias_target": target.domain_name,
                "zone": zone.id.as_str(),
            }),
            depends_on: vec![zone.id.clone(), target.id.clone()],
        })?;

        Ok(RecordHandle { id })
    }
}
