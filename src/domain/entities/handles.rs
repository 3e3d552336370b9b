//! Opaque handles for resources declared through a provisioning engine.
//!
//! Handles are forward references: at declaration time they carry only the
//! engine-assigned identifier of a resource that will exist once the external
//! engine applies the plan. Each handle is produced exactly once per assembly
//! and is read-only afterwards.

use serde::{Deserialize, Serialize};

/// Engine-assigned identifier of a declared resource.
///
/// Identifiers must be deterministic for identical input so that re-running
/// an assembly yields a structurally identical declaration (no randomness,
/// no time-dependent values).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Handle to a pre-existing DNS hosting zone, looked up once and shared by
/// certificate validation and the final alias record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedZone {
    pub id: ResourceId,
    pub name: String,
}

/// Handle to a TLS certificate valid for the site URL.
///
/// Exactly one is produced per assembly, either wrapping a caller-supplied
/// identifier verbatim or referencing a freshly requested certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedCertificate {
    pub id: ResourceId,
}

impl ResolvedCertificate {
    /// The certificate reference as the distribution will carry it.
    pub fn reference(&self) -> &str {
        self.id.as_str()
    }
}

/// Handle to the origin storage bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketHandle {
    pub id: ResourceId,
}

/// Handle to a created CDN distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionHandle {
    pub id: ResourceId,
    /// Provider-side domain name of the edge endpoint, the target of the
    /// DNS alias record.
    pub domain_name: String,
}

/// Immutable published version of an edge function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionVersion {
    pub id: ResourceId,
    pub version: String,
}

impl FunctionVersion {
    /// References a function version created outside this assembly, for use
    /// in caller-supplied edge binding overrides.
    pub fn external(reference: impl Into<String>) -> Self {
        Self {
            id: ResourceId::new(reference),
            version: String::new(),
        }
    }
}

/// Handle to a declared content deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentHandle {
    pub id: ResourceId,
}

/// Handle to a declared DNS record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordHandle {
    pub id: ResourceId,
}

/// The single externally observable artifact of an assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostingOutput {
    pub distribution_id: ResourceId,
}
