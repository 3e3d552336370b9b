//! Declaration plan: the recorded resource graph of one or more assemblies.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::domain::entities::ResourceId;
use crate::error::HostingError;

/// Kind of a declared resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Read-only lookup of a pre-existing hosting zone.
    HostedZone,
    /// Reference to a certificate that exists outside the plan.
    CertificateReference,
    /// A new DNS-validated certificate request.
    Certificate,
    EdgeFunction,
    Bucket,
    Distribution,
    Deployment,
    DnsRecord,
}

/// One declared resource: identifier, kind, parameters and the resources it
/// depends on. Dependency edges define apply order for an external engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub id: ResourceId,
    pub kind: ResourceKind,
    pub attributes: Value,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<ResourceId>,
}

/// The full recorded declaration graph, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourcePlan {
    pub resources: Vec<ResourceRecord>,
}

impl ResourcePlan {
    /// All records of the given kind, in declaration order.
    pub fn of_kind(&self, kind: ResourceKind) -> Vec<&ResourceRecord> {
        self.resources.iter().filter(|r| r.kind == kind).collect()
    }

    /// Looks up a record by identifier.
    pub fn find(&self, id: &ResourceId) -> Option<&ResourceRecord> {
        self.resources.iter().find(|r| &r.id == id)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Serializes the plan for synth output or diffing.
    ///
    /// # Errors
    ///
    /// Returns [`HostingError::Internal`] when serialization fails.
    pub fn to_json(&self) -> Result<String, HostingError> {
        serde_json::to_string_pretty(self).map_err(|e| {
            HostingError::internal("failed to serialize plan", json!({ "reason": e.to_string() }))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, kind: ResourceKind) -> ResourceRecord {
        ResourceRecord {
            id: ResourceId::new(id),
            kind,
            attributes: json!({}),
            depends_on: vec![],
        }
    }

    #[test]
    fn test_of_kind_preserves_declaration_order() {
        let plan = ResourcePlan {
            resources: vec![
                record("bucket-1", ResourceKind::Bucket),
                record("distribution-1", ResourceKind::Distribution),
                record("bucket-2", ResourceKind::Bucket),
            ],
        };

        let buckets = plan.of_kind(ResourceKind::Bucket);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].id.as_str(), "bucket-1");
        assert_eq!(buckets[1].id.as_str(), "bucket-2");
    }

    #[test]
    fn test_find_by_id() {
        let plan = ResourcePlan {
            resources: vec![record("bucket-1", ResourceKind::Bucket)],
        };

        assert!(plan.find(&ResourceId::new("bucket-1")).is_some());
        assert!(plan.find(&ResourceId::new("missing")).is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let plan = ResourcePlan {
            resources: vec![ResourceRecord {
                id: ResourceId::new("record-1"),
                kind: ResourceKind::DnsRecord,
                attributes: json!({ "record_type": "A" }),
                depends_on: vec![ResourceId::new("zone-1")],
            }],
        };

        let json = plan.to_json().unwrap();
        let back: ResourcePlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }
}
