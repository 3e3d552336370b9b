//! Distribution configuration descriptors and the override merge rules.
//!
//! The assembled [`DistributionConfig`] is the merge of caller-supplied
//! [`DistributionOverrides`] with the fields this crate owns: the domain
//! name list, the resolved certificate and the default behavior's edge
//! binding list. Owned fields are not representable in the overrides struct,
//! so a conflicting override cannot be expressed.

use serde::{Deserialize, Serialize};

use super::handles::{FunctionVersion, ResolvedCertificate};

/// Default distribution comment, used when no override comment is supplied.
const DEFAULT_COMMENT: &str = "Cloudfront distribution for the static website";

/// TTL of the opt-in SPA error mapping rule, in seconds.
const SPA_FALLBACK_TTL_SECONDS: u32 = 300;

/// Request lifecycle event an edge function is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeEventType {
    /// Fires once per incoming viewer request, before any cache lookup.
    ViewerRequest,
    ViewerResponse,
    OriginRequest,
    OriginResponse,
}

/// An edge function version attached to the distribution's default behavior
/// at a specific lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeBinding {
    pub function_version: FunctionVersion,
    pub event_type: EdgeEventType,
}

impl EdgeBinding {
    pub fn new(function_version: FunctionVersion, event_type: EdgeEventType) -> Self {
        Self {
            function_version,
            event_type,
        }
    }
}

/// Remaps an origin error status to an alternative response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponseRule {
    pub http_status: u16,
    pub response_http_status: u16,
    pub response_page_path: String,
    pub ttl_seconds: u32,
}

impl ErrorResponseRule {
    /// The single-page-application fallback rule: origin 403 responses are
    /// served as 200 `/index.html`, cached for five minutes.
    ///
    /// Never applied by default; callers opt in via
    /// [`DistributionOverrides::spa_fallback`].
    pub fn spa_fallback() -> Self {
        Self {
            http_status: 403,
            response_http_status: 200,
            response_page_path: "/index.html".to_string(),
            ttl_seconds: SPA_FALLBACK_TTL_SECONDS,
        }
    }
}

/// The distribution's default cache behavior as assembled.
///
/// `edge_bindings` is `None` when no binding exists at all; the downstream
/// distribution resource rejects an empty list, so "no bindings" is an
/// absent value, never an empty container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultBehavior {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_bindings: Option<Vec<EdgeBinding>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer_protocol_policy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compress: Option<bool>,
}

/// Caller-supplied fragment of the default behavior.
///
/// Merged shallowly: `edge_bindings` is replaced by the merged binding list,
/// every other field is carried over unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviorOverrides {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edge_bindings: Vec<EdgeBinding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer_protocol_policy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compress: Option<bool>,
}

/// Caller-supplied partial distribution configuration.
///
/// Domain names and the certificate are owned by the assembly and have no
/// counterpart here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_access: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_headers: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub error_responses: Vec<ErrorResponseRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_behavior: Option<BehaviorOverrides>,
}

impl DistributionOverrides {
    /// Overrides carrying only the SPA fallback error mapping.
    pub fn spa_fallback() -> Self {
        Self {
            error_responses: vec![ErrorResponseRule::spa_fallback()],
            ..Self::default()
        }
    }
}

/// The fully assembled distribution request handed to the provisioning
/// engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionConfig {
    pub comment: String,
    pub domain_names: Vec<String>,
    pub certificate: ResolvedCertificate,
    pub log_access: bool,
    pub security_headers: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub error_responses: Vec<ErrorResponseRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_class: Option<String>,
    pub default_behavior: DefaultBehavior,
}

impl DistributionConfig {
    /// Merges overrides with the fields owned by the assembly.
    ///
    /// The domain name list and certificate always come from the assembly.
    /// The default behavior is merged shallowly: `edge_bindings` is replaced
    /// by the already merged binding list, other behavior fields from the
    /// overrides are preserved. Access logging and security header injection
    /// default to disabled.
    pub fn assemble(
        site_url: &str,
        certificate: ResolvedCertificate,
        edge_bindings: Option<Vec<EdgeBinding>>,
        overrides: Option<&DistributionOverrides>,
    ) -> Self {
        let behavior_overrides = overrides.and_then(|o| o.default_behavior.as_ref());

        Self {
            comment: overrides
                .and_then(|o| o.comment.clone())
                .unwrap_or_else(|| DEFAULT_COMMENT.to_string()),
            domain_names: vec![site_url.to_string()],
            certificate,
            log_access: overrides.and_then(|o| o.log_access).unwrap_or(false),
            security_headers: overrides.and_then(|o| o.security_headers).unwrap_or(false),
            error_responses: overrides.map(|o| o.error_responses.clone()).unwrap_or_default(),
            price_class: overrides.and_then(|o| o.price_class.clone()),
            default_behavior: DefaultBehavior {
                edge_bindings,
                viewer_protocol_policy: behavior_overrides
                    .and_then(|b| b.viewer_protocol_policy.clone()),
                compress: behavior_overrides.and_then(|b| b.compress),
            },
        }
    }
}

/// Merges caller-supplied edge bindings with the optional internal binding.
///
/// Overrides come first, the internal binding last, each exactly once.
/// Returns `None` when both sides are empty; a returned list is never empty.
pub fn merge_edge_bindings(
    overrides: &[EdgeBinding],
    internal: Option<EdgeBinding>,
) -> Option<Vec<EdgeBinding>> {
    let mut merged: Vec<EdgeBinding> = overrides.to_vec();
    if let Some(binding) = internal {
        merged.push(binding);
    }

    if merged.is_empty() { None } else { Some(merged) }
}
