//! Site specification: the high-level input of a hosting assembly.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::distribution::DistributionOverrides;

/// A source of static site content, deployed into the origin bucket in
/// list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentSource {
    /// A local directory whose files are uploaded as-is.
    Directory { path: PathBuf },
    /// A zip archive unpacked into the bucket root.
    Archive { path: PathBuf },
}

impl ContentSource {
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self::Directory { path: path.into() }
    }

    pub fn archive(path: impl Into<PathBuf>) -> Self {
        Self::Archive { path: path.into() }
    }
}

/// Credentials for the optional viewer-request Basic-Auth gate.
///
/// Both fields are embedded as literals into the published edge function
/// payload. Rotating them requires redeploying the function; this is a known
/// limitation inherited from the construct this crate models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicAuthCredentials {
    pub username: String,
    pub password: String,
}

/// Input of one hosting assembly.
///
/// `site_url` is the fully-qualified hostname to serve; `zone_name` names the
/// pre-existing DNS zone it is resolved within. When `certificate_arn` is
/// absent, a certificate scoped to `site_url` is provisioned and validated
/// against the resolved zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSpec {
    pub site_url: String,
    pub zone_name: String,
    /// Order defines deployment order.
    pub content_sources: Vec<ContentSource>,
    /// Pre-existing certificate identifier; reused verbatim when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic_auth: Option<BasicAuthCredentials>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution_overrides: Option<DistributionOverrides>,
}

impl SiteSpec {
    /// Creates a spec with the required fields; optional fragments default
    /// to absent.
    pub fn new(
        site_url: impl Into<String>,
        zone_name: impl Into<String>,
        content_sources: Vec<ContentSource>,
    ) -> Self {
        Self {
            site_url: site_url.into(),
            zone_name: zone_name.into(),
            content_sources,
            certificate_arn: None,
            basic_auth: None,
            distribution_overrides: None,
        }
    }

    pub fn with_certificate_arn(mut self, arn: impl Into<String>) -> Self {
        self.certificate_arn = Some(arn.into());
        self
    }

    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.basic_auth = Some(BasicAuthCredentials {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    pub fn with_distribution_overrides(mut self, overrides: DistributionOverrides) -> Self {
        self.distribution_overrides = Some(overrides);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_defaults_leave_optional_fragments_absent() {
        let spec = SiteSpec::new(
            "www.example.com",
            "example.com",
            vec![ContentSource::directory("./dist")],
        );

        assert_eq!(spec.site_url, "www.example.com");
        assert_eq!(spec.zone_name, "example.com");
        assert_eq!(spec.content_sources.len(), 1);
        assert!(spec.certificate_arn.is_none());
        assert!(spec.basic_auth.is_none());
        assert!(spec.distribution_overrides.is_none());
    }

    #[test]
    fn test_spec_builder_sets_optional_fragments() {
        let spec = SiteSpec::new("www.example.com", "example.com", vec![])
            .with_certificate_arn("cert-123")
            .with_basic_auth("a", "b");

        assert_eq!(spec.certificate_arn.as_deref(), Some("cert-123"));
        let auth = spec.basic_auth.unwrap();
        assert_eq!(auth.username, "a");
        assert_eq!(auth.password, "b");
    }

    #[test]
    fn test_content_source_order_is_preserved_through_serde() {
        let sources = vec![
            ContentSource::directory("./a"),
            ContentSource::archive("./b.zip"),
            ContentSource::directory("./c"),
        ];
        let json = serde_json::to_string(&sources).unwrap();
        let back: Vec<ContentSource> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sources);
    }
}
