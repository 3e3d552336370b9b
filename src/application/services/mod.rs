//! Composition services orchestrating the hosting assembly.
//!
//! Four services mirror the assembly's dependency order: the zone is
//! resolved first, the certificate against it, the optional Basic-Auth
//! binding independently, and [`HostingService`] merges everything into the
//! final distribution request plus its dependent resources.

pub mod certificate_resolver;
pub mod edge_auth;
pub mod hosting_service;
pub mod zone_resolver;

pub use certificate_resolver::{CertificateResolver, CertificateSource};
pub use edge_auth::EdgeAuthBuilder;
pub use hosting_service::HostingService;
pub use zone_resolver::ZoneResolver;
