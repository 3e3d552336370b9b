//! Provisioning capability traits for the domain layer.
//!
//! These traits are the seams between the composition core and the external
//! provisioning engine: the core decides *which* resources to request, with
//! *what* parameters and *how* they reference each other, while an engine
//! implementation turns the declarations into live resources at apply time.
//!
//! # Architecture
//!
//! - Traits define the declaration contract for one resource family each
//! - The shipped implementation lives in `crate::infrastructure::planner`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available capabilities
//!
//! - [`ZoneLookup`] - resolve a pre-existing DNS hosting zone
//! - [`CertificateAuthority`] - reuse or issue TLS certificates
//! - [`EdgeFunctions`] - publish edge function versions
//! - [`ObjectStorage`] - create the private origin bucket
//! - [`Distributions`] - create the CDN distribution
//! - [`ContentDeployer`] - deploy assets with cache invalidation
//! - [`DnsRecords`] - declare the alias record

pub mod certificate_authority;
pub mod content_deployer;
pub mod distributions;
pub mod dns_records;
pub mod edge_functions;
pub mod object_storage;
pub mod zone_lookup;

pub use certificate_authority::CertificateAuthority;
pub use content_deployer::ContentDeployer;
pub use distributions::Distributions;
pub use dns_records::DnsRecords;
pub use edge_functions::{EdgeFunctions, FunctionRuntime};
pub use object_storage::ObjectStorage;
pub use zone_lookup::ZoneLookup;

#[cfg(test)]
pub use certificate_authority::MockCertificateAuthority;
#[cfg(test)]
pub use content_deployer::MockContentDeployer;
#[cfg(test)]
pub use distributions::MockDistributions;
#[cfg(test)]
pub use dns_records::MockDnsRecords;
#[cfg(test)]
pub use edge_functions::MockEdgeFunctions;
#[cfg(test)]
pub use object_storage::MockObjectStorage;
#[cfg(test)]
pub use zone_lookup::MockZoneLookup;
