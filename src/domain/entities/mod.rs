//! Configuration-time descriptors of a hosting assembly.
//!
//! None of these have a mutable lifecycle beyond assembly: handles are
//! produced once and read-only thereafter, and the merge helpers are pure.

pub mod distribution;
pub mod handles;
pub mod site;

pub use distribution::{
    merge_edge_bindings, BehaviorOverrides, DefaultBehavior, DistributionConfig,
    DistributionOverrides, EdgeBinding, EdgeEventType, ErrorResponseRule,
};
pub use handles::{
    BucketHandle, DeploymentHandle, DistributionHandle, FunctionVersion, HostingOutput,
    RecordHandle, ResolvedCertificate, ResolvedZone, ResourceId,
};
pub use site::{BasicAuthCredentials, ContentSource, SiteSpec};
