//! # Static Website
//!
//! Composition of a static-content hosting setup: a private origin bucket,
//! a CDN distribution in front of it, a DNS alias record, an optional
//! viewer-request Basic-Auth edge function, and a content deployment tied to
//! cache invalidation.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Hosting descriptors and capability traits
//! - **Application Layer** ([`application`]) - Composition and merge logic
//! - **Infrastructure Layer** ([`infrastructure`]) - The in-memory plan engine
//!
//! The provisioning engine that turns declarations into live resources is an
//! external collaborator: the crate only decides *which* resources to
//! request, with *what* parameters, and *how* they reference one another.
//! Everything is consumed through the capability traits in
//! [`domain::capabilities`], so the composition is testable against mocks or
//! the shipped [`infrastructure::planner::PlanEngine`].
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use static_website::prelude::*;
//! use static_website::infrastructure::planner::PlanEngine;
//!
//! let engine = Arc::new(PlanEngine::new());
//! let service = HostingService::new(
//!     engine.clone(),
//!     engine.clone(),
//!     engine.clone(),
//!     engine.clone(),
//!     engine.clone(),
//!     engine.clone(),
//!     engine.clone(),
//! );
//!
//! let spec = SiteSpec::new(
//!     "www.example.com",
//!     "example.com",
//!     vec![ContentSource::directory("./dist")],
//! )
//! .with_certificate_arn("cert-123");
//!
//! let output = service.provision(&spec).unwrap();
//! println!("{}", output.distribution_id);
//! ```
//!
//! ## Known limitation
//!
//! Basic-Auth credentials are embedded as literals in the published edge
//! function payload. Rotating them requires republishing the function. This
//! mirrors the behavior of the construct the crate models and is deliberate;
//! fixing it would change the external contract.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use error::HostingError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        CertificateResolver, CertificateSource, EdgeAuthBuilder, HostingService, ZoneResolver,
    };
    pub use crate::domain::entities::{
        BasicAuthCredentials, ContentSource, DistributionOverrides, EdgeBinding, EdgeEventType,
        HostingOutput, SiteSpec,
    };
    pub use crate::error::HostingError;
}
