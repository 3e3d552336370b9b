#![allow(dead_code)]

use std::sync::Arc;

use serde_json::Value;
use static_website::application::services::HostingService;
use static_website::domain::entities::{ContentSource, SiteSpec};
use static_website::infrastructure::planner::{PlanEngine, ResourceKind, ResourcePlan};

pub type PlanService = HostingService<
    PlanEngine,
    PlanEngine,
    PlanEngine,
    PlanEngine,
    PlanEngine,
    PlanEngine,
    PlanEngine,
>;

/// Wires a hosting service over a fresh plan engine shared across all
/// capability seams.
pub fn plan_service() -> (PlanService, Arc<PlanEngine>) {
    let engine = Arc::new(PlanEngine::new());
    let service = HostingService::new(
        engine.clone(),
        engine.clone(),
        engine.clone(),
        engine.clone(),
        engine.clone(),
        engine.clone(),
        engine.clone(),
    );
    (service, engine)
}

/// Spec of scenario A: reused certificate, one content directory, no auth,
/// no overrides.
pub fn base_spec() -> SiteSpec {
    SiteSpec::new(
        "www.example.com",
        "example.com",
        vec![ContentSource::directory("./dist")],
    )
    .with_certificate_arn("cert-123")
}

/// The single distribution config recorded in the plan, as JSON.
pub fn distribution_config(plan: &ResourcePlan) -> Value {
    let distributions = plan.of_kind(ResourceKind::Distribution);
    assert_eq!(distributions.len(), 1, "expected exactly one distribution");
    distributions[0].attributes["config"].clone()
}
