mod common;

use common::{base_spec, distribution_config, plan_service};
use static_website::domain::entities::{ContentSource, SiteSpec};
use static_website::infrastructure::planner::ResourceKind;

#[test]
fn reused_certificate_wraps_reference_and_provisions_nothing() {
    let (service, engine) = plan_service();
    service.provision(&base_spec()).unwrap();

    let plan = engine.plan().unwrap();
    let references = plan.of_kind(ResourceKind::CertificateReference);
    assert_eq!(references.len(), 1);
    assert_eq!(references[0].attributes["certificate_arn"], "cert-123");

    // No new certificate is declared on the reuse path.
    assert!(plan.of_kind(ResourceKind::Certificate).is_empty());

    let config = distribution_config(&plan);
    assert_eq!(config["certificate"]["id"], "cert-123");
}

#[test]
fn absent_reference_provisions_one_certificate_scoped_to_site() {
    let spec = SiteSpec::new(
        "www.example.com",
        "example.com",
        vec![ContentSource::directory("./dist")],
    );

    let (service, engine) = plan_service();
    service.provision(&spec).unwrap();

    let plan = engine.plan().unwrap();
    assert!(plan.of_kind(ResourceKind::CertificateReference).is_empty());

    let certificates = plan.of_kind(ResourceKind::Certificate);
    assert_eq!(certificates.len(), 1);
    assert_eq!(certificates[0].attributes["domain_name"], "www.example.com");
    assert_eq!(certificates[0].attributes["validation"], "dns");

    // Validated against the zone resolved from zone_name.
    let zones = plan.of_kind(ResourceKind::HostedZone);
    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0].attributes["zone_name"], "example.com");
    assert_eq!(
        certificates[0].attributes["hosted_zone"],
        zones[0].id.as_str()
    );
    assert!(certificates[0].depends_on.contains(&zones[0].id));
}

#[test]
fn provisioned_certificate_is_carried_by_the_distribution() {
    let spec = SiteSpec::new(
        "www.example.com",
        "example.com",
        vec![ContentSource::directory("./dist")],
    );

    let (service, engine) = plan_service();
    service.provision(&spec).unwrap();

    let plan = engine.plan().unwrap();
    let certificates = plan.of_kind(ResourceKind::Certificate);
    let config = distribution_config(&plan);
    assert_eq!(config["certificate"]["id"], certificates[0].id.as_str());
}
