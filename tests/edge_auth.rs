mod common;

use common::{base_spec, distribution_config, plan_service};
use static_website::infrastructure::planner::ResourceKind;

#[test]
fn without_basic_auth_no_function_and_binding_list_omitted() {
    let (service, engine) = plan_service();
    service.provision(&base_spec()).unwrap();

    let plan = engine.plan().unwrap();
    assert!(plan.of_kind(ResourceKind::EdgeFunction).is_empty());

    // The binding list is absent, not empty (scenario A: edgeLambdas undefined).
    let config = distribution_config(&plan);
    assert!(config["default_behavior"].get("edge_bindings").is_none());
}

#[test]
fn with_basic_auth_exactly_one_viewer_request_binding() {
    let spec = base_spec().with_basic_auth("a", "b");

    let (service, engine) = plan_service();
    service.provision(&spec).unwrap();

    let plan = engine.plan().unwrap();
    let functions = plan.of_kind(ResourceKind::EdgeFunction);
    assert_eq!(functions.len(), 1);

    let config = distribution_config(&plan);
    let bindings = config["default_behavior"]["edge_bindings"]
        .as_array()
        .unwrap();
    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings[0]["event_type"], "viewer-request");
    assert_eq!(
        bindings[0]["function_version"]["id"],
        functions[0].id.as_str()
    );
}

#[test]
fn published_function_embeds_supplied_credentials() {
    let spec = base_spec().with_basic_auth("a", "b");

    let (service, engine) = plan_service();
    service.provision(&spec).unwrap();

    let plan = engine.plan().unwrap();
    let functions = plan.of_kind(ResourceKind::EdgeFunction);
    let code = functions[0].attributes["code"].as_str().unwrap();

    // base64("a:b") == "YTpi"
    assert!(code.contains("const expected = 'Basic YTpi';"));
    assert!(code.contains("You are not authorized to enter"));
    assert!(code.contains("WWW-Authenticate"));
    assert!(code.contains("status: '401'"));

    // Runtime is pinned to the legacy edge runtime.
    assert_eq!(functions[0].attributes["runtime"], "nodejs14.x");
    assert_eq!(functions[0].attributes["handler"], "index.handler");
}

#[test]
fn distribution_depends_on_the_auth_function() {
    let spec = base_spec().with_basic_auth("a", "b");

    let (service, engine) = plan_service();
    let output = service.provision(&spec).unwrap();

    let plan = engine.plan().unwrap();
    let functions = plan.of_kind(ResourceKind::EdgeFunction);
    let distribution = plan.find(&output.distribution_id).unwrap();
    assert!(distribution.depends_on.contains(&functions[0].id));
}
