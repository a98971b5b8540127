// End-to-end flow: load fixtures, resolve spacing, seed + enrich metadata,
// evaluate the profile, and serialize the results the way an orchestrator
// would.

mod common;

use gridmeta_core::loader::{parse_config, parse_profile, parse_request};
use gridmeta_core::resolver::{enrich, resolve, seed_domain, SpacingSource};
use gridmeta_core::rules::evaluate;

#[test]
fn healthy_run_resolves_and_passes() {
    let request = parse_request(&common::read_fixture("run_request.yaml")).expect("request");
    let config = parse_config(&common::read_fixture("resolution_config.yaml")).expect("config");
    let profile = parse_profile(&common::read_fixture("profile.yaml")).expect("profile");

    let outcome = resolve(
        &request.spacing,
        &config,
        &request.bounding_box,
        &request.grid_dimensions,
    )
    .expect("resolution should succeed");

    assert_eq!(outcome.spacing.dx, 0.5);
    assert_eq!(outcome.spacing.dy, 0.5); // (10 - 0) / 20
    assert_eq!(outcome.spacing.dz, 0.75);
    assert_eq!(outcome.trace.x, SpacingSource::Hint);
    assert_eq!(outcome.trace.y, SpacingSource::Heuristic);
    assert_eq!(outcome.trace.z, SpacingSource::ConfigDefault);

    let mut metadata = request.metadata.clone();
    seed_domain(&mut metadata, &request.bounding_box, &request.grid_dimensions);
    enrich(&mut metadata, &outcome);

    let report = evaluate(&metadata, &profile);
    assert!(report.passed(), "unexpected findings: {report:?}");
}

#[test]
fn inverted_bounds_surface_as_violations() {
    let mut request =
        parse_request(&common::read_fixture("run_request.yaml")).expect("request");
    let config = parse_config(&common::read_fixture("resolution_config.yaml")).expect("config");
    let profile = parse_profile(&common::read_fixture("profile.yaml")).expect("profile");

    // Inverted z bounds keep the volume nonzero, so resolution still
    // succeeds; the profile is what flags the geometry.
    request.bounding_box.max_z = -30.0;

    let outcome = resolve(
        &request.spacing,
        &config,
        &request.bounding_box,
        &request.grid_dimensions,
    )
    .expect("nonzero negative volume still resolves");
    assert!(outcome.derived.resolution_density < 0.0);

    let mut metadata = request.metadata.clone();
    seed_domain(&mut metadata, &request.bounding_box, &request.grid_dimensions);
    enrich(&mut metadata, &outcome);

    let report = evaluate(&metadata, &profile);
    assert_eq!(
        report.messages(),
        vec![
            "Inverted domain bounds on z axis",
            "Domain has no resolvable density",
        ]
    );
    assert!(report.errors.is_empty());
}

#[test]
fn execute_run_matches_the_manual_flow() {
    let request = parse_request(&common::read_fixture("run_request.yaml")).expect("request");
    let config = parse_config(&common::read_fixture("resolution_config.yaml")).expect("config");
    let profile = parse_profile(&common::read_fixture("profile.yaml")).expect("profile");

    let report = gridmeta_core::execute_run(&request, &config, &profile)
        .expect("run should succeed");

    assert!(report.passed());
    assert_eq!(
        report
            .metadata
            .lookup("resolution.dz")
            .and_then(|v| v.as_number()),
        Some(0.75)
    );
    assert_eq!(
        report
            .metadata
            .lookup("domain_definition.max_y")
            .and_then(|v| v.as_number()),
        Some(10.0)
    );
    // Caller-supplied metadata survives seeding and enrichment.
    assert_eq!(
        report.metadata.lookup("solver").and_then(|v| v.as_str()),
        Some("mgfd")
    );
}

#[test]
fn report_serializes_for_the_orchestrator() {
    let request = parse_request(&common::read_fixture("run_request.yaml")).expect("request");
    let config = parse_config(&common::read_fixture("resolution_config.yaml")).expect("config");

    let outcome = resolve(
        &request.spacing,
        &config,
        &request.bounding_box,
        &request.grid_dimensions,
    )
    .expect("resolution should succeed");

    let json = serde_json::to_value(&outcome).expect("outcome should serialize");
    assert_eq!(json["trace"]["x"], "hint");
    assert_eq!(json["trace"]["y"], "heuristic");
    assert_eq!(json["trace"]["z"], "config_default");
    assert_eq!(json["spacing"]["dy"], 0.5);
    assert_eq!(json["derived"]["domain_size"], 160000);
}
