//! Scenario: reports straight from a document store
//!
//! Journey: an operator points netrecon at a directory of exported server
//! and cluster documents and asks for the fleet-wide report.

use netrecon::application::CheckUseCase;
use netrecon::domain::ports::StoreError;
use netrecon::{EntityKind, FsEntityRepository, ReconError, ReconcileOptions, Reconciler};
use serde_json::json;

use crate::common::*;

fn use_case(env: &TestEnv, options: ReconcileOptions) -> CheckUseCase<FsEntityRepository> {
    CheckUseCase::new(
        FsEntityRepository::with_path(env.store_path()),
        Reconciler::default().with_options(options),
    )
}

#[test]
fn scenario_fleet_report_lists_only_drifted_servers() {
    let env = TestEnv::new();
    env.write_server("web-01", &server_document("web-01", "10.0.0.1", "10.0.0.1"));
    env.write_server("web-02", &server_document("web-02", "10.0.0.2", "10.0.0.20"));
    env.write_server("web-03", &server_document("web-03", "10.0.0.3", "10.0.0.30"));

    let bulk = use_case(&env, ReconcileOptions::new().with_concurrency(2))
        .check_all(EntityKind::Server)
        .unwrap();

    let ids: Vec<&str> = bulk.reports.iter().map(|r| r.entity_id.as_str()).collect();
    assert_eq!(ids, ["web-02", "web-03"]);
    assert!(bulk.errors.is_empty());
    assert_eq!(bulk.mismatch_count(), 2);
}

#[test]
fn scenario_one_bad_document_does_not_hide_the_rest() {
    let env = TestEnv::new();
    env.write_cluster("east", &cluster_document("east", json!(["10.1.0.0/16"]), json!(["10.9.0.0/16"])));
    env.write_cluster(
        "west",
        &json!({
            "cluster_id": "west",
            "networks": [{ "name": "pods", "type": "cidr", "cidrs": [] }],
            "sources": { "Truth": { "networks": [] } }
        }),
    );

    let bulk = use_case(&env, ReconcileOptions::new())
        .check_all(EntityKind::Cluster)
        .unwrap();

    assert_eq!(bulk.reports.len(), 1);
    assert_eq!(bulk.reports[0].entity_id, "east");
    assert_eq!(bulk.errors.len(), 1);
    assert_eq!(bulk.errors[0].entity_id, "west");
    assert!(bulk.errors[0].error.contains("reserved"));
}

#[test]
fn scenario_unreadable_documents_become_entity_failures() {
    let env = TestEnv::new();
    env.write_cluster("east", &cluster_document("east", json!(["10.1.0.0/16"]), json!(["10.9.0.0/16"])));
    env.write_cluster("mid", &json!({ "cluster_id": "mid", "networks": ["pods"] }));
    env.write_cluster("west", &json!({ "owners": ["ops"], "networks": [] }));
    env.write_file("data/clusters/zeta.json", "{ not json");

    let bulk = use_case(&env, ReconcileOptions::new())
        .check_all(EntityKind::Cluster)
        .unwrap();

    assert_eq!(bulk.reports.len(), 1);
    assert_eq!(bulk.reports[0].entity_id, "east");
    assert_eq!(bulk.mismatch_count(), 1);

    let failed: Vec<&str> = bulk.errors.iter().map(|f| f.entity_id.as_str()).collect();
    assert_eq!(failed, ["mid", "west", "zeta"]);
    assert!(bulk.errors.iter().all(|f| f.kind == EntityKind::Cluster));
    assert!(bulk.errors.iter().all(|f| f.client_error));
    assert!(bulk.errors[1].error.contains("cluster document needs 'cluster_id' or 'env_config'"));
    assert!(bulk.errors[2].error.contains("zeta.json"));
}

#[test]
fn scenario_single_server_with_return_all() {
    let env = TestEnv::new();
    env.write_server("web-01", &server_document("web-01", "10.0.0.1", "10.0.0.1"));

    let report = use_case(&env, ReconcileOptions::new().with_return_all(true))
        .check_one(EntityKind::Server, "web-01")
        .unwrap();

    assert_eq!(report.inconsistencies.len(), 1);
    assert_eq!(
        report.inconsistencies[0].sources,
        ["Truth", "Inventory", "MonitoringTool"]
    );
    assert!(!report.has_findings());
}

#[test]
fn scenario_unknown_server_is_not_found() {
    let env = TestEnv::new();
    let err = use_case(&env, ReconcileOptions::new())
        .check_one(EntityKind::Server, "ghost")
        .unwrap_err();
    assert!(matches!(err, ReconError::Store(StoreError::NotFound { .. })));
}
