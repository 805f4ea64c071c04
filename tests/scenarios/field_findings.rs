//! Scenario: field-level findings for a single server
//!
//! Truth, Inventory and MonitoringTool report the same `data` network with
//! small disagreements. Each test pins the detail list the engine produces.

use netrecon::{ReconError, Reconciler, Source};
use serde_json::{json, Value};

use crate::common::*;

fn details_of(entity: &netrecon::Entity) -> Value {
    let report = Reconciler::default().reconcile(entity).unwrap();
    let value = serde_json::to_value(&report.inconsistencies).unwrap();
    match value.as_array().map(Vec::as_slice) {
        Some([entry]) => entry["details"].clone(),
        Some([]) => json!([]),
        _ => panic!("expected at most one report entry, got {value}"),
    }
}

/// SCENARIO A: one source disagrees on the IP
#[test]
fn scenario_a_ip_mismatch() {
    let entity = server_with(
        json!([data_ip("10.5.5.5")]),
        &[
            ("Inventory", json!([data_ip("10.0.0.10")])),
            ("MonitoringTool", json!([data_ip("10.5.5.5")])),
        ],
    );

    // Truth is processed first, so its class comes first
    assert_eq!(
        details_of(&entity),
        json!([{
            "field": "ip",
            "type": "mismatch",
            "values": [
                { "value": "10.5.5.5", "sources": ["Truth", "MonitoringTool"] },
                { "value": "10.0.0.10", "sources": ["Inventory"] }
            ],
            "message": "IP mismatch across sources"
        }])
    );
}

/// SCENARIO B: an empty string is a real value, even for an allow-null field
#[test]
fn scenario_b_empty_string_is_a_value() {
    let mut blank_mac = data_ip("10.5.5.5");
    blank_mac["mac"] = json!("");

    let entity = server_with(
        json!([data_ip("10.5.5.5")]),
        &[
            ("Inventory", json!([blank_mac])),
            ("MonitoringTool", json!([data_ip("10.5.5.5")])),
        ],
    );

    assert_eq!(
        details_of(&entity),
        json!([{
            "field": "mac",
            "type": "mismatch",
            "values": [
                { "value": TEST_MAC, "sources": ["Truth", "MonitoringTool"] },
                { "value": "", "sources": ["Inventory"] }
            ],
            "message": "MAC mismatch across sources"
        }])
    );
}

/// SCENARIO C: null on a field that does not forgive nulls counts as missing,
/// exactly like an absent key
#[test]
fn scenario_c_null_counts_as_missing() {
    let mut null_ip = data_ip("10.5.5.5");
    null_ip["ip"] = Value::Null;
    let mut no_ip = data_ip("10.5.5.5");
    no_ip.as_object_mut().unwrap().remove("ip");

    let expected = json!([{
        "field": "ip",
        "type": "missing",
        "missingSources": ["Inventory"],
        "message": "IP missing in some sources"
    }]);

    for inventory in [null_ip, no_ip] {
        let entity = server_with(
            json!([data_ip("10.5.5.5")]),
            &[
                ("Inventory", json!([inventory])),
                ("MonitoringTool", json!([data_ip("10.5.5.5")])),
            ],
        );
        assert_eq!(details_of(&entity), expected);
    }
}

/// SCENARIO D: an explicit empty list differs from a non-empty one
#[test]
fn scenario_d_empty_list_mismatch() {
    let pods = |cidrs: Value| json!([{ "name": "pods", "type": "cidr", "cidrs": cidrs }]);
    let entity = server_with(
        pods(json!(["172.1.0.1/16"])),
        &[
            ("Inventory", pods(json!([]))),
            ("MonitoringTool", pods(json!(["172.1.0.1/16"]))),
        ],
    );

    assert_eq!(
        details_of(&entity),
        json!([{
            "field": "cidrs",
            "type": "mismatch",
            "values": [
                { "value": ["172.1.0.1/16"], "sources": ["Truth", "MonitoringTool"] },
                { "value": [], "sources": ["Inventory"] }
            ],
            "message": "CIDRS mismatch across sources"
        }])
    );
}

/// SCENARIO E: a source that is not there at all contributes nothing
#[test]
fn scenario_e_absent_source_block() {
    let agreeing = server_with(
        json!([data_ip("10.5.5.5")]),
        &[("MonitoringTool", json!([data_ip("10.5.5.5")]))],
    );
    let report = Reconciler::default().reconcile(&agreeing).unwrap();
    assert!(report.inconsistencies.is_empty());

    let disagreeing = server_with(
        json!([data_ip("10.5.5.5")]),
        &[("MonitoringTool", json!([data_ip("10.5.5.6")]))],
    );
    let report = Reconciler::default().reconcile(&disagreeing).unwrap();
    assert_eq!(report.inconsistencies.len(), 1);
    assert_eq!(report.inconsistencies[0].sources, ["Truth", "MonitoringTool"]);
    assert_eq!(report.inconsistencies[0].mismatch_count(), 1);
    assert_eq!(report.inconsistencies[0].missing_count(), 0);
}

/// SCENARIO: a collector registered under the reserved label
#[test]
fn scenario_reserved_source_name_is_rejected() {
    let entity = server_with(json!([data_ip("10.5.5.5")]), &[])
        .with_source("Truth", Source::new(networks(json!([data_ip("10.0.0.1")]))));

    let err = Reconciler::default().reconcile(&entity).unwrap_err();
    assert!(matches!(err, ReconError::ReservedSourceName));
    assert!(err.is_client_error());
}

/// SCENARIO: a malformed record anywhere fails the whole entity
#[test]
fn scenario_malformed_record_fails_fast() {
    let entity = server_with(
        json!([data_ip("10.5.5.5")]),
        &[
            ("Inventory", json!([data_ip("10.5.5.5"), { "type": "ip", "ip": "10.0.0.1" }])),
            ("MonitoringTool", json!([data_ip("10.0.0.99")])),
        ],
    );

    let err = Reconciler::default().reconcile(&entity).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid network #1 in source 'Inventory': ip network record has no 'name'"
    );
}
