//! CNI network and plugin diff scenarios.

mod common;

use claimdiff_core::diff::cni::{diff_networks, diff_plugins};
use claimdiff_core::diff::model::CniPluginDiffReport;
use claimdiff_core::errors::{ClaimDiffError, ExError, ExErrorKind};
use common::{network, plugin};
use serde_json::json;

// S1: A plugin missing from claim 2 gets a single not-found tag
#[test]
fn test_plugin_only_in_claim1() {
    let claim1 = vec![
        plugin(json!({"type": "multus", "kubeconfig": "/etc/cni/multus.kubeconfig"})),
        plugin(json!({"type": "bridge", "bridge": "cni0"})),
    ];
    let claim2 = vec![plugin(json!({"type": "bridge", "bridge": "cni0"}))];

    let reports = diff_plugins("crio", &claim1, &claim2).unwrap();

    assert_eq!(
        reports,
        vec![CniPluginDiffReport {
            plugin_name: "multus".to_string(),
            differences: vec!["not found in claim2".to_string()],
        }]
    );
}

// S2: Plugin comparison does not descend into plugins missing on one side
#[test]
fn test_missing_plugin_not_field_diffed() {
    let claim1 = vec![plugin(json!({"type": "multus", "a": 1, "b": 2}))];

    let reports = diff_plugins("crio", &claim1, &[]).unwrap();

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].differences, vec!["not found in claim2"]);
}

// S3: Swapping claims swaps the not-found labels and nothing else
#[test]
fn test_network_diff_symmetric_under_swap() {
    let claim1 = vec![
        network("crio", "0.3.1", vec![plugin(json!({"type": "bridge", "mtu": 1500}))]),
        network("loopback", "0.3.1", vec![plugin(json!({"type": "loopback"}))]),
    ];
    let claim2 = vec![
        network("crio", "0.4.0", vec![plugin(json!({"type": "bridge", "mtu": 1450}))]),
        network("multus-cni", "0.3.1", vec![]),
    ];

    let forward = diff_networks(&claim1, &claim2).unwrap();
    let backward = diff_networks(&claim2, &claim1).unwrap();

    let names = |r: &[claimdiff_core::diff::model::CniNetworkDiffReport]| {
        r.iter().map(|n| n.network_name.clone()).collect::<Vec<_>>()
    };
    assert_eq!(names(&forward), vec!["crio", "loopback", "multus-cni"]);
    assert_eq!(names(&forward), names(&backward));

    assert_eq!(forward[1].differences, vec!["not found in claim2"]);
    assert_eq!(backward[1].differences, vec!["not found in claim1"]);
    assert_eq!(forward[0].differences, backward[0].differences);
}

// S4: Networks compared with themselves produce nothing
#[test]
fn test_network_self_diff_is_empty() {
    let nets = vec![
        network(
            "crio",
            "0.3.1",
            vec![
                plugin(json!({"type": "bridge", "ipam": {"type": "host-local", "ranges": [[{"subnet": "10.85.0.0/16"}]]}})),
                plugin(json!({"type": "portmap", "capabilities": {"portMappings": true}})),
            ],
        ),
    ];
    assert!(diff_networks(&nets, &nets).unwrap().is_empty());
}

// S5: Only the plugin that changed is attached to the network report
#[test]
fn test_network_report_attaches_changed_plugins_only() {
    let claim1 = vec![network(
        "crio",
        "0.3.1",
        vec![
            plugin(json!({"type": "bridge", "ipMasq": true})),
            plugin(json!({"type": "portmap"})),
        ],
    )];
    let claim2 = vec![network(
        "crio",
        "0.3.1",
        vec![
            plugin(json!({"type": "bridge", "ipMasq": false})),
            plugin(json!({"type": "portmap"})),
        ],
    )];

    let reports = diff_networks(&claim1, &claim2).unwrap();

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].differences, vec!["plugins"]);
    assert_eq!(
        reports[0].plugin_diffs,
        vec![CniPluginDiffReport {
            plugin_name: "bridge".to_string(),
            differences: vec!["ipMasq".to_string()],
        }]
    );
}

// S6: A plugin without "type" fails loudly with its position
#[test]
fn test_untyped_plugin_is_reported_as_error() {
    let claim1 = vec![network("crio", "0.3.1", vec![plugin(json!({"name": "bridge"}))])];
    let claim2 = vec![network("crio", "0.3.1", vec![plugin(json!({"type": "bridge"}))])];

    let err = diff_networks(&claim1, &claim2).unwrap_err();
    assert_eq!(
        err,
        ClaimDiffError::PluginMissingType {
            network: "crio".to_string(),
            index: 0,
        }
    );

    let ex: ExError = err.into();
    assert_eq!(ex.kind(), ExErrorKind::MissingPluginType);
    assert_eq!(ex.code(), "ERR_MISSING_PLUGIN_TYPE");
}
