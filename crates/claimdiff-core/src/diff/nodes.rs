//! Cluster node comparison.

use crate::claim::ClaimDocument;
use crate::diff::cni::diff_networks;
use crate::diff::model::{
    NodeDiffReport, NodesDiffReport, NodesRolesSummary, RolesSummary, DIFF_CNIS,
    NOT_FOUND_IN_CLAIM1, NOT_FOUND_IN_CLAIM2,
};
use crate::diff::reconcile::sorted_union;
use crate::diff::versions::diff_values;
use crate::errors::Result;
use serde_json::Value;
use std::collections::BTreeMap;

const MASTER_NODE_LABELS: &[&str] = &[
    "node-role.kubernetes.io/master",
    "node-role.kubernetes.io/control-plane",
];
const WORKER_NODE_LABELS: &[&str] = &["node-role.kubernetes.io/worker"];

/// Section label for the CSI driver inventory
pub const CSI_SECTION: &str = "CSIs";
/// Section label for the node hardware inventory
pub const HARDWARE_SECTION: &str = "Hardware";

fn has_any_label(node: &Value, labels: &[&str]) -> bool {
    node.pointer("/metadata/labels")
        .and_then(Value::as_object)
        .is_some_and(|node_labels| node_labels.keys().any(|k| labels.contains(&k.as_str())))
}

/// Count master-only, worker-only and master+worker nodes.
///
/// Nodes carrying neither role label are not counted.
pub fn roles_summary(node_summaries: &BTreeMap<String, Value>) -> RolesSummary {
    let mut summary = RolesSummary::default();
    for node in node_summaries.values() {
        let master = has_any_label(node, MASTER_NODE_LABELS);
        let worker = has_any_label(node, WORKER_NODE_LABELS);
        match (master, worker) {
            (true, true) => summary.master_and_worker_nodes += 1,
            (true, false) => summary.master_nodes += 1,
            (false, true) => summary.worker_nodes += 1,
            (false, false) => {}
        }
    }
    summary
}

/// Compare the nodes of two claims.
///
/// Nodes are matched by name. A node on both sides is compared through its
/// CNI networks and reported with the `CNIs` tag when they differ. Output is
/// sorted by node name. The CSI driver and node hardware inventories are
/// compared leaf by leaf.
///
/// # Errors
///
/// - `PluginMissingType` / `PluginTypeNotString`: a plugin of a node present
///   in both claims has no string `"type"`
pub fn diff_nodes(claim1: &ClaimDocument, claim2: &ClaimDocument) -> Result<NodesDiffReport> {
    let summary = NodesRolesSummary {
        claim1: roles_summary(&claim1.node_summaries),
        claim2: roles_summary(&claim2.node_summaries),
    };

    let mut node_diffs = Vec::new();
    for name in sorted_union(claim1.node_summaries.keys(), claim2.node_summaries.keys()) {
        let mut differences = Vec::new();
        let mut cni_network_diffs = Vec::new();

        if !claim1.node_summaries.contains_key(&name) {
            differences.push(NOT_FOUND_IN_CLAIM1.to_string());
        } else if !claim2.node_summaries.contains_key(&name) {
            differences.push(NOT_FOUND_IN_CLAIM2.to_string());
        } else {
            cni_network_diffs =
                diff_networks(claim1.cni_networks(&name), claim2.cni_networks(&name))?;
            if !cni_network_diffs.is_empty() {
                differences.push(DIFF_CNIS.to_string());
            }
        }

        if !differences.is_empty() {
            node_diffs.push(NodeDiffReport {
                node_name: name,
                differences,
                cni_network_diffs,
            });
        }
    }

    tracing::debug!(
        nodes1 = claim1.node_summaries.len(),
        nodes2 = claim2.node_summaries.len(),
        node_diffs = node_diffs.len(),
        "compared cluster nodes"
    );

    Ok(NodesDiffReport {
        summary,
        node_diffs,
        csi: diff_values(CSI_SECTION, &claim1.csi_driver, &claim2.csi_driver),
        hardware: diff_values(HARDWARE_SECTION, &claim1.nodes_hw_info, &claim2.nodes_hw_info),
    })
}
