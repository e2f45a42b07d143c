use claimdiff_core::claim::{ClaimDocument, CniNetwork, CniPlugin, TestCaseResult};
use serde_json::{json, Value};

/// Turn a JSON object literal into a plugin record
#[allow(dead_code)]
pub fn plugin(v: Value) -> CniPlugin {
    match v {
        Value::Object(map) => map,
        other => panic!("plugin must be a JSON object, got {}", other),
    }
}

#[allow(dead_code)]
pub fn network(name: &str, cni_version: &str, plugins: Vec<CniPlugin>) -> CniNetwork {
    CniNetwork {
        name: name.to_string(),
        cni_version: cni_version.to_string(),
        disable_check: false,
        plugins,
    }
}

/// A Kubernetes node object carrying the given labels
#[allow(dead_code)]
pub fn node_with_labels(labels: &[&str]) -> Value {
    let labels: serde_json::Map<String, Value> = labels
        .iter()
        .map(|l| (l.to_string(), json!("")))
        .collect();
    json!({"metadata": {"labels": labels}})
}

/// Add a node and its CNI networks to a claim
#[allow(dead_code)]
pub fn add_node(claim: &mut ClaimDocument, name: &str, labels: &[&str], networks: Vec<CniNetwork>) {
    claim
        .node_summaries
        .insert(name.to_string(), node_with_labels(labels));
    claim
        .cni_networks_by_node
        .insert(name.to_string(), networks);
}

/// Store one test case result under its own id
#[allow(dead_code)]
pub fn add_result(claim: &mut ClaimDocument, id: &str, state: &str) {
    let suite = id.split('-').next().unwrap_or_default().to_string();
    claim.results_by_suite.insert(
        id.to_string(),
        vec![TestCaseResult::new(id, suite, state)],
    );
}

/// Serialize a JSON value to claim file bytes
#[allow(dead_code)]
pub fn to_bytes(v: &Value) -> Vec<u8> {
    serde_json::to_vec(v).unwrap()
}
