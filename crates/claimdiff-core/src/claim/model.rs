//! In-memory claim schema.
//!
//! Values are built once by the loader (or directly in tests) and are only
//! read by the diff engines.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Test case state recorded for a passing case
pub const STATE_PASSED: &str = "passed";
/// Test case state recorded for a failing case
pub const STATE_FAILED: &str = "failed";
/// Test case state recorded for a skipped case
pub const STATE_SKIPPED: &str = "skipped";

/// A CNI plugin configuration object.
///
/// Plugin schemas vary by CNI implementation, so the record is kept as an
/// open field map. The `"type"` field is its identity within a network.
pub type CniPlugin = Map<String, Value>;

/// One CNI network configuration as found on a node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CniNetwork {
    pub name: String,
    #[serde(rename = "cniVersion")]
    pub cni_version: String,
    #[serde(rename = "disableCheck")]
    pub disable_check: bool,
    pub plugins: Vec<CniPlugin>,
}

/// The outcome of one test case.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TestCaseResult {
    /// Globally unique case identifier
    pub id: String,
    pub suite: String,
    /// One of `passed`, `failed`, `skipped`; other values are kept verbatim
    pub state: String,
}

impl TestCaseResult {
    pub fn new(id: impl Into<String>, suite: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            suite: suite.into(),
            state: state.into(),
        }
    }
}

/// A parsed claim artifact.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClaimDocument {
    /// Node name to opaque node descriptor (a Kubernetes node object)
    pub node_summaries: BTreeMap<String, Value>,
    /// Node name to the CNI networks configured on it
    pub cni_networks_by_node: BTreeMap<String, Vec<CniNetwork>>,
    /// Storage key (suite or case name) to the results stored under it
    pub results_by_suite: BTreeMap<String, Vec<TestCaseResult>>,
    /// Tool and platform versions recorded with the claim
    pub versions: Value,
    /// Node name to hardware inventory (CPU, memory, PCI devices)
    pub nodes_hw_info: Value,
    /// CSI drivers installed in the cluster
    pub csi_driver: Value,
    /// Test suite configuration the claim was produced with
    pub configuration: Value,
    /// Abnormal cluster events observed during the run
    pub abnormal_events: Vec<Value>,
}

impl ClaimDocument {
    /// All test case results, regardless of the key they are stored under
    pub fn results(&self) -> impl Iterator<Item = &TestCaseResult> {
        self.results_by_suite.values().flatten()
    }

    /// CNI networks of a node; empty when the node has none recorded
    pub fn cni_networks(&self, node: &str) -> &[CniNetwork] {
        self.cni_networks_by_node
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
