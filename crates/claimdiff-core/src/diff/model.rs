//! Claim diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Every list is sorted by its identity key before it is stored, so the
//! serialized form is deterministic. JSON keys follow the claim tool's
//! established report format.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tag for an entity present only in the second claim
pub const NOT_FOUND_IN_CLAIM1: &str = "not found in claim1";
/// Tag for an entity present only in the first claim
pub const NOT_FOUND_IN_CLAIM2: &str = "not found in claim2";

/// Network tag: `cniVersion` values differ
pub const DIFF_CNI_VERSION: &str = "cniVersion";
/// Network tag: at least one plugin differs
pub const DIFF_PLUGINS: &str = "plugins";
/// Network tag: `disableCheck` flags differ
pub const DIFF_DISABLE_CHECK: &str = "disable_check";
/// Node tag: at least one CNI network differs
pub const DIFF_CNIS: &str = "CNIs";

/// Test case state reported for the claim that lacks the case
pub const TC_RESULT_NOT_FOUND: &str = "not found";

/// Whether a difference tag only records that the entity is absent on one side.
pub fn is_not_found_tag(tag: &str) -> bool {
    tag == NOT_FOUND_IN_CLAIM1 || tag == NOT_FOUND_IN_CLAIM2
}

/// True when the differences are exactly one not-found tag.
///
/// Such entries have nothing deeper to show.
pub fn only_not_found(differences: &[String]) -> bool {
    matches!(differences, [tag] if is_not_found_tag(tag))
}

/// The top-level comparison of two claims.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DiffReport {
    /// Tool and platform versions
    pub versions: FieldDiffs,
    /// Test case results
    #[serde(rename = "testCases")]
    pub test_cases: TestCasesDiffReport,
    /// Test suite configuration and abnormal cluster events
    #[serde(default)]
    pub configurations: ConfigurationsDiffReport,
    /// Cluster nodes and their CNI configuration
    pub nodes: NodesDiffReport,
}

// ---------------------------------------------------------------------------
// Nodes
// ---------------------------------------------------------------------------

/// Per-claim node role counts.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RolesSummary {
    #[serde(rename = "masterNodes")]
    pub master_nodes: usize,
    #[serde(rename = "workerNodes")]
    pub worker_nodes: usize,
    #[serde(rename = "masterAndWorkerNodes")]
    pub master_and_worker_nodes: usize,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodesRolesSummary {
    pub claim1: RolesSummary,
    pub claim2: RolesSummary,
}

/// Role summaries plus one entry per node that differs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NodesDiffReport {
    #[serde(rename = "nodesRolesSummary")]
    pub summary: NodesRolesSummary,
    /// Sorted by node name
    #[serde(rename = "nodesDiffReport", default)]
    pub node_diffs: Vec<NodeDiffReport>,
    /// Leaf diff of the CSI driver inventory
    #[serde(rename = "CSI", default)]
    pub csi: FieldDiffs,
    /// Leaf diff of the node hardware inventory
    #[serde(rename = "hardware", default)]
    pub hardware: FieldDiffs,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NodeDiffReport {
    #[serde(rename = "nodeName")]
    pub node_name: String,
    pub differences: Vec<String>,
    #[serde(
        rename = "cniNetworksDiffReport",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub cni_network_diffs: Vec<CniNetworkDiffReport>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CniNetworkDiffReport {
    #[serde(rename = "networkName")]
    pub network_name: String,
    /// Tags in the order they were detected
    pub differences: Vec<String>,
    #[serde(
        rename = "pluginsDiffReport",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub plugin_diffs: Vec<CniPluginDiffReport>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CniPluginDiffReport {
    /// The plugin's `"type"`
    #[serde(rename = "pluginName")]
    pub plugin_name: String,
    /// Differing field names, or a single not-found tag
    pub differences: Vec<String>,
}

// ---------------------------------------------------------------------------
// Test cases
// ---------------------------------------------------------------------------

/// Count of test case states in one claim.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct TcResultsSummary {
    pub passed: usize,
    pub skipped: usize,
    pub failed: usize,
    /// States outside passed/skipped/failed (e.g. `error`)
    #[serde(default, skip_serializing_if = "is_zero")]
    pub other: usize,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct TcResultDifference {
    pub name: String,
    /// State in claim 1, or `not found`
    pub claim1_result: String,
    /// State in claim 2, or `not found`
    pub claim2_result: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TestCasesDiffReport {
    #[serde(rename = "claimFile1ResultsSummary")]
    pub claim1_summary: TcResultsSummary,
    #[serde(rename = "claimFile2ResultsSummary")]
    pub claim2_summary: TcResultsSummary,
    /// Sorted by test case id
    #[serde(rename = "resultsDifferences", default)]
    pub differences: Vec<TcResultDifference>,
    #[serde(rename = "differentTestCasesResults")]
    pub differing_count: usize,
}

// ---------------------------------------------------------------------------
// Configurations
// ---------------------------------------------------------------------------

/// Number of abnormal cluster events recorded by each claim.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbnormalEventsCount {
    pub claim1: usize,
    pub claim2: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConfigurationsDiffReport {
    /// Leaf diff of the test suite configuration
    #[serde(rename = "CertSuiteConfig")]
    pub config: FieldDiffs,
    #[serde(rename = "abnormalEventsCount")]
    pub abnormal_events: AbnormalEventsCount,
}

// ---------------------------------------------------------------------------
// Generic field diffs
// ---------------------------------------------------------------------------

/// One leaf present in both claims with different values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDiff {
    /// Slash-separated path from the section root, e.g. `/k8s`
    pub field: String,
    #[serde(rename = "claim1Value")]
    pub claim1_value: Value,
    #[serde(rename = "claim2Value")]
    pub claim2_value: Value,
}

/// Leaf-by-leaf comparison of one opaque claim section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct FieldDiffs {
    /// Section label used as the text heading, e.g. `VERSIONS`
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDiff>,
    /// `path=value` entries
    #[serde(default)]
    pub fields_in_claim1_only: Vec<String>,
    /// `path=value` entries
    #[serde(default)]
    pub fields_in_claim2_only: Vec<String>,
}

impl FieldDiffs {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
            && self.fields_in_claim1_only.is_empty()
            && self.fields_in_claim2_only.is_empty()
    }
}
