//! Claim file loader.
//!
//! Turns claim JSON bytes into a [`ClaimDocument`]. Only the sections the
//! comparison reads are typed; everything else in the file is ignored.

use crate::claim::model::{ClaimDocument, CniNetwork, TestCaseResult};
use crate::errors::{ClaimDiffError, ExError, ExErrorKind};
use crate::{log_op_end, log_op_error, log_op_start};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

#[derive(Debug, Deserialize)]
struct ClaimFile {
    claim: ClaimRoot,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ClaimRoot {
    nodes: NodesSection,
    results: BTreeMap<String, SuiteResults>,
    versions: Value,
    configurations: ConfigurationsSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigurationsSection {
    #[serde(rename = "Config")]
    config: Value,
    #[serde(rename = "AbnormalEvents")]
    abnormal_events: Option<Vec<Value>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NodesSection {
    #[serde(rename = "nodeSummary")]
    node_summary: BTreeMap<String, Value>,
    #[serde(rename = "cniPlugins", alias = "cniNetworks")]
    cni_networks: BTreeMap<String, Vec<CniNetwork>>,
    #[serde(rename = "nodesHwInfo")]
    nodes_hw_info: Value,
    #[serde(rename = "csiDriver")]
    csi_driver: Value,
}

/// A results entry holds either one case or every case of a suite.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SuiteResults {
    Many(Vec<RawTestCaseResult>),
    One(RawTestCaseResult),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawTestCaseResult {
    #[serde(rename = "testID", alias = "TestID")]
    test_id: RawTestCaseId,
    state: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawTestCaseId {
    id: String,
    suite: String,
}

impl From<RawTestCaseResult> for TestCaseResult {
    fn from(raw: RawTestCaseResult) -> Self {
        TestCaseResult {
            id: raw.test_id.id,
            suite: raw.test_id.suite,
            state: raw.state,
        }
    }
}

impl From<ClaimFile> for ClaimDocument {
    fn from(file: ClaimFile) -> Self {
        let root = file.claim;
        let results_by_suite = root
            .results
            .into_iter()
            .map(|(key, results)| {
                let cases = match results {
                    SuiteResults::Many(cases) => cases.into_iter().map(Into::into).collect(),
                    SuiteResults::One(case) => vec![case.into()],
                };
                (key, cases)
            })
            .collect();

        ClaimDocument {
            node_summaries: root.nodes.node_summary,
            cni_networks_by_node: root.nodes.cni_networks,
            results_by_suite,
            versions: root.versions,
            nodes_hw_info: root.nodes.nodes_hw_info,
            csi_driver: root.nodes.csi_driver,
            configuration: root.configurations.config,
            abnormal_events: root.configurations.abnormal_events.unwrap_or_default(),
        }
    }
}

/// Parse raw claim bytes into a [`ClaimDocument`].
///
/// # Errors
///
/// - `InvalidClaim`: bytes are not valid UTF-8 or JSON, the root is not an
///   object, or a typed section does not match the claim schema
/// - `MissingField`: the top-level `claim` key is absent
pub fn parse_claim_bytes(bytes: &[u8]) -> Result<ClaimDocument, ExError> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        ExError::new(ExErrorKind::InvalidClaim)
            .with_op("parse_claim_bytes")
            .with_message(format!("claim is not valid UTF-8: {}", e))
    })?;

    let raw: Value = serde_json::from_str(text).map_err(|e| {
        ExError::new(ExErrorKind::InvalidClaim)
            .with_op("parse_claim_bytes")
            .with_message(format!("claim is not valid JSON: {}", e))
    })?;

    let obj = raw.as_object().ok_or_else(|| {
        ExError::new(ExErrorKind::InvalidClaim)
            .with_op("parse_claim_bytes")
            .with_message("claim JSON root must be an object")
    })?;

    if !obj.contains_key("claim") {
        let err: ExError = ClaimDiffError::MissingField {
            field: "claim".to_string(),
        }
        .into();
        return Err(err.with_op("parse_claim_bytes"));
    }

    let file: ClaimFile = serde_json::from_value(raw).map_err(|e| {
        let err: ExError = ClaimDiffError::ClaimParse {
            message: e.to_string(),
        }
        .into();
        err.with_op("parse_claim_bytes")
    })?;

    Ok(file.into())
}

/// Read and parse a claim file.
///
/// # Errors
///
/// - `Io`: the file cannot be read
/// - any error of [`parse_claim_bytes`]
pub fn load_claim_file(path: &Path) -> Result<ClaimDocument, ExError> {
    let start = Instant::now();
    let claim_path = path.display().to_string();
    log_op_start!("load_claim_file", claim_path = %claim_path);

    let result = std::fs::read(path)
        .map_err(|e| {
            let err: ExError = ClaimDiffError::ClaimRead {
                path: claim_path.clone(),
                message: e.to_string(),
            }
            .into();
            err.with_op("load_claim_file")
        })
        .and_then(|bytes| parse_claim_bytes(&bytes).map_err(|e| e.with_entity_id(&claim_path)));

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(claim) => log_op_end!(
            "load_claim_file",
            duration_ms = duration_ms,
            nodes = claim.node_summaries.len(),
            results = claim.results().count()
        ),
        Err(e) => log_op_error!("load_claim_file", e.clone(), duration_ms = duration_ms),
    }
    result
}
