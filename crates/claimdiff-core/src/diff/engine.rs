//! Claim diff computation engine.
//!
//! The core entry point is [`compare_claims`], which accepts two parsed
//! claims and produces a [`DiffReport`].

use crate::claim::ClaimDocument;
use crate::diff::configurations::diff_configurations;
use crate::diff::model::DiffReport;
use crate::diff::nodes::diff_nodes;
use crate::diff::testcases::diff_test_cases;
use crate::diff::versions::diff_versions;
use crate::errors::{ExError, ExErrorKind};
use crate::{log_op_end, log_op_error, log_op_start};
use std::time::Instant;

/// Compute a structured, deterministic diff between two claims.
///
/// # Errors
///
/// - `MissingPluginType`: a CNI plugin of a node present in both claims has no
///   string `"type"`
/// - `DeterminismViolation`: the computed report fails its internal
///   round-trip sanity check (should never occur in correct builds)
pub fn compare_claims(claim1: &ClaimDocument, claim2: &ClaimDocument) -> Result<DiffReport, ExError> {
    let start = Instant::now();
    log_op_start!("compare_claims");

    let result = build_report(claim1, claim2).and_then(check_round_trip);

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(report) => log_op_end!(
            "compare_claims",
            duration_ms = duration_ms,
            node_diffs_len = report.nodes.node_diffs.len(),
            tc_diffs_len = report.test_cases.differing_count
        ),
        Err(e) => log_op_error!("compare_claims", e.clone(), duration_ms = duration_ms),
    }
    result
}

fn build_report(claim1: &ClaimDocument, claim2: &ClaimDocument) -> Result<DiffReport, ExError> {
    let nodes = diff_nodes(claim1, claim2).map_err(|e| ExError::from(e).with_op("compare_claims"))?;

    Ok(DiffReport {
        versions: diff_versions(&claim1.versions, &claim2.versions),
        test_cases: diff_test_cases(claim1.results(), claim2.results()),
        configurations: diff_configurations(claim1, claim2),
        nodes,
    })
}

/// Determinism guard: round-trip through JSON must produce an equal report.
fn check_round_trip(report: DiffReport) -> Result<DiffReport, ExError> {
    let serialized = serde_json::to_string(&report).map_err(|e| {
        ExError::new(ExErrorKind::DeterminismViolation)
            .with_op("compare_claims")
            .with_message(format!("failed to serialize report: {}", e))
    })?;
    let reparsed: DiffReport = serde_json::from_str(&serialized).map_err(|e| {
        ExError::new(ExErrorKind::DeterminismViolation)
            .with_op("compare_claims")
            .with_message(format!("failed to re-parse report: {}", e))
    })?;
    if reparsed != report {
        return Err(ExError::new(ExErrorKind::DeterminismViolation)
            .with_op("compare_claims")
            .with_message("report is not deterministic: round-trip produced different struct"));
    }
    Ok(report)
}
