//! Test case result comparison.

use crate::claim::model::{STATE_FAILED, STATE_PASSED, STATE_SKIPPED};
use crate::claim::TestCaseResult;
use crate::diff::model::{
    TcResultDifference, TcResultsSummary, TestCasesDiffReport, TC_RESULT_NOT_FOUND,
};
use crate::diff::reconcile::sorted_union;
use std::collections::BTreeMap;

/// Flatten results into `case id -> state`.
///
/// The case id is taken from each result, not from the key it is stored
/// under. A repeated id keeps the last state seen.
pub fn results_by_id<'a>(
    results: impl IntoIterator<Item = &'a TestCaseResult>,
) -> BTreeMap<&'a str, &'a str> {
    results
        .into_iter()
        .map(|r| (r.id.as_str(), r.state.as_str()))
        .collect()
}

/// Count states per bucket; anything outside passed/skipped/failed is `other`.
pub fn summarize(results: &BTreeMap<&str, &str>) -> TcResultsSummary {
    let mut summary = TcResultsSummary::default();
    for state in results.values() {
        match *state {
            STATE_PASSED => summary.passed += 1,
            STATE_SKIPPED => summary.skipped += 1,
            STATE_FAILED => summary.failed += 1,
            _ => summary.other += 1,
        }
    }
    summary
}

/// Compare the test case results of two claims.
///
/// A case missing on one side is reported with `not found` for that side;
/// a case on both sides is reported only when its states differ.
pub fn diff_test_cases<'a, A, B>(claim1_results: A, claim2_results: B) -> TestCasesDiffReport
where
    A: IntoIterator<Item = &'a TestCaseResult>,
    B: IntoIterator<Item = &'a TestCaseResult>,
{
    let results1 = results_by_id(claim1_results);
    let results2 = results_by_id(claim2_results);

    let differences: Vec<TcResultDifference> = sorted_union(results1.keys(), results2.keys())
        .into_iter()
        .filter_map(|name| {
            let state1 = results1.get(name.as_str()).copied();
            let state2 = results2.get(name.as_str()).copied();
            if state1.is_some() && state1 == state2 {
                return None;
            }
            Some(TcResultDifference {
                claim1_result: state1.unwrap_or(TC_RESULT_NOT_FOUND).to_string(),
                claim2_result: state2.unwrap_or(TC_RESULT_NOT_FOUND).to_string(),
                name,
            })
        })
        .collect();

    tracing::debug!(
        cases1 = results1.len(),
        cases2 = results2.len(),
        differing = differences.len(),
        "compared test case results"
    );

    TestCasesDiffReport {
        claim1_summary: summarize(&results1),
        claim2_summary: summarize(&results2),
        differing_count: differences.len(),
        differences,
    }
}
