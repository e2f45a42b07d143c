//! Text and JSON renderers for claim diff reports.
//!
//! The text layout is a fixed-width table format consumed by people and by
//! scripts diffing successive reports, so column widths and sentinels are
//! stable.

use crate::diff::model::{
    only_not_found, CniNetworkDiffReport, CniPluginDiffReport, ConfigurationsDiffReport,
    DiffReport, FieldDiffs, NodesDiffReport, RolesSummary, TestCasesDiffReport,
};
use crate::diff::versions::display_value;
use crate::errors::{ClaimDiffError, ExError};

const NO_DIFFS: &str = "<none>";
const COLUMNS_GAP: usize = 5;

fn name_and_differences_row(out: &mut String, name: &str, differences: &[String]) {
    out.push_str(&format!("{:<30}{}\n", name, differences.join(",")));
}

/// Render the plugin table of one network. An empty list renders the header only.
pub fn render_plugins(plugin_diffs: &[CniPluginDiffReport]) -> String {
    let mut out = format!("{:<30}{}\n", "PLUGIN", "DIFFERENCES");
    for plugin in plugin_diffs {
        name_and_differences_row(&mut out, &plugin.plugin_name, &plugin.differences);
    }
    out
}

/// Render the CNI network table of one node. An empty list renders the header only.
pub fn render_networks(network_diffs: &[CniNetworkDiffReport]) -> String {
    let mut out = format!("{:<30}{}\n", "CNI-NETWORK", "DIFFERENCES");
    for network in network_diffs {
        name_and_differences_row(&mut out, &network.network_name, &network.differences);
    }
    out
}

fn roles_row(out: &mut String, claim: &str, roles: &RolesSummary) {
    out.push_str(&format!(
        "{:<10}{:<10}{:<10}{}\n",
        claim, roles.master_nodes, roles.worker_nodes, roles.master_and_worker_nodes
    ));
}

/// Render the node roles summary, the node table, and the per-node and
/// per-network drill-down tables.
pub fn render_nodes(report: &NodesDiffReport) -> String {
    let mut out = String::new();

    out.push_str("CLUSTER NODES ROLES SUMMARY\n");
    out.push_str("---------------------------\n");
    out.push_str(&format!(
        "{:<10}{:<10}{:<10}{}\n",
        "CLAIM", "MASTERS", "WORKERS", "MASTER+WORKER"
    ));
    roles_row(&mut out, "claim1", &report.summary.claim1);
    roles_row(&mut out, "claim2", &report.summary.claim2);
    out.push('\n');

    out.push_str("CLUSTER NODES DIFFERENCES\n");
    out.push_str("-------------------------\n");
    if report.node_diffs.is_empty() {
        out.push_str(NO_DIFFS);
        out.push('\n');
        return out;
    }

    out.push_str(&format!("{:<60}{}\n", "NODE", "DIFFERENCES"));
    for node in &report.node_diffs {
        out.push_str(&format!("{:<60}{}\n", node.node_name, node.differences.join(",")));
    }

    for node in &report.node_diffs {
        if only_not_found(&node.differences) {
            continue;
        }
        out.push_str(&format!("\nNODE: {}\n", node.node_name));
        out.push_str(&render_networks(&node.cni_network_diffs));

        for network in &node.cni_network_diffs {
            if only_not_found(&network.differences) {
                continue;
            }
            out.push_str(&format!(
                "\nNODE: {}, CNI-NETWORK: {}\n",
                node.node_name, network.network_name
            ));
            out.push_str(&render_plugins(&network.plugin_diffs));
        }
    }

    out
}

/// Render the results summary and the per-case differences.
pub fn render_test_cases(report: &TestCasesDiffReport) -> String {
    let mut out = String::new();
    let summary_row = |out: &mut String, status: &str, c1: String, c2: String| {
        out.push_str(&format!("{:<15}{:<20}{}\n", status, c1, c2));
    };
    let (s1, s2) = (&report.claim1_summary, &report.claim2_summary);

    out.push_str("RESULTS SUMMARY\n");
    out.push_str("---------------\n");
    summary_row(
        &mut out,
        "STATUS",
        "# in CLAIM-1".to_string(),
        "# in CLAIM-2".to_string(),
    );
    summary_row(&mut out, "passed", s1.passed.to_string(), s2.passed.to_string());
    summary_row(&mut out, "skipped", s1.skipped.to_string(), s2.skipped.to_string());
    summary_row(&mut out, "failed", s1.failed.to_string(), s2.failed.to_string());
    if s1.other > 0 || s2.other > 0 {
        summary_row(&mut out, "other", s1.other.to_string(), s2.other.to_string());
    }
    out.push('\n');

    out.push_str("RESULTS DIFFERENCES\n");
    out.push_str("-------------------\n");
    if report.differences.is_empty() {
        out.push_str(NO_DIFFS);
        out.push('\n');
        return out;
    }

    out.push_str(&format!(
        "{:<60}{:<10}{}\n",
        "TEST CASE NAME", "CLAIM-1", "CLAIM-2"
    ));
    for diff in &report.differences {
        out.push_str(&format!(
            "{:<60}{:<10}{}\n",
            diff.name, diff.claim1_result, diff.claim2_result
        ));
    }

    out
}

fn only_in_section(out: &mut String, heading: String, entries: &[String]) {
    out.push_str(&heading);
    if entries.is_empty() {
        out.push_str(NO_DIFFS);
        out.push('\n');
    }
    for entry in entries {
        out.push_str(entry);
        out.push('\n');
    }
}

/// Render a leaf-by-leaf section comparison as three tables.
///
/// The field and claim 1 columns are as wide as their longest entry plus a
/// five space gap.
pub fn render_field_diffs(diffs: &FieldDiffs) -> String {
    let rows: Vec<(&str, String, String)> = diffs
        .fields
        .iter()
        .map(|d| {
            (
                d.field.as_str(),
                display_value(&d.claim1_value),
                display_value(&d.claim2_value),
            )
        })
        .collect();

    let field_width = rows
        .iter()
        .map(|(field, _, _)| field.chars().count())
        .fold("FIELD".len(), usize::max)
        + COLUMNS_GAP;
    let claim1_width = rows
        .iter()
        .map(|(_, v1, _)| v1.chars().count())
        .fold("CLAIM 1".len(), usize::max)
        + COLUMNS_GAP;

    let mut out = format!("{}: Differences\n", diffs.name);
    out.push_str(&format!(
        "{:<fw$}{:<cw$}{}\n",
        "FIELD",
        "CLAIM 1",
        "CLAIM 2",
        fw = field_width,
        cw = claim1_width
    ));
    if rows.is_empty() {
        out.push_str(NO_DIFFS);
        out.push('\n');
    }
    for (field, v1, v2) in &rows {
        out.push_str(&format!(
            "{:<fw$}{:<cw$}{}\n",
            field,
            v1,
            v2,
            fw = field_width,
            cw = claim1_width
        ));
    }

    only_in_section(
        &mut out,
        format!("\n{}: Only in CLAIM 1\n", diffs.name),
        &diffs.fields_in_claim1_only,
    );
    only_in_section(
        &mut out,
        format!("\n{}: Only in CLAIM 2\n", diffs.name),
        &diffs.fields_in_claim2_only,
    );

    out
}

/// Render the configuration diff followed by the abnormal events table.
pub fn render_configurations(report: &ConfigurationsDiffReport) -> String {
    let mut out = String::from("CONFIGURATIONS\n");
    out.push_str("--------------\n\n");
    out.push_str(&render_field_diffs(&report.config));

    out.push_str("\nCluster abnormal events count\n");
    out.push_str(&format!("{:<12}{}\n", "CLAIM 1", "CLAIM 2"));
    out.push_str(&format!(
        "{:<12}{}\n",
        report.abnormal_events.claim1, report.abnormal_events.claim2
    ));
    out
}

/// Render the full report, each section followed by a blank line: versions,
/// test cases, configurations, nodes, then the CSI and hardware inventories.
pub fn render_text(report: &DiffReport) -> String {
    let mut out = String::new();
    for section in [
        render_field_diffs(&report.versions),
        render_test_cases(&report.test_cases),
        render_configurations(&report.configurations),
        render_nodes(&report.nodes),
        render_field_diffs(&report.nodes.csi),
        render_field_diffs(&report.nodes.hardware),
    ] {
        out.push_str(&section);
        out.push('\n');
    }
    out
}

/// Render the full report as pretty-printed JSON.
///
/// # Errors
///
/// - `Serialization`: the report cannot be encoded
pub fn render_json(report: &DiffReport) -> Result<String, ExError> {
    serde_json::to_string_pretty(report)
        .map_err(|e| ExError::from(ClaimDiffError::from(e)).with_op("render_json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::model::{AbnormalEventsCount, FieldDiff, NodeDiffReport, TcResultsSummary};
    use serde_json::json;

    #[test]
    fn test_networks_table_without_rows() {
        assert_eq!(
            render_networks(&[]),
            "CNI-NETWORK                   DIFFERENCES\n"
        );
    }

    #[test]
    fn test_node_only_missing_has_no_drill_down() {
        let report = NodesDiffReport {
            node_diffs: vec![NodeDiffReport {
                node_name: "clus0-7".to_string(),
                differences: vec!["not found in claim1".to_string()],
                cni_network_diffs: vec![],
            }],
            ..Default::default()
        };
        let text = render_nodes(&report);
        assert!(text.ends_with(&format!(
            "{:<60}{}\n{:<60}{}\n",
            "NODE", "DIFFERENCES", "clus0-7", "not found in claim1"
        )));
        assert!(!text.contains("NODE: clus0-7"));
    }

    #[test]
    fn test_other_row_only_when_counted() {
        let mut report = TestCasesDiffReport::default();
        assert!(!render_test_cases(&report).contains("other"));
        report.claim2_summary = TcResultsSummary {
            other: 3,
            ..Default::default()
        };
        assert!(render_test_cases(&report).contains(&format!("{:<15}{:<20}{}\n", "other", "0", "3")));
    }

    #[test]
    fn test_field_diffs_column_widths() {
        let diffs = FieldDiffs {
            name: "VERSIONS".to_string(),
            fields: vec![FieldDiff {
                field: "/k8s".to_string(),
                claim1_value: json!("v1.27.10"),
                claim2_value: json!("v1.28.1"),
            }],
            fields_in_claim1_only: vec![],
            fields_in_claim2_only: vec!["/claimFormat=v0.4.0".to_string()],
        };
        let expected = "VERSIONS: Differences\n\
                        FIELD     CLAIM 1      CLAIM 2\n\
                        /k8s      v1.27.10     v1.28.1\n\
                        \n\
                        VERSIONS: Only in CLAIM 1\n\
                        <none>\n\
                        \n\
                        VERSIONS: Only in CLAIM 2\n\
                        /claimFormat=v0.4.0\n";
        assert_eq!(render_field_diffs(&diffs), expected);
    }

    #[test]
    fn test_configurations_section() {
        let report = ConfigurationsDiffReport {
            config: FieldDiffs {
                name: "Cert Suite Configuration".to_string(),
                ..Default::default()
            },
            abnormal_events: AbnormalEventsCount {
                claim1: 2,
                claim2: 2,
            },
        };
        let expected = "CONFIGURATIONS\n\
                        --------------\n\
                        \n\
                        Cert Suite Configuration: Differences\n\
                        FIELD     CLAIM 1     CLAIM 2\n\
                        <none>\n\
                        \n\
                        Cert Suite Configuration: Only in CLAIM 1\n\
                        <none>\n\
                        \n\
                        Cert Suite Configuration: Only in CLAIM 2\n\
                        <none>\n\
                        \n\
                        Cluster abnormal events count\n\
                        CLAIM 1     CLAIM 2\n\
                        2           2\n";
        assert_eq!(render_configurations(&report), expected);
    }

    #[test]
    fn test_render_json_uses_report_keys() {
        let json = render_json(&DiffReport::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["nodes"]["nodesRolesSummary"].is_object());
        assert_eq!(value["testCases"]["differentTestCasesResults"], json!(0));
        assert_eq!(value["versions"]["Name"], json!(""));
        assert_eq!(
            value["configurations"]["abnormalEventsCount"],
            json!({"claim1": 0, "claim2": 0})
        );
        assert!(value["nodes"]["CSI"].is_object());
        assert!(value["nodes"]["hardware"].is_object());
    }
}
