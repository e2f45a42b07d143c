//! CNI network and plugin comparison.

use crate::claim::{CniNetwork, CniPlugin};
use crate::diff::fields::diff_fields;
use crate::diff::model::{
    CniNetworkDiffReport, CniPluginDiffReport, DIFF_CNI_VERSION, DIFF_DISABLE_CHECK,
    DIFF_PLUGINS, NOT_FOUND_IN_CLAIM1, NOT_FOUND_IN_CLAIM2,
};
use crate::diff::reconcile::sorted_union;
use crate::errors::{ClaimDiffError, Result};
use serde_json::Value;
use std::collections::BTreeMap;

/// Index plugins by their `"type"` field.
fn plugins_by_type<'a>(
    network: &str,
    plugins: &'a [CniPlugin],
) -> Result<BTreeMap<&'a str, &'a CniPlugin>> {
    let mut by_type = BTreeMap::new();
    for (index, plugin) in plugins.iter().enumerate() {
        let plugin_type = match plugin.get("type") {
            Some(Value::String(t)) => t.as_str(),
            Some(_) => {
                return Err(ClaimDiffError::PluginTypeNotString {
                    network: network.to_string(),
                    index,
                })
            }
            None => {
                return Err(ClaimDiffError::PluginMissingType {
                    network: network.to_string(),
                    index,
                })
            }
        };
        if by_type.insert(plugin_type, plugin).is_some() {
            tracing::warn!(
                network = network,
                plugin = plugin_type,
                "duplicate CNI plugin type, keeping the last one"
            );
        }
    }
    Ok(by_type)
}

fn networks_by_name(networks: &[CniNetwork]) -> BTreeMap<&str, &CniNetwork> {
    let mut by_name = BTreeMap::new();
    for network in networks {
        if by_name.insert(network.name.as_str(), network).is_some() {
            tracing::warn!(
                network = network.name.as_str(),
                "duplicate CNI network name, keeping the last one"
            );
        }
    }
    by_name
}

/// Compare the plugin lists of one network.
///
/// Plugins are matched by `"type"`. A plugin missing on one side gets a
/// single not-found tag; plugins on both sides are compared field by field
/// and reported only when some field differs. Output is sorted by type.
///
/// # Errors
///
/// - `PluginMissingType` / `PluginTypeNotString`: a plugin on either side has
///   no string `"type"`
pub fn diff_plugins(
    network: &str,
    claim1_plugins: &[CniPlugin],
    claim2_plugins: &[CniPlugin],
) -> Result<Vec<CniPluginDiffReport>> {
    let plugins1 = plugins_by_type(network, claim1_plugins)?;
    let plugins2 = plugins_by_type(network, claim2_plugins)?;

    let mut reports = Vec::new();
    for name in sorted_union(plugins1.keys(), plugins2.keys()) {
        let differences = match (plugins1.get(name.as_str()), plugins2.get(name.as_str())) {
            (None, _) => vec![NOT_FOUND_IN_CLAIM1.to_string()],
            (_, None) => vec![NOT_FOUND_IN_CLAIM2.to_string()],
            (Some(p1), Some(p2)) => diff_fields(p1, p2),
        };
        if !differences.is_empty() {
            reports.push(CniPluginDiffReport {
                plugin_name: name,
                differences,
            });
        }
    }
    Ok(reports)
}

/// Compare two lists of CNI networks, matched by name.
///
/// A network on both sides is tagged `cniVersion`, `disable_check` and
/// `plugins` (in that order) for each attribute that differs; it is left out
/// of the result when nothing does. Output is sorted by network name.
///
/// # Errors
///
/// - `PluginMissingType` / `PluginTypeNotString`: see [`diff_plugins`]
pub fn diff_networks(
    claim1_networks: &[CniNetwork],
    claim2_networks: &[CniNetwork],
) -> Result<Vec<CniNetworkDiffReport>> {
    let networks1 = networks_by_name(claim1_networks);
    let networks2 = networks_by_name(claim2_networks);

    let mut reports = Vec::new();
    for name in sorted_union(networks1.keys(), networks2.keys()) {
        let mut differences = Vec::new();
        let mut plugin_diffs = Vec::new();

        match (networks1.get(name.as_str()), networks2.get(name.as_str())) {
            (None, _) => differences.push(NOT_FOUND_IN_CLAIM1.to_string()),
            (_, None) => differences.push(NOT_FOUND_IN_CLAIM2.to_string()),
            (Some(net1), Some(net2)) => {
                if net1.cni_version != net2.cni_version {
                    differences.push(DIFF_CNI_VERSION.to_string());
                }
                if net1.disable_check != net2.disable_check {
                    differences.push(DIFF_DISABLE_CHECK.to_string());
                }
                plugin_diffs = diff_plugins(&name, &net1.plugins, &net2.plugins)?;
                if !plugin_diffs.is_empty() {
                    differences.push(DIFF_PLUGINS.to_string());
                }
            }
        }

        if !differences.is_empty() {
            reports.push(CniNetworkDiffReport {
                network_name: name,
                differences,
                plugin_diffs,
            });
        }
    }
    Ok(reports)
}
