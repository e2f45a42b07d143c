//! Leaf-by-leaf comparison of opaque claim sections.
//!
//! A JSON tree is flattened into `/path/to/leaf` entries: object keys are
//! visited in sorted order, array elements by index, and `null` leaves are
//! dropped. The two flattened lists are then matched by path.

use crate::diff::fields::values_equal;
use crate::diff::model::{FieldDiff, FieldDiffs};
use serde_json::{Number, Value};
use std::collections::HashMap;

/// Section label for the claim's `versions` block
pub const VERSIONS_SECTION: &str = "VERSIONS";

struct Leaf<'a> {
    path: String,
    value: &'a Value,
}

fn flatten<'a>(node: &'a Value, path: String, leaves: &mut Vec<Leaf<'a>>) {
    match node {
        Value::Null => {}
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            for key in keys {
                flatten(&map[key.as_str()], format!("{}/{}", path, key), leaves);
            }
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                flatten(item, format!("{}/{}", path, i), leaves);
            }
        }
        leaf => leaves.push(Leaf { path, value: leaf }),
    }
}

/// Render a leaf the way it appears in `path=value` entries and text tables.
///
/// Strings are shown without quotes. Numbers are shown as the claim tool
/// prints a decoded float: shortest digits, switching to exponent form
/// (`1e+06`, `1.5e-07`) when the exponent is below -4 or at least 6.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => format_number(n),
        other => other.to_string(),
    }
}

fn format_number(number: &Number) -> String {
    let Some(value) = number.as_f64() else {
        return number.to_string();
    };
    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific
        .split_once('e')
        .and_then(|(m, e)| e.parse::<i32>().ok().map(|e| (m, e)))
    else {
        return number.to_string();
    };

    if (-4..6).contains(&exponent) {
        value.to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}

/// Compare two JSON trees leaf by leaf.
///
/// `fields` keeps claim 1 traversal order; the only-in lists keep the
/// traversal order of their own side.
pub fn diff_values(name: &str, claim1: &Value, claim2: &Value) -> FieldDiffs {
    let mut leaves1 = Vec::new();
    flatten(claim1, String::new(), &mut leaves1);
    let mut leaves2 = Vec::new();
    flatten(claim2, String::new(), &mut leaves2);

    let by_path1: HashMap<&str, &Value> = leaves1.iter().map(|l| (l.path.as_str(), l.value)).collect();
    let by_path2: HashMap<&str, &Value> = leaves2.iter().map(|l| (l.path.as_str(), l.value)).collect();

    let mut diffs = FieldDiffs {
        name: name.to_string(),
        ..Default::default()
    };

    for leaf in &leaves1 {
        match by_path2.get(leaf.path.as_str()) {
            Some(value2) if !values_equal(leaf.value, value2) => diffs.fields.push(FieldDiff {
                field: leaf.path.clone(),
                claim1_value: leaf.value.clone(),
                claim2_value: (*value2).clone(),
            }),
            Some(_) => {}
            None => diffs
                .fields_in_claim1_only
                .push(format!("{}={}", leaf.path, display_value(leaf.value))),
        }
    }

    for leaf in &leaves2 {
        if !by_path1.contains_key(leaf.path.as_str()) {
            diffs
                .fields_in_claim2_only
                .push(format!("{}={}", leaf.path, display_value(leaf.value)));
        }
    }

    diffs
}

/// Compare the `versions` blocks of two claims.
pub fn diff_versions(claim1: &Value, claim2: &Value) -> FieldDiffs {
    let diffs = diff_values(VERSIONS_SECTION, claim1, claim2);
    tracing::debug!(
        fields = diffs.fields.len(),
        claim1_only = diffs.fields_in_claim1_only.len(),
        claim2_only = diffs.fields_in_claim2_only.len(),
        "compared claim versions"
    );
    diffs
}
