//! Field-level comparison of open JSON records.

use crate::diff::reconcile::sorted_union;
use serde_json::{Map, Value};

/// Names of the fields that differ between two records, sorted ascending.
///
/// A field present on only one side counts as differing.
pub fn diff_fields(a: &Map<String, Value>, b: &Map<String, Value>) -> Vec<String> {
    sorted_union(a.keys(), b.keys())
        .into_iter()
        .filter(|name| match (a.get(name), b.get(name)) {
            (Some(va), Some(vb)) => !values_equal(va, vb),
            _ => true,
        })
        .collect()
}

/// Deep structural equality where numbers compare by numeric value.
///
/// `serde_json` keeps `1` and `1.0` as distinct variants; claim producers do
/// not, so both are treated as the same number here.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(na), Value::Number(nb)) => {
            if na == nb {
                return true;
            }
            match (na.as_f64(), nb.as_f64()) {
                (Some(fa), Some(fb)) => fa == fb,
                _ => false,
            }
        }
        (Value::Array(xa), Value::Array(xb)) => {
            xa.len() == xb.len() && xa.iter().zip(xb).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(ma), Value::Object(mb)) => {
            ma.len() == mb.len()
                && ma
                    .iter()
                    .all(|(k, va)| mb.get(k).is_some_and(|vb| values_equal(va, vb)))
        }
        _ => a == b,
    }
}
