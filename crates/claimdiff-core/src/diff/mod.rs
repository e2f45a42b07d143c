//! Claim diff engines.
//!
//! Compares two parsed claims and produces a structured, deterministic
//! report covering tool versions, test case results, the test suite
//! configuration, cluster nodes with the CNI networks and plugins configured
//! on each node, and the CSI driver and hardware inventories.
//!
//! ## Entry point
//!
//! ```ignore
//! use claimdiff_core::diff::{compare_claims, render_text};
//!
//! let report = compare_claims(&claim1, &claim2)?;
//! print!("{}", render_text(&report));
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: every list in the report is sorted by its identity key,
//!   so identical inputs produce byte-identical output.
//! - **Minimality**: an entity identical on both sides appears nowhere in the
//!   report.
//! - **Short-circuit**: an entity missing from one claim gets a single
//!   not-found tag and is not compared any deeper.

pub mod cni;
pub mod configurations;
pub mod engine;
pub mod fields;
pub mod model;
pub mod nodes;
pub mod reconcile;
pub mod render;
pub mod testcases;
pub mod versions;

pub use cni::{diff_networks, diff_plugins};
pub use configurations::diff_configurations;
pub use engine::compare_claims;
pub use fields::diff_fields;
pub use model::{is_not_found_tag, DiffReport};
pub use nodes::diff_nodes;
pub use reconcile::{set_delta, sorted_union};
pub use render::{render_json, render_text};
pub use testcases::diff_test_cases;
pub use versions::diff_versions;
