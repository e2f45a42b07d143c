//! ClaimDiff Core - comparison engine for compliance claim files
//!
//! A claim is the JSON record a compliance run leaves behind: cluster nodes,
//! the CNI configuration of each node, and the result of every test case.
//! This crate provides:
//! - The in-memory claim model and its JSON loader
//! - Set reconciliation and field-level diff primitives
//! - Node, CNI network, CNI plugin, test case, configuration and versions
//!   diff engines
//! - Fixed-width text and JSON renderers for the resulting report
//! - The compare pipeline used by the CLI, driven by an explicit config

pub mod claim;
pub mod compare;
pub mod config;
pub mod diff;
pub mod errors;
pub mod logging_facility;

// Re-export commonly used types
pub use claim::{load_claim_file, parse_claim_bytes, ClaimDocument};
pub use compare::{compare_claims, execute};
pub use config::{CompareConfig, OutputFormat};
pub use diff::DiffReport;
pub use errors::{ClaimDiffError, ExError, ExErrorKind, Result};
