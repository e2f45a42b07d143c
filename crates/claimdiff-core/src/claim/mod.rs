//! Claim documents: the in-memory schema the diff engines read, and the
//! loader that builds it from a claim JSON file.

pub mod loader;
pub mod model;

pub use loader::{load_claim_file, parse_claim_bytes};
pub use model::{ClaimDocument, CniNetwork, CniPlugin, TestCaseResult};
