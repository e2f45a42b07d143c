//! Explicit configuration for one compare invocation.

use claimdiff_core_types::RequestId;
use std::path::PathBuf;

/// Rendering selected for the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Fixed-width text tables
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Everything a compare run needs; built by the caller, never global.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareConfig {
    pub claim1: PathBuf,
    pub claim2: PathBuf,
    pub format: OutputFormat,
    pub request_id: RequestId,
}

impl CompareConfig {
    /// Text output and a fresh request id.
    pub fn new(claim1: impl Into<PathBuf>, claim2: impl Into<PathBuf>) -> Self {
        Self {
            claim1: claim1.into(),
            claim2: claim2.into(),
            format: OutputFormat::default(),
            request_id: RequestId::new(),
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = request_id;
        self
    }
}
