use claimdiff_core_types::RequestId;
use thiserror::Error;

/// Result type alias using ClaimDiffError
pub type Result<T> = std::result::Result<T, ClaimDiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and the CLI's exit diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    /// Claim bytes are not valid UTF-8 JSON, or do not match the claim schema
    InvalidClaim,
    /// A required claim section (e.g. `claim`) is absent
    MissingField,
    /// A CNI plugin record has no usable `"type"` identity field
    MissingPluginType,

    // Comparison
    DeterminismViolation,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidClaim => "ERR_INVALID_CLAIM",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::MissingPluginType => "ERR_MISSING_PLUGIN_TYPE",
            ExErrorKind::DeterminismViolation => "ERR_DETERMINISM_VIOLATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, entity, request) for diagnostics.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (a claim path, network or plugin name)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity: {})", entity_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain errors raised while loading and comparing claims
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClaimDiffError {
    /// A CNI plugin record lacks the `"type"` field used as its identity
    #[error("CNI plugin #{index} of network {network} has no \"type\" field")]
    PluginMissingType { network: String, index: usize },

    /// A CNI plugin record has a `"type"` field that is not a string
    #[error("CNI plugin #{index} of network {network} has a non-string \"type\" field")]
    PluginTypeNotString { network: String, index: usize },

    /// A claim file could not be read
    #[error("failed reading claim file {path}: {message}")]
    ClaimRead { path: String, message: String },

    /// A claim document could not be parsed
    #[error("failed to parse claim: {message}")]
    ClaimParse { message: String },

    /// A required claim section is absent
    #[error("required field `{field}` is absent")]
    MissingField { field: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Conversion from ClaimDiffError to ExError
impl From<ClaimDiffError> for ExError {
    fn from(err: ClaimDiffError) -> Self {
        let message = err.to_string();
        match err {
            ClaimDiffError::PluginMissingType { network, .. }
            | ClaimDiffError::PluginTypeNotString { network, .. } => {
                ExError::new(ExErrorKind::MissingPluginType)
                    .with_entity_id(network)
                    .with_message(message)
            }
            ClaimDiffError::ClaimRead { path, .. } => ExError::new(ExErrorKind::Io)
                .with_entity_id(path)
                .with_message(message),
            ClaimDiffError::ClaimParse { .. } => {
                ExError::new(ExErrorKind::InvalidClaim).with_message(message)
            }
            ClaimDiffError::MissingField { field } => ExError::new(ExErrorKind::MissingField)
                .with_entity_id(field)
                .with_message(message),
            ClaimDiffError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to ClaimDiffError
impl From<serde_json::Error> for ClaimDiffError {
    fn from(err: serde_json::Error) -> Self {
        ClaimDiffError::Serialization {
            message: err.to_string(),
        }
    }
}
