use claimdiff_core::errors::{ClaimDiffError, ExError, ExErrorKind};
use claimdiff_core_types::RequestId;

#[test]
fn test_plugin_missing_type_verifiable_by_kind() {
    let err = ClaimDiffError::PluginMissingType {
        network: "crio".to_string(),
        index: 0,
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::MissingPluginType);
    assert_eq!(ex_err.code(), "ERR_MISSING_PLUGIN_TYPE");
    assert_eq!(ex_err.entity_id(), Some("crio"));
}

#[test]
fn test_non_string_type_shares_kind_with_missing_type() {
    let ex_err: ExError = ClaimDiffError::PluginTypeNotString {
        network: "multus-cni".to_string(),
        index: 3,
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::MissingPluginType);
    assert!(ex_err.message().contains("non-string"));
}

#[test]
fn test_claim_read_maps_to_io() {
    let ex_err: ExError = ClaimDiffError::ClaimRead {
        path: "/tmp/claim1.json".to_string(),
        message: "No such file or directory".to_string(),
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::Io);
    assert_eq!(ex_err.entity_id(), Some("/tmp/claim1.json"));
    assert!(ex_err.message().contains("failed reading claim file"));
}

#[test]
fn test_missing_field_distinct_from_invalid_claim() {
    let missing: ExError = ClaimDiffError::MissingField {
        field: "claim".to_string(),
    }
    .into();
    let invalid: ExError = ClaimDiffError::ClaimParse {
        message: "expected value".to_string(),
    }
    .into();

    assert_eq!(missing.kind(), ExErrorKind::MissingField);
    assert_eq!(invalid.kind(), ExErrorKind::InvalidClaim);
    assert_ne!(missing.kind(), invalid.kind());
}

#[test]
fn test_serde_json_error_becomes_serialization() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: ClaimDiffError = json_err.into();
    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::Serialization);
    assert_eq!(ex_err.code(), "ERR_SERIALIZATION");
    assert!(ex_err.message().starts_with("Serialization error"));
}

#[test]
fn test_error_kind_code_mapping() {
    // Each kind has a stable, unique code
    let kinds = vec![
        (ExErrorKind::InvalidClaim, "ERR_INVALID_CLAIM"),
        (ExErrorKind::MissingField, "ERR_MISSING_FIELD"),
        (ExErrorKind::MissingPluginType, "ERR_MISSING_PLUGIN_TYPE"),
        (ExErrorKind::DeterminismViolation, "ERR_DETERMINISM_VIOLATION"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
    ];

    let mut codes: Vec<&str> = kinds.iter().map(|(k, _)| k.code()).collect();
    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), 6);
}

#[test]
fn test_display_carries_all_context() {
    let err = ExError::new(ExErrorKind::MissingPluginType)
        .with_op("compare_claims")
        .with_entity_id("crio")
        .with_request_id(RequestId::from_string("req-1".to_string()))
        .with_message("plugin #0 has no type");

    assert_eq!(
        err.to_string(),
        "[ERR_MISSING_PLUGIN_TYPE] in operation 'compare_claims': plugin #0 has no type (entity: crio) (request_id: req-1)"
    );
}
