use keyscan_core::errors::*;

#[test]
fn candidate_count_carries_values() {
    let err = ContractError::CandidateCount {
        expected: 3,
        actual: 2,
    };
    let msg = err.to_string();
    assert!(msg.contains('3'));
    assert!(msg.contains('2'));
}

#[test]
fn sampling_gate_carries_reason() {
    let err = ContractError::SamplingGateViolated {
        reason: "30 samples reached the cap of 30".into(),
    };
    assert!(err.to_string().contains("cap of 30"));
}

#[test]
fn contract_errors_are_not_retryable() {
    let err: KeyscanError = ContractError::RankOutOfOrder {
        position: 1,
        rank: 2,
    }
    .into();
    assert!(matches!(err, KeyscanError::Contract(_)));
    assert_eq!(err.error_code(), "CONTRACT_VIOLATION");
    assert!(!err.is_retryable());
}

#[test]
fn config_error_converts_to_keyscan_error() {
    let err: KeyscanError = ConfigError::InvalidValue {
        field: "decision.storage_probability".into(),
        message: "not a number".into(),
    }
    .into();
    assert!(matches!(err, KeyscanError::Config(_)));
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn public_message_hides_contract_details() {
    let err: KeyscanError = ContractError::ConfidenceOutOfRange {
        field: "results[0].confidence".into(),
        value: 1.5,
    }
    .into();
    assert_eq!(err.public_message(), "internal error");
    assert!(!err.public_message().contains("1.5"));
}

#[test]
fn public_message_keeps_feedback_reason() {
    let err: KeyscanError = ContractError::InvalidFeedback {
        reason: "input_id must not be empty".into(),
    }
    .into();
    assert_eq!(err.error_code(), "INVALID_FEEDBACK");
    assert_eq!(err.public_message(), "input_id must not be empty");
}

#[test]
fn boundary_string_prefixes_code() {
    let err = ContractError::InvalidRank { rank: 7 };
    assert_eq!(err.boundary_string(), "[CONTRACT_VIOLATION] rank 7 outside 1..=3");
}
