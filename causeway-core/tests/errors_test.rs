use causeway_core::errors::*;

#[test]
fn invalid_argument_carries_field_and_reason() {
    let err = CausewayError::invalid_argument("description", "must not be empty");
    let msg = err.to_string();
    assert!(msg.contains("description"));
    assert!(msg.contains("must not be empty"));
    assert!(err.is_invalid_argument());
    assert!(!err.is_not_found());
}

#[test]
fn graph_not_found_carries_id() {
    let err = CausewayError::graph_not_found("causal-graph-42");
    let msg = err.to_string();
    assert!(msg.contains("graph"));
    assert!(msg.contains("causal-graph-42"));
    assert!(err.is_not_found());
    assert!(matches!(
        err,
        CausewayError::NotFound {
            resource: Resource::Graph,
            ..
        }
    ));
}

#[test]
fn variable_not_found_carries_reference() {
    let err = CausewayError::variable_not_found("Smoking");
    assert!(err.to_string().contains("variable not found: Smoking"));
    assert!(matches!(
        err,
        CausewayError::NotFound {
            resource: Resource::Variable,
            ..
        }
    ));
}

#[test]
fn serialization_error_converts_to_causeway_error() {
    let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
    let err: CausewayError = json_err.into();
    assert!(matches!(err, CausewayError::SerializationError(_)));
    assert!(!err.is_not_found());
    assert!(!err.is_invalid_argument());
}

#[test]
fn config_error_carries_reason() {
    let err = CausewayError::ConfigError {
        reason: "bad depth".into(),
    };
    assert!(err.to_string().contains("bad depth"));
}
