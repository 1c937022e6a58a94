use super::*;

// =============================================================
// Status classification
// =============================================================

#[test]
fn auth_statuses_map_to_dedicated_variants() {
    assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
    assert_eq!(ApiError::from_status(403, ""), ApiError::Forbidden);
    assert_eq!(ApiError::from_status(404, ""), ApiError::NotFound);
}

#[test]
fn other_statuses_carry_the_envelope_message() {
    let body = r#"{"errors":[{"code":2001,"message":"amount must be positive"}]}"#;
    assert_eq!(
        ApiError::from_status(422, body),
        ApiError::Api { status: 422, message: "amount must be positive".to_owned() }
    );
}

// =============================================================
// Envelope parsing
// =============================================================

#[test]
fn first_envelope_message_wins() {
    let body = r#"{"errors":[{"message":"first"},{"message":"second"}]}"#;
    assert_eq!(envelope_message(body), "first");
}

#[test]
fn empty_or_malformed_bodies_fall_back() {
    assert_eq!(envelope_message(""), FALLBACK_MESSAGE);
    assert_eq!(envelope_message("<html>502</html>"), FALLBACK_MESSAGE);
    assert_eq!(envelope_message(r#"{"errors":[]}"#), FALLBACK_MESSAGE);
}

// =============================================================
// User-facing copy
// =============================================================

#[test]
fn user_messages_for_resource_errors() {
    assert_eq!(
        ApiError::Forbidden.user_message(),
        "You do not have access to this expense."
    );
    assert_eq!(ApiError::NotFound.user_message(), "Expense not found.");
}

#[test]
fn transport_and_decode_errors_use_the_fallback() {
    assert_eq!(
        ApiError::Network("reset".to_owned()).user_message(),
        FALLBACK_MESSAGE
    );
    assert_eq!(
        ApiError::Decode("missing field".to_owned()).user_message(),
        FALLBACK_MESSAGE
    );
}

#[test]
fn api_errors_surface_the_server_message() {
    let err = ApiError::Api { status: 409, message: "already processed".to_owned() };
    assert_eq!(err.user_message(), "already processed");
}
