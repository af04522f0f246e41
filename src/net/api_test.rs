use super::*;

const FALLBACK: &str = "Update failed";

#[test]
fn success_status_returns_message_and_counts() {
    let body = r#"{"success":true,"message":"Updated 5 regions","success_count":5,"failed_count":0}"#;
    let resp = interpret_reply(200, body, FALLBACK).unwrap();
    assert_eq!(resp.message.as_deref(), Some("Updated 5 regions"));
    assert_eq!(resp.success_count, Some(5));
    assert_eq!(resp.failed_count, Some(0));
}

#[test]
fn success_without_message_is_still_success() {
    let resp = interpret_reply(204, "{}", FALLBACK).unwrap();
    assert_eq!(resp.message, None);
}

#[test]
fn error_status_uses_server_reason() {
    let err = interpret_reply(500, r#"{"error":"Crawler timeout"}"#, FALLBACK).unwrap_err();
    assert_eq!(err, UpdateError::Server("Crawler timeout".to_owned()));
    assert_eq!(err.to_string(), "Crawler timeout");
}

#[test]
fn error_status_without_reason_uses_fallback() {
    let err = interpret_reply(400, "{}", FALLBACK).unwrap_err();
    assert_eq!(err, UpdateError::Server(FALLBACK.to_owned()));

    let err = interpret_reply(502, r#"{"error":""}"#, FALLBACK).unwrap_err();
    assert_eq!(err, UpdateError::Server(FALLBACK.to_owned()));
}

#[test]
fn error_status_wins_over_message_field() {
    let err = interpret_reply(503, r#"{"message":"Updated 5 regions"}"#, FALLBACK).unwrap_err();
    assert_eq!(err, UpdateError::Server(FALLBACK.to_owned()));
}

#[test]
fn non_json_body_is_a_decode_error_regardless_of_status() {
    assert!(matches!(interpret_reply(200, "<html>", FALLBACK), Err(UpdateError::Decode(_))));
    assert!(matches!(interpret_reply(500, "Internal Server Error", FALLBACK), Err(UpdateError::Decode(_))));
}

#[test]
fn success_tolerates_counts_of_unexpected_shape() {
    let resp = interpret_reply(200, r#"{"message":"Updated 5 regions","success_count":"5"}"#, FALLBACK).unwrap();
    assert_eq!(resp.message.as_deref(), Some("Updated 5 regions"));
    assert_eq!(resp.success_count, None);

    let resp = interpret_reply(200, r#"{"message":"ok","failed_count":-1}"#, FALLBACK).unwrap();
    assert_eq!(resp.message.as_deref(), Some("ok"));
    assert_eq!(resp.failed_count, None);
}

#[test]
fn non_string_fields_are_treated_as_absent() {
    let resp = interpret_reply(200, r#"{"message":42}"#, FALLBACK).unwrap();
    assert_eq!(resp.message, None);

    let resp = interpret_reply(200, "[1,2,3]", FALLBACK).unwrap();
    assert_eq!(resp.message, None);

    let err = interpret_reply(500, r#"{"error":{"code":7}}"#, FALLBACK).unwrap_err();
    assert_eq!(err, UpdateError::Server(FALLBACK.to_owned()));
}
