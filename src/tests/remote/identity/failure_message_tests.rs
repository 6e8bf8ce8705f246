use super::*;

#[test]
fn login_failure_message_prefers_server_message() {
    let v = serde_json::json!({"message": "wrong username or password"});
    assert_eq!(login_failure_message(&v), "wrong username or password");
}

#[test]
fn login_failure_message_falls_back_to_default() {
    let v = serde_json::json!({"detail": "ignored"});
    assert_eq!(login_failure_message(&v), "login rejected");
}

#[test]
fn register_failure_message_falls_back_to_default() {
    let v = serde_json::json!({});
    assert_eq!(register_failure_message(&v), "registration rejected");
}
