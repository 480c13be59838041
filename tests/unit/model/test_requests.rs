use assert_json_diff::assert_json_eq;
use hydra_client::model::requests::{LoginRequest, RefreshRequest, TrafficReport};
use serde_json::{Value, json};

#[test]
fn login_request_wire_format() {
    let request = LoginRequest {
        username: "u",
        password: "p",
    };
    let value = serde_json::to_value(&request).expect("serialization");
    assert_json_eq!(value, json!({"username": "u", "password": "p"}));
}

#[test]
fn refresh_request_uses_camel_case_wire_name() {
    let request = RefreshRequest {
        refresh_token: "R1",
    };
    let value = serde_json::to_value(&request).expect("serialization");
    assert_json_eq!(value, json!({"refreshToken": "R1"}));
}

#[test]
fn traffic_report_wire_format() {
    let report = TrafficReport {
        hash: "abc",
        sent: 100,
        recv: 200,
    };
    let value = serde_json::to_value(&report).expect("serialization");
    assert_json_eq!(value, json!({"hash": "abc", "sent": 100, "recv": 200}));
}

#[test]
fn traffic_report_round_trips_without_loss() {
    let report = TrafficReport {
        hash: "abc",
        sent: 100,
        recv: 200,
    };
    let encoded = serde_json::to_string(&report).expect("serialization");
    let decoded: Value = serde_json::from_str(&encoded).expect("deserialization");

    assert_eq!(decoded["hash"].as_str(), Some("abc"));
    assert_eq!(decoded["sent"].as_u64(), Some(100));
    assert_eq!(decoded["recv"].as_u64(), Some(200));
}

#[test]
fn traffic_report_keeps_full_counter_width() {
    let report = TrafficReport {
        hash: "h",
        sent: u64::MAX,
        recv: u64::MAX - 1,
    };
    let value = serde_json::to_value(&report).expect("serialization");

    assert_eq!(value["sent"].as_u64(), Some(u64::MAX));
    assert_eq!(value["recv"].as_u64(), Some(u64::MAX - 1));
}
