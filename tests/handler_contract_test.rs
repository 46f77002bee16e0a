use hanoi_api::domain::model::{ApiGatewayEvent, ApiResponse};
use hanoi_api::handle;
use serde_json::{json, Value};

fn event(raw: Value) -> ApiGatewayEvent {
    serde_json::from_value(raw).unwrap()
}

fn post(body: Value) -> ApiResponse {
    handle(&event(json!({"httpMethod": "POST", "body": body})))
}

fn body_json(response: &ApiResponse) -> Value {
    serde_json::from_str(&response.body).unwrap()
}

#[test]
fn test_options_preflight_short_circuits() {
    let response = handle(&event(json!({"httpMethod": "OPTIONS"})));
    assert_eq!(response.status_code, 200);
    assert_eq!(body_json(&response), json!({"message": "OK"}));
}

#[test]
fn test_get_returns_info_payload_without_solving() {
    let response = handle(&event(json!({"httpMethod": "GET"})));
    assert_eq!(response.status_code, 200);

    let body = body_json(&response);
    assert_eq!(body["message"], "Tower of Hanoi API is running");
    assert_eq!(body["endpoint"], "/solve");
    assert_eq!(body["method"], "POST");
    assert_eq!(body["example"], json!({"disks": 3}));
}

#[test]
fn test_method_matching_is_case_insensitive() {
    let response = handle(&event(json!({"httpMethod": "options"})));
    assert_eq!(body_json(&response), json!({"message": "OK"}));

    let response = handle(&event(json!({"httpMethod": "get"})));
    assert_eq!(body_json(&response)["endpoint"], "/solve");
}

#[test]
fn test_solve_three_disks() {
    let response = post(json!({"disks": 3}));
    assert_eq!(response.status_code, 200);

    let body = body_json(&response);
    assert_eq!(body["total_moves"], 7);
    assert_eq!(body["n"], 3);
    assert_eq!(body["formula"], "2^n - 1");
    assert_eq!(
        body["moves"],
        json!([
            "Move disk 1 from A to C",
            "Move disk 2 from A to B",
            "Move disk 1 from C to B",
            "Move disk 3 from A to C",
            "Move disk 1 from B to A",
            "Move disk 2 from B to C",
            "Move disk 1 from A to C",
        ])
    );
    // message is omitted entirely when the full list is present
    assert!(body.get("message").is_none());
}

#[test]
fn test_generated_at_is_iso8601_utc() {
    let body = body_json(&post(json!({"disks": 1})));
    let stamp = body["generated_at"].as_str().unwrap();
    assert!(stamp.ends_with('Z'));
    assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
}

#[test]
fn test_string_body_from_proxy_integration() {
    let response = post(json!(r#"{"disks": 2, "target": "Z"}"#));
    assert_eq!(response.status_code, 200);

    let body = body_json(&response);
    assert_eq!(body["total_moves"], 3);
    assert_eq!(body["moves"][1], "Move disk 2 from A to Z");
}

#[test]
fn test_custom_rod_names() {
    let body = body_json(&post(json!({
        "disks": 1,
        "source": "left",
        "auxiliary": "middle",
        "target": "right"
    })));
    assert_eq!(body["moves"], json!(["Move disk 1 from left to right"]));
}

#[test]
fn test_thirteen_disks_suppresses_move_list() {
    let response = post(json!({"disks": 13}));
    assert_eq!(response.status_code, 200);

    let body = body_json(&response);
    assert_eq!(body["total_moves"], 8191);
    assert_eq!(body["moves"], json!([]));
    assert_eq!(
        body["message"],
        "Full list too large - showing move count only"
    );
}

#[test]
fn test_twelve_disks_still_gets_full_list() {
    let body = body_json(&post(json!({"disks": 12})));
    assert_eq!(body["total_moves"], 4095);
    assert_eq!(body["moves"].as_array().unwrap().len(), 4095);
}

#[test]
fn test_twenty_disks_at_the_ceiling() {
    let body = body_json(&post(json!({"disks": 20})));
    assert_eq!(body["total_moves"], 1_048_575);
    assert_eq!(body["moves"], json!([]));
}

#[test]
fn test_missing_disks_field() {
    let response = post(json!({}));
    assert_eq!(response.status_code, 400);

    let body = body_json(&response);
    assert_eq!(body["error"], "Missing required field: disks");
    assert_eq!(body["message"], "Please provide the number of disks (1-20)");
}

#[test]
fn test_absent_body_reported_as_missing_disks() {
    let response = handle(&event(json!({"httpMethod": "POST"})));
    assert_eq!(response.status_code, 400);
    assert_eq!(body_json(&response)["error"], "Missing required field: disks");
}

#[test]
fn test_zero_disks_rejected() {
    let response = post(json!({"disks": 0}));
    assert_eq!(response.status_code, 400);

    let body = body_json(&response);
    assert_eq!(body["error"], "Invalid disk count");
    assert_eq!(body["message"], "Disks must be a positive integer");
}

#[test]
fn test_non_integer_disks_rejected() {
    for bad in [json!("three"), json!(2.5), json!(true), json!(null)] {
        let response = post(json!({ "disks": bad }));
        assert_eq!(response.status_code, 400);
        assert_eq!(body_json(&response)["error"], "Invalid disk count");
    }
}

#[test]
fn test_twenty_one_disks_rejected() {
    let response = post(json!({"disks": 21}));
    assert_eq!(response.status_code, 400);

    let body = body_json(&response);
    assert_eq!(body["error"], "Too many disks");
    assert_eq!(
        body["message"],
        "Maximum 20 disks allowed (20 disks = 1,048,575 moves)"
    );
}

#[test]
fn test_invalid_rod_names_rejected() {
    let response = post(json!({"disks": 3, "auxiliary": ""}));
    assert_eq!(response.status_code, 400);

    let body = body_json(&response);
    assert_eq!(body["error"], "Invalid rod names");
    assert_eq!(body["message"], "Rod names must be non-empty strings");
}

#[test]
fn test_malformed_string_body() {
    let response = post(json!("not json"));
    assert_eq!(response.status_code, 400);

    let body = body_json(&response);
    assert_eq!(body["error"], "Invalid JSON");
    assert_eq!(body["message"], "Request body must be valid JSON");
}

#[test]
fn test_cors_headers_on_every_branch() {
    let responses = [
        handle(&event(json!({"httpMethod": "OPTIONS"}))),
        handle(&event(json!({"httpMethod": "GET"}))),
        post(json!({"disks": 3})),
        post(json!({"disks": 0})),
        post(json!("not json")),
    ];

    for response in &responses {
        assert_eq!(response.headers["Content-Type"], "application/json");
        assert_eq!(response.headers["Access-Control-Allow-Origin"], "*");
        assert_eq!(
            response.headers["Access-Control-Allow-Headers"],
            "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token,X-Requested-With"
        );
        assert_eq!(
            response.headers["Access-Control-Allow-Methods"],
            "POST,OPTIONS,GET"
        );
        assert_eq!(response.headers["Access-Control-Max-Age"], "86400");
    }
}

#[test]
fn test_repeated_solves_are_identical() {
    let first = body_json(&post(json!({"disks": 5})));
    let second = body_json(&post(json!({"disks": 5})));
    assert_eq!(first["moves"], second["moves"]);
    assert_eq!(first["total_moves"], second["total_moves"]);
}

#[test]
fn test_response_envelope_serializes_with_status_code_key() {
    let response = handle(&event(json!({"httpMethod": "OPTIONS"})));
    let envelope = serde_json::to_value(&response).unwrap();
    assert_eq!(envelope["statusCode"], 200);
    assert!(envelope["headers"].is_object());
    assert!(envelope["body"].is_string());
}
