use crate::core::solver;
use crate::domain::model::{ApiGatewayEvent, ApiResponse};
use crate::utils::error::{ApiError, Result};
use crate::utils::validation;
use serde_json::{json, Value};
use std::collections::HashMap;

/// Fixed CORS header set carried by every response, success or error.
pub const CORS_HEADERS: [(&str, &str); 5] = [
    ("Content-Type", "application/json"),
    ("Access-Control-Allow-Origin", "*"),
    (
        "Access-Control-Allow-Headers",
        "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token,X-Requested-With",
    ),
    ("Access-Control-Allow-Methods", "POST,OPTIONS,GET"),
    ("Access-Control-Max-Age", "86400"),
];

fn cors_headers() -> HashMap<&'static str, &'static str> {
    CORS_HEADERS.iter().copied().collect()
}

/// Serve one inbound event, producing exactly one response.
///
/// Validation failures come back as structured 400 bodies; anything
/// unanticipated falls through to a 500 and is logged.
pub fn handle(event: &ApiGatewayEvent) -> ApiResponse {
    match dispatch(event) {
        Ok(response) => response,
        Err(err) => {
            if let ApiError::Internal { message } = &err {
                tracing::error!("Unhandled failure while serving request: {}", message);
            }
            error_response(&err)
        }
    }
}

fn dispatch(event: &ApiGatewayEvent) -> Result<ApiResponse> {
    let method = event.http_method.as_deref().unwrap_or("").to_uppercase();

    match method.as_str() {
        // CORS preflight short-circuit
        "OPTIONS" => json_response(200, &json!({"message": "OK"})),
        // informational payload for browser smoke tests, no solve
        "GET" => json_response(
            200,
            &json!({
                "message": "Tower of Hanoi API is running",
                "endpoint": "/solve",
                "method": "POST",
                "example": {"disks": 3}
            }),
        ),
        _ => solve_request(event),
    }
}

fn solve_request(event: &ApiGatewayEvent) -> Result<ApiResponse> {
    let body = parse_body(event.body.as_ref())?;
    let request = validation::parse_solve_request(&body)?;

    tracing::info!(disks = request.disks, "Solving Tower of Hanoi");
    let solution = solver::solve(
        request.disks,
        &request.source,
        &request.auxiliary,
        &request.target,
    );

    let body = serde_json::to_string(&solution).map_err(|e| ApiError::Internal {
        message: e.to_string(),
    })?;
    Ok(ApiResponse {
        status_code: 200,
        headers: cors_headers(),
        body,
    })
}

/// Proxy integrations deliver the body as a JSON-encoded string; direct
/// invocations may pass a structured object. A missing body behaves like
/// an empty object so field validation reports the real problem.
fn parse_body(body: Option<&Value>) -> Result<Value> {
    match body {
        Some(Value::String(raw)) => Ok(serde_json::from_str(raw)?),
        Some(Value::Null) | None => Ok(json!({})),
        Some(value) => Ok(value.clone()),
    }
}

fn json_response(status_code: u16, body: &Value) -> Result<ApiResponse> {
    Ok(ApiResponse {
        status_code,
        headers: cors_headers(),
        body: body.to_string(),
    })
}

fn error_response(err: &ApiError) -> ApiResponse {
    let body = json!({
        "error": err.label(),
        "message": err.user_message(),
    });
    ApiResponse {
        status_code: err.status_code(),
        headers: cors_headers(),
        body: body.to_string(),
    }
}
