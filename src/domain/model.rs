use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inbound event as delivered by API Gateway proxy integration.
///
/// `body` is either a JSON-encoded string (the usual proxy case) or an
/// already-structured object (direct invocation); the handler accepts both.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiGatewayEvent {
    #[serde(rename = "httpMethod", default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub body: Option<serde_json::Value>,
}

/// Outbound proxy response: status code, headers and a JSON string body.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: HashMap<&'static str, &'static str>,
    pub body: String,
}

/// A validated solve request with rod defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveRequest {
    pub disks: u32,
    pub source: String,
    pub auxiliary: String,
    pub target: String,
}

/// Complete solution for an n-disk puzzle.
///
/// `moves` is populated only up to the generation threshold; beyond it the
/// list stays empty and `message` explains the omission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    pub total_moves: u64,
    pub moves: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub formula: String,
    pub n: u32,
    pub generated_at: String,
}
