//! Intercepted payload model and best-effort field extraction.
//!
//! A payload is any JSON object. Only a handful of fields are ever read, and a
//! missing key or a value of the wrong type is never an error: extraction falls
//! back to a placeholder and the payload itself is left alone.

use serde_json::{Map, Value};

/// Placeholder logged when a field is absent or not a string
pub const UNKNOWN: &str = "unknown";

/// Field added to `/before` payloads when enrichment is on
pub const INTERCEPTED_BEFORE: &str = "intercepted_before";
/// Field added to `/after` payloads when enrichment is on
pub const INTERCEPTED_AFTER: &str = "intercepted_after";
/// Result count added to `/after` payloads when enrichment is on
pub const RESULT_COUNT: &str = "result_count";

/// Parse a request body as a JSON object.
///
/// Valid JSON that is not an object (array, string, number...) is rejected too,
/// so callers treat it like any other unparseable body.
pub fn parse_object(body: &[u8]) -> Result<Map<String, Value>, serde_json::Error> {
    serde_json::from_slice::<Map<String, Value>>(body)
}

/// Observability fields of a tool-call request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCallSummary {
    pub tool: String,
    pub query: String,
}

impl ToolCallSummary {
    pub fn from_payload(payload: &Value) -> Self {
        let tool = payload
            .get("tool")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN)
            .to_string();

        let query = payload
            .pointer("/params/arguments/query")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN)
            .to_string();

        Self { tool, query }
    }
}

/// Observability fields of a tool-call result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResultSummary {
    pub result_count: usize,
    pub first_title: Option<String>,
}

impl ToolResultSummary {
    pub fn from_payload(payload: &Value) -> Self {
        let content = payload.get("content").and_then(Value::as_array);

        let result_count = content.map(Vec::len).unwrap_or(0);
        let first_title = content
            .and_then(|items| items.first())
            .and_then(|first| first.get("title"))
            .and_then(Value::as_str)
            .map(str::to_string);

        Self {
            result_count,
            first_title,
        }
    }
}
