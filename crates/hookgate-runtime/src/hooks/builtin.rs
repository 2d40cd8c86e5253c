//! Built-in pipeline stages: request/result loggers and metadata enrichers.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use tracing::info;

use super::events::{HookContext, HookEvent, HookResult};
use super::hook::Hook;
use crate::payload::{
    ToolCallSummary, ToolResultSummary, INTERCEPTED_AFTER, INTERCEPTED_BEFORE, RESULT_COUNT,
};

/// Logs the tool name and query of an outgoing tool call
pub struct ToolCallLogger;

#[async_trait]
impl Hook for ToolCallLogger {
    fn name(&self) -> &str {
        "tool-call-logger"
    }

    fn events(&self) -> &[HookEvent] {
        &[HookEvent::ToolCallBefore]
    }

    async fn on_event(&self, ctx: &HookContext) -> Result<HookResult> {
        let summary = ToolCallSummary::from_payload(&ctx.data);
        info!(
            request_id = %ctx.request_id,
            tool = %summary.tool,
            query = %summary.query,
            "BEFORE tool call"
        );
        Ok(HookResult::default())
    }
}

/// Logs how many results a tool returned and the first result's title
pub struct ToolResultLogger;

#[async_trait]
impl Hook for ToolResultLogger {
    fn name(&self) -> &str {
        "tool-result-logger"
    }

    fn events(&self) -> &[HookEvent] {
        &[HookEvent::ToolCallAfter]
    }

    async fn on_event(&self, ctx: &HookContext) -> Result<HookResult> {
        let summary = ToolResultSummary::from_payload(&ctx.data);
        match summary.first_title.as_deref() {
            Some(title) => info!(
                request_id = %ctx.request_id,
                result_count = summary.result_count,
                first_title = %title,
                "AFTER tool call"
            ),
            None => info!(
                request_id = %ctx.request_id,
                result_count = summary.result_count,
                "AFTER tool call"
            ),
        }
        Ok(HookResult::default())
    }
}

/// Stamps the payload with the interception time (RFC 3339, UTC, seconds)
pub struct TimestampEnricher {
    field: &'static str,
    events: [HookEvent; 1],
}

impl TimestampEnricher {
    pub fn before() -> Self {
        Self {
            field: INTERCEPTED_BEFORE,
            events: [HookEvent::ToolCallBefore],
        }
    }

    pub fn after() -> Self {
        Self {
            field: INTERCEPTED_AFTER,
            events: [HookEvent::ToolCallAfter],
        }
    }
}

#[async_trait]
impl Hook for TimestampEnricher {
    fn name(&self) -> &str {
        "timestamp"
    }

    fn events(&self) -> &[HookEvent] {
        &self.events
    }

    async fn on_event(&self, ctx: &HookContext) -> Result<HookResult> {
        let stamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        Ok(insert_field(&ctx.data, self.field, Value::String(stamp)))
    }
}

/// Adds `result_count`, the length of the `content` array (0 when absent)
pub struct ResultCountEnricher;

#[async_trait]
impl Hook for ResultCountEnricher {
    fn name(&self) -> &str {
        "result-count"
    }

    fn events(&self) -> &[HookEvent] {
        &[HookEvent::ToolCallAfter]
    }

    async fn on_event(&self, ctx: &HookContext) -> Result<HookResult> {
        let count = ToolResultSummary::from_payload(&ctx.data).result_count;
        Ok(insert_field(&ctx.data, RESULT_COUNT, Value::from(count)))
    }
}

// Only objects are enriched; anything else passes through untouched.
fn insert_field(data: &Value, field: &str, value: Value) -> HookResult {
    match data {
        Value::Object(map) => {
            let mut map = map.clone();
            map.insert(field.to_string(), value);
            HookResult::modified(Value::Object(map))
        }
        _ => HookResult::default(),
    }
}
