use anyhow::{anyhow, Result};
use async_trait::async_trait;
use hookgate_runtime::payload::{INTERCEPTED_AFTER, INTERCEPTED_BEFORE, RESULT_COUNT};
use hookgate_runtime::{Hook, HookContext, HookEvent, HookRegistry, HookResult};
use serde_json::{json, Value};
use std::sync::Arc;

fn ctx(event: HookEvent, data: Value) -> HookContext {
    HookContext {
        event,
        data,
        request_id: "integration".to_string(),
    }
}

// Custom stage that blocks a tool; critical, so the gateway falls back to pass-through
struct DenyTool(&'static str);

#[async_trait]
impl Hook for DenyTool {
    fn name(&self) -> &str {
        "deny-tool"
    }

    fn events(&self) -> &[HookEvent] {
        &[HookEvent::ToolCallBefore]
    }

    async fn on_event(&self, ctx: &HookContext) -> Result<HookResult> {
        if ctx.data.get("tool").and_then(Value::as_str) == Some(self.0) {
            return Err(anyhow!("tool '{}' is denied", self.0));
        }
        Ok(HookResult::default())
    }

    fn critical(&self) -> bool {
        true
    }
}

#[tokio::test]
async fn test_before_pipeline_preserves_fields_and_stamps() {
    let registry = HookRegistry::with_builtin(true);
    let input = json!({
        "tool": "search",
        "params": {"arguments": {"query": "weather", "limit": 5}},
        "meta": {"nested": [1, 2.5, null, true]}
    });

    let output = registry
        .trigger(ctx(HookEvent::ToolCallBefore, input.clone()))
        .await
        .unwrap();

    let out = output.as_object().unwrap();
    for (key, value) in input.as_object().unwrap() {
        assert_eq!(&out[key], value);
    }
    assert_eq!(out.len(), input.as_object().unwrap().len() + 1);
    assert!(out[INTERCEPTED_BEFORE].is_string());
    assert!(!out.contains_key(INTERCEPTED_AFTER));
}

#[tokio::test]
async fn test_after_pipeline_adds_count_and_stamp() {
    let registry = HookRegistry::with_builtin(true);
    let input = json!({"content": [{"title": "Result A"}, {"title": "Result B"}]});

    let output = registry
        .trigger(ctx(HookEvent::ToolCallAfter, input))
        .await
        .unwrap();

    assert_eq!(output["content"].as_array().unwrap().len(), 2);
    assert_eq!(output[RESULT_COUNT], 2);
    assert!(output[INTERCEPTED_AFTER].is_string());
}

#[tokio::test]
async fn test_pipeline_without_enrichment_is_identity() {
    let registry = HookRegistry::with_builtin(false);
    let input = json!({"content": [], "tool": "search"});

    for event in [HookEvent::ToolCallBefore, HookEvent::ToolCallAfter] {
        let output = registry.trigger(ctx(event, input.clone())).await.unwrap();
        assert_eq!(output, input);
    }
}

#[tokio::test]
async fn test_before_pipeline_is_idempotent_on_its_output() {
    let registry = HookRegistry::with_builtin(true);
    let first = registry
        .trigger(ctx(HookEvent::ToolCallBefore, json!({"tool": "search"})))
        .await
        .unwrap();
    let second = registry
        .trigger(ctx(HookEvent::ToolCallBefore, first.clone()))
        .await
        .unwrap();

    assert_eq!(second["tool"], "search");
    assert_eq!(
        second.as_object().unwrap().len(),
        first.as_object().unwrap().len()
    );
}

#[tokio::test]
async fn test_custom_critical_stage_after_builtins() {
    let registry = HookRegistry::with_builtin(true);
    registry.register(Arc::new(DenyTool("shell")));

    let allowed = registry
        .trigger(ctx(HookEvent::ToolCallBefore, json!({"tool": "search"})))
        .await;
    assert!(allowed.is_ok());

    let denied = registry
        .trigger(ctx(HookEvent::ToolCallBefore, json!({"tool": "shell"})))
        .await;
    let err = denied.unwrap_err();
    assert!(format!("{:#}", err).contains("denied"));
}
