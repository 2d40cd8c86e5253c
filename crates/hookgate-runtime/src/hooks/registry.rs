use std::sync::Arc;

use anyhow::{anyhow, Result};
use dashmap::DashMap;
use serde_json::Value;
use tracing::{debug, warn};

use super::builtin::{ResultCountEnricher, TimestampEnricher, ToolCallLogger, ToolResultLogger};
use super::events::{HookContext, HookEvent};
use super::hook::Hook;

/// Registry for hooks, organized by event type
pub struct HookRegistry {
    hooks: DashMap<HookEvent, Vec<Arc<dyn Hook>>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self {
            hooks: DashMap::new(),
        }
    }

    /// Registry with the built-in stages: loggers first, then enrichers when `enrich` is set
    pub fn with_builtin(enrich: bool) -> Self {
        let registry = Self::new();
        registry.register(Arc::new(ToolCallLogger));
        registry.register(Arc::new(ToolResultLogger));
        if enrich {
            registry.register(Arc::new(TimestampEnricher::before()));
            registry.register(Arc::new(ResultCountEnricher));
            registry.register(Arc::new(TimestampEnricher::after()));
        }
        registry
    }

    /// Register a hook for its declared events
    pub fn register(&self, hook: Arc<dyn Hook>) {
        for event in hook.events() {
            self.hooks.entry(*event).or_default().push(hook.clone());
        }
    }

    /// Trigger all hooks for an event, return (possibly modified) data
    /// Hooks execute sequentially; non-critical errors are isolated (logged, not propagated)
    pub async fn trigger(&self, ctx: HookContext) -> Result<Value> {
        let hooks = self
            .hooks
            .get(&ctx.event)
            .map(|h| h.clone())
            .unwrap_or_default();

        if hooks.is_empty() {
            return Ok(ctx.data);
        }

        let mut data = ctx.data.clone();

        for hook in &hooks {
            let hook_ctx = HookContext {
                data: data.clone(),
                ..ctx.clone()
            };

            let timeout = hook.timeout();

            match tokio::time::timeout(timeout, hook.on_event(&hook_ctx)).await {
                Ok(Ok(result)) => {
                    if let Some(modified) = result.modified_data {
                        debug!(
                            request_id = %ctx.request_id,
                            hook = hook.name(),
                            "Hook modified payload"
                        );
                        data = modified;
                    }
                }
                Ok(Err(e)) => {
                    warn!(request_id = %ctx.request_id, hook = hook.name(), error = %e, "Hook failed");
                    if hook.critical() {
                        return Err(e.context(format!("Critical hook '{}' failed", hook.name())));
                    }
                }
                Err(_) => {
                    warn!(
                        request_id = %ctx.request_id,
                        hook = hook.name(),
                        timeout_ms = timeout.as_millis() as u64,
                        "Hook timed out"
                    );
                    if hook.critical() {
                        return Err(anyhow!("Critical hook '{}' timed out", hook.name()));
                    }
                }
            }
        }

        Ok(data)
    }

    /// Check if any hooks are registered for an event
    pub fn has_hooks(&self, event: &HookEvent) -> bool {
        self.hooks.get(event).map(|h| !h.is_empty()).unwrap_or(false)
    }

    /// Names of the hooks registered for an event, in execution order
    pub fn hook_names(&self, event: &HookEvent) -> Vec<String> {
        self.hooks
            .get(event)
            .map(|h| h.iter().map(|hook| hook.name().to_string()).collect())
            .unwrap_or_default()
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}
