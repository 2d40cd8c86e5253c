use serde_json::Value;

/// Points in the tool-call lifecycle where the gateway intercepts a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookEvent {
    /// Tool-call request, before the backend executes it
    ToolCallBefore,
    /// Tool-call result, after the backend returned it
    ToolCallAfter,
}

impl HookEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            HookEvent::ToolCallBefore => "before",
            HookEvent::ToolCallAfter => "after",
        }
    }
}

/// Context passed to hooks on event trigger
#[derive(Debug, Clone)]
pub struct HookContext {
    pub event: HookEvent,
    /// Intercepted payload as seen by this stage
    pub data: Value,
    /// Correlates every log line of one intercepted request
    pub request_id: String,
}

/// Result from hook execution
#[derive(Debug, Clone, Default)]
pub struct HookResult {
    /// Replacement payload for the following stages; `None` leaves it untouched
    pub modified_data: Option<Value>,
}

impl HookResult {
    pub fn modified(data: Value) -> Self {
        Self {
            modified_data: Some(data),
        }
    }
}
