pub mod hooks;
pub mod payload;

pub use hooks::{Hook, HookContext, HookEvent, HookRegistry, HookResult};
pub use payload::{parse_object, ToolCallSummary, ToolResultSummary};

/// Initialize structured JSON logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().json().with_env_filter(filter).init();
}
