use crate::config::Config;
use anyhow::Result;
use hookgate_gateway::{start_server, AppState};
use hookgate_runtime::{HookEvent, HookRegistry};
use tracing::info;

pub async fn execute(config: &Config) -> Result<()> {
    let registry = HookRegistry::with_builtin(config.hooks.enrich);

    info!(
        enrich = config.hooks.enrich,
        max_body_bytes = config.server.max_body_bytes,
        before = ?registry.hook_names(&HookEvent::ToolCallBefore),
        after = ?registry.hook_names(&HookEvent::ToolCallAfter),
        "Hook pipeline configured"
    );

    let state = AppState::new(registry).with_max_body_bytes(config.server.max_body_bytes);

    start_server(state, &config.server.host, config.server.port).await?;

    Ok(())
}
