pub mod builtin;
pub mod events;
pub mod hook;
pub mod registry;

pub use builtin::{ResultCountEnricher, TimestampEnricher, ToolCallLogger, ToolResultLogger};
pub use events::{HookContext, HookEvent, HookResult};
pub use hook::Hook;
pub use registry::HookRegistry;
