pub mod error;
pub mod server;

pub use error::InterceptError;
pub use server::{create_router, start_server, AppState, DEFAULT_MAX_BODY_BYTES};
