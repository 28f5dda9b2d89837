pub mod gateway;
pub mod routes;
pub mod server;
pub mod shell;
pub mod surface;

mod assets;
mod error;
mod state;

pub use error::{Result, WebError};
pub use gateway::{AgentRuntime, HttpAgent};
pub use scholar_config::WebConfig;
pub use server::{build_router, start_server};
pub use shell::ShellContext;
pub use state::AppState;
pub use surface::{ChatLabels, ChatSurface};
