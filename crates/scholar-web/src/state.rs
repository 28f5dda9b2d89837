use crate::gateway::{build_client, AgentRuntime};
use crate::shell::ShellContext;
use crate::surface::ChatSurface;
use crate::Result;
use std::sync::Arc;

/// Read-only state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub runtime: Arc<AgentRuntime>,
    pub shell: Arc<ShellContext>,
    pub surface: Arc<ChatSurface>,
    pub http_client: reqwest::Client,
}

impl AppState {
    pub fn new(runtime: AgentRuntime) -> Result<Self> {
        let shell = ShellContext::for_runtime(&runtime);
        let surface = ChatSurface::new()?;

        Ok(Self {
            runtime: Arc::new(runtime),
            shell: Arc::new(shell),
            surface: Arc::new(surface),
            http_client: build_client()?,
        })
    }
}
