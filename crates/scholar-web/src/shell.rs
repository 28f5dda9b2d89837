//! Application shell: the context every page is rendered inside

use crate::gateway::AgentRuntime;
use serde::Serialize;

/// Path the gateway is mounted at
pub const RUNTIME_URL: &str = "/api/copilotkit";

/// Document metadata for the shell's `<head>`
pub const PAGE_TITLE: &str = "Academic Research Agent — AG-UI chat";
pub const PAGE_DESCRIPTION: &str = "AI-driven academic research agent with AG-UI chat frontend";

/// Values the shell hands to every descendant page
///
/// Rendered as `data-runtime-url` / `data-agent` on the provider element
/// that wraps page content; the chat widget reads them from there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellContext {
    pub runtime_url: String,
    pub agent: String,
}

impl ShellContext {
    /// Shell bound to the runtime's default agent
    pub fn for_runtime(runtime: &AgentRuntime) -> Self {
        Self {
            runtime_url: RUNTIME_URL.to_string(),
            agent: runtime.default_agent().name().to_string(),
        }
    }
}
