pub mod agents;
pub mod check;
pub mod serve;

use scholar_config::AgentBinding;

/// The agent binding for this process
///
/// An explicit `--agent-url` wins; otherwise `AG_UI_URL` or the default.
pub fn resolve_binding(agent_url: Option<&str>) -> AgentBinding {
    match agent_url {
        Some(url) => AgentBinding::with_url(url),
        None => AgentBinding::from_env(),
    }
}
