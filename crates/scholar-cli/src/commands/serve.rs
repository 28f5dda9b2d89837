use crate::cli::ServeArgs;
use anyhow::{Context, Result};
use scholar_config::{AgentBinding, WebConfig};
use scholar_web::AgentRuntime;

/// Apply command-line overrides on top of the file config
pub fn apply_overrides(mut config: WebConfig, args: &ServeArgs) -> WebConfig {
    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(dir) = &args.static_dir {
        config.static_dir = Some(dir.clone());
    }
    config
}

pub async fn execute(config: WebConfig, args: ServeArgs, binding: AgentBinding) -> Result<()> {
    let config = apply_overrides(config, &args);
    let runtime = AgentRuntime::new(binding);

    scholar_web::start_server(&config, runtime)
        .await
        .context("web server failed")
}
