use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use scholar_cli::{
    cli::{Cli, Commands, ServeArgs},
    commands,
};
use scholar_config::WebConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over the CLI level when set
    let level = cli.level();
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "scholar_cli={level},scholar_web={level},scholar_config={level},tower_http={level}"
        ))
    });
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = WebConfig::load(cli.config.as_deref())?;
    let binding = commands::resolve_binding(cli.agent_url.as_deref());

    match cli.command {
        Some(Commands::Serve(args)) => commands::serve::execute(config, args, binding).await?,
        Some(Commands::Agents { json }) => commands::agents::execute(&binding, json)?,
        Some(Commands::Check { timeout }) => commands::check::execute(&binding, timeout).await?,
        None => commands::serve::execute(config, ServeArgs::default(), binding).await?,
    }

    Ok(())
}
