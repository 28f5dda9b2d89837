//! Agent server reachability check

use anyhow::{bail, Context, Result};
use scholar_config::AgentBinding;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

/// Probe `<agent url>health` and return the reported status
pub async fn check_agent(binding: &AgentBinding, timeout: Duration) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .context("failed to create HTTP client")?;

    let url = binding.health_url();
    tracing::debug!("Probing {}", url);

    let resp = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("agent server unreachable at {url}"))?;

    if !resp.status().is_success() {
        bail!("agent health check at {url} returned {}", resp.status());
    }

    let health: HealthResponse = resp
        .json()
        .await
        .with_context(|| format!("unexpected health response from {url}"))?;

    Ok(health.status)
}

pub async fn execute(binding: &AgentBinding, timeout_secs: u64) -> Result<()> {
    let status = check_agent(binding, Duration::from_secs(timeout_secs)).await?;
    println!("{} at {}: {}", binding.name, binding.url, status);
    Ok(())
}
