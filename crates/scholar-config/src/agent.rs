//! The remote agent binding
//!
//! Exactly one agent is bound per process. Its base URL comes from
//! `AG_UI_URL` (or a startup override) and is normalized to end with a
//! single `/` before use. Deployments still exporting the older
//! `NEXT_PUBLIC_AG_UI_URL` keep working: it is read when `AG_UI_URL` is
//! unset.

use serde::Serialize;

/// Environment variable holding the agent server's base URL
pub const AG_UI_URL_ENV: &str = "AG_UI_URL";

/// Previous name of [`AG_UI_URL_ENV`], consulted when it is unset
pub const LEGACY_AG_UI_URL_ENV: &str = "NEXT_PUBLIC_AG_UI_URL";

/// Agent server URL used when the environment variable is unset
pub const DEFAULT_AG_UI_URL: &str = "http://localhost:8000/";

/// Logical name the chat surface addresses
pub const AGENT_NAME: &str = "academic_research";

/// Human-readable summary advertised for the bound agent
pub const AGENT_DESCRIPTION: &str =
    "Research advice, related literature finding, research area proposals, web knowledge access";

/// Normalize an agent URL so it ends with exactly one `/`
///
/// Any run of trailing slashes collapses to one, so normalizing twice
/// gives the same string as normalizing once.
pub fn normalize_agent_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    format!("{trimmed}/")
}

/// Resolve the agent URL from the process environment
///
/// [`AG_UI_URL_ENV`] wins over [`LEGACY_AG_UI_URL_ENV`]. Falls back to
/// [`DEFAULT_AG_UI_URL`] when both are unset or blank.
pub fn agent_url_from_env() -> String {
    let read = |name: &str| {
        std::env::var(name)
            .ok()
            .filter(|value| !value.trim().is_empty())
    };

    let raw = read(AG_UI_URL_ENV).or_else(|| {
        let legacy = read(LEGACY_AG_UI_URL_ENV);
        if legacy.is_some() {
            tracing::warn!(
                "{} is deprecated, set {} instead",
                LEGACY_AG_UI_URL_ENV,
                AG_UI_URL_ENV
            );
        }
        legacy
    });

    match raw {
        Some(value) => normalize_agent_url(&value),
        None => {
            tracing::debug!("{} not set, using {}", AG_UI_URL_ENV, DEFAULT_AG_UI_URL);
            normalize_agent_url(DEFAULT_AG_UI_URL)
        }
    }
}

/// One logical agent name mapped to its remote AG-UI endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentBinding {
    /// Logical agent name (must match what the UI references)
    pub name: String,
    /// Normalized base URL, always ending in `/`
    pub url: String,
    /// Summary shown by agent discovery
    pub description: String,
}

impl AgentBinding {
    /// Bind `name` to `url`, normalizing the URL
    pub fn new(name: impl Into<String>, url: &str) -> Self {
        Self {
            name: name.into(),
            url: normalize_agent_url(url),
            description: String::new(),
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The default Academic Research binding, URL taken from the environment
    pub fn from_env() -> Self {
        Self::new(AGENT_NAME, &agent_url_from_env()).with_description(AGENT_DESCRIPTION)
    }

    /// The default binding with an explicit URL (CLI override)
    pub fn with_url(url: &str) -> Self {
        Self::new(AGENT_NAME, url).with_description(AGENT_DESCRIPTION)
    }

    /// URL of the agent server's health endpoint
    pub fn health_url(&self) -> String {
        format!("{}health", self.url)
    }
}
