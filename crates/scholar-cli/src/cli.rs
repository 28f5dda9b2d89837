use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages (default)
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Parser)]
#[command(name = "scholar")]
#[command(about = "scholar - chat frontend for the Academic Research agent")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute (defaults to serve if not provided)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (defaults to ~/.config/scholar/config.toml)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Agent server base URL (overrides AG_UI_URL)
    #[arg(long, global = true)]
    pub agent_url: Option<String>,
}

impl Cli {
    /// Effective log level: explicit flag, then --verbose, then info
    pub fn level(&self) -> LevelFilter {
        match (self.log_level, self.verbose) {
            (Some(level), _) => level.into(),
            (None, true) => LevelFilter::DEBUG,
            (None, false) => LevelFilter::INFO,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, clap::Args)]
pub struct ServeArgs {
    /// Interface to bind (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides config)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Serve widget assets from this directory
    #[arg(long)]
    pub static_dir: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the chat page and the agent gateway
    Serve(ServeArgs),

    /// Show the configured agent binding
    Agents {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that the agent server answers its health endpoint
    Check {
        /// Probe timeout in seconds
        #[arg(long, default_value = "5")]
        timeout: u64,
    },
}
