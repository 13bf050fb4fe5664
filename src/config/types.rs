//! Configuration types and CLI options.
//!
//! This module defines the library-level [`TrackerConfig`] and the `clap`
//! structures used by the `redirect_monitor` binary.

use std::time::Duration;

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_USER_AGENT, MAX_REDIRECT_HOPS, REQUEST_TIMEOUT,
    REQUEST_TIMEOUT_SECS,
};
use crate::config::headers::TRACKED_HEADERS;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Redirect tracker configuration (no CLI dependencies).
///
/// Limits the walk and shapes each request. Construct it programmatically or
/// convert it from the parsed [`Opt`].
///
/// # Examples
///
/// ```
/// use redirect_monitor::TrackerConfig;
/// use std::time::Duration;
///
/// let config = TrackerConfig {
///     max_redirects: 5,
///     timeout: Duration::from_secs(5),
///     ..Default::default()
/// };
/// assert_eq!(config.user_agent, "Redirect-Monitor/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Maximum number of hops (requests) per walk
    pub max_redirects: usize,

    /// Per-request timeout
    pub timeout: Duration,

    /// User-Agent header sent with every hop
    pub user_agent: String,

    /// Response headers recorded on each step
    pub tracked_headers: Vec<String>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            max_redirects: MAX_REDIRECT_HOPS,
            timeout: REQUEST_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            tracked_headers: TRACKED_HEADERS.iter().map(|h| h.to_string()).collect(),
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Trace a single URL and print the result as JSON
/// redirect_monitor trace http://example.com
///
/// # Run the HTTP API with a tighter hop limit
/// redirect_monitor --max-redirects 10 serve --bind 127.0.0.1:9000
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "redirect_monitor",
    about = "Traces the HTTP redirect chain of a URL, hop by hop."
)]
pub struct Opt {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info, env = "REDIRECT_MONITOR_LOG_LEVEL")]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, env = "REDIRECT_MONITOR_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Maximum number of hops to follow before reporting a redirect loop
    #[arg(
        long,
        default_value_t = MAX_REDIRECT_HOPS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..),
        env = "REDIRECT_MONITOR_MAX_REDIRECTS"
    )]
    pub max_redirects: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS, env = "REDIRECT_MONITOR_TIMEOUT_SECONDS")]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT, env = "REDIRECT_MONITOR_USER_AGENT")]
    pub user_agent: String,

    /// Action to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands of the `redirect_monitor` binary.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Trace one URL and print the result as JSON
    Trace {
        /// URL to trace
        url: String,

        /// Print single-line JSON instead of pretty-printed output
        #[arg(long)]
        compact: bool,
    },
    /// Serve the redirect check API over HTTP
    Serve {
        /// Address to bind the API server to
        #[arg(long, default_value = DEFAULT_BIND_ADDR, env = "REDIRECT_MONITOR_BIND")]
        bind: String,
    },
}

impl From<&Opt> for TrackerConfig {
    fn from(opt: &Opt) -> Self {
        Self {
            max_redirects: opt.max_redirects,
            timeout: Duration::from_secs(opt.timeout_seconds),
            user_agent: opt.user_agent.clone(),
            ..Default::default()
        }
    }
}
