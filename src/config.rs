//! Application configuration
//!
//! Centralized configuration for the demo binary, read from environment
//! variables with sensible defaults. Unparseable values fall back to the
//! default rather than failing startup.

use crate::demo::Scenario;
use std::env;
use std::str::FromStr;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Demo configuration
    pub demo: DemoConfig,
    /// Output configuration
    pub output: OutputConfig,
}

/// Which scenarios to run and how large the scale scenario is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Scenario selection
    pub scenario: Scenario,
    /// Number of chains created by the scale scenario
    pub scale_chains: usize,
    /// Agents (and interfaces) per chain in the scale scenario
    pub scale_agents_per_chain: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            scenario: Scenario::All,
            scale_chains: 5,
            scale_agents_per_chain: 3,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutputConfig {
    /// Report format
    pub format: OutputFormat,
}

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text listing
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let defaults = DemoConfig::default();
        Self {
            demo: DemoConfig {
                scenario: env_or("DEMO_SCENARIO", defaults.scenario),
                scale_chains: env_or("SCALE_CHAINS", defaults.scale_chains),
                scale_agents_per_chain: env_or(
                    "SCALE_AGENTS_PER_CHAIN",
                    defaults.scale_agents_per_chain,
                ),
            },
            output: OutputConfig {
                format: env_or("OUTPUT_FORMAT", OutputFormat::default()),
            },
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
