//! Probe session configuration.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ProbeError;

/// Environment variable overriding the `spotread` executable path.
pub const SPOTREAD_ENV: &str = "SPOTREAD";
/// Default executable, resolved through `PATH`.
const DEFAULT_COMMAND: &str = "spotread";
/// Default instrument port (1-based, as listed by `spotread -h`).
const DEFAULT_PORT: u32 = 1;
/// Default time to wait for the probe to answer.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Display technology the probe is calibrated for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayType {
    #[default]
    Lcd,
    Crt,
}

impl DisplayType {
    /// Value of spotread's `-y` option.
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Lcd => "l",
            Self::Crt => "c",
        }
    }
}

impl FromStr for DisplayType {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lcd" | "l" => Ok(Self::Lcd),
            "crt" | "c" => Ok(Self::Crt),
            _ => Err(ProbeError::InvalidArgument("display type must be lcd or crt")),
        }
    }
}

/// How to start a `spotread` session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpotreadConfig {
    /// Path or name of the `spotread` executable.
    pub command: String,
    /// Instrument port.
    pub port: u32,
    /// Display type passed to `-y`.
    pub display: DisplayType,
    /// Seconds to wait for each expected prompt or result.
    pub timeout_secs: u64,
}

impl Default for SpotreadConfig {
    fn default() -> Self {
        Self {
            command: std::env::var(SPOTREAD_ENV).unwrap_or_else(|_| DEFAULT_COMMAND.to_string()),
            port: DEFAULT_PORT,
            display: DisplayType::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl SpotreadConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Arguments for an interactive reading session.
    pub fn session_args(&self) -> Vec<String> {
        vec![
            "-y".to_string(),
            self.display.flag().to_string(),
            "-c".to_string(),
            self.port.to_string(),
        ]
    }
}
