//! Configuration file for the command-line tool.
//!
//! ```json
//! {
//!   "conversion": { "reference_white": "D65", "formula": "corrected" },
//!   "spotread": { "command": "spotread", "port": 1, "display": "lcd", "timeout_secs": 30 }
//! }
//! ```
//!
//! Every field is optional. Missing fields fall back to the environment
//! (`COLOURSTUFF_FORMULA`, `COLOURSTUFF_REFWHITE`, `SPOTREAD`) and then to
//! built-in defaults. Command-line flags override the file.

use std::path::Path;

use colourstuff_core::ConversionConfig;
use colourstuff_probe::SpotreadConfig;
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::commands::ProbeArgs;
use crate::error::Error;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub conversion: ConversionConfig,
    pub spotread: SpotreadConfig,
}

impl CliConfig {
    /// Load `path`, or the defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&text).map_err(|source| Error::ParseConfig {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("loaded config from {}: {config:?}", path.display());
        Ok(config)
    }

    /// Spotread settings with command-line overrides applied.
    pub fn spotread_with(&self, args: &ProbeArgs) -> SpotreadConfig {
        let mut spotread = self.spotread.clone();
        if let Some(command) = &args.command {
            spotread.command = command.clone();
        }
        if let Some(port) = args.port {
            spotread.port = port;
        }
        if let Some(display) = args.display {
            spotread.display = display;
        }
        spotread
    }
}
