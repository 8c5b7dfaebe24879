use std::path::PathBuf;

use colourstuff_core::ColourError;
use colourstuff_probe::ProbeError;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Colour(#[from] ColourError),
    #[error(transparent)]
    Probe(#[from] ProbeError),
    #[error("failed to acquire reading: {0}")]
    Source(Box<dyn std::error::Error + Send + Sync + 'static>),
    #[error("failed reading config {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed writing log: {0}")]
    WriteLog(std::io::Error),
    #[error("failed writing JSON: {0}")]
    Json(#[from] serde_json::Error),
}
