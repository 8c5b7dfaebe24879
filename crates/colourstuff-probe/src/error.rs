use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("I/O error talking to probe: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("probe output ended while waiting for {expected:?}")]
    Disconnected { expected: &'static str },
    #[error("timed out after {timeout:?} waiting for {expected:?}")]
    Timeout {
        expected: &'static str,
        timeout: Duration,
    },
    #[error("malformed reading: {0}")]
    MalformedReading(String),
    #[error("malformed probe listing entry: {0}")]
    MalformedListing(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

pub type Result<T, E = ProbeError> = std::result::Result<T, E>;
