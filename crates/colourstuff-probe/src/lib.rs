//! Colourstuff Probe: tristimulus readings from ArgyllCMS `spotread`.
//!
//! Discovers connected instruments and drives an interactive `spotread`
//! session, yielding [`colourstuff_core::Tristimulus`] readings through the
//! core's [`colourstuff_core::ReadingSource`] boundary.

pub mod config;
pub mod error;
pub mod listing;
pub mod session;

pub use config::{DisplayType, SpotreadConfig};
pub use error::ProbeError;
pub use listing::{ProbeListing, list_probes, parse_probe_listing};
pub use session::{Spotread, parse_reading};
