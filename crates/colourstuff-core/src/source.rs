//! Boundary for anything that produces tristimulus readings.

use crate::colour_space::xyz::Tristimulus;

/// A source of tristimulus readings, such as a probe session or a replay
/// of logged values. Acquisition may fail (timeout, disconnect); the
/// computations in this crate never see how.
pub trait ReadingSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Acquire one reading.
    fn acquire(&mut self) -> Result<Tristimulus, Self::Error>;
}
