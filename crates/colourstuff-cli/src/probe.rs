//! Handlers that talk to the probe.

use colourstuff_core::{CctEstimator, ConversionConfig};
use colourstuff_probe::{Spotread, SpotreadConfig, list_probes};

use crate::Result;

pub fn handle_probes(spotread: &SpotreadConfig) -> Result<()> {
    let probes = list_probes(&spotread.command)?;
    if probes.is_empty() {
        tracing::warn!("no instruments found");
    }
    for (port, name) in probes {
        println!("{port}: {name}");
    }
    Ok(())
}

pub fn handle_sample(
    spotread: &SpotreadConfig,
    estimator: &dyn CctEstimator,
    config: &ConversionConfig,
) -> Result<()> {
    let mut session = Spotread::spawn(spotread)?;
    let reading = session.sample()?;
    session.quit()?;
    println!("{}", reading.summary_with(estimator, config)?);
    Ok(())
}
