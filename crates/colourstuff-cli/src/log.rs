//! Periodic reading log.
//!
//! Each line is `<timestamp>, X, Y, Z, CCT` with the tristimulus values to
//! four decimals and the temperature rounded to whole Kelvin. The timestamp
//! is local time, `2024-03-01 14:05:09.123456`.

use std::fs::OpenOptions;
use std::io::Write;
use std::thread;
use std::time::Duration;

use colourstuff_core::{CctEstimator, ConversionConfig, ReadingSource, Tristimulus};
use colourstuff_probe::{Spotread, SpotreadConfig};

use crate::Result;
use crate::commands::LogArgs;
use crate::error::Error;

const RULE_WIDTH: usize = 70;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

pub fn format_log_line(timestamp: &str, xyz: &Tristimulus, cct: f64) -> String {
    format!(
        "{timestamp}, {:.4}, {:.4}, {:.4}, {cct:.0}\n",
        xyz.x, xyz.y, xyz.z
    )
}

fn timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Options for [`record`].
pub struct Recording<'a> {
    pub estimator: &'a dyn CctEstimator,
    pub config: &'a ConversionConfig,
    pub interval: Duration,
    pub count: Option<u64>,
}

/// Acquire readings from `source` and append them to `log` until `count`
/// readings are taken or anything fails. Returns the number of readings
/// written.
pub fn record<S, W>(source: &mut S, log: &mut W, options: &Recording<'_>) -> Result<u64>
where
    S: ReadingSource,
    W: Write,
{
    let mut taken = 0;
    loop {
        if options.count.is_some_and(|count| taken >= count) {
            return Ok(taken);
        }
        let xyz = source
            .acquire()
            .map_err(|e| Error::Source(Box::new(e)))?;
        let cct = xyz.cct_with(options.estimator)?;

        log.write_all(format_log_line(&timestamp(), &xyz, cct).as_bytes())
            .map_err(Error::WriteLog)?;
        log.flush().map_err(Error::WriteLog)?;
        taken += 1;

        println!("{}", xyz.summary_with(options.estimator, options.config)?);
        println!("{}", "*".repeat(RULE_WIDTH));

        if options.count.is_none_or(|count| taken < count) {
            thread::sleep(options.interval);
        }
    }
}

pub fn handle_log(args: LogArgs, spotread: &SpotreadConfig, config: &ConversionConfig) -> Result<()> {
    let mut log = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&args.output)
        .map_err(Error::WriteLog)?;
    let mut session = Spotread::spawn(spotread)?;
    tracing::info!("logging readings to {}", args.output.display());

    let options = Recording {
        estimator: args.estimator.get(),
        config,
        interval: Duration::from_secs(args.interval),
        count: args.count,
    };
    let taken = record(&mut session, &mut log, &options)?;
    tracing::info!("recorded {taken} readings");
    session.quit()?;
    Ok(())
}
