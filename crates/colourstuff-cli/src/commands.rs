use std::path::PathBuf;

use colourstuff_core::{CctEstimator, HernandezAndres, McCamy, ReferenceWhite, Tristimulus};
use colourstuff_probe::DisplayType;

#[derive(Debug, clap::Parser)]
#[command(version, about = "Colour science for display probe readings")]
pub struct Args {
    #[command(subcommand)]
    pub subcommand: Subcommands,
    #[command(flatten)]
    pub globals: GlobalArgs,
}

#[derive(Debug, clap::Args)]
#[non_exhaustive]
pub struct GlobalArgs {
    /// Print debug information; can be repeated.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Do not print logs to console.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
    /// JSON configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
pub enum Subcommands {
    /// Print the Planckian locus chromaticity at a temperature.
    Locus(LocusArgs),
    /// Print blackbody spectral radiance.
    Radiance(RadianceArgs),
    /// Convert an XYZ reading to xyY, CIELAB, sRGB and CCT.
    Convert(ConvertArgs),
    /// Print ΔE between two XYZ readings.
    DeltaE(DeltaEArgs),
    /// List instruments known to spotread.
    Probes(ProbeArgs),
    /// Take one reading from the probe and print its summary.
    Sample(SampleArgs),
    /// Periodically take readings and append them to a log file.
    Log(LogArgs),
}

#[derive(Debug, clap::Args)]
#[non_exhaustive]
pub struct LocusArgs {
    /// Temperature in Kelvin (1667 to 25000).
    pub kelvin: f64,
}

#[derive(Debug, clap::Args)]
#[non_exhaustive]
pub struct RadianceArgs {
    /// Wavelength in nanometres.
    pub wavelength: f64,
    /// Temperature in Kelvin.
    pub kelvin: f64,
}

#[derive(Debug, clap::Args)]
#[non_exhaustive]
pub struct ConvertArgs {
    /// Reading as `X,Y,Z` on the 0-100 scale.
    #[arg(value_parser = parse_tristimulus, allow_hyphen_values = true)]
    pub xyz: Tristimulus,
    /// Reference white for CIELAB; overrides the config file.
    #[arg(long)]
    pub refwhite: Option<ReferenceWhite>,
    /// CCT estimator.
    #[arg(long, value_enum, default_value_t = Estimator::Mccamy)]
    pub estimator: Estimator,
    /// Print JSON instead of the text summary.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args)]
#[non_exhaustive]
pub struct DeltaEArgs {
    /// First reading as `X,Y,Z`.
    #[arg(value_parser = parse_tristimulus, allow_hyphen_values = true)]
    pub first: Tristimulus,
    /// Second reading as `X,Y,Z`.
    #[arg(value_parser = parse_tristimulus, allow_hyphen_values = true)]
    pub second: Tristimulus,
}

#[derive(Debug, clap::Args)]
#[non_exhaustive]
pub struct ProbeArgs {
    /// spotread executable; overrides the config file and $SPOTREAD.
    #[arg(long)]
    pub command: Option<String>,
    /// Instrument port.
    #[arg(short = 'c', long)]
    pub port: Option<u32>,
    /// Display type: lcd or crt.
    #[arg(short = 'y', long)]
    pub display: Option<DisplayType>,
}

#[derive(Debug, clap::Args)]
#[non_exhaustive]
pub struct SampleArgs {
    #[command(flatten)]
    pub probe: ProbeArgs,
    /// CCT estimator.
    #[arg(long, value_enum, default_value_t = Estimator::Mccamy)]
    pub estimator: Estimator,
}

#[derive(Debug, clap::Args)]
#[non_exhaustive]
pub struct LogArgs {
    #[command(flatten)]
    pub probe: ProbeArgs,
    /// File the readings are appended to.
    #[arg(short, long, default_value = "logged_xyz.txt")]
    pub output: PathBuf,
    /// Seconds between readings.
    #[arg(short, long, default_value_t = 5)]
    pub interval: u64,
    /// Stop after this many readings.
    #[arg(short = 'n', long)]
    pub count: Option<u64>,
    /// CCT estimator.
    #[arg(long, value_enum, default_value_t = Estimator::Mccamy)]
    pub estimator: Estimator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Estimator {
    Mccamy,
    HernandezAndres,
}

impl Estimator {
    pub fn get(self) -> &'static dyn CctEstimator {
        match self {
            Self::Mccamy => &McCamy,
            Self::HernandezAndres => &HernandezAndres,
        }
    }
}

/// Parse `X,Y,Z`.
pub fn parse_tristimulus(s: &str) -> Result<Tristimulus, String> {
    let values = s
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid number in {s:?}: {e}"))?;
    match values[..] {
        [x, y, z] => Ok(Tristimulus::new(x, y, z)),
        _ => Err(format!("expected X,Y,Z, got {} values", values.len())),
    }
}
