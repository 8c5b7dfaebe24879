//! Handlers for the pure colour computations.

use colourstuff_core::{
    Chromaticity, ConversionConfig, Lab, Srgb, Summary, Tristimulus, delta_e_with, locus,
    spectral_radiance,
};
use serde::Serialize;

use crate::Result;
use crate::commands::{ConvertArgs, DeltaEArgs, LocusArgs, RadianceArgs};

pub fn handle_locus(args: LocusArgs) -> Result<()> {
    let (x, y) = locus(args.kelvin)?;
    println!("{x:.6}, {y:.6}");
    Ok(())
}

pub fn handle_radiance(args: RadianceArgs) -> Result<()> {
    let radiance = spectral_radiance(args.wavelength, args.kelvin)?;
    println!("{radiance:e}");
    Ok(())
}

/// Every derived view of one reading.
#[derive(Debug, Serialize)]
pub struct Conversion {
    pub xyz: Tristimulus,
    pub xyy: Chromaticity,
    pub lab: Lab,
    pub srgb: Srgb,
    /// Kelvin, or the reason no temperature could be estimated.
    pub cct: std::result::Result<f64, String>,
}

pub fn convert(args: &ConvertArgs, config: &ConversionConfig) -> Result<Conversion> {
    let white = args.refwhite.unwrap_or(config.reference_white);
    let summary = args.xyz.summary_with(args.estimator.get(), config)?;
    Ok(Conversion {
        xyz: args.xyz,
        xyy: summary.chromaticity,
        lab: args.xyz.to_cielab_with(white, config.formula),
        srgb: summary.srgb,
        cct: summary.cct,
    })
}

pub fn handle_convert(args: ConvertArgs, config: &ConversionConfig) -> Result<()> {
    let conversion = convert(&args, config)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&conversion)?);
        return Ok(());
    }

    let white = args.refwhite.unwrap_or(config.reference_white);
    let Conversion { xyz, xyy, lab, srgb, cct } = conversion;
    let summary = Summary {
        xyz,
        chromaticity: xyy,
        cct,
        srgb,
    };
    println!("{summary}");
    println!("L*a*b*  : {:.4}, {:.4}, {:.4} ({white})", lab.l, lab.a, lab.b);
    Ok(())
}

pub fn handle_delta_e(args: DeltaEArgs, config: &ConversionConfig) -> Result<()> {
    println!("{:.4}", delta_e_with(&args.first, &args.second, config));
    Ok(())
}
