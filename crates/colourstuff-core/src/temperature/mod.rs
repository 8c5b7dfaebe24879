//! Blackbody physics: the Planckian locus, spectral radiance and CCT estimation.

pub mod blackbody;
pub mod cct;
pub mod locus;
