//! DAMASK processing library
//!
//! Pre- and post-processing filters for spectral crystal plasticity data: ASCII
//! table handling, periodic grids with spectral integration, compatibility
//! mismatch of deformation gradient fields, beamline coordinate conversion and
//! minimal-surface microstructure generation.

pub mod cli;
pub mod config;
pub mod coordinates;
pub mod geometries;
pub mod grid;
pub mod interfaces;
pub mod mismatch;
pub mod table;

/// Common result type used throughout the library
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
