// Coordinates module: Contains coordinate frame conversions for experimental data tables
// This module maps APS beamline 34-ID-E positions into the strain (TSL) frame

// ======================== MODULE DECLARATIONS ========================
pub mod aps34ide;

// Test modules
mod _tests_aps34ide;

// ======================== APS 34-ID-E FRAME ========================
pub use aps34ide::{
    add_strain_coordinates, // fn(table: &mut AsciiTable, frame: &str, depth: &str, info: &str) -> Result<()> - appends 1_coord..3_coord
    aps_rotation,           // fn() -> Matrix3<f64> - constant rotation into the TSL convention
    strain_coordinates,     // fn(frame: &Vector3<f64>, depth: f64) -> Vector3<f64> - converts one beamline position
};
