// Constants

// Output formatting
pub const MISMATCH_PRECISION: usize = 6; // Decimals written for mismatch columns (%f)
pub const GEOM_PRECISION: usize = 6; // Decimals written for size/origin in geom headers

// Compatibility mismatch
pub const DEFAULT_DEFORMATION_LABEL: &str = "f";
pub const FLUCTUATION_SCALING: f64 = 1.0;

// APS beamline 34-ID-E: orientation accounting for the -135 deg TSL rotation
pub const APS_FRAME_ANGLE: f64 = -0.75 * std::f64::consts::PI;
pub const STRAIN_COORD_LABEL: &str = "coord";

// Minimal surface geometry defaults
pub const DEFAULT_GEOM_GRID: [usize; 3] = [16, 16, 16];
pub const DEFAULT_GEOM_SIZE: [f64; 3] = [1.0, 1.0, 1.0];
pub const DEFAULT_PERIODS: i64 = 1;
pub const DEFAULT_HOMOGENIZATION: i64 = 1;
pub const DEFAULT_MICROSTRUCTURE: [i64; 2] = [1, 2];
