// Mismatch module: Contains the compatibility analysis of deformation gradient fields
// This module reconstructs the deformed mesh of a periodic grid spectrally and compares it cell by cell

// ======================== MODULE DECLARATIONS ========================
pub mod deformed_mesh;
pub mod compatibility;
pub mod mismatch_table;


// ======================== DEFORMED CONFIGURATION ========================
pub use deformed_mesh::{
    deformed_centroids, // fn(field: &TensorField, average: &Matrix3<f64>, scaling: f64) -> Result<Vec<Vector3<f64>>> - spectrally integrated cell centres
    mesh_nodes,         // fn(grid: &RegularGrid, average: &Matrix3<f64>, centroids: &[Vector3<f64>]) -> Vec<Vector3<f64>> - corner nodes averaged from neighbouring centres
};

// ======================== CELL-WISE COMPARISON ========================
pub use compatibility::{
    hexahedron_volume, // fn(corners: &[Vector3<f64>; 8]) -> f64 - volume of a (deformed) hexahedral cell
    shape_mismatch,    // fn(field: &TensorField, nodes: &[Vector3<f64>], centroids: &[Vector3<f64>]) -> Vec<f64> - corner deviation per cell
    volume_mismatch,   // fn(field: &TensorField, nodes: &[Vector3<f64>]) -> Vec<f64> - mesh volume over det(F) volume per cell
    CompatibilityMismatch, // struct - centroids, nodes and requested mismatch measures of one field
};
// CompatibilityMismatch impl methods:
//   compute(field: &TensorField, shape: bool, volume: bool) -> Result<Self> - runs the full reconstruction

// ======================== TABLE PIPELINE ========================
pub use mismatch_table::{
    add_compatibility_mismatch, // fn(table: &mut AsciiTable, grid: &RegularGrid, options: &MismatchOptions, info: String) -> Result<Vec<String>> - appends mismatch columns
    MismatchOptions,            // struct - which measures to compute for which deformation gradient labels
};
