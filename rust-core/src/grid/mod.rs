// Grid module: Contains the regular periodic grid shared by spectral post- and pre-processing
// This module provides grid indexing, tensor fields on the grid and the discrete Fourier transform

// ======================== MODULE DECLARATIONS ========================
pub mod regular_grid;
pub mod tensor_field;
pub mod spectral;

// Test modules
mod _tests_regular_grid;
mod _tests_spectral;

// ======================== GRID STRUCTURE ========================
pub use regular_grid::RegularGrid; // struct - resolution and physical size of a periodic hexahedral grid
// RegularGrid impl methods:
//   new(resolution: [usize; 3], size: [f64; 3]) -> Result<Self> - validates counts >= 1 and sizes > 0
//   resolution(&self) -> [usize; 3]                          - points per axis, x fastest
//   size(&self) -> Vector3<f64>                              - physical extent per axis
//   points(&self) -> usize                                   - total number of grid points
//   step(&self) -> Vector3<f64>                              - cell edge lengths size / resolution
//   cell_volume(&self) -> f64                                - undeformed volume of one cell
//   location(&self, idx: usize) -> [usize; 3]                - linear index to (x, y, z) location
//   index(&self, location: [i64; 3]) -> usize                - location to linear index, periodic wrap
//   cell_centre(&self, location: [usize; 3]) -> Vector3<f64> - undeformed cell centre
//   node_count(&self) -> usize                               - number of cell corner nodes (n+1 per axis)
//   node_index(&self, node: [usize; 3]) -> usize             - linear index of a corner node

// ======================== TENSOR FIELDS ========================
pub use tensor_field::TensorField; // struct - one 3x3 tensor per grid point in linear index order
// TensorField impl methods:
//   new(grid: RegularGrid, tensors: Vec<Matrix3<f64>>) -> Result<Self> - requires one tensor per point
//   from_components(grid: RegularGrid, rows: &[Vec<f64>]) -> Result<Self> - nine row-major components per point
//   grid(&self) -> &RegularGrid                              - underlying grid
//   tensors(&self) -> &[Matrix3<f64>]                        - tensors in linear index order
//   average(&self) -> Matrix3<f64>                           - arithmetic mean tensor

// ======================== SPECTRAL TRANSFORMS ========================
pub use spectral::{
    Fourier3D,  // struct - separable forward/inverse discrete Fourier transform over a grid
    frequency,  // fn(bin: usize, n: usize) -> i64 - signed frequency of a Fourier bin
    is_nyquist, // fn(bin: usize, n: usize) -> bool - whether the bin is the Nyquist bin of an even axis
};
// Fourier3D impl methods:
//   new(resolution: [usize; 3]) -> Self                      - precomputes twiddle factors per axis
//   forward(&self, data: &mut [Complex64]) -> Result<()>     - unnormalised forward transform
//   inverse(&self, data: &mut [Complex64]) -> Result<()>     - inverse transform scaled by 1/N
