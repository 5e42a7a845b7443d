// Geometries module: Contains procedural microstructure geometries for spectral simulations
// This module samples implicit minimal surfaces on a regular grid and writes geom files

// ======================== MODULE DECLARATIONS ========================
pub mod minimal_surface;
pub mod geom_file;


// ======================== IMPLICIT SURFACES ========================
pub use minimal_surface::MinimalSurface; // enum - nodal approximations of triply periodic minimal surfaces
// MinimalSurface impl methods:
//   evaluate(&self, x: f64, y: f64, z: f64) -> f64           - level-set value, period 2π per axis
//   name(&self) -> &'static str                              - lowercase name used on the command line

// ======================== GEOM FILES ========================
pub use geom_file::{
    geom_grid,              // fn - validated box, reports `invalid grid a b c.` / `invalid size x y z.`
    GeomHeader,             // struct - grid, size, origin, microstructure count and homogenization
    GeomLayout,             // enum - one index per line or one line per x-row
    MinimalSurfaceGeometry, // struct - two-phase structure split at a surface threshold
};
// GeomHeader impl methods:
//   lines(&self, stamp: &str) -> Vec<String>                 - header lines after the line count
// MinimalSurfaceGeometry impl methods:
//   header(&self) -> GeomHeader                              - header with origin at zero
//   phase(&self, location: [usize; 3]) -> i64                - microstructure index of one point
//   microstructure_indices(&self) -> Vec<i64>                - indices in linear order, x fastest
//   render(&self, stamp: &str, layout: GeomLayout) -> String - complete geom file
