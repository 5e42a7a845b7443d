use std::f64::consts::PI;

use anyhow::{bail, Result};
use nalgebra::Vector3;

use super::minimal_surface::MinimalSurface;
use crate::config::GEOM_PRECISION;
use crate::grid::RegularGrid;

/// Arrangement of microstructure indices in the data section of a geom file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeomLayout {
    /// One index per line
    Column,
    /// One line per x-row, indices separated by spaces
    TwoDimensional,
}

/// Box of a geom file, rejecting empty grids and non-positive sizes with the
/// messages geom tools report.
pub fn geom_grid(resolution: [usize; 3], size: [f64; 3]) -> Result<RegularGrid> {
    if resolution.iter().any(|&n| n < 1) {
        bail!("invalid grid a b c.");
    }
    if size.iter().any(|&l| !l.is_finite() || l <= 0.0) {
        bail!("invalid size x y z.");
    }
    RegularGrid::new(resolution, size)
}

/// Header block of a geom file.
#[derive(Debug, Clone, PartialEq)]
pub struct GeomHeader {
    pub grid: [usize; 3],
    pub size: Vector3<f64>,
    pub origin: Vector3<f64>,
    pub microstructures: i64,
    pub homogenization: i64,
}

impl GeomHeader {
    /// Header lines following the line count, starting with the execution stamp.
    pub fn lines(&self, stamp: &str) -> Vec<String> {
        let p = GEOM_PRECISION;
        vec![
            stamp.to_string(),
            format!("grid\ta {}\tb {}\tc {}", self.grid[0], self.grid[1], self.grid[2]),
            format!(
                "size\tx {:.*}\ty {:.*}\tz {:.*}",
                p, self.size.x, p, self.size.y, p, self.size.z
            ),
            format!(
                "origin\tx {:.*}\ty {:.*}\tz {:.*}",
                p, self.origin.x, p, self.origin.y, p, self.origin.z
            ),
            format!("microstructures\t{}", self.microstructures),
            format!("homogenization\t{}", self.homogenization),
        ]
    }
}

/// A bicontinuous two-phase structure: points where the surface function
/// exceeds `threshold` get the second microstructure index, all others the first.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimalSurfaceGeometry {
    pub surface: MinimalSurface,
    pub threshold: f64,
    pub grid: RegularGrid,
    pub periods: i64,
    pub homogenization: i64,
    pub microstructure: [i64; 2],
}

impl MinimalSurfaceGeometry {
    pub fn header(&self) -> GeomHeader {
        GeomHeader {
            grid: self.grid.resolution(),
            size: self.grid.size(),
            origin: Vector3::zeros(),
            microstructures: self.microstructure[0].max(self.microstructure[1]),
            homogenization: self.homogenization,
        }
    }

    /// Microstructure index of grid point `(x, y, z)`.
    pub fn phase(&self, location: [usize; 3]) -> i64 {
        let resolution = self.grid.resolution();
        let sample = |i: usize, n: usize| self.periods as f64 * 2.0 * PI * (i as f64 + 0.5) / n as f64;
        let value = self.surface.evaluate(
            sample(location[0], resolution[0]),
            sample(location[1], resolution[1]),
            sample(location[2], resolution[2]),
        );

        if self.threshold > value {
            self.microstructure[0]
        } else {
            self.microstructure[1]
        }
    }

    /// Microstructure indices in linear index order (x fastest).
    pub fn microstructure_indices(&self) -> Vec<i64> {
        (0..self.grid.points())
            .map(|idx| self.phase(self.grid.location(idx)))
            .collect()
    }

    /// Complete geom file text.
    pub fn render(&self, stamp: &str, layout: GeomLayout) -> String {
        let header = self.header().lines(stamp);
        let mut out = format!("{}\theader\n", header.len());
        for line in &header {
            out.push_str(line);
            out.push('\n');
        }

        let [nx, _, _] = self.grid.resolution();
        for (idx, phase) in self.microstructure_indices().into_iter().enumerate() {
            out.push_str(&phase.to_string());
            match layout {
                GeomLayout::Column => out.push('\n'),
                GeomLayout::TwoDimensional => {
                    out.push(' ');
                    if (idx + 1) % nx == 0 {
                        out.push('\n');
                    }
                }
            }
        }
        out
    }
}
