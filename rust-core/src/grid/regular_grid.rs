use anyhow::{bail, Result};
use nalgebra::Vector3;

/// A periodic hexahedral grid of `resolution` cells spanning `size`.
///
/// Linear indices run with x fastest and z slowest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegularGrid {
    resolution: [usize; 3],
    size: Vector3<f64>,
}

impl RegularGrid {
    pub fn new(resolution: [usize; 3], size: [f64; 3]) -> Result<Self> {
        if resolution.iter().any(|&n| n < 1) {
            bail!(
                "Invalid grid {} x {} x {}: every count must be at least one.",
                resolution[0],
                resolution[1],
                resolution[2]
            );
        }
        if size.iter().any(|&l| !l.is_finite() || l <= 0.0) {
            bail!(
                "Invalid size {} x {} x {}: every extent must be positive.",
                size[0],
                size[1],
                size[2]
            );
        }

        Ok(RegularGrid {
            resolution,
            size: Vector3::from(size),
        })
    }

    pub fn resolution(&self) -> [usize; 3] {
        self.resolution
    }

    pub fn size(&self) -> Vector3<f64> {
        self.size
    }

    pub fn points(&self) -> usize {
        self.resolution.iter().product()
    }

    pub fn step(&self) -> Vector3<f64> {
        Vector3::new(
            self.size.x / self.resolution[0] as f64,
            self.size.y / self.resolution[1] as f64,
            self.size.z / self.resolution[2] as f64,
        )
    }

    pub fn cell_volume(&self) -> f64 {
        let step = self.step();
        step.x * step.y * step.z
    }

    pub fn location(&self, idx: usize) -> [usize; 3] {
        let [nx, ny, nz] = self.resolution;
        [idx % nx, (idx / nx) % ny, (idx / nx / ny) % nz]
    }

    /// Linear index of a location; coordinates outside the grid wrap around.
    pub fn index(&self, location: [i64; 3]) -> usize {
        let [nx, ny, nz] = self.resolution;
        let x = location[0].rem_euclid(nx as i64) as usize;
        let y = location[1].rem_euclid(ny as i64) as usize;
        let z = location[2].rem_euclid(nz as i64) as usize;
        x + nx * (y + ny * z)
    }

    pub fn cell_centre(&self, location: [usize; 3]) -> Vector3<f64> {
        let offset = Vector3::new(
            location[0] as f64 + 0.5,
            location[1] as f64 + 0.5,
            location[2] as f64 + 0.5,
        );
        offset.component_mul(&self.step())
    }

    pub fn node_count(&self) -> usize {
        self.resolution.iter().map(|n| n + 1).product()
    }

    pub fn node_index(&self, node: [usize; 3]) -> usize {
        let [nx, ny, _] = self.resolution;
        node[0] + (nx + 1) * (node[1] + (ny + 1) * node[2])
    }
}
