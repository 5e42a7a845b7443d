use anyhow::{bail, Result};
use nalgebra::Matrix3;

use super::regular_grid::RegularGrid;

/// A 3x3 tensor per grid point, e.g. the deformation gradient of a spectral solution.
#[derive(Debug, Clone, PartialEq)]
pub struct TensorField {
    grid: RegularGrid,
    tensors: Vec<Matrix3<f64>>,
}

impl TensorField {
    pub fn new(grid: RegularGrid, tensors: Vec<Matrix3<f64>>) -> Result<Self> {
        if tensors.len() != grid.points() {
            bail!(
                "Field holds {} tensors but the grid has {} points.",
                tensors.len(),
                grid.points()
            );
        }
        Ok(TensorField { grid, tensors })
    }

    /// Build from table rows of nine components each, stored row-major (`F[r][c] = row[3r+c]`).
    pub fn from_components(grid: RegularGrid, rows: &[Vec<f64>]) -> Result<Self> {
        let tensors = rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                if row.len() != 9 {
                    bail!("Point {} has {} tensor components instead of 9.", idx, row.len());
                }
                Ok(Matrix3::from_row_slice(row))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(grid, tensors)
    }

    pub fn grid(&self) -> &RegularGrid {
        &self.grid
    }

    pub fn tensors(&self) -> &[Matrix3<f64>] {
        &self.tensors
    }

    pub fn average(&self) -> Matrix3<f64> {
        let sum = self
            .tensors
            .iter()
            .fold(Matrix3::zeros(), |acc, tensor| acc + tensor);
        sum / self.tensors.len() as f64
    }
}
