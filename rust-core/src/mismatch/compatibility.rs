use anyhow::Result;
use log::debug;
use nalgebra::{Matrix3, Vector3};

use super::deformed_mesh::{deformed_centroids, mesh_nodes};
use crate::config::FLUCTUATION_SCALING;
use crate::grid::{RegularGrid, TensorField};

/// Corner offsets of a cell in units of nodes; bit 0 is x, bit 1 y, bit 2 z.
const CORNERS: [[usize; 3]; 8] = [
    [0, 0, 0],
    [1, 0, 0],
    [0, 1, 0],
    [1, 1, 0],
    [0, 0, 1],
    [1, 0, 1],
    [0, 1, 1],
    [1, 1, 1],
];

/// Six tetrahedra sharing the 0-7 diagonal fill the hexahedron.
const TETRAHEDRA: [[usize; 4]; 6] = [
    [0, 1, 3, 7],
    [0, 1, 5, 7],
    [0, 2, 3, 7],
    [0, 2, 6, 7],
    [0, 4, 5, 7],
    [0, 4, 6, 7],
];

/// Reconstructed mesh and mismatch measures of one deformation gradient field.
#[derive(Debug, Clone)]
pub struct CompatibilityMismatch {
    pub average: Matrix3<f64>,
    pub centroids: Vec<Vector3<f64>>,
    pub nodes: Vec<Vector3<f64>>,
    pub shape: Option<Vec<f64>>,
    pub volume: Option<Vec<f64>>,
}

impl CompatibilityMismatch {
    pub fn compute(field: &TensorField, shape: bool, volume: bool) -> Result<Self> {
        // 1) Average gradient and spectrally integrated centres
        let average = field.average();
        let centroids = deformed_centroids(field, &average, FLUCTUATION_SCALING)?;

        // 2) Nodes from periodic neighbour averaging
        let nodes = mesh_nodes(field.grid(), &average, &centroids);
        debug!(
            "Reconstructed {} centroids and {} nodes",
            centroids.len(),
            nodes.len()
        );

        // 3) Requested comparisons
        let shape = shape.then(|| shape_mismatch(field, &nodes, &centroids));
        let volume = volume.then(|| volume_mismatch(field, &nodes));

        Ok(CompatibilityMismatch {
            average,
            centroids,
            nodes,
            shape,
            volume,
        })
    }
}

/// Sum over the eight corners of the distance between the mesh node and the
/// corner predicted by mapping the undeformed corner offset with the cell's own `F`.
///
/// Zero wherever the mesh is a homogeneous deformation of the cell.
pub fn shape_mismatch(
    field: &TensorField,
    nodes: &[Vector3<f64>],
    centroids: &[Vector3<f64>],
) -> Vec<f64> {
    let grid = field.grid();
    let step = grid.step();
    let offsets: Vec<Vector3<f64>> = CORNERS
        .iter()
        .map(|corner| {
            Vector3::new(
                corner[0] as f64 - 0.5,
                corner[1] as f64 - 0.5,
                corner[2] as f64 - 0.5,
            )
            .component_mul(&step)
        })
        .collect();

    map_cells(grid.points(), |idx| {
        let corners = cell_corners(grid, nodes, idx);
        let f = &field.tensors()[idx];
        corners
            .iter()
            .zip(&offsets)
            .map(|(node, offset)| (node - centroids[idx] - f * offset).norm())
            .sum()
    })
}

/// Ratio of the mesh cell volume to the volume `det(F) · V0` implied by the cell's gradient.
///
/// One wherever mesh and gradient agree.
pub fn volume_mismatch(field: &TensorField, nodes: &[Vector3<f64>]) -> Vec<f64> {
    let grid = field.grid();
    let initial = grid.cell_volume();

    map_cells(grid.points(), |idx| {
        let corners = cell_corners(grid, nodes, idx);
        hexahedron_volume(&corners) / (field.tensors()[idx].determinant() * initial)
    })
}

pub fn hexahedron_volume(corners: &[Vector3<f64>; 8]) -> f64 {
    TETRAHEDRA
        .iter()
        .map(|&[a, b, c, d]| {
            let (a, b, c, d) = (corners[a], corners[b], corners[c], corners[d]);
            (b - a).cross(&(c - a)).dot(&(d - a)).abs() / 6.0
        })
        .sum()
}

fn cell_corners(grid: &RegularGrid, nodes: &[Vector3<f64>], idx: usize) -> [Vector3<f64>; 8] {
    let [x, y, z] = grid.location(idx);
    CORNERS.map(|[dx, dy, dz]| nodes[grid.node_index([x + dx, y + dy, z + dz])])
}

#[cfg(feature = "parallel")]
fn map_cells<F>(points: usize, per_cell: F) -> Vec<f64>
where
    F: Fn(usize) -> f64 + Sync + Send,
{
    use rayon::prelude::*;
    (0..points).into_par_iter().map(per_cell).collect()
}

#[cfg(not(feature = "parallel"))]
fn map_cells<F>(points: usize, per_cell: F) -> Vec<f64>
where
    F: Fn(usize) -> f64,
{
    (0..points).map(per_cell).collect()
}
