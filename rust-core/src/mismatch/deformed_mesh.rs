use std::f64::consts::PI;

use anyhow::Result;
use log::debug;
use nalgebra::{Matrix3, Vector3};
use num_complex::Complex64;

use crate::grid::{frequency, is_nyquist, Fourier3D, RegularGrid, TensorField};

/// Deformed cell centres of a periodic deformation gradient field.
///
/// The fluctuation `w` with `grad w = F - F_avg` is integrated in Fourier
/// space, `w(ξ) = F(ξ)·ξ / (2πi |ξ|²)` with `ξ = k / size`. The mean and the
/// Nyquist modes carry no periodic fluctuation and are dropped. Centres are
/// `F_avg · X + scaling · w(X)` with `X` the undeformed cell centre.
pub fn deformed_centroids(
    field: &TensorField,
    average: &Matrix3<f64>,
    scaling: f64,
) -> Result<Vec<Vector3<f64>>> {
    let grid = field.grid();
    let resolution = grid.resolution();
    let size = grid.size();
    let points = grid.points();
    let fourier = Fourier3D::new(resolution);

    // 1) Spectra of all nine gradient components
    let mut spectra = Vec::with_capacity(9);
    for row in 0..3 {
        for col in 0..3 {
            let mut component: Vec<Complex64> = field
                .tensors()
                .iter()
                .map(|f| Complex64::new(f[(row, col)], 0.0))
                .collect();
            fourier.forward(&mut component)?;
            spectra.push(component);
        }
    }

    // 2) Integrate in Fourier space
    let zero = Complex64::new(0.0, 0.0);
    let mut fluctuation = vec![vec![zero; points]; 3];
    let mut dropped = 0usize;
    for idx in 0..points {
        let bins = grid.location(idx);
        if (0..3).any(|d| is_nyquist(bins[d], resolution[d])) {
            dropped += 1;
            continue;
        }
        let xi = Vector3::new(
            frequency(bins[0], resolution[0]) as f64 / size.x,
            frequency(bins[1], resolution[1]) as f64 / size.y,
            frequency(bins[2], resolution[2]) as f64 / size.z,
        );
        let xi_squared = xi.norm_squared();
        if xi_squared == 0.0 {
            continue;
        }

        let denominator = Complex64::new(0.0, 2.0 * PI * xi_squared);
        for (row, component) in fluctuation.iter_mut().enumerate() {
            let projected = (0..3).fold(zero, |acc, col| acc + spectra[3 * row + col][idx] * xi[col]);
            component[idx] = projected / denominator;
        }
    }
    debug!("Dropped {} Nyquist modes of {} during integration", dropped, points);

    // 3) Back to real space
    for component in fluctuation.iter_mut() {
        fourier.inverse(component)?;
    }

    Ok((0..points)
        .map(|idx| {
            let centre = grid.cell_centre(grid.location(idx));
            let w = Vector3::new(fluctuation[0][idx].re, fluctuation[1][idx].re, fluctuation[2][idx].re);
            average * centre + scaling * w
        })
        .collect())
}

/// Corner nodes of the deformed mesh, `n+1` per axis, x fastest.
///
/// Each node is the mean of the eight centres sharing it. Centres beyond the
/// grid boundary are periodic images shifted by `F_avg · (s ⊙ size)`, `s` the
/// number of periods crossed.
pub fn mesh_nodes(
    grid: &RegularGrid,
    average: &Matrix3<f64>,
    centroids: &[Vector3<f64>],
) -> Vec<Vector3<f64>> {
    let [nx, ny, nz] = grid.resolution();
    let size = grid.size();
    let mut nodes = Vec::with_capacity(grid.node_count());

    for c in 0..=nz {
        for b in 0..=ny {
            for a in 0..=nx {
                let mut sum = Vector3::zeros();
                for dz in [-1i64, 0] {
                    for dy in [-1i64, 0] {
                        for dx in [-1i64, 0] {
                            let cell = [a as i64 + dx, b as i64 + dy, c as i64 + dz];
                            let periods = Vector3::new(
                                cell[0].div_euclid(nx as i64) as f64,
                                cell[1].div_euclid(ny as i64) as f64,
                                cell[2].div_euclid(nz as i64) as f64,
                            );
                            sum += centroids[grid.index(cell)] + average * periods.component_mul(&size);
                        }
                    }
                }
                nodes.push(sum / 8.0);
            }
        }
    }
    nodes
}
