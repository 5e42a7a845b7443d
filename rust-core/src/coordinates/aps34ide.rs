use anyhow::{Error, Result};
use log::info;
use nalgebra::{Matrix3, Vector3};

use crate::config::{APS_FRAME_ANGLE, STRAIN_COORD_LABEL};
use crate::interfaces::ColumnShape;
use crate::table::AsciiTable;

/// Rotation about x accounting for the -135 deg offset of the TSL convention.
pub fn aps_rotation() -> Matrix3<f64> {
    let (s, c) = APS_FRAME_ANGLE.sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0,
        0.0, c, s,
        0.0, -s, c,
    )
}

/// Strain coordinates of one beamline X,Y,Z position measured at `depth`.
pub fn strain_coordinates(frame: &Vector3<f64>, depth: f64) -> Vector3<f64> {
    let mut coord = -frame;
    coord.z += depth;
    aps_rotation() * coord
}

/// Append `1_coord 2_coord 3_coord` computed from the `frame` vector and `depth` columns.
///
/// A depth stored as a column group contributes its first component.
pub fn add_strain_coordinates(
    table: &mut AsciiTable,
    frame: &str,
    depth: &str,
    info: &str,
) -> Result<()> {
    if table.column_index(frame, ColumnShape::Vector).is_none() {
        return Err(Error::msg(format!("Frame column {} not found.", frame)));
    }
    if table.column_index(depth, ColumnShape::Scalar).is_none() {
        return Err(Error::msg(format!("Depth column {} not found.", depth)));
    }

    let frames = table.column_values(frame, ColumnShape::Vector)?;
    let depths = table.column_values(depth, ColumnShape::Scalar)?;
    info!("Converting {} positions to strain coordinates", frames.len());

    let values = frames
        .iter()
        .zip(&depths)
        .map(|(position, depth)| {
            let coord = strain_coordinates(&Vector3::from_column_slice(position), depth[0]);
            coord.iter().map(|v| v.to_string()).collect()
        })
        .collect();
    let labels = (1..=3)
        .map(|i| format!("{}_{}", i, STRAIN_COORD_LABEL))
        .collect();

    table.add_comment(format!("{}: {}", STRAIN_COORD_LABEL, info));
    table.append_columns(labels, values)
}
