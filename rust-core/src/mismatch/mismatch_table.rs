use anyhow::{bail, Result};
use log::{info, warn};

use super::compatibility::CompatibilityMismatch;
use crate::config::{DEFAULT_DEFORMATION_LABEL, MISMATCH_PRECISION};
use crate::grid::{RegularGrid, TensorField};
use crate::interfaces::ColumnShape;
use crate::table::AsciiTable;

/// Which mismatch measures to append for which deformation gradient labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MismatchOptions {
    pub shape: bool,
    pub volume: bool,
    pub labels: Vec<String>,
}

impl Default for MismatchOptions {
    fn default() -> Self {
        MismatchOptions {
            shape: true,
            volume: true,
            labels: vec![DEFAULT_DEFORMATION_LABEL.to_string()],
        }
    }
}

/// Append `mismatch_shape(<label>)` / `mismatch_volume(<label>)` columns to a
/// table holding deformation gradients on `grid`.
///
/// Labels without a `1_<label>` ... `9_<label>` column group are skipped with
/// a warning. Returns the labels that were processed.
pub fn add_compatibility_mismatch(
    table: &mut AsciiTable,
    grid: &RegularGrid,
    options: &MismatchOptions,
    info: String,
) -> Result<Vec<String>> {
    let mut processed = Vec::new();
    let mut new_labels = Vec::new();
    let mut columns: Vec<Vec<f64>> = Vec::new();

    for label in &options.labels {
        if table.column_index(label, ColumnShape::Tensor).is_none() {
            warn!("column 1_{} not found...", label);
            continue;
        }
        if table.len() != grid.points() {
            bail!(
                "Table holds {} rows but the grid has {} points.",
                table.len(),
                grid.points()
            );
        }

        let components = table.column_values(label, ColumnShape::Tensor)?;
        let field = TensorField::from_components(*grid, &components)?;
        let mismatch = CompatibilityMismatch::compute(&field, options.shape, options.volume)?;
        info!("Computed compatibility mismatch of {}", label);

        if let Some(shape) = mismatch.shape {
            new_labels.push(format!("mismatch_shape({})", label));
            columns.push(shape);
        }
        if let Some(volume) = mismatch.volume {
            new_labels.push(format!("mismatch_volume({})", label));
            columns.push(volume);
        }
        processed.push(label.clone());
    }

    let values = (0..table.len())
        .map(|row| {
            columns
                .iter()
                .map(|column| fixed_notation(column[row]))
                .collect()
        })
        .collect();

    table.add_comment(info);
    table.append_columns(new_labels, values)?;
    Ok(processed)
}

/// `%f`-style text of a mismatch value; NaN is written as `nan`.
pub(crate) fn fixed_notation(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.*}", MISMATCH_PRECISION, value)
    }
}
