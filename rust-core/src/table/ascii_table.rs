use anyhow::{bail, Context, Error, Result};
use log::debug;

use crate::interfaces::ColumnShape;

/// A whitespace-delimited ASCII table.
///
/// The first line may announce the number of header lines that follow
/// (`3\theader`); the last of those holds the column labels and the others
/// are free-form comments. Tables without that line start with the labels.
#[derive(Debug, Clone, PartialEq)]
pub struct AsciiTable {
    comments: Vec<String>,
    labels: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl AsciiTable {
    pub fn new(comments: Vec<String>, labels: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        AsciiTable {
            comments,
            labels,
            rows,
        }
    }

    /// Parse a table from text.
    ///
    /// Data lines are split on whitespace and truncated to the number of
    /// labels. Lines with fewer fields than labels are dropped.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines();
        let first = lines
            .next()
            .ok_or_else(|| Error::msg("Table is empty."))?;

        // 1) Split header into comments and the label line
        let (comments, label_line) = match header_count(first) {
            Some(0) => bail!("Header line count must be at least one."),
            Some(count) => {
                let mut header = Vec::with_capacity(count);
                for _ in 0..count {
                    let line = lines.next().ok_or_else(|| {
                        Error::msg(format!("Table ends inside its {}-line header.", count))
                    })?;
                    header.push(line.to_string());
                }
                let label_line = header.pop().unwrap_or_default();
                (header, label_line)
            }
            None => (Vec::new(), first.to_string()),
        };

        // 2) Labels
        let labels = normalize_labels(label_line.split_whitespace().map(String::from).collect());
        if labels.is_empty() {
            bail!("Table has no column labels.");
        }

        // 3) Data rows
        let width = labels.len();
        let mut rows = Vec::new();
        for (number, line) in lines.enumerate() {
            let fields: Vec<String> = line
                .split_whitespace()
                .take(width)
                .map(String::from)
                .collect();
            if fields.is_empty() {
                continue;
            }
            if fields.len() < width {
                debug!(
                    "Dropping data line {} with {} of {} fields",
                    number + 1,
                    fields.len(),
                    width
                );
                continue;
            }
            rows.push(fields);
        }

        Ok(AsciiTable {
            comments,
            labels,
            rows,
        })
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first column holding `label`.
    ///
    /// Scalars are stored as `label` (or `1_label`), vectors and tensors as
    /// `1_label`, `2_label`, ... in consecutive columns.
    pub fn column_index(&self, label: &str, shape: ColumnShape) -> Option<usize> {
        let indexed = format!("1_{}", label);
        let start = match shape {
            ColumnShape::Scalar => self
                .labels
                .iter()
                .position(|l| l == label)
                .or_else(|| self.labels.iter().position(|l| *l == indexed)),
            ColumnShape::Vector | ColumnShape::Tensor => {
                self.labels.iter().position(|l| *l == indexed)
            }
        }?;

        if start + shape.width() > self.labels.len() {
            return None;
        }
        Some(start)
    }

    /// Numeric values of a label group, one `Vec` of `shape.width()` entries per row.
    pub fn column_values(&self, label: &str, shape: ColumnShape) -> Result<Vec<Vec<f64>>> {
        let start = self
            .column_index(label, shape)
            .ok_or_else(|| Error::msg(format!("Column {} not found.", label)))?;

        self.rows
            .iter()
            .enumerate()
            .map(|(row, fields)| {
                fields[start..start + shape.width()]
                    .iter()
                    .enumerate()
                    .map(|(offset, field)| {
                        field.parse::<f64>().with_context(|| {
                            format!(
                                "Invalid number '{}' in row {}, column {}",
                                field,
                                row + 1,
                                self.labels[start + offset]
                            )
                        })
                    })
                    .collect()
            })
            .collect()
    }

    pub fn add_comment(&mut self, comment: String) {
        self.comments.push(comment);
    }

    /// Append columns; `values` holds one entry per row with one field per label.
    pub fn append_columns(&mut self, labels: Vec<String>, values: Vec<Vec<String>>) -> Result<()> {
        if values.len() != self.rows.len() {
            bail!(
                "Cannot append {} values to a table with {} rows.",
                values.len(),
                self.rows.len()
            );
        }
        if let Some(row) = values.iter().position(|v| v.len() != labels.len()) {
            bail!(
                "Row {} provides {} fields for {} new labels.",
                row + 1,
                values[row].len(),
                labels.len()
            );
        }

        self.labels.extend(labels);
        for (row, extra) in self.rows.iter_mut().zip(values) {
            row.extend(extra);
        }
        Ok(())
    }

    /// Text form with a leading header-line count, tab-separated fields.
    pub fn render(&self) -> String {
        let mut out = format!("{}\theader\n", self.comments.len() + 1);
        for comment in &self.comments {
            out.push_str(comment);
            out.push('\n');
        }
        out.push_str(&self.labels.join("\t"));
        out.push('\n');
        for row in &self.rows {
            out.push_str(&row.join("\t"));
            out.push('\n');
        }
        out
    }
}

/// Header line count announced by a line such as `5 header` or `2\tHEAD`.
pub fn header_count(line: &str) -> Option<usize> {
    let lower = line.to_lowercase();
    for (position, _) in lower.match_indices("head") {
        let prefix = lower[..position].trim_end();
        let digits = prefix
            .chars()
            .rev()
            .take_while(|c| c.is_ascii_digit())
            .count();
        if digits > 0 {
            return prefix[prefix.len() - digits..].parse().ok();
        }
    }
    None
}

/// Strip the `1_` prefix from labels that denote scalars.
///
/// `1_x` becomes `x` when `x` is itself indexed (`1_2_x`), when it is the
/// last label, or when the next label does not continue the group.
pub fn normalize_labels(mut labels: Vec<String>) -> Vec<String> {
    for i in 0..labels.len() {
        let renamed = match labels[i].strip_prefix("1_") {
            Some(rest) => {
                let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
                let indexed = digits > 0 && rest[digits..].starts_with('_');
                let lone = i + 1 == labels.len() || !labels[i + 1].ends_with(rest);
                (indexed || lone).then(|| rest.to_string())
            }
            None => None,
        };
        if let Some(renamed) = renamed {
            labels[i] = renamed;
        }
    }
    labels
}
