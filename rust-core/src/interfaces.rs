// Definitions that are used throughout all modules

// Shape of a quantity stored in an ASCII table column group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnShape {
    Scalar,
    Vector,
    Tensor,
}

impl ColumnShape {
    /// Number of table columns occupied by one value of this shape.
    pub fn width(&self) -> usize {
        match self {
            ColumnShape::Scalar => 1,
            ColumnShape::Vector => 3,
            ColumnShape::Tensor => 9,
        }
    }
}

// Output destination for a filter run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    File(std::path::PathBuf),
}

impl From<Option<std::path::PathBuf>> for Sink {
    fn from(path: Option<std::path::PathBuf>) -> Self {
        match path {
            Some(path) => Sink::File(path),
            None => Sink::Stdout,
        }
    }
}
