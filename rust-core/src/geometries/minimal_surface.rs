use std::fmt;

use clap::ValueEnum;

/// Triply periodic minimal surfaces, approximated by their nodal (level-set) forms.
///
/// Each function has period 2π along x, y and z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MinimalSurface {
    /// Schwarz P surface
    Primitive,
    /// Schoen gyroid
    Gyroid,
    /// Schwarz D surface
    Diamond,
}

impl MinimalSurface {
    pub const ALL: [MinimalSurface; 3] = [
        MinimalSurface::Primitive,
        MinimalSurface::Gyroid,
        MinimalSurface::Diamond,
    ];

    pub fn evaluate(&self, x: f64, y: f64, z: f64) -> f64 {
        match self {
            MinimalSurface::Primitive => x.cos() + y.cos() + z.cos(),
            MinimalSurface::Gyroid => x.sin() * y.cos() + y.sin() * z.cos() + x.cos() * z.sin(),
            MinimalSurface::Diamond => (x - y).cos() * z.cos() + (x + y).sin() * z.sin(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MinimalSurface::Primitive => "primitive",
            MinimalSurface::Gyroid => "gyroid",
            MinimalSurface::Diamond => "diamond",
        }
    }
}

impl fmt::Display for MinimalSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
