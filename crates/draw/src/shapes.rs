mod arc;
mod circle;
mod line;
mod rectangle;
mod square;

pub use arc::*;
pub use circle::*;
pub use line::*;
pub use rectangle::*;
pub use square::*;

/// How area shapes are rasterized
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum FillMode {
    /// Outline repeated once per thickness layer
    #[default]
    Stroke,
    /// Every pixel of the area
    Fill,
}
