mod canvas;
mod color;
mod recording;

pub use canvas::*;
pub use color::*;
pub use recording::*;
