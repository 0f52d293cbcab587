pub mod cursor;
pub mod driver;
mod error;
pub mod interaction;
pub mod motion;
pub mod scene;
pub mod shapes;

pub use error::Error;

#[doc(inline)]
pub use corelib::*;

#[doc(inline)]
pub use draw;
