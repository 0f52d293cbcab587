pub mod app;
pub mod backend;
mod builder;
pub mod events;
pub mod gfx;
pub mod input;
pub mod math;
mod utils;

pub use crate::builder::{AppBuilder, Handler};

use crate::builder::builder;

pub fn init_with<F, S>(callback: F) -> AppBuilder<S>
where
    F: FnOnce() -> S + 'static,
    S: 'static,
{
    builder(callback)
}

pub fn init() -> AppBuilder<()> {
    init_with(|| ())
}
