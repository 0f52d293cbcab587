mod draw_2d;
mod shapes;

pub use draw_2d::*;
pub use shapes::*;

use corelib::gfx::Canvas;

#[inline]
pub fn create_draw_2d(canvas: &mut dyn Canvas) -> Draw2D<'_> {
    Draw2D::new(canvas)
}
