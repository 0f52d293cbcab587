use super::Color;
use crate::math::UVec2;

/// Immediate mode drawing surface
///
/// Coordinates are integer pixels with the origin at the top-left corner.
/// Every draw call uses the last color passed to [`Canvas::set_draw_color`].
pub trait Canvas {
    /// Size of the drawable area in pixels
    fn size(&self) -> UVec2;

    /// Color used by the following draw calls
    fn set_draw_color(&mut self, color: Color);

    /// Fill the whole surface with the current draw color
    fn clear(&mut self);

    /// Plot a single pixel
    fn draw_point(&mut self, x: i32, y: i32);

    /// Draw a one pixel wide segment, both ends included
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);

    /// Draw a rectangle outline
    fn draw_rect(&mut self, x: i32, y: i32, width: u32, height: u32);

    /// Flush the frame to the screen
    fn present(&mut self);
}
