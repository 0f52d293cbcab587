use std::ops::{Deref, DerefMut};

use corelib::gfx::{Canvas, Color};
use corelib::math::{IVec2, UVec2};

use crate::shapes::{Arc2D, Circle2D, Line2D, Rect2D, Square2D};

/// Wraps an element and draws it when dropped, so builder calls can chain
pub struct Drawing<'d, 'c, T>
where
    T: Element2D,
{
    inner: T,
    draw: &'d mut Draw2D<'c>,
}

impl<'d, 'c, T> Drawing<'d, 'c, T>
where
    T: Element2D,
{
    pub fn new(draw: &'d mut Draw2D<'c>, inner: T) -> Self {
        Self { inner, draw }
    }
}

impl<T> Drop for Drawing<'_, '_, T>
where
    T: Element2D,
{
    fn drop(&mut self) {
        self.draw.add_element(&self.inner);
    }
}

impl<T> Deref for Drawing<'_, '_, T>
where
    T: Element2D,
{
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for Drawing<'_, '_, T>
where
    T: Element2D,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub elements: usize,
    pub points: usize,
    pub segments: usize,
}

/// Immediate mode 2D drawing on top of a [`Canvas`]
pub struct Draw2D<'c> {
    canvas: &'c mut dyn Canvas,
    color: Option<Color>,
    stats: DrawStats,
}

impl<'c> Draw2D<'c> {
    pub fn new(canvas: &'c mut dyn Canvas) -> Self {
        Self {
            canvas,
            color: None,
            stats: DrawStats::default(),
        }
    }

    #[inline]
    pub fn size(&self) -> UVec2 {
        self.canvas.size()
    }

    /// Sets the canvas color, skipping the call when it did not change
    #[inline]
    pub fn set_color(&mut self, color: Color) {
        if self.color != Some(color) {
            self.canvas.set_draw_color(color);
            self.color = Some(color);
        }
    }

    #[inline]
    pub fn pixel(&mut self, pos: IVec2) {
        self.canvas.draw_point(pos.x, pos.y);
        self.stats.points += 1;
    }

    #[inline]
    pub fn segment(&mut self, p1: IVec2, p2: IVec2) {
        self.canvas.draw_line(p1.x, p1.y, p2.x, p2.y);
        self.stats.segments += 1;
    }

    #[inline]
    pub fn rect_outline(&mut self, pos: IVec2, size: UVec2) {
        self.canvas.draw_rect(pos.x, pos.y, size.x, size.y);
        self.stats.segments += 4;
    }

    #[inline]
    pub fn add_element<T>(&mut self, element: &T)
    where
        T: Element2D,
    {
        element.process(self);
        self.stats.elements += 1;
    }

    #[inline]
    pub fn stats(&self) -> DrawStats {
        self.stats
    }

    /// Line starting at `origin`, pointing to the right until rotated
    #[inline]
    pub fn line(&mut self, origin: IVec2, length: i32) -> Drawing<'_, 'c, Line2D> {
        Drawing::new(self, Line2D::new(origin, length))
    }

    #[inline]
    pub fn square(&mut self, center: IVec2, size: i32) -> Drawing<'_, 'c, Square2D> {
        Drawing::new(self, Square2D::new(center, size))
    }

    #[inline]
    pub fn circle(&mut self, center: IVec2, radius: i32) -> Drawing<'_, 'c, Circle2D> {
        Drawing::new(self, Circle2D::new(center, radius))
    }

    /// Arc from `start` to `end` degrees, clockwise on screen
    #[inline]
    pub fn arc(
        &mut self,
        center: IVec2,
        radius: i32,
        start: f32,
        end: f32,
    ) -> Drawing<'_, 'c, Arc2D> {
        Drawing::new(self, Arc2D::new(center, radius, start, end))
    }

    #[inline]
    pub fn rect(&mut self, pos: IVec2, size: UVec2) -> Drawing<'_, 'c, Rect2D> {
        Drawing::new(self, Rect2D::new(pos, size))
    }
}

impl Drop for Draw2D<'_> {
    fn drop(&mut self) {
        log::trace!(
            "Draw2D: {} elements, {} points, {} segments",
            self.stats.elements,
            self.stats.points,
            self.stats.segments
        );
    }
}

pub trait Element2D {
    fn process(&self, draw: &mut Draw2D);
}

#[cfg(test)]
mod tests {
    use super::*;
    use corelib::gfx::{DrawOp, RecordingCanvas};
    use corelib::math::ivec2;

    #[test]
    fn test_color_changes_are_deduplicated() {
        let mut canvas = RecordingCanvas::default();
        {
            let mut draw = Draw2D::new(&mut canvas);
            draw.set_color(Color::RED);
            draw.pixel(ivec2(0, 0));
            draw.set_color(Color::RED);
            draw.pixel(ivec2(1, 0));
            draw.set_color(Color::BLUE);
            draw.pixel(ivec2(2, 0));
        }

        let colors: Vec<_> = canvas.colors().collect();
        assert_eq!(colors, vec![Color::RED, Color::RED, Color::BLUE]);
    }

    #[test]
    fn test_drawing_submits_on_drop() {
        let mut canvas = RecordingCanvas::default();
        let stats = {
            let mut draw = Draw2D::new(&mut canvas);
            draw.rect(ivec2(10, 20), UVec2::new(30, 40))
                .color(Color::GREEN);
            draw.stats()
        };

        assert_eq!(stats.elements, 1);
        assert_eq!(
            canvas.ops(),
            &[DrawOp::Rect {
                pos: ivec2(10, 20),
                size: UVec2::new(30, 40),
                color: Color::GREEN
            }]
        );
    }
}
