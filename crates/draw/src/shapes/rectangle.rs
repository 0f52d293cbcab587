use crate::{Draw2D, Element2D};
use corelib::gfx::Color;
use corelib::math::{IVec2, UVec2};

/// Axis aligned rectangle outline
pub struct Rect2D {
    pos: IVec2,
    size: UVec2,
    color: Color,
}

impl Rect2D {
    pub fn new(pos: IVec2, size: UVec2) -> Self {
        Self {
            pos,
            size,
            color: Color::WHITE,
        }
    }

    pub fn color(&mut self, color: Color) -> &mut Self {
        self.color = color;
        self
    }
}

impl Element2D for Rect2D {
    fn process(&self, draw: &mut Draw2D) {
        draw.set_color(self.color);
        draw.rect_outline(self.pos, self.size);
    }
}
