use crate::shapes::FillMode;
use crate::{Draw2D, Element2D};
use corelib::gfx::Color;
use corelib::math::{IVec2, dvec2, rotate_trunc};

// corner order: top-left, top-right, bottom-right, bottom-left
const CORNERS: [IVec2; 4] = [
    IVec2::new(-1, -1),
    IVec2::new(1, -1),
    IVec2::new(1, 1),
    IVec2::new(-1, 1),
];

/// Square centered on a point, rotated around that point
pub struct Square2D {
    center: IVec2,
    size: i32,
    angle: f32,
    thickness: i32,
    color: Color,
    mode: FillMode,
}

impl Square2D {
    pub fn new(center: IVec2, size: i32) -> Self {
        Self {
            center,
            size,
            angle: 0.0,
            thickness: 1,
            color: Color::WHITE,
            mode: FillMode::Stroke,
        }
    }

    /// Rotation in degrees
    pub fn angle(&mut self, degrees: f32) -> &mut Self {
        self.angle = degrees;
        self
    }

    pub fn thickness(&mut self, thickness: i32) -> &mut Self {
        self.thickness = thickness;
        self
    }

    pub fn color(&mut self, color: Color) -> &mut Self {
        self.color = color;
        self
    }

    /// Fill the area, inflated by half the thickness on each side
    pub fn fill(&mut self) -> &mut Self {
        self.mode = FillMode::Fill;
        self
    }

    /// Corners of the outline layer `offset`, each pushed away from the
    /// center by `offset` on both axes after the rotation
    pub fn corners(&self, offset: i32) -> [IVec2; 4] {
        let half = self.size / 2;
        let rad = (self.angle as f64).to_radians();
        CORNERS.map(|dir| {
            let corner = (dir * half).as_dvec2();
            rotate_trunc(corner, rad) + self.center + dir * offset
        })
    }

    fn process_stroke(&self, draw: &mut Draw2D) {
        for offset in 0..self.thickness {
            let corners = self.corners(offset);
            for (i, &p1) in corners.iter().enumerate() {
                let p2 = corners[(i + 1) % corners.len()];
                draw.segment(p1, p2);
            }
        }
    }

    fn process_fill(&self, draw: &mut Draw2D) {
        let extent = self.size / 2 + self.thickness / 2;
        let rad = (self.angle as f64).to_radians();
        for y in -extent..=extent {
            for x in -extent..=extent {
                let pos = rotate_trunc(dvec2(x as f64, y as f64), rad);
                draw.pixel(self.center + pos);
            }
        }
    }
}

impl Element2D for Square2D {
    fn process(&self, draw: &mut Draw2D) {
        draw.set_color(self.color);
        match self.mode {
            FillMode::Stroke => self.process_stroke(draw),
            FillMode::Fill => self.process_fill(draw),
        }
    }
}
