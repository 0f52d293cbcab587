use crate::{Draw2D, Element2D};
use corelib::gfx::Color;
use corelib::math::{DVec2, IVec2, rotate_trunc};

// sampling step in degrees
const ARC_STEP: f64 = 0.1;

/// Part of a circle outline between two angles, rotated around its center
///
/// Samples are taken every 0.1 degrees from `start` to `end`, both included.
/// Nothing is drawn when `start > end`.
///
/// The sample count comes from an integer step count, so `0..180` always
/// gives 1801 angles and ends exactly on `end`. Accumulating `+= 0.1` in
/// floating point drifts past `end` and drops the last sample.
pub struct Arc2D {
    center: IVec2,
    radius: i32,
    start: f32,
    end: f32,
    angle: f32,
    thickness: i32,
    color: Color,
}

impl Arc2D {
    pub fn new(center: IVec2, radius: i32, start: f32, end: f32) -> Self {
        Self {
            center,
            radius,
            start,
            end,
            angle: 0.0,
            thickness: 1,
            color: Color::WHITE,
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

    /// Sampled angles in degrees
    pub fn samples(&self) -> impl Iterator<Item = f64> {
        let start = self.start as f64;
        let span = self.end as f64 - start;
        let steps = if span < 0.0 {
            -1
        } else {
            (span / ARC_STEP).round() as i64
        };

        (0..=steps).map(move |i| start + i as f64 * ARC_STEP)
    }
}

impl Element2D for Arc2D {
    fn process(&self, draw: &mut Draw2D) {
        let rad = (self.angle as f64).to_radians();
        draw.set_color(self.color);

        for offset in 0..self.thickness {
            let radius = (self.radius + offset) as f64;
            for deg in self.samples() {
                // the sample is snapped to the grid before the rotation
                let point = (DVec2::from_angle(deg.to_radians()) * radius).as_ivec2();
                draw.pixel(self.center + rotate_trunc(point.as_dvec2(), rad));
            }
        }
    }
}
