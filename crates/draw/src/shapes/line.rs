use crate::{Draw2D, Element2D};
use corelib::gfx::Color;
use corelib::math::{DVec2, IVec2};
use std::f64::consts::FRAC_PI_2;

/// Straight line from an origin along an angle
///
/// Thickness is faked by drawing one segment per offset in
/// `-thickness/2..=thickness/2`, shifted perpendicular to the direction.
pub struct Line2D {
    origin: IVec2,
    length: i32,
    angle: f32,
    thickness: i32,
    color: Color,
}

impl Line2D {
    pub fn new(origin: IVec2, length: i32) -> Self {
        Self {
            origin,
            length,
            angle: 0.0,
            thickness: 1,
            color: Color::WHITE,
        }
    }

    /// Direction in degrees
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

    /// End point, truncated to the pixel grid
    pub fn end(&self) -> IVec2 {
        let dir = DVec2::from_angle((self.angle as f64).to_radians());
        (self.origin.as_dvec2() + dir * self.length as f64).as_ivec2()
    }
}

impl Element2D for Line2D {
    fn process(&self, draw: &mut Draw2D) {
        let rad = (self.angle as f64).to_radians();
        let normal = DVec2::from_angle(rad + FRAC_PI_2);
        let start = self.origin.as_dvec2();
        let end = self.end().as_dvec2();

        draw.set_color(self.color);

        let half = self.thickness / 2;
        for offset in -half..=half {
            let shift = normal * offset as f64;
            draw.segment((start + shift).as_ivec2(), (end + shift).as_ivec2());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corelib::gfx::RecordingCanvas;
    use corelib::math::ivec2;

    fn lines(line: &Line2D) -> Vec<(IVec2, IVec2)> {
        let mut canvas = RecordingCanvas::default();
        Draw2D::new(&mut canvas).add_element(line);
        canvas.lines().collect()
    }

    #[test]
    fn test_horizontal_line_thickness() {
        let mut line = Line2D::new(ivec2(200, 200), 100);
        line.thickness(7);

        let segments = lines(&line);
        // -3..=3
        assert_eq!(segments.len(), 7);
        assert_eq!(segments[3], (ivec2(200, 200), ivec2(300, 200)));
        // offsets move along +y for a line pointing along +x
        assert_eq!(segments[0].0.y, 197);
        assert_eq!(segments[6].0.y, 203);
        assert!(segments.iter().all(|(p1, p2)| p2.x - p1.x == 100));
    }

    #[test]
    fn test_rotated_end_point() {
        let mut line = Line2D::new(ivec2(0, 0), 100);
        line.angle(90.0);
        let end = line.end();
        assert_eq!(end.y, 100);
        // cos(90°) is ~6e-15, truncated to 0
        assert_eq!(end.x, 0);
    }

    #[test]
    fn test_even_thickness_draws_one_extra_segment() {
        let mut line = Line2D::new(ivec2(0, 0), 10);
        line.thickness(20);
        assert_eq!(lines(&line).len(), 21);
    }

    #[test]
    fn test_zero_thickness_draws_center_segment() {
        let mut line = Line2D::new(ivec2(5, 5), 10);
        line.thickness(0);
        assert_eq!(lines(&line), vec![(ivec2(5, 5), ivec2(15, 5))]);
    }
}
