use crate::shapes::FillMode;
use crate::{Draw2D, Element2D};
use corelib::gfx::Color;
use corelib::math::{DVec2, IVec2, dvec2, ivec2, rotate_trunc};

pub struct Circle2D {
    center: IVec2,
    radius: i32,
    angle: f32,
    thickness: i32,
    color: Color,
    mode: FillMode,
}

impl Circle2D {
    pub fn new(center: IVec2, radius: i32) -> Self {
        Self {
            center,
            radius,
            angle: 0.0,
            thickness: 1,
            color: Color::WHITE,
            mode: FillMode::Stroke,
        }
    }

    /// Rotation in degrees, only used by the filled version
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

    pub fn fill(&mut self) -> &mut Self {
        self.mode = FillMode::Fill;
        self
    }

    fn process_stroke(&self, draw: &mut Draw2D) {
        let center = self.center.as_dvec2();
        for offset in 0..self.thickness {
            let radius = (self.radius + offset) as f64;
            for deg in 0..360 {
                let dir = DVec2::from_angle((deg as f64).to_radians());
                draw.pixel((center + dir * radius).as_ivec2());
            }
        }
    }

    fn process_fill(&self, draw: &mut Draw2D) {
        let rad = (self.angle as f64).to_radians();
        for pos in fill_samples(self.radius) {
            let rotated = rotate_trunc(dvec2(pos.x as f64, pos.y as f64), rad);
            draw.pixel(self.center + rotated);
        }
    }
}

impl Element2D for Circle2D {
    fn process(&self, draw: &mut Draw2D) {
        draw.set_color(self.color);
        match self.mode {
            FillMode::Stroke => self.process_stroke(draw),
            FillMode::Fill => self.process_fill(draw),
        }
    }
}

/// Integer points of the disc `x² + y² <= radius²`, row by row
///
/// The distance test runs on `i64` so any `i32` radius is accepted.
pub fn fill_samples(radius: i32) -> impl Iterator<Item = IVec2> {
    let r2 = radius as i64 * radius as i64;
    (-radius..=radius).flat_map(move |y| {
        let y2 = y as i64 * y as i64;
        (-radius..=radius)
            .filter(move |&x| x as i64 * x as i64 + y2 <= r2)
            .map(move |x| ivec2(x, y))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use corelib::gfx::RecordingCanvas;

    fn points(circle: &Circle2D) -> Vec<IVec2> {
        let mut canvas = RecordingCanvas::default();
        Draw2D::new(&mut canvas).add_element(circle);
        canvas.points().collect()
    }

    #[test]
    fn test_fill_samples_inside_radius() {
        for radius in [0, 1, 7, 40] {
            let r2 = radius * radius;
            assert!(fill_samples(radius).all(|p| p.x * p.x + p.y * p.y <= r2));
        }
    }

    #[test]
    fn test_fill_samples_include_the_boundary() {
        let samples: Vec<_> = fill_samples(5).collect();
        assert!(samples.contains(&ivec2(5, 0)));
        assert!(samples.contains(&ivec2(3, 4)));
        assert!(!samples.contains(&ivec2(4, 4)));
        assert_eq!(fill_samples(0).collect::<Vec<_>>(), vec![ivec2(0, 0)]);
    }

    #[test]
    fn test_fill_samples_large_radius_does_not_overflow() {
        // 40000² is past i32::MAX, only the first row is walked
        let first = fill_samples(40_000).next();
        assert_eq!(first, Some(ivec2(0, -40_000)));
    }

    #[test]
    fn test_filled_points_without_rotation() {
        let mut circle = Circle2D::new(ivec2(400, 500), 40);
        circle.fill();

        let pts = points(&circle);
        assert_eq!(pts.len(), fill_samples(40).count());
        assert!(pts.iter().all(|p| {
            let d = *p - ivec2(400, 500);
            d.x * d.x + d.y * d.y <= 1600
        }));
    }

    #[test]
    fn test_filled_points_rotated_stay_near_the_disc() {
        let mut circle = Circle2D::new(ivec2(0, 0), 20);
        circle.angle(33.0).fill();

        // truncation can shift a rotated sample by at most one pixel per axis
        assert!(points(&circle).iter().all(|p| p.as_dvec2().length() <= 20.0 + 1.5));
    }

    #[test]
    fn test_outline_samples_360_per_layer() {
        let mut circle = Circle2D::new(ivec2(200, 400), 40);
        circle.thickness(17);

        let pts = points(&circle);
        assert_eq!(pts.len(), 17 * 360);
        // degree 0 of the first and the last layer
        assert_eq!(pts[0], ivec2(240, 400));
        assert_eq!(pts[16 * 360], ivec2(256, 400));
        // degree 90 lands straight below the center
        assert_eq!(pts[90], ivec2(200, 440));
    }
}
