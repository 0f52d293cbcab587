pub use glam::*;

/// Integer rectangle with inclusive edges, used for hit areas
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl IRect {
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Square centered on `center` extending `half` pixels on each side
    #[inline]
    pub const fn from_center_half(center: IVec2, half: i32) -> Self {
        Self::new(
            center.x - half,
            center.y - half,
            center.x + half,
            center.y + half,
        )
    }

    #[inline]
    pub const fn inflate(&self, amount: i32) -> Self {
        Self::new(
            self.left - amount,
            self.top - amount,
            self.right + amount,
            self.bottom + amount,
        )
    }

    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    #[inline]
    pub const fn origin(&self) -> IVec2 {
        IVec2::new(self.left, self.top)
    }
}

/// Rotates `point` by `radians` around the origin and truncates toward zero
#[inline]
pub fn rotate_trunc(point: DVec2, radians: f64) -> IVec2 {
    let (sin, cos) = radians.sin_cos();
    let x = point.x * cos - point.y * sin;
    let y = point.x * sin + point.y * cos;
    IVec2::new(x as i32, y as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point() {
        let rect = IRect::new(0, 0, 10, 10);

        // inside
        assert!(rect.contains(5, 5));

        // edges are inclusive
        assert!(rect.contains(0, 0));
        assert!(rect.contains(10, 10));

        // outside
        assert!(!rect.contains(-1, 5));
        assert!(!rect.contains(11, 5));
        assert!(!rect.contains(5, -1));
        assert!(!rect.contains(5, 11));
    }

    #[test]
    fn test_from_center_and_inflate() {
        let rect = IRect::from_center_half(ivec2(200, 200), 25).inflate(7);
        assert_eq!(rect, IRect::new(168, 168, 232, 232));
        assert_eq!(rect.origin(), ivec2(168, 168));
    }

    #[test]
    fn test_rotate_trunc() {
        assert_eq!(rotate_trunc(dvec2(10.0, 0.0), 0.0), ivec2(10, 0));
        assert_eq!(
            rotate_trunc(dvec2(10.0, 0.0), std::f64::consts::FRAC_PI_2),
            ivec2(0, 10)
        );
        // -0.7 truncates to zero, not -1
        assert_eq!(rotate_trunc(dvec2(-0.7, 0.0), 0.0), ivec2(0, 0));
    }
}
