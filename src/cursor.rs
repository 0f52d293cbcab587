use corelib::gfx::Color;
use corelib::math::{IRect, IVec2, ivec2};

/// Side of the selection box at scale 1.0, before the thickness inflation
pub const SELECTION_SIZE: i32 = 50;

/// Lowest scale a zoom out can reach
pub const MIN_SCALE: f32 = 0.1;

/// A drawing cursor: a position, an orientation and a pen
///
/// The angle is kept in degrees within `[0, 360)` and the scale never goes
/// below [`MIN_SCALE`], both enforced by the setters.
#[derive(Debug, Clone, PartialEq)]
pub struct Cursor {
    pub x: i32,
    pub y: i32,
    pub color: Color,
    pub thickness: i32,
    pub visible: bool,
    angle: f32,
    scale: f32,
}

impl Cursor {
    pub fn new(x: i32, y: i32, color: Color, thickness: i32, visible: bool) -> Self {
        Self {
            x,
            y,
            color,
            thickness,
            visible,
            angle: 0.0,
            scale: 1.0,
        }
    }

    #[inline]
    pub fn position(&self) -> IVec2 {
        ivec2(self.x, self.y)
    }

    #[inline]
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Orientation in degrees
    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale.max(MIN_SCALE);
    }

    pub fn set_thickness(&mut self, thickness: i32) {
        self.thickness = thickness;
    }

    /// Adds `delta` degrees to the orientation, wrapping into `[0, 360)`
    pub fn rotate(&mut self, delta: f32) {
        self.angle = normalize_angle(self.angle + delta);
    }

    /// Same rotation as [`Cursor::rotate`], named after the spin motion that
    /// turns cursors without moving them
    #[inline]
    pub fn rotate_in_place(&mut self, delta: f32) {
        self.rotate(delta);
    }

    /// Moves `distance` pixels along the current orientation
    pub fn move_forward(&mut self, distance: f32) {
        let (sin, cos) = (self.angle as f64).to_radians().sin_cos();
        let distance = distance as f64;
        self.x = (self.x as f64 + distance * cos) as i32;
        self.y = (self.y as f64 + distance * sin) as i32;
    }

    /// Scales a shape dimension, truncating toward zero
    #[inline]
    pub fn scaled(&self, size: i32) -> i32 {
        (size as f32 * self.scale) as i32
    }

    /// Side of the selection box before the thickness inflation
    #[inline]
    pub fn selection_size(&self) -> i32 {
        self.scaled(SELECTION_SIZE)
    }

    /// Hit box used by selection, inclusive on every edge
    pub fn selection_area(&self) -> IRect {
        IRect::from_center_half(self.position(), self.selection_size() / 2).inflate(self.thickness)
    }
}

fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
