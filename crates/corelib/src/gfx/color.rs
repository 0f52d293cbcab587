/// Represents an 8-bit per channel RGBA color
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[u8; 4]", into = "[u8; 4]"))]
pub struct Color {
    /// Red value
    pub r: u8,
    /// Green value
    pub g: u8,
    /// Blue value
    pub b: u8,
    /// Alpha value
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const SILVER: Color = Color::rgb(192, 192, 192);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);
    pub const MAROON: Color = Color::rgb(128, 0, 0);
    pub const AQUA: Color = Color::rgb(0, 255, 255);
    pub const CYAN: Color = Color::AQUA;
    pub const TEAL: Color = Color::rgb(0, 128, 128);
    pub const NAVY: Color = Color::rgb(0, 0, 128);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const PINK: Color = Color::rgb(255, 192, 203);

    #[inline(always)]
    /// Create a new color from red, green, blue and alpha values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline(always)]
    /// Create a new opaque color from red, green and blue values
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    #[inline(always)]
    /// Create a new color from hexadecimal number like 0x000000ff (0xRRGGBBAA)
    pub const fn hex(hex: u32) -> Self {
        let [r, g, b, a] = hex.to_be_bytes();
        Self { r, g, b, a }
    }

    #[inline(always)]
    /// Returns the same color with the alpha passed
    pub const fn with_alpha(&self, alpha: u8) -> Color {
        Self::rgba(self.r, self.g, self.b, alpha)
    }

    #[inline(always)]
    /// Returns the hexadecimal representation of the color like 0xRRGGBBAA
    pub const fn to_hex(&self) -> u32 {
        u32::from_be_bytes(self.to_rgba_u8())
    }

    #[inline(always)]
    /// Returns the hexadecimal representation of the colors as string like #RRGGBBAA
    pub fn to_hex_string(&self) -> String {
        format!("#{:08X}", self.to_hex())
    }

    #[inline(always)]
    /// Returns byte representation of the color
    pub const fn to_rgba_u8(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Color> for [u8; 4] {
    fn from(c: Color) -> Self {
        c.to_rgba_u8()
    }
}

impl From<u32> for Color {
    fn from(color: u32) -> Self {
        Color::hex(color)
    }
}

impl From<[u8; 4]> for Color {
    fn from(color: [u8; 4]) -> Self {
        Color::rgba(color[0], color[1], color[2], color[3])
    }
}

impl From<[u8; 3]> for Color {
    fn from(color: [u8; 3]) -> Self {
        Color::rgb(color[0], color[1], color[2])
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Color {{ r: {}, g: {}, b: {}, a: {}}}",
            self.r, self.g, self.b, self.a
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        let color = Color::hex(0xFFA500FF);
        assert_eq!(color, Color::ORANGE);
        assert_eq!(color.to_hex(), 0xFFA500FF);
        assert_eq!(color.to_hex_string(), "#FFA500FF");
    }

    #[test]
    fn test_color_with_alpha() {
        let color = Color::GREEN.with_alpha(128);
        assert_eq!(color.to_rgba_u8(), [0, 255, 0, 128]);
    }

    #[test]
    fn test_color_from_arrays() {
        assert_eq!(Color::from([128, 0, 128, 255]), Color::PURPLE);
        assert_eq!(Color::from([0, 255, 255]), Color::CYAN);

        let bytes: [u8; 4] = Color::YELLOW.into();
        assert_eq!(bytes, [255, 255, 0, 255]);
    }
}
