use crate::gfx::Color;
use crate::math::{UVec2, uvec2};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub size: UVec2,
    pub vsync: bool,
    pub clear_color: Color,
    pub frame_delay: Option<Duration>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "CursorKit".to_string(),
            size: uvec2(800, 600),
            vsync: false,
            clear_color: Color::BLACK,
            frame_delay: None,
        }
    }
}

impl WindowConfig {
    /// Set the window's title
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Set the window's size
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = uvec2(width, height);
        self
    }

    /// Enables Vertical Synchronization
    pub fn vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Color used to clear the frame before the update
    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    /// Sleep between frames
    pub fn frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay = Some(delay);
        self
    }
}
