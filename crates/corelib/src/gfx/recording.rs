use super::{Canvas, Color};
use crate::math::{IVec2, UVec2, ivec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    Clear(Color),
    Point {
        pos: IVec2,
        color: Color,
    },
    Line {
        p1: IVec2,
        p2: IVec2,
        color: Color,
    },
    Rect {
        pos: IVec2,
        size: UVec2,
        color: Color,
    },
    Present,
}

/// Canvas that keeps every operation in memory instead of rendering it
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    size: UVec2,
    color: Color,
    ops: Vec<DrawOp>,
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self::new(UVec2::new(800, 600))
    }
}

impl RecordingCanvas {
    pub fn new(size: UVec2) -> Self {
        Self {
            size,
            color: Color::WHITE,
            ops: vec![],
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Plotted pixels in drawing order
    pub fn points(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Point { pos, .. } => Some(*pos),
            _ => None,
        })
    }

    /// Segments in drawing order
    pub fn lines(&self) -> impl Iterator<Item = (IVec2, IVec2)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Line { p1, p2, .. } => Some((*p1, *p2)),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = (IVec2, UVec2, Color)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Rect { pos, size, color } => Some((*pos, *size, *color)),
            _ => None,
        })
    }

    /// Colors used by points and lines
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Point { color, .. } | DrawOp::Line { color, .. } => Some(*color),
            _ => None,
        })
    }

    /// Number of presented frames
    pub fn frames(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Present))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> UVec2 {
        self.size
    }

    fn set_draw_color(&mut self, color: Color) {
        self.color = color;
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear(self.color));
    }

    fn draw_point(&mut self, x: i32, y: i32) {
        self.ops.push(DrawOp::Point {
            pos: ivec2(x, y),
            color: self.color,
        });
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.ops.push(DrawOp::Line {
            p1: ivec2(x1, y1),
            p2: ivec2(x2, y2),
            color: self.color,
        });
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: u32, height: u32) {
        self.ops.push(DrawOp::Rect {
            pos: ivec2(x, y),
            size: UVec2::new(width, height),
            color: self.color,
        });
    }

    fn present(&mut self) {
        self.ops.push(DrawOp::Present);
    }
}
