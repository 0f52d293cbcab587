use corelib::gfx::Color;
use corelib::math::UVec2;
use draw::Draw2D;
use serde::{Deserialize, Serialize};

use crate::cursor::Cursor;

/// Translucent green used by the selection overlay
pub const SELECTION_AREA_COLOR: Color = Color::rgba(0, 255, 0, 128);

/// Shape drawn by a cursor, sizes are given at scale 1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Line { length: i32 },
    Square { size: i32 },
    FilledSquare { size: i32 },
    Circle { radius: i32 },
    FilledCircle { radius: i32 },
    Arc { radius: i32, start: f32, end: f32 },
}

impl Shape {
    /// Draws the shape with the cursor's pen, nothing if the cursor is hidden
    pub fn draw(&self, draw: &mut Draw2D, cursor: &Cursor) {
        match *self {
            Shape::Line { length } => draw_line(draw, cursor, length),
            Shape::Square { size } => draw_square(draw, cursor, size),
            Shape::FilledSquare { size } => draw_filled_square(draw, cursor, size),
            Shape::Circle { radius } => draw_circle(draw, cursor, radius),
            Shape::FilledCircle { radius } => draw_filled_circle(draw, cursor, radius),
            Shape::Arc { radius, start, end } => draw_arc(draw, cursor, radius, start, end),
        }
    }
}

pub fn draw_line(draw: &mut Draw2D, cursor: &Cursor, length: i32) {
    if !cursor.visible {
        return;
    }

    draw.line(cursor.position(), cursor.scaled(length))
        .angle(cursor.angle())
        .thickness(cursor.thickness)
        .color(cursor.color);
}

pub fn draw_square(draw: &mut Draw2D, cursor: &Cursor, size: i32) {
    if !cursor.visible {
        return;
    }

    draw.square(cursor.position(), cursor.scaled(size))
        .angle(cursor.angle())
        .thickness(cursor.thickness)
        .color(cursor.color);
}

pub fn draw_filled_square(draw: &mut Draw2D, cursor: &Cursor, size: i32) {
    if !cursor.visible {
        return;
    }

    draw.square(cursor.position(), cursor.scaled(size))
        .angle(cursor.angle())
        .thickness(cursor.thickness)
        .color(cursor.color)
        .fill();
}

pub fn draw_circle(draw: &mut Draw2D, cursor: &Cursor, radius: i32) {
    if !cursor.visible {
        return;
    }

    draw.circle(cursor.position(), cursor.scaled(radius))
        .thickness(cursor.thickness)
        .color(cursor.color);
}

pub fn draw_filled_circle(draw: &mut Draw2D, cursor: &Cursor, radius: i32) {
    if !cursor.visible {
        return;
    }

    draw.circle(cursor.position(), cursor.scaled(radius))
        .angle(cursor.angle())
        .color(cursor.color)
        .fill();
}

pub fn draw_arc(draw: &mut Draw2D, cursor: &Cursor, radius: i32, start: f32, end: f32) {
    if !cursor.visible {
        return;
    }

    draw.arc(cursor.position(), cursor.scaled(radius), start, end)
        .angle(cursor.angle())
        .thickness(cursor.thickness)
        .color(cursor.color);
}

/// Outlines the area [`crate::interaction::Interaction::select`] tests against
pub fn draw_selection_area(draw: &mut Draw2D, cursor: &Cursor) {
    if !cursor.visible {
        return;
    }

    let area = cursor.selection_area();
    let side = (cursor.selection_size() + 2 * cursor.thickness).max(0) as u32;
    draw.rect(area.origin(), UVec2::splat(side))
        .color(SELECTION_AREA_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use corelib::gfx::RecordingCanvas;
    use corelib::math::{IVec2, ivec2};

    fn render(shape: Shape, cursor: &Cursor) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::default();
        shape.draw(&mut Draw2D::new(&mut canvas), cursor);
        canvas
    }

    #[test]
    fn test_hidden_cursor_draws_nothing() {
        let mut cursor = Cursor::new(300, 300, Color::RED, 5, false);
        cursor.rotate(45.0);

        let shapes = [
            Shape::Line { length: 100 },
            Shape::Square { size: 50 },
            Shape::FilledSquare { size: 50 },
            Shape::Circle { radius: 40 },
            Shape::FilledCircle { radius: 40 },
            Shape::Arc {
                radius: 50,
                start: 0.0,
                end: 180.0,
            },
        ];
        for shape in shapes {
            assert!(render(shape, &cursor).is_empty(), "{shape:?}");
        }

        let mut canvas = RecordingCanvas::default();
        draw_selection_area(&mut Draw2D::new(&mut canvas), &cursor);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_line_uses_cursor_pen() {
        let cursor = Cursor::new(200, 200, Color::YELLOW, 7, true);
        let canvas = render(Shape::Line { length: 100 }, &cursor);

        assert_eq!(canvas.lines().count(), 7);
        assert!(canvas.lines().any(|l| l == (ivec2(200, 200), ivec2(300, 200))));
        assert!(canvas.colors().all(|c| c == Color::YELLOW));
    }

    #[test]
    fn test_scale_applies_to_size() {
        let mut cursor = Cursor::new(0, 0, Color::WHITE, 1, true);
        cursor.set_scale(1.5);
        let canvas = render(Shape::Line { length: 100 }, &cursor);
        assert_eq!(canvas.lines().collect::<Vec<_>>(), vec![(ivec2(0, 0), ivec2(150, 0))]);
    }

    #[test]
    fn test_filled_circle_inside_radius() {
        let cursor = Cursor::new(400, 500, Color::ORANGE, 30, true);
        let canvas = render(Shape::FilledCircle { radius: 40 }, &cursor);

        assert!(canvas.points().count() > 0);
        assert!(canvas.points().all(|p| {
            let d = p - ivec2(400, 500);
            d.x * d.x + d.y * d.y <= 40 * 40
        }));
    }

    #[test]
    fn test_arc_points_near_radius() {
        let mut cursor = Cursor::new(600, 200, Color::PURPLE, 3, true);
        cursor.rotate(30.0);
        let canvas = render(
            Shape::Arc {
                radius: 50,
                start: 0.0,
                end: 180.0,
            },
            &cursor,
        );

        let points: Vec<IVec2> = canvas.points().collect();
        assert_eq!(points.len(), 3 * 1801);
        assert!(points.iter().all(|p| {
            let dist = (*p - ivec2(600, 200)).as_vec2().length();
            (46.0..=53.0).contains(&dist)
        }));
    }

    #[test]
    fn test_selection_area_rect() {
        let cursor = Cursor::new(200, 200, Color::YELLOW, 7, true);
        let mut canvas = RecordingCanvas::default();
        draw_selection_area(&mut Draw2D::new(&mut canvas), &cursor);

        assert_eq!(
            canvas.rects().collect::<Vec<_>>(),
            vec![(ivec2(168, 168), UVec2::splat(64), SELECTION_AREA_COLOR)]
        );
    }

    #[test]
    fn test_shape_from_json() {
        let shape: Shape = serde_json::from_str(r#"{ "kind": "filled_circle", "radius": 40 }"#)
            .expect("valid shape");
        assert_eq!(shape, Shape::FilledCircle { radius: 40 });

        let arc: Shape =
            serde_json::from_str(r#"{ "kind": "arc", "radius": 50, "start": 0, "end": 180 }"#)
                .expect("valid arc");
        assert_eq!(
            arc,
            Shape::Arc {
                radius: 50,
                start: 0.0,
                end: 180.0
            }
        );
    }
}
