use std::path::Path;

use corelib::gfx::Color;
use serde::{Deserialize, Serialize};

use crate::Error;
use crate::cursor::Cursor;
use crate::motion::MotionKind;
use crate::shapes::Shape;

/// Largest length, side or radius a scene can ask for
pub const MAX_SHAPE_SIZE: i32 = 4096;

pub const MAX_THICKNESS: i32 = 512;

/// Arc bounds in degrees, both signs
pub const MAX_ARC_ANGLE: f32 = 3600.0;

/// Step applied to a cursor when the scene is loaded
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Instruction {
    Move(f32),
    Rotate(f32),
    Thickness(i32),
}

impl Instruction {
    pub fn apply(&self, cursor: &mut Cursor) {
        match *self {
            Instruction::Move(distance) => cursor.move_forward(distance),
            Instruction::Rotate(degrees) => cursor.rotate(degrees),
            Instruction::Thickness(thickness) => cursor.set_thickness(thickness),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneCursor {
    pub x: i32,
    pub y: i32,
    pub color: Color,
    pub thickness: i32,
    #[serde(default = "default_visible")]
    pub visible: bool,
    pub shape: Shape,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instructions: Vec<Instruction>,
}

fn default_visible() -> bool {
    true
}

fn check_thickness(thickness: i32) -> Result<(), String> {
    if (0..=MAX_THICKNESS).contains(&thickness) {
        Ok(())
    } else {
        Err(format!("thickness {thickness} is outside 0..={MAX_THICKNESS}"))
    }
}

fn check_arc_angle(name: &str, degrees: f32) -> Result<(), String> {
    if degrees.is_finite() && degrees.abs() <= MAX_ARC_ANGLE {
        Ok(())
    } else {
        Err(format!("arc {name} {degrees} is outside ±{MAX_ARC_ANGLE}"))
    }
}

impl SceneCursor {
    pub fn new(x: i32, y: i32, color: Color, thickness: i32, shape: Shape) -> Self {
        Self {
            x,
            y,
            color,
            thickness,
            visible: true,
            shape,
            instructions: vec![],
        }
    }

    /// Checks the values the rasterizers rely on, the error names the
    /// offending field
    pub fn validate(&self) -> Result<(), String> {
        check_thickness(self.thickness)?;

        let size = match self.shape {
            Shape::Line { length } => ("length", length),
            Shape::Square { size } | Shape::FilledSquare { size } => ("size", size),
            Shape::Circle { radius } | Shape::FilledCircle { radius } => ("radius", radius),
            Shape::Arc { radius, start, end } => {
                check_arc_angle("start", start)?;
                check_arc_angle("end", end)?;
                ("radius", radius)
            }
        };
        if !(0..=MAX_SHAPE_SIZE).contains(&size.1) {
            return Err(format!("{} {} is outside 0..={MAX_SHAPE_SIZE}", size.0, size.1));
        }

        self.instructions.iter().try_for_each(|ins| match *ins {
            Instruction::Move(v) | Instruction::Rotate(v) if !v.is_finite() => {
                Err(format!("instruction {ins:?} is not finite"))
            }
            Instruction::Thickness(t) => check_thickness(t),
            _ => Ok(()),
        })
    }

    /// Creates the cursor and runs its instructions in order
    pub fn build(&self) -> (Cursor, Shape) {
        let mut cursor = Cursor::new(self.x, self.y, self.color, self.thickness, self.visible);
        self.instructions.iter().for_each(|ins| ins.apply(&mut cursor));
        (cursor, self.shape)
    }
}

/// Cursors to animate, with their shapes and an optional motion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motion: Option<MotionKind>,
    pub cursors: Vec<SceneCursor>,
}

impl Default for Scene {
    /// One cursor per shape
    fn default() -> Self {
        Self {
            motion: None,
            cursors: vec![
                SceneCursor::new(200, 200, Color::YELLOW, 7, Shape::Line { length: 100 }),
                SceneCursor::new(400, 300, Color::CYAN, 13, Shape::Square { size: 50 }),
                SceneCursor::new(600, 400, Color::RED, 20, Shape::FilledSquare { size: 50 }),
                SceneCursor::new(200, 400, Color::GREEN, 17, Shape::Circle { radius: 40 }),
                SceneCursor::new(
                    400,
                    500,
                    Color::ORANGE,
                    30,
                    Shape::FilledCircle { radius: 40 },
                ),
                SceneCursor::new(
                    600,
                    200,
                    Color::PURPLE,
                    28,
                    Shape::Arc {
                        radius: 50,
                        start: 0.0,
                        end: 180.0,
                    },
                ),
            ],
        }
    }
}

impl Scene {
    /// Reads a JSON scene file
    pub fn load<P>(path: P) -> Result<Self, Error>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| Error::SceneRead {
            path: path.to_path_buf(),
            source,
        })?;

        let scene: Scene = serde_json::from_str(&raw).map_err(|source| Error::SceneParse {
            path: path.to_path_buf(),
            source,
        })?;
        if scene.cursors.is_empty() {
            return Err(Error::EmptyScene);
        }

        for (index, cursor) in scene.cursors.iter().enumerate() {
            cursor
                .validate()
                .map_err(|reason| Error::InvalidCursor { index, reason })?;
        }

        log::info!(
            "Loaded scene '{}' with {} cursors",
            path.display(),
            scene.cursors.len()
        );
        Ok(scene)
    }

    /// Cursors with their instructions applied, in scene order
    pub fn build(&self) -> (Vec<Cursor>, Vec<Shape>) {
        self.cursors.iter().map(SceneCursor::build).unzip()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corelib::math::ivec2;
    use std::io::Write;

    fn write_scene(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_scene() {
        let (cursors, shapes) = Scene::default().build();
        assert_eq!(cursors.len(), 6);
        assert_eq!(shapes.len(), 6);

        assert_eq!(cursors[0].position(), ivec2(200, 200));
        assert_eq!(cursors[0].thickness, 7);
        assert_eq!(cursors[4].color, Color::rgb(255, 165, 0));
        assert_eq!(cursors[5].color, Color::rgb(128, 0, 128));
        assert!(cursors.iter().all(|c| c.visible && c.scale() == 1.0));
        assert_eq!(
            shapes[5],
            Shape::Arc {
                radius: 50,
                start: 0.0,
                end: 180.0
            }
        );
    }

    #[test]
    fn test_load_applies_instructions() {
        let file = write_scene(
            r#"{
                "motion": "spin",
                "cursors": [{
                    "x": 100, "y": 100,
                    "color": [255, 0, 0, 255],
                    "thickness": 2,
                    "shape": { "kind": "square", "size": 30 },
                    "instructions": [{ "move": 20 }, { "rotate": 90 }, { "move": 10 }, { "thickness": 5 }]
                }]
            }"#,
        );

        let scene = Scene::load(file.path()).unwrap();
        assert_eq!(scene.motion, Some(MotionKind::Spin));

        let (cursors, shapes) = scene.build();
        assert_eq!(cursors[0].position(), ivec2(120, 110));
        assert_eq!(cursors[0].angle(), 90.0);
        assert_eq!(cursors[0].thickness, 5);
        assert!(cursors[0].visible);
        assert_eq!(shapes[0], Shape::Square { size: 30 });
    }

    #[test]
    fn test_load_hidden_cursor() {
        let file = write_scene(
            r#"{ "cursors": [{ "x": 1, "y": 2, "color": [0, 0, 0, 255], "thickness": 1,
                 "visible": false, "shape": { "kind": "line", "length": 10 } }] }"#,
        );
        let (cursors, _) = Scene::load(file.path()).unwrap().build();
        assert!(!cursors[0].visible);
    }

    #[test]
    fn test_load_errors() {
        let missing = Scene::load("/definitely/not/here.json");
        assert!(matches!(missing, Err(Error::SceneRead { .. })));

        let file = write_scene(r#"{ "cursors": [{ "x": 1 }] }"#);
        assert!(matches!(Scene::load(file.path()), Err(Error::SceneParse { .. })));

        let file = write_scene(r#"{ "cursors": [] }"#);
        assert!(matches!(Scene::load(file.path()), Err(Error::EmptyScene)));
    }

    fn load_cursor(cursor: &str) -> Result<Scene, Error> {
        let file = write_scene(&format!(
            r#"{{ "cursors": [
                {{ "x": 0, "y": 0, "color": [0, 0, 0, 255], "thickness": 1,
                   "shape": {{ "kind": "line", "length": 10 }} }},
                {cursor}
            ] }}"#
        ));
        Scene::load(file.path())
    }

    fn assert_invalid(cursor: &str, field: &str) {
        match load_cursor(cursor) {
            Err(Error::InvalidCursor { index, reason }) => {
                assert_eq!(index, 1);
                assert!(reason.contains(field), "{reason}");
            }
            other => panic!("expected an invalid cursor, got {other:?}"),
        }
    }

    #[test]
    fn test_load_rejects_huge_radius() {
        assert_invalid(
            r#"{ "x": 1, "y": 1, "color": [0, 0, 0, 255], "thickness": 1,
                 "shape": { "kind": "filled_circle", "radius": 40000 } }"#,
            "radius",
        );
        assert_invalid(
            r#"{ "x": 1, "y": 1, "color": [0, 0, 0, 255], "thickness": 1,
                 "shape": { "kind": "circle", "radius": -1 } }"#,
            "radius",
        );
    }

    #[test]
    fn test_load_rejects_bad_sizes() {
        assert_invalid(
            r#"{ "x": 1, "y": 1, "color": [0, 0, 0, 255], "thickness": 1,
                 "shape": { "kind": "filled_square", "size": 5000 } }"#,
            "size",
        );
        assert_invalid(
            r#"{ "x": 1, "y": 1, "color": [0, 0, 0, 255], "thickness": 1,
                 "shape": { "kind": "line", "length": -3 } }"#,
            "length",
        );
    }

    #[test]
    fn test_load_rejects_bad_thickness() {
        assert_invalid(
            r#"{ "x": 1, "y": 1, "color": [0, 0, 0, 255], "thickness": 513,
                 "shape": { "kind": "square", "size": 10 } }"#,
            "thickness",
        );
        assert_invalid(
            r#"{ "x": 1, "y": 1, "color": [0, 0, 0, 255], "thickness": 2,
                 "shape": { "kind": "square", "size": 10 },
                 "instructions": [{ "thickness": -1 }] }"#,
            "thickness",
        );
    }

    #[test]
    fn test_load_rejects_bad_arc_angles() {
        assert_invalid(
            r#"{ "x": 1, "y": 1, "color": [0, 0, 0, 255], "thickness": 1,
                 "shape": { "kind": "arc", "radius": 10, "start": 0, "end": 1e30 } }"#,
            "end",
        );
        assert_invalid(
            r#"{ "x": 1, "y": 1, "color": [0, 0, 0, 255], "thickness": 1,
                 "shape": { "kind": "arc", "radius": 10, "start": -3601, "end": 0 } }"#,
            "start",
        );
    }

    #[test]
    fn test_load_accepts_bounds() {
        let scene = load_cursor(
            r#"{ "x": 1, "y": 1, "color": [0, 0, 0, 255], "thickness": 512,
                 "shape": { "kind": "arc", "radius": 4096, "start": -3600, "end": 3600 } }"#,
        )
        .unwrap();
        assert_eq!(scene.cursors.len(), 2);
    }

    #[test]
    fn test_validate_rejects_non_finite_instruction() {
        let mut cursor = SceneCursor::new(0, 0, Color::WHITE, 1, Shape::Square { size: 10 });
        cursor.instructions.push(Instruction::Rotate(f32::NAN));
        assert!(cursor.validate().is_err());
        assert!(Scene::default().cursors.iter().all(|c| c.validate().is_ok()));
    }

    #[test]
    fn test_default_scene_serializes() {
        let json = serde_json::to_string(&Scene::default()).unwrap();
        assert!(json.contains(r#""kind":"filled_square""#));
        assert!(!json.contains("instructions"));
        assert!(!json.contains("motion"));
    }
}
