use std::f64::consts::TAU;
use std::time::Duration;

use corelib::math::{IVec2, UVec2, dvec2, ivec2};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::cursor::Cursor;

/// Degrees each animated cursor turns per frame
pub const FRAME_ROTATION: f32 = 10.0;

pub const SPIRAL_RADIUS: f64 = 50.0;

/// Radians the orbit advances per frame
pub const SPIRAL_PHASE_STEP: f64 = 0.05;

/// Pixels per frame on each axis
pub const BOUNCE_SPEED: i32 = 5;

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MotionKind {
    #[default]
    Spiral,
    Bounce,
    Spin,
    Static,
}

impl MotionKind {
    /// Delay between two frames
    pub fn frame_delay(&self) -> Duration {
        match self {
            MotionKind::Spiral | MotionKind::Static => Duration::from_millis(50),
            MotionKind::Bounce | MotionKind::Spin => Duration::from_millis(100),
        }
    }
}

/// Per frame update policy, holding the state the policy needs per cursor
#[derive(Debug, Clone, PartialEq)]
pub enum Motion {
    /// Each cursor orbits its base point, the phases start evenly spread
    Spiral { bases: Vec<IVec2>, phases: Vec<f64> },
    /// Each cursor travels diagonally and bounces on the window edges
    Bounce { velocities: Vec<IVec2> },
    Spin,
    Static,
}

impl Motion {
    pub fn new(kind: MotionKind, cursors: &[Cursor]) -> Self {
        match kind {
            MotionKind::Spiral => {
                let count = cursors.len() as f64;
                Motion::Spiral {
                    bases: cursors.iter().map(Cursor::position).collect(),
                    phases: (0..cursors.len())
                        .map(|i| i as f64 * (TAU / count))
                        .collect(),
                }
            }
            MotionKind::Bounce => Motion::Bounce {
                velocities: (0..cursors.len())
                    .map(|i| {
                        let speed = if i % 2 == 0 { BOUNCE_SPEED } else { -BOUNCE_SPEED };
                        IVec2::splat(speed)
                    })
                    .collect(),
            },
            MotionKind::Spin => Motion::Spin,
            MotionKind::Static => Motion::Static,
        }
    }

    pub fn kind(&self) -> MotionKind {
        match self {
            Motion::Spiral { .. } => MotionKind::Spiral,
            Motion::Bounce { .. } => MotionKind::Bounce,
            Motion::Spin => MotionKind::Spin,
            Motion::Static => MotionKind::Static,
        }
    }

    /// Advances one frame
    ///
    /// `dragged` is the cursor held by the pointer, the spiral leaves its
    /// position alone so the drag is not overridden. `bounds` is the size of
    /// the surface the bounce reflects on.
    pub fn update(&mut self, cursors: &mut [Cursor], dragged: Option<usize>, bounds: UVec2) {
        match self {
            Motion::Spiral { bases, phases } => {
                let it = cursors.iter_mut().zip(bases.iter()).zip(phases.iter_mut());
                for (idx, ((cursor, base), phase)) in it.enumerate() {
                    if cursor.visible {
                        let orbit = dvec2(phase.cos(), phase.sin()) * SPIRAL_RADIUS;
                        let pos = (base.as_dvec2() + orbit).as_ivec2();

                        cursor.rotate(FRAME_ROTATION);

                        if dragged != Some(idx) {
                            cursor.set_position(pos.x, pos.y);
                        }
                    }
                    *phase += SPIRAL_PHASE_STEP;
                }
            }
            Motion::Bounce { velocities } => {
                let width = bounds.x as i32;
                let height = bounds.y as i32;
                for (cursor, vel) in cursors.iter_mut().zip(velocities.iter_mut()) {
                    if !cursor.visible {
                        continue;
                    }

                    if cursor.x <= 0 || cursor.x >= width {
                        vel.x = -vel.x;
                    }
                    if cursor.y <= 0 || cursor.y >= height {
                        vel.y = -vel.y;
                    }

                    cursor.x += vel.x;
                    cursor.y += vel.y;
                    cursor.rotate(FRAME_ROTATION);
                }
            }
            Motion::Spin => cursors
                .iter_mut()
                .filter(|c| c.visible)
                .for_each(|c| c.rotate_in_place(FRAME_ROTATION)),
            Motion::Static => {}
        }
    }

    /// Called when a drag ends, the spiral orbits around the drop point
    pub fn on_drag_end(&mut self, idx: usize, cursors: &[Cursor]) {
        if let Motion::Spiral { bases, .. } = self {
            if let (Some(base), Some(cursor)) = (bases.get_mut(idx), cursors.get(idx)) {
                *base = ivec2(cursor.x, cursor.y);
                log::debug!("Cursor {idx} orbits around ({}, {})", base.x, base.y);
            }
        }
    }
}
