use corelib::AppBuilder;
use corelib::app::WindowConfig;
use corelib::events::InputEvent;
use corelib::gfx::Canvas;
use corelib::input::{KeyCode, MouseButton};

use crate::cursor::Cursor;
use crate::interaction::{Interaction, ROTATION_STEP, ZoomAnchor};
use crate::motion::{Motion, MotionKind};
use crate::scene::Scene;
use crate::shapes::{Shape, draw_selection_area};

/// Application state: the cursors, what they draw and how they move
pub struct Driver {
    cursors: Vec<Cursor>,
    shapes: Vec<Shape>,
    interaction: Interaction,
    motion: Motion,
    show_selection: bool,
}

impl Driver {
    pub fn new(scene: &Scene, motion: MotionKind, anchor: ZoomAnchor) -> Self {
        let (cursors, shapes) = scene.build();
        let motion = Motion::new(motion, &cursors);
        Self {
            cursors,
            shapes,
            interaction: Interaction::new(anchor),
            motion,
            show_selection: false,
        }
    }

    /// Draws the selection areas on top of the shapes
    pub fn with_selection_overlay(mut self, show: bool) -> Self {
        self.show_selection = show;
        self
    }

    pub fn cursors(&self) -> &[Cursor] {
        &self.cursors
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    pub fn selection_overlay(&self) -> bool {
        self.show_selection
    }

    pub fn handle_event(&mut self, evt: &InputEvent) {
        match *evt {
            InputEvent::MouseDown {
                button: MouseButton::Left,
                x,
                y,
            } => {
                self.interaction.select(x, y, &self.cursors);
                self.interaction.begin_drag();
            }
            InputEvent::MouseUp {
                button: MouseButton::Left,
                ..
            } => {
                if let Some(idx) = self.interaction.end_drag() {
                    self.motion.on_drag_end(idx, &self.cursors);
                }
            }
            InputEvent::MouseMotion { x, y, ref buttons } => {
                if self.interaction.is_dragging() && buttons.contains(MouseButton::Left) {
                    self.interaction.drag(x, y, &mut self.cursors);
                }
            }
            InputEvent::MouseWheel { dy } => {
                if dy != 0 {
                    self.interaction.zoom(dy > 0, &mut self.cursors);
                }
            }
            InputEvent::KeyDown { key } => self.handle_key(key),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::KeyR => self
                .interaction
                .rotate_selected(ROTATION_STEP, &mut self.cursors),
            KeyCode::KeyE => self
                .interaction
                .rotate_selected(-ROTATION_STEP, &mut self.cursors),
            KeyCode::Delete => {
                self.interaction.delete(&mut self.cursors);
            }
            KeyCode::KeyD => {
                self.show_selection = !self.show_selection;
                log::debug!("Selection overlay: {}", self.show_selection);
            }
            _ => {}
        }
    }

    /// Advances the motion one step and draws every cursor
    pub fn frame(&mut self, canvas: &mut dyn Canvas) {
        let bounds = canvas.size();
        self.motion
            .update(&mut self.cursors, self.interaction.dragged(), bounds);

        let mut draw = draw::create_draw_2d(canvas);
        for (cursor, shape) in self.cursors.iter().zip(&self.shapes) {
            shape.draw(&mut draw, cursor);
        }

        if self.show_selection {
            for cursor in &self.cursors {
                draw_selection_area(&mut draw, cursor);
            }
        }
    }
}

/// Wires the driver into the app loop, the caller picks the backend
pub fn build_app(driver: Driver, window: WindowConfig) -> AppBuilder<Driver> {
    let title = window.title.clone();
    corelib::init_with(move || {
        log::info!(
            "Starting '{title}' with {} cursors, motion {}",
            driver.cursors.len(),
            driver.motion.kind()
        );
        driver
    })
    .with_window(window)
    .on_event(Driver::handle_event)
    .update(Driver::frame)
    .cleanup(|driver| {
        let visible = driver.cursors.iter().filter(|c| c.visible).count();
        log::info!("Stopped with {visible} visible cursors");
    })
}
