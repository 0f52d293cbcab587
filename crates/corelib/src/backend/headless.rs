use std::collections::VecDeque;

use crate::backend::Backend;
use crate::events::InputEvent;
use crate::gfx::{Canvas, Color, RecordingCanvas};
use crate::input::{KeyCode, MouseButton, MouseState};
use crate::math::{UVec2, ivec2};

/// Backend without window that replays a script of input events
///
/// Each scripted frame delivers its events to one loop iteration. Once the
/// script is exhausted a `Quit` is delivered, so the loop renders one last
/// frame and stops. The operations of the last presented frame are kept in
/// memory for inspection.
#[derive(Debug)]
pub struct HeadlessBackend {
    current: RecordingCanvas,
    last_frame: RecordingCanvas,
    script: VecDeque<Vec<InputEvent>>,
    pending: VecDeque<InputEvent>,
    frame_loaded: bool,
    frames: usize,
    mouse: MouseState,
}

impl Default for HeadlessBackend {
    fn default() -> Self {
        Self::new(UVec2::new(800, 600))
    }
}

impl HeadlessBackend {
    pub fn new(size: UVec2) -> Self {
        Self {
            current: RecordingCanvas::new(size),
            last_frame: RecordingCanvas::new(size),
            script: VecDeque::new(),
            pending: VecDeque::new(),
            frame_loaded: false,
            frames: 0,
            mouse: MouseState::default(),
        }
    }

    /// Starts a new scripted frame, the following events land on it
    pub fn frame(mut self) -> Self {
        self.script.push_back(vec![]);
        self
    }

    /// Adds `count` frames without input
    pub fn idle(mut self, count: usize) -> Self {
        (0..count).for_each(|_| self.script.push_back(vec![]));
        self
    }

    pub fn event(mut self, evt: InputEvent) -> Self {
        match self.script.back_mut() {
            Some(frame) => frame.push(evt),
            None => self.script.push_back(vec![evt]),
        }
        self
    }

    pub fn press(mut self, button: MouseButton, x: i32, y: i32) -> Self {
        self.mouse.position = ivec2(x, y);
        self.mouse.press(button);
        self.event(InputEvent::MouseDown { button, x, y })
    }

    pub fn release(mut self, button: MouseButton) -> Self {
        let pos = self.mouse.position();
        self.mouse.release(button);
        self.event(InputEvent::MouseUp {
            button,
            x: pos.x,
            y: pos.y,
        })
    }

    /// Moves the pointer with the currently held buttons
    pub fn move_to(mut self, x: i32, y: i32) -> Self {
        self.mouse.position = ivec2(x, y);
        let buttons = self.mouse.down.clone();
        self.event(InputEvent::MouseMotion { x, y, buttons })
    }

    pub fn wheel(self, dy: i32) -> Self {
        self.event(InputEvent::MouseWheel { dy })
    }

    pub fn key(self, key: KeyCode) -> Self {
        self.event(InputEvent::KeyDown { key })
    }

    /// Operations of the last presented frame
    pub fn last_frame(&self) -> &RecordingCanvas {
        &self.last_frame
    }

    /// Number of presented frames
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl Backend for HeadlessBackend {
    fn poll_event(&mut self) -> Option<InputEvent> {
        if !self.frame_loaded {
            self.frame_loaded = true;
            match self.script.pop_front() {
                Some(evts) => self.pending.extend(evts),
                None => self.pending.push_back(InputEvent::Quit),
            }
        }

        self.pending.pop_front()
    }
}

impl Canvas for HeadlessBackend {
    fn size(&self) -> UVec2 {
        self.current.size()
    }

    fn set_draw_color(&mut self, color: Color) {
        self.current.set_draw_color(color);
    }

    fn clear(&mut self) {
        self.current.clear();
    }

    fn draw_point(&mut self, x: i32, y: i32) {
        self.current.draw_point(x, y);
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.current.draw_line(x1, y1, x2, y2);
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: u32, height: u32) {
        self.current.draw_rect(x, y, width, height);
    }

    fn present(&mut self) {
        self.current.present();
        let next = RecordingCanvas::new(self.current.size());
        self.last_frame = std::mem::replace(&mut self.current, next);
        self.frame_loaded = false;
        self.frames += 1;
    }
}
