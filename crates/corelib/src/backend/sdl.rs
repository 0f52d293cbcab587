use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::{MouseButton as SdlMouseButton, MouseState as SdlMouseState};
use sdl2::pixels::Color as SdlColor;
use sdl2::rect::{Point, Rect};
use sdl2::render::{BlendMode, WindowCanvas};

use crate::app::WindowConfig;
use crate::backend::Backend;
use crate::events::InputEvent;
use crate::gfx::{Canvas, Color};
use crate::input::{KeyCode, MouseButton, MouseButtonList};
use crate::math::UVec2;

/// SDL2 window with an accelerated renderer
pub struct SdlBackend {
    canvas: WindowCanvas,
    events: EventPump,
    size: UVec2,
    // dropped last, after the renderer and the window
    _sdl: sdl2::Sdl,
}

impl SdlBackend {
    pub fn new(config: &WindowConfig) -> Result<Self, String> {
        let sdl = sdl2::init()?;
        let video = sdl.video()?;

        let mut builder = video.window(&config.title, config.size.x, config.size.y);
        builder.position_centered();

        let window = builder
            .build()
            .map_err(|e| format!("Cannot create the window: {e}"))?;

        let mut canvas_builder = window.into_canvas().accelerated();
        if config.vsync {
            canvas_builder = canvas_builder.present_vsync();
        }

        let mut canvas = canvas_builder
            .build()
            .map_err(|e| format!("Cannot create the renderer: {e}"))?;
        canvas.set_blend_mode(BlendMode::Blend);

        let events = sdl.event_pump()?;

        log::debug!(
            "SDL2 window created: title='{}' size={}x{} vsync={}",
            config.title,
            config.size.x,
            config.size.y,
            config.vsync
        );

        Ok(Self {
            canvas,
            events,
            size: config.size,
            _sdl: sdl,
        })
    }
}

impl Backend for SdlBackend {
    fn poll_event(&mut self) -> Option<InputEvent> {
        while let Some(evt) = self.events.poll_event() {
            if let Some(evt) = event_cast(evt) {
                return Some(evt);
            }
        }

        None
    }
}

impl Canvas for SdlBackend {
    fn size(&self) -> UVec2 {
        self.size
    }

    fn set_draw_color(&mut self, color: Color) {
        self.canvas
            .set_draw_color(SdlColor::RGBA(color.r, color.g, color.b, color.a));
    }

    fn clear(&mut self) {
        self.canvas.clear();
    }

    fn draw_point(&mut self, x: i32, y: i32) {
        report("draw_point", self.canvas.draw_point(Point::new(x, y)));
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        report(
            "draw_line",
            self.canvas.draw_line(Point::new(x1, y1), Point::new(x2, y2)),
        );
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: u32, height: u32) {
        report(
            "draw_rect",
            self.canvas.draw_rect(Rect::new(x, y, width, height)),
        );
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}

#[inline]
fn report(op: &str, res: Result<(), String>) {
    if let Err(e) = res {
        log::error!("SDL2 {op} failed: {e}");
    }
}

fn event_cast(evt: Event) -> Option<InputEvent> {
    let evt = match evt {
        Event::Quit { .. } => InputEvent::Quit,
        Event::MouseButtonDown {
            mouse_btn, x, y, ..
        } => InputEvent::MouseDown {
            button: mouse_btn_cast(mouse_btn),
            x,
            y,
        },
        Event::MouseButtonUp {
            mouse_btn, x, y, ..
        } => InputEvent::MouseUp {
            button: mouse_btn_cast(mouse_btn),
            x,
            y,
        },
        Event::MouseMotion {
            mousestate, x, y, ..
        } => InputEvent::MouseMotion {
            x,
            y,
            buttons: mouse_state_cast(mousestate),
        },
        Event::MouseWheel { y, .. } => InputEvent::MouseWheel { dy: y },
        Event::KeyDown {
            keycode: Some(key), ..
        } => InputEvent::KeyDown {
            key: keycode_cast(key),
        },
        _ => return None,
    };

    log::trace!("Input event: {evt:?}");
    Some(evt)
}

fn mouse_btn_cast(btn: SdlMouseButton) -> MouseButton {
    match btn {
        SdlMouseButton::Left => MouseButton::Left,
        SdlMouseButton::Middle => MouseButton::Middle,
        SdlMouseButton::Right => MouseButton::Right,
        SdlMouseButton::X1 => MouseButton::Back,
        SdlMouseButton::X2 => MouseButton::Forward,
        SdlMouseButton::Unknown => MouseButton::Unknown,
    }
}

fn mouse_state_cast(state: SdlMouseState) -> MouseButtonList {
    let mut list = MouseButtonList::default();
    [
        (state.left(), MouseButton::Left),
        (state.middle(), MouseButton::Middle),
        (state.right(), MouseButton::Right),
        (state.x1(), MouseButton::Back),
        (state.x2(), MouseButton::Forward),
    ]
    .into_iter()
    .filter(|(down, _)| *down)
    .for_each(|(_, btn)| {
        list.insert(btn);
    });
    list
}

fn keycode_cast(key: Keycode) -> KeyCode {
    match key {
        Keycode::A => KeyCode::KeyA,
        Keycode::B => KeyCode::KeyB,
        Keycode::C => KeyCode::KeyC,
        Keycode::D => KeyCode::KeyD,
        Keycode::E => KeyCode::KeyE,
        Keycode::F => KeyCode::KeyF,
        Keycode::G => KeyCode::KeyG,
        Keycode::H => KeyCode::KeyH,
        Keycode::I => KeyCode::KeyI,
        Keycode::J => KeyCode::KeyJ,
        Keycode::K => KeyCode::KeyK,
        Keycode::L => KeyCode::KeyL,
        Keycode::M => KeyCode::KeyM,
        Keycode::N => KeyCode::KeyN,
        Keycode::O => KeyCode::KeyO,
        Keycode::P => KeyCode::KeyP,
        Keycode::Q => KeyCode::KeyQ,
        Keycode::R => KeyCode::KeyR,
        Keycode::S => KeyCode::KeyS,
        Keycode::T => KeyCode::KeyT,
        Keycode::U => KeyCode::KeyU,
        Keycode::V => KeyCode::KeyV,
        Keycode::W => KeyCode::KeyW,
        Keycode::X => KeyCode::KeyX,
        Keycode::Y => KeyCode::KeyY,
        Keycode::Z => KeyCode::KeyZ,
        Keycode::Num0 => KeyCode::Digit0,
        Keycode::Num1 => KeyCode::Digit1,
        Keycode::Num2 => KeyCode::Digit2,
        Keycode::Num3 => KeyCode::Digit3,
        Keycode::Num4 => KeyCode::Digit4,
        Keycode::Num5 => KeyCode::Digit5,
        Keycode::Num6 => KeyCode::Digit6,
        Keycode::Num7 => KeyCode::Digit7,
        Keycode::Num8 => KeyCode::Digit8,
        Keycode::Num9 => KeyCode::Digit9,
        Keycode::Up => KeyCode::ArrowUp,
        Keycode::Down => KeyCode::ArrowDown,
        Keycode::Left => KeyCode::ArrowLeft,
        Keycode::Right => KeyCode::ArrowRight,
        Keycode::Space => KeyCode::Space,
        Keycode::Return => KeyCode::Enter,
        Keycode::Escape => KeyCode::Escape,
        Keycode::Tab => KeyCode::Tab,
        Keycode::Backspace => KeyCode::Backspace,
        Keycode::Delete => KeyCode::Delete,
        Keycode::Insert => KeyCode::Insert,
        Keycode::Home => KeyCode::Home,
        Keycode::End => KeyCode::End,
        Keycode::PageUp => KeyCode::PageUp,
        Keycode::PageDown => KeyCode::PageDown,
        Keycode::LShift => KeyCode::ShiftLeft,
        Keycode::RShift => KeyCode::ShiftRight,
        Keycode::LCtrl => KeyCode::ControlLeft,
        Keycode::RCtrl => KeyCode::ControlRight,
        Keycode::LAlt => KeyCode::AltLeft,
        Keycode::RAlt => KeyCode::AltRight,
        _ => KeyCode::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_btn_cast() {
        assert_eq!(mouse_btn_cast(SdlMouseButton::Left), MouseButton::Left);
        assert_eq!(mouse_btn_cast(SdlMouseButton::X1), MouseButton::Back);
        assert_eq!(mouse_btn_cast(SdlMouseButton::X2), MouseButton::Forward);
    }

    #[test]
    fn test_mouse_state_cast() {
        // SDL_BUTTON_LMASK | SDL_BUTTON_RMASK
        let list = mouse_state_cast(SdlMouseState::from_sdl_state(0b101));
        assert!(list.contains(MouseButton::Left));
        assert!(list.contains(MouseButton::Right));
        assert!(!list.contains(MouseButton::Middle));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_keycode_cast() {
        assert_eq!(keycode_cast(Keycode::R), KeyCode::KeyR);
        assert_eq!(keycode_cast(Keycode::E), KeyCode::KeyE);
        assert_eq!(keycode_cast(Keycode::Delete), KeyCode::Delete);
        assert_eq!(keycode_cast(Keycode::F1), KeyCode::Unknown);
    }

    #[test]
    fn test_event_cast_quit() {
        assert_eq!(
            event_cast(Event::Quit { timestamp: 0 }),
            Some(InputEvent::Quit)
        );
    }
}
