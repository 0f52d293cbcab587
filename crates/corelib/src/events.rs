use crate::input::{KeyCode, MouseButton, MouseButtonList};

/// Input delivered to the application, one per polled event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The user asked to close the window
    Quit,
    MouseDown {
        button: MouseButton,
        x: i32,
        y: i32,
    },
    MouseUp {
        button: MouseButton,
        x: i32,
        y: i32,
    },
    /// Pointer motion with the buttons held while moving
    MouseMotion {
        x: i32,
        y: i32,
        buttons: MouseButtonList,
    },
    /// Vertical wheel delta, positive away from the user
    MouseWheel { dy: i32 },
    KeyDown { key: KeyCode },
}

impl InputEvent {
    #[inline]
    pub fn is_quit(&self) -> bool {
        matches!(self, InputEvent::Quit)
    }
}
