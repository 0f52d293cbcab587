use crate::math::IVec2;
use crate::utils::EnumSet;
use nohash_hasher::IsEnabled;
use std::hash::Hasher;
use strum::EnumCount;
use strum_macros::EnumIter;

#[derive(
    Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, strum_macros::EnumCount, EnumIter,
)]
#[repr(u8)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Back,
    Forward,

    // Unknown is the last value
    Unknown,
}

const MOUSE_BUTTON_COUNT_POT2: usize = MouseButton::COUNT.next_power_of_two();

/// Set of mouse buttons, used as the button mask of pointer motion
#[derive(Default, Clone)]
pub struct MouseButtonList {
    set: EnumSet<UniqueMouseButton, MOUSE_BUTTON_COUNT_POT2>,
}

impl MouseButtonList {
    pub fn insert(&mut self, v: MouseButton) -> bool {
        self.set.insert(UniqueMouseButton(v)).unwrap_or_default()
    }

    pub fn contains(&self, btn: MouseButton) -> bool {
        self.set.contains(&UniqueMouseButton(btn))
    }

    pub fn iter(&self) -> impl Iterator<Item = MouseButton> + '_ {
        self.set.iter().map(|unique_btn| unique_btn.0)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn remove(&mut self, btn: MouseButton) -> bool {
        self.set.remove(&UniqueMouseButton(btn))
    }

    pub fn clear(&mut self) {
        self.set.clear()
    }
}

impl PartialEq for MouseButtonList {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|btn| other.contains(btn))
    }
}

impl Eq for MouseButtonList {}

impl<const N: usize> From<[MouseButton; N]> for MouseButtonList {
    fn from(btns: [MouseButton; N]) -> Self {
        let mut list = Self::default();
        btns.into_iter().for_each(|btn| {
            list.insert(btn);
        });
        list
    }
}

#[derive(Copy, Clone, PartialEq, Eq)]
struct UniqueMouseButton(MouseButton);
impl std::hash::Hash for UniqueMouseButton {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        hasher.write_u8(self.0 as _)
    }
}

impl IsEnabled for UniqueMouseButton {}

impl std::fmt::Debug for MouseButtonList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Pointer position and held buttons
#[derive(Clone, Debug, Default)]
pub struct MouseState {
    pub position: IVec2,
    pub down: MouseButtonList,
}

impl MouseState {
    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub fn press(&mut self, btn: MouseButton) {
        self.down.insert(btn);
    }

    pub fn release(&mut self, btn: MouseButton) {
        self.down.remove(btn);
    }

    pub fn is_down(&self, btn: MouseButton) -> bool {
        self.down.contains(btn)
    }
}
