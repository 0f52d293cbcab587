use crate::cursor::{Cursor, MIN_SCALE};

/// Scale change of one wheel notch
pub const ZOOM_STEP: f32 = 0.1;

/// Degrees applied by the rotate keys
pub const ROTATION_STEP: f32 = 15.0;

/// What stays fixed when a cursor is zoomed
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ZoomAnchor {
    /// Position scales with the cursor, relative to the window origin
    #[default]
    Origin,
    /// Position is left untouched
    InPlace,
}

/// Selection and drag state shared by every motion
///
/// The selection is an index into the cursor list owned by the caller, it
/// never keeps the cursor alive and is dropped on deletion.
#[derive(Debug, Default, Clone)]
pub struct Interaction {
    selected: Option<usize>,
    dragging: bool,
    anchor: ZoomAnchor,
}

impl Interaction {
    pub fn new(anchor: ZoomAnchor) -> Self {
        Self {
            anchor,
            ..Default::default()
        }
    }

    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Index of the cursor under the pointer while a drag is in progress
    #[inline]
    pub fn dragged(&self) -> Option<usize> {
        self.selected.filter(|_| self.dragging)
    }

    /// Selects the first visible cursor whose area contains the point, or
    /// clears the selection when there is none
    pub fn select(&mut self, x: i32, y: i32, cursors: &[Cursor]) -> Option<usize> {
        self.selected = cursors
            .iter()
            .position(|c| c.visible && c.selection_area().contains(x, y));
        self.dragging = false;

        match self.selected {
            Some(idx) => log::debug!("Selected cursor {idx} at ({x}, {y})"),
            None => log::debug!("Nothing to select at ({x}, {y})"),
        }

        self.selected
    }

    /// Starts dragging the selection, returns false if nothing is selected
    pub fn begin_drag(&mut self) -> bool {
        self.dragging = self.selected.is_some();
        self.dragging
    }

    /// Stops the drag, returning the cursor that was being dragged
    pub fn end_drag(&mut self) -> Option<usize> {
        let dragged = self.dragged();
        self.dragging = false;
        if let Some(idx) = dragged {
            log::debug!("Drag of cursor {idx} ended");
        }
        dragged
    }

    /// Moves the selected cursor to the pointer
    pub fn drag(&mut self, x: i32, y: i32, cursors: &mut [Cursor]) {
        if let Some(cursor) = self.selected_mut(cursors) {
            cursor.set_position(x, y);
        }
    }

    /// Grows or shrinks the selected cursor by one step
    pub fn zoom(&mut self, zoom_in: bool, cursors: &mut [Cursor]) {
        let anchor = self.anchor;
        let Some(cursor) = self.selected_mut(cursors) else {
            return;
        };

        let old_scale = cursor.scale();
        let new_scale = if zoom_in {
            old_scale + ZOOM_STEP
        } else {
            (old_scale - ZOOM_STEP).max(MIN_SCALE)
        };
        cursor.set_scale(new_scale);

        if anchor == ZoomAnchor::Origin {
            let factor = cursor.scale() / old_scale;
            cursor.x = (cursor.x as f32 * factor) as i32;
            cursor.y = (cursor.y as f32 * factor) as i32;
        }

        log::trace!(
            "Zoom {}: scale {old_scale} -> {} at ({}, {})",
            if zoom_in { "in" } else { "out" },
            cursor.scale(),
            cursor.x,
            cursor.y
        );
    }

    pub fn rotate_selected(&mut self, delta: f32, cursors: &mut [Cursor]) {
        if let Some(cursor) = self.selected_mut(cursors) {
            cursor.rotate(delta);
        }
    }

    /// Hides the selected cursor and clears the selection
    pub fn delete(&mut self, cursors: &mut [Cursor]) -> Option<usize> {
        let idx = self.selected.take()?;
        self.dragging = false;
        let cursor = cursors.get_mut(idx)?;
        cursor.visible = false;
        log::debug!("Deleted cursor {idx}");
        Some(idx)
    }

    fn selected_mut<'a>(&self, cursors: &'a mut [Cursor]) -> Option<&'a mut Cursor> {
        self.selected.and_then(|idx| cursors.get_mut(idx))
    }
}
