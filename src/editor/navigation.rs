use tracing::trace;

use super::{signed, EditingMode, EditorEvent, VertexEditor};
use crate::geometry::GeometryType;

impl VertexEditor {
    /// Selects the previous vertex, wrapping around on polygons.
    pub fn previous(&mut self) {
        let target = self.current_index.map_or(-1, |i| signed(i) - 1);
        self.set_current_vertex(target, false);
    }

    /// Selects the next vertex, wrapping around on polygons.
    pub fn next(&mut self) {
        let target = self.current_index.map_or(0, |i| signed(i) + 1);
        self.set_current_vertex(target, false);
    }

    /// Whether [`VertexEditor::previous`] moves the selection.
    #[must_use]
    pub fn can_previous_vertex(&self) -> bool {
        if self.wraps() {
            return !self.vertices.is_empty();
        }
        self.current_index.is_some_and(|i| i > 0)
    }

    /// Whether [`VertexEditor::next`] moves the selection.
    #[must_use]
    pub fn can_next_vertex(&self) -> bool {
        if self.wraps() {
            return !self.vertices.is_empty();
        }
        let len = self.vertices.len();
        self.current_index.map_or(len > 0, |i| i + 1 < len)
    }

    /// Selects the vertex at `index`.
    ///
    /// Out of range indices wrap around for polygons and clamp otherwise.
    /// Selecting while not editing starts [`EditingMode::EditVertex`]. In
    /// [`EditingMode::AddVertex`] the floating vertex follows the selection
    /// and is re-centred on the segment ending at `index`.
    ///
    /// Nothing happens if the selection does not change, unless
    /// `force_update` is set.
    pub fn set_current_vertex(&mut self, index: isize, force_update: bool) {
        let len = signed(self.vertices.len());
        let mut index = index;
        if index < 0 {
            index = if self.wraps() { len - 1 } else { 0 };
        }
        if index >= len {
            index = if self.wraps() { 0 } else { len - 1 };
        }
        if len == 0 {
            self.set_editing_mode(EditingMode::NoEditing);
            index = -1;
        }
        let new = usize::try_from(index).ok();

        if !force_update && self.current_index == new {
            return;
        }
        trace!(from = ?self.current_index, to = ?new, "current vertex");

        let old = self.current_index;
        self.current_index = new;

        match (self.mode, old, new) {
            (EditingMode::AddVertex, Some(old), Some(new)) => self.move_segment_vertex(old, new),
            _ => {
                self.refresh_current_flags();
                if new.is_some() {
                    if self.mode == EditingMode::NoEditing {
                        self.set_editing_mode(EditingMode::EditVertex);
                    }
                    self.notify(EditorEvent::CurrentPointChanged);
                }
            }
        }
    }

    /// Moves the floating vertex from row `old` to row `new`, placing it on
    /// the segment between the real vertices around its new row.
    fn move_segment_vertex(&mut self, old: usize, new: usize) {
        let mut vertex = self.vertices.remove(old);
        vertex.point = self
            .segment_centroid(signed(new) - 1, signed(new), true)
            .point;
        let index = new.min(self.vertices.len());
        self.vertices.insert(index, vertex);

        self.refresh_current_flags();
        self.notify(EditorEvent::CurrentPointChanged);
    }

    fn wraps(&self) -> bool {
        self.geometry_type == GeometryType::Polygon
    }
}
