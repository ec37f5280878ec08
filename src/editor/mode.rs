use tracing::debug;

use super::{signed, EditorEvent, Vertex, VertexEditor};
use crate::geometry::GeometryType;

/// Editing state of a [`VertexEditor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditingMode {
    /// Viewing only, nothing selected.
    #[default]
    NoEditing,
    /// A vertex is selected and can be moved or removed.
    EditVertex,
    /// A floating vertex sits on a segment, waiting to be placed.
    AddVertex,
}

impl VertexEditor {
    /// Current editing mode.
    #[must_use]
    pub fn editing_mode(&self) -> EditingMode {
        self.mode
    }

    /// Switches the editing mode.
    ///
    /// Without vertices the editor always falls back to
    /// [`EditingMode::NoEditing`], as does [`EditingMode::AddVertex`] unless
    /// the geometry is a line or polygon with at least two vertices.
    /// Entering add-vertex mode inserts a floating vertex after the
    /// selection; leaving it discards that vertex unless it was moved.
    pub fn set_editing_mode(&mut self, mode: EditingMode) {
        let mut mode = mode;
        if self.vertices.is_empty() {
            mode = EditingMode::NoEditing;
        }
        if mode == EditingMode::AddVertex && !self.has_segments() {
            mode = EditingMode::NoEditing;
        }

        if self.mode == mode {
            return;
        }
        debug!(from = ?self.mode, to = ?mode, "editing mode");

        // Committed first so removability is derived against the target mode.
        let previous = std::mem::replace(&mut self.mode, mode);
        if mode == EditingMode::AddVertex {
            self.insert_segment_vertex();
        } else if previous == EditingMode::AddVertex {
            self.discard_segment_vertices();
        }

        match mode {
            EditingMode::NoEditing if self.current_index.is_some() => {
                self.current_index = None;
                self.refresh_current_flags();
                self.notify(EditorEvent::CurrentPointChanged);
            }
            EditingMode::EditVertex if self.current_index.is_none() => {
                self.current_index = Some(0);
                self.refresh_current_flags();
                self.notify(EditorEvent::CurrentPointChanged);
            }
            _ => {}
        }

        self.notify(EditorEvent::EditingModeChanged);
    }

    fn has_segments(&self) -> bool {
        matches!(
            self.geometry_type,
            GeometryType::Line | GeometryType::Polygon
        ) && self.vertices.len() >= 2
    }

    /// Inserts a floating vertex on the segment following the selection and
    /// selects it.
    fn insert_segment_vertex(&mut self) {
        // Polygons may append: the new vertex then sits on the closing segment.
        let len = self.vertices.len();
        let after = self.current_index.unwrap_or(0) + 1;
        let index = match self.geometry_type {
            GeometryType::Polygon => after.min(len),
            _ => after.min(len - 1),
        };

        let centroid = self.segment_centroid(signed(index) - 1, signed(index), false);
        self.vertices.insert(index, Vertex::segment(centroid.point));
        self.notify(EditorEvent::VertexCountChanged);

        self.current_index = Some(index);
        self.refresh_current_flags();
        self.notify(EditorEvent::CurrentPointChanged);
    }

    /// Removes uncommitted floating vertices, scanning down to index 1.
    ///
    /// A floating vertex at index 0 is kept as a regular vertex.
    fn discard_segment_vertices(&mut self) {
        for index in (1..self.vertices.len()).rev() {
            if !self.vertices[index].segment {
                continue;
            }
            self.vertices.remove(index);
            if let Some(current) = self.current_index.filter(|&c| c >= index) {
                self.current_index = Some(current - 1);
            }
            self.refresh_current_flags();
            self.notify(EditorEvent::VertexCountChanged);
            self.notify(EditorEvent::CurrentPointChanged);
        }

        if let Some(first) = self.vertices.first_mut().filter(|v| v.segment) {
            first.segment = false;
            debug!("floating vertex at index 0 kept");
            self.set_dirty(true);
        }
    }
}
