//! Interactive vertex editing of a single point, line or polygon.
//!
//! [`VertexEditor`] decomposes a geometry into an ordered list of
//! [`Vertex`] rows, lets a caller select, move, insert and remove vertices,
//! and rebuilds the geometry in its original reference system.

mod centroid;
mod event;
mod mode;
mod navigation;
mod vertex;


pub use centroid::SegmentCentroid;
pub use event::EditorEvent;
pub use mode::EditingMode;
pub use vertex::Vertex;

use tracing::debug;

use crate::geometry::{Geometry, GeometryType};
use crate::math::Point3;
use crate::transform::{
    ContextTransformProvider, CoordinateTransform, Crs, MapSettings, TransformProvider,
};

/// Editing state machine over the vertices of one geometry.
///
/// All operations run to completion synchronously. Observers learn about
/// changes through the queued [`EditorEvent`]s.
#[derive(Debug)]
pub struct VertexEditor {
    map_settings: Option<MapSettings>,
    provider: Box<dyn TransformProvider>,
    transform: Option<Box<dyn CoordinateTransform>>,
    original_geometry: Geometry,
    geometry_type: GeometryType,
    is_multi_part: bool,
    vertices: Vec<Vertex>,
    current_index: Option<usize>,
    mode: EditingMode,
    dirty: bool,
    can_remove_vertex: bool,
    events: Vec<EditorEvent>,
}

impl Default for VertexEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexEditor {
    /// Creates an empty editor resolving transforms with [`ContextTransformProvider`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_transform_provider(Box::new(ContextTransformProvider))
    }

    /// Creates an empty editor using `provider` to build load-time transforms.
    #[must_use]
    pub fn with_transform_provider(provider: Box<dyn TransformProvider>) -> Self {
        Self {
            map_settings: None,
            provider,
            transform: None,
            original_geometry: Geometry::Empty,
            geometry_type: GeometryType::Null,
            is_multi_part: false,
            vertices: Vec::new(),
            current_index: None,
            mode: EditingMode::NoEditing,
            dirty: false,
            can_remove_vertex: false,
            events: Vec::new(),
        }
    }

    /// Current map configuration, if any.
    #[must_use]
    pub fn map_settings(&self) -> Option<&MapSettings> {
        self.map_settings.as_ref()
    }

    /// Sets the map configuration used by the next [`VertexEditor::set_geometry`].
    pub fn set_map_settings(&mut self, settings: Option<MapSettings>) {
        if self.map_settings == settings {
            return;
        }
        self.map_settings = settings;
        self.notify(EditorEvent::MapSettingsChanged);
    }

    /// Loads `geometry`, expressed in `crs`, replacing all editing state.
    ///
    /// With map settings configured, vertices are transformed into the
    /// destination system. A transform that cannot be built is skipped and
    /// vertices stay in `crs`. Geometries with more than one part or ring
    /// load no vertices at all.
    pub fn set_geometry(&mut self, geometry: Geometry, crs: &Crs) {
        self.clear();
        self.current_index = None;
        self.geometry_type = geometry.geometry_type();
        self.is_multi_part = geometry.is_multi_part();
        self.transform = self.build_transform(crs);

        let working = match &self.transform {
            Some(transform) => geometry.map_points(|p| transform.apply(p)),
            None => geometry.clone(),
        };
        self.original_geometry = geometry;

        for (id, point) in working.vertices() {
            if id.part > 0 || id.ring > 0 {
                debug!(?id, "second part or ring, geometry not editable");
                self.vertices.clear();
                break;
            }
            self.vertices.push(Vertex::new(point));
        }

        // The closing point of the ring is implied and restored in `flat_vertices`.
        // Dropping the last rather than the first keeps the ring in input order.
        if self.geometry_type == GeometryType::Polygon && self.vertices.len() > 1 {
            self.vertices.pop();
        }

        debug!(
            geometry_type = ?self.geometry_type,
            vertex_count = self.vertices.len(),
            multi_part = self.is_multi_part,
            transformed = self.transform.is_some(),
            "geometry loaded"
        );

        self.set_dirty(false);
        self.notify(EditorEvent::VertexCountChanged);
    }

    fn build_transform(&self, crs: &Crs) -> Option<Box<dyn CoordinateTransform>> {
        let settings = self.map_settings.as_ref()?;
        match self.provider.create_transform(
            crs,
            &settings.destination_crs,
            &settings.transform_context,
        ) {
            Ok(transform) if transform.is_valid() => Some(transform),
            Ok(_) => {
                debug!(%crs, destination = %settings.destination_crs, "transform invalid, editing untransformed");
                None
            }
            Err(err) => {
                debug!(%err, "no transform, editing untransformed");
                None
            }
        }
    }

    /// Rebuilds the edited geometry in the reference system it was loaded in.
    ///
    /// Multi-part geometries are returned exactly as loaded, since they
    /// cannot be edited.
    #[must_use]
    pub fn geometry(&self) -> Geometry {
        if self.is_multi_part {
            return self.original_geometry.clone();
        }

        let points = self.flat_vertices();
        let geometry = match self.geometry_type {
            GeometryType::Point => points.first().map_or(Geometry::Empty, |p| Geometry::Point(*p)),
            GeometryType::Line => Geometry::LineString(points),
            GeometryType::Polygon => Geometry::polygon(points),
            GeometryType::Null | GeometryType::Unknown => Geometry::Empty,
        };

        match &self.transform {
            Some(transform) => geometry.map_points(|p| transform.apply_inverse(p)),
            None => geometry,
        }
    }

    /// Returns the vertex positions in the editing reference system.
    ///
    /// For polygons the first position is repeated at the end to close the ring.
    #[must_use]
    pub fn flat_vertices(&self) -> Vec<Point3> {
        let mut points: Vec<Point3> = self.vertices.iter().map(Vertex::point).collect();
        if self.geometry_type == GeometryType::Polygon {
            if let Some(first) = points.first().copied() {
                points.push(first);
            }
        }
        points
    }

    /// Leaves editing mode and drops every vertex.
    pub fn clear(&mut self) {
        self.set_editing_mode(EditingMode::NoEditing);
        self.vertices.clear();
        self.current_index = None;
        self.notify(EditorEvent::VertexCountChanged);
        self.set_dirty(false);
    }

    /// The vertex rows in traversal order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Number of vertex rows, including a floating one.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Index of the selected vertex, `None` when nothing is selected.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Position of the selected vertex.
    #[must_use]
    pub fn current_point(&self) -> Option<Point3> {
        self.current_index
            .and_then(|i| self.vertices.get(i))
            .map(Vertex::point)
    }

    /// Moves the selected vertex to `point`.
    ///
    /// Ignored unless editing or adding with a selection. Moving the floating
    /// vertex of add-vertex mode commits it and switches to
    /// [`EditingMode::EditVertex`].
    pub fn set_current_point(&mut self, point: Point3) {
        if !matches!(self.mode, EditingMode::EditVertex | EditingMode::AddVertex) {
            return;
        }
        let Some(vertex) = self.current_index.and_then(|i| self.vertices.get_mut(i)) else {
            return;
        };

        let changed = vertex.point != point;
        vertex.point = point;
        if changed && self.mode == EditingMode::AddVertex {
            vertex.segment = false;
        }

        if changed {
            self.set_dirty(true);
        }
        self.notify(EditorEvent::CurrentPointChanged);

        if changed && self.mode == EditingMode::AddVertex {
            self.set_editing_mode(EditingMode::EditVertex);
        }
    }

    /// Removes the selected vertex if the geometry can spare it.
    ///
    /// The selection then stays at the same index, clamped or wrapped
    /// against the shorter list.
    pub fn remove_current_vertex(&mut self) {
        if !self.can_remove_vertex {
            return;
        }
        let Some(index) = self.current_index.filter(|&i| i < self.vertices.len()) else {
            return;
        };

        self.vertices.remove(index);
        self.set_dirty(true);
        self.notify(EditorEvent::VertexCountChanged);
        self.set_current_vertex(signed(index), true);
    }

    /// Whether any vertex changed since the last load.
    #[must_use]
    pub fn dirty(&self) -> bool {
        self.dirty
    }

    /// Whether [`VertexEditor::remove_current_vertex`] would remove a vertex.
    #[must_use]
    pub fn can_remove_vertex(&self) -> bool {
        self.can_remove_vertex
    }

    /// Type of the loaded geometry.
    #[must_use]
    pub fn geometry_type(&self) -> GeometryType {
        self.geometry_type
    }

    /// Whether the loaded geometry has more than one part or ring.
    #[must_use]
    pub fn is_multi_part(&self) -> bool {
        self.is_multi_part
    }

    /// Drains the queued change notifications.
    pub fn take_events(&mut self) -> Vec<EditorEvent> {
        std::mem::take(&mut self.events)
    }

    fn set_dirty(&mut self, dirty: bool) {
        if self.dirty == dirty {
            return;
        }
        self.dirty = dirty;
        self.notify(EditorEvent::DirtyChanged);
    }

    fn notify(&mut self, event: EditorEvent) {
        self.events.push(event);
        if matches!(
            event,
            EditorEvent::VertexCountChanged | EditorEvent::EditingModeChanged
        ) {
            self.update_can_remove_vertex();
        }
    }

    fn update_can_remove_vertex(&mut self) {
        let can_remove = self.mode == EditingMode::EditVertex
            && self
                .geometry_type
                .min_vertex_count()
                .is_some_and(|min| self.vertices.len() > min);

        if can_remove == self.can_remove_vertex {
            return;
        }
        self.can_remove_vertex = can_remove;
        self.events.push(EditorEvent::CanRemoveVertexChanged);
    }

    /// Marks exactly the vertex at `current_index` as current.
    fn refresh_current_flags(&mut self) {
        for (i, vertex) in self.vertices.iter_mut().enumerate() {
            vertex.current = Some(i) == self.current_index;
        }
    }
}

fn signed(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}
