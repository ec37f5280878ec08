/// Change notifications queued by [`VertexEditor`](super::VertexEditor).
///
/// Events are recorded in emission order and drained with
/// [`VertexEditor::take_events`](super::VertexEditor::take_events).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    MapSettingsChanged,
    VertexCountChanged,
    CurrentPointChanged,
    DirtyChanged,
    CanRemoveVertexChanged,
    EditingModeChanged,
}
