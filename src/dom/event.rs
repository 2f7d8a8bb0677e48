use super::document::ElementId;

/// Page events the widget listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomEvent {
    /// Fires once when the page content is ready.
    ContentLoaded,
    /// The value of `target` changed.
    Input { target: ElementId },
    /// A click anywhere in the document; `target` is the innermost node hit.
    Click { target: ElementId },
}
