//! In-memory reference panel element
//!
//! [`HostPanel`] implements [`PanelElement`] without a windowing backend:
//! an open/closed machine that emits the pre/post lifecycle events, and
//! viewport-driven switching between collapse and split mode. Tests and
//! examples run the bridge against it. Animation timing and gesture
//! handling are intentionally absent; a real element brings its own.

use tracing::debug;

use crate::element::{AttributeMap, Node, PanelElement, PanelMode};
use crate::events::{EventDispatcher, ListenerId, PanelEvent, PanelEventKind, PanelListener};

/// Viewport width below which a host panel collapses, in logical pixels
pub const DEFAULT_COLLAPSE_BELOW: f32 = 768.0;

/// Open/closed state of a host panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum OpenState {
    #[default]
    Closed,
    Open,
}

/// In-memory panel element
///
/// Starts closed and in split mode. Open and close transitions emit their
/// `pre`/`post` event pair synchronously around the state flip; commanding
/// a state the panel is already in emits nothing.
pub struct HostPanel {
    attributes: AttributeMap,
    children: Vec<Node>,
    dispatcher: EventDispatcher,
    state: OpenState,
    mode: PanelMode,
    collapse_below: f32,
}

impl HostPanel {
    /// Create a closed panel in split mode with the default breakpoint
    pub fn new() -> Self {
        Self {
            attributes: AttributeMap::new(),
            children: Vec::new(),
            dispatcher: EventDispatcher::new(),
            state: OpenState::Closed,
            mode: PanelMode::Split,
            collapse_below: DEFAULT_COLLAPSE_BELOW,
        }
    }

    /// Override the viewport width below which the panel collapses
    pub fn collapse_below(mut self, width: f32) -> Self {
        self.collapse_below = width;
        self
    }

    /// Report a viewport width to the element
    ///
    /// Switches between collapse and split mode when the width crosses the
    /// breakpoint; emits `modechange` only on an actual switch.
    pub fn set_viewport_width(&mut self, width: f32) {
        let next = if width < self.collapse_below {
            PanelMode::Collapse
        } else {
            PanelMode::Split
        };
        if next != self.mode {
            self.mode = next;
            debug!(mode = next.as_str(), "panel mode changed");
            self.dispatcher.emit(&PanelEvent::mode_change(next));
        }
    }

    /// Current attribute assignment
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// Value of a single attribute
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Children currently in the slot
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Number of attached listeners across all event kinds
    pub fn listener_count(&self) -> usize {
        self.dispatcher.len()
    }
}

impl Default for HostPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelElement for HostPanel {
    fn apply_attributes(&mut self, attrs: &AttributeMap) {
        // the `mode` attribute is stored like any other but never drives
        // the element's own mode
        self.attributes = attrs.clone();
    }

    fn set_children(&mut self, children: Vec<Node>) {
        self.children = children;
    }

    fn open(&mut self) {
        if self.state == OpenState::Open {
            return;
        }
        self.dispatcher.emit(&PanelEvent::new(PanelEventKind::PreOpen));
        self.state = OpenState::Open;
        debug!("panel opened");
        self.dispatcher.emit(&PanelEvent::new(PanelEventKind::PostOpen));
    }

    fn close(&mut self) {
        if self.state == OpenState::Closed {
            return;
        }
        self.dispatcher.emit(&PanelEvent::new(PanelEventKind::PreClose));
        self.state = OpenState::Closed;
        debug!("panel closed");
        self.dispatcher.emit(&PanelEvent::new(PanelEventKind::PostClose));
    }

    fn is_open(&self) -> bool {
        self.state == OpenState::Open
    }

    fn mode(&self) -> PanelMode {
        self.mode
    }

    fn add_listener(&mut self, kind: PanelEventKind, listener: PanelListener) -> ListenerId {
        self.dispatcher.register(kind, listener)
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.dispatcher.unregister(id)
    }
}
