//! Imperative panel element surface
//!
//! The narrow seam the declarative layer talks through: the attribute
//! vocabulary a panel element understands, a minimal content-node type for
//! its children slot, and the [`PanelElement`] trait exposing the element's
//! command and subscription interfaces. Everything behind the trait —
//! animation, gestures, responsive breakpoints, the open/closed machine —
//! belongs to the element implementation.

use indexmap::IndexMap;

use crate::events::{ListenerId, PanelEventKind, PanelListener};

/// Attribute names understood by a panel element
pub mod attr {
    /// Collapse behavior flag, encoded `"collapse"` or `"false"`
    pub const COLLAPSE: &str = "collapse";
    /// Swipe interaction flag, encoded `"swipeable"` or `"false"`
    pub const SWIPEABLE: &str = "swipeable";
    /// Panel width, a bare pixel number or a percentage string
    pub const WIDTH: &str = "width";
    /// Screen edge the panel is anchored to, `"left"` or `"right"`
    pub const SIDE: &str = "side";
    /// Named open/close animation
    pub const ANIMATION: &str = "animation";
    /// Animation timing overrides, object-literal encoded
    pub const ANIMATION_OPTIONS: &str = "animation-options";
    /// Swipe distance ratio (0..1) required before the panel opens
    pub const OPEN_THRESHOLD: &str = "open-threshold";
    /// Informational layout mode, `"collapse"` or `"split"`
    pub const MODE: &str = "mode";
    /// Width of the edge region that accepts swipe gestures
    pub const SWIPE_TARGET_WIDTH: &str = "swipe-target-width";
}

/// Ordered attribute assignment applied to a panel element on render
pub type AttributeMap = IndexMap<&'static str, String>;

/// Layout mode of a panel element
///
/// Mode is element-owned: it switches with the viewport and is observed
/// through `modechange` events, never commanded from outside. The `mode`
/// attribute is informational.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PanelMode {
    /// Panel overlays the content and can collapse away
    Collapse,
    /// Panel sits beside the content
    #[default]
    Split,
}

impl PanelMode {
    /// Attribute encoding of the mode
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelMode::Collapse => "collapse",
            PanelMode::Split => "split",
        }
    }
}

/// Content placed in a panel element's children slot
///
/// The bridge hands children over unmodified; the element renders them as
/// given.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Plain text content
    Text(String),
    /// Nested element with its own children
    Element {
        /// Element tag, e.g. `"page"` or `"list"`
        tag: String,
        children: Vec<Node>,
    },
}

impl Node {
    /// Text node
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Element node
    pub fn element(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Element {
            tag: tag.into(),
            children,
        }
    }
}

/// The imperative surface of a panel element
pub trait PanelElement {
    /// Replace the element's attribute assignment
    fn apply_attributes(&mut self, attrs: &AttributeMap);

    /// Replace the children slot
    fn set_children(&mut self, children: Vec<Node>);

    /// Command the element to open
    ///
    /// Must be idempotent: opening an already-open element is a no-op and
    /// emits nothing.
    fn open(&mut self);

    /// Command the element to close
    ///
    /// Must be idempotent, like [`PanelElement::open`].
    fn close(&mut self);

    /// Whether the element currently reports itself open
    fn is_open(&self) -> bool;

    /// Current layout mode
    fn mode(&self) -> PanelMode;

    /// Attach a listener for a lifecycle event
    fn add_listener(&mut self, kind: PanelEventKind, listener: PanelListener) -> ListenerId;

    /// Detach a listener previously attached with [`PanelElement::add_listener`]
    ///
    /// Returns `false` when the id is unknown; must not panic.
    fn remove_listener(&mut self, id: ListenerId) -> bool;
}
