//! Splitpane Element Surface
//!
//! Foundational primitives for the splitpane bridge:
//!
//! - **Events**: the five lifecycle events a panel element emits and a
//!   dispatcher with removable registrations
//! - **Element seam**: the attribute vocabulary and the [`PanelElement`]
//!   trait the declarative layer talks through
//! - **Host element**: [`HostPanel`], an in-memory reference implementation
//!   for tests and examples
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//!
//! use splitpane_element::{HostPanel, PanelElement, PanelEvent, PanelEventKind};
//!
//! let mut panel = HostPanel::new();
//! let log: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));
//!
//! let log_clone = log.clone();
//! panel.add_listener(
//!     PanelEventKind::PostOpen,
//!     Arc::new(move |_event: &PanelEvent| log_clone.lock().unwrap().push("opened")),
//! );
//!
//! panel.open();
//! panel.open(); // already open, emits nothing
//! assert_eq!(log.lock().unwrap().as_slice(), &["opened"]);
//! ```

pub mod element;
pub mod events;
pub mod host;

pub use element::{attr, AttributeMap, Node, PanelElement, PanelMode};
pub use events::{
    EventDispatcher, ListenerId, PanelEvent, PanelEventData, PanelEventKind, PanelListener,
};
pub use host::HostPanel;
