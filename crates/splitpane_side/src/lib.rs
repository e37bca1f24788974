//! Declarative side-panel component for split-view layouts
//!
//! Bridges a typed declarative configuration onto an imperative panel
//! element that owns its own animation, gestures, and open/closed state:
//!
//! - **Prop projection**: pure mapping from [`PanelConfig`] to the
//!   element's attribute vocabulary, re-run on every render
//! - **Lifecycle binding**: the five native events (`preopen`, `postopen`,
//!   `preclose`, `postclose`, `modechange`) attach to the configured
//!   callbacks at mount and detach symmetrically at unmount
//! - **Imperative sync**: declared open intent becomes an
//!   `open()`/`close()` command on every update
//!
//! The element sits behind the [`PanelElement`] seam; any implementation
//! can host a panel. `splitpane_element` ships [`HostPanel`], an in-memory
//! element for tests and examples.
//!
//! [`HostPanel`]: splitpane_element::HostPanel

mod bind;
mod sync;

pub mod config;
pub mod error;
pub mod panel;
pub mod project;

pub use config::{AnimationOptions, Dimension, PanelCallback, PanelCallbacks, PanelConfig, Side};
pub use error::{PanelError, Result};
pub use panel::{SidePanel, WidgetHandle};
pub use project::project;

// Element-surface types that appear in configurations and callbacks
pub use splitpane_element::{
    Node, PanelElement, PanelEvent, PanelEventData, PanelEventKind, PanelMode,
};

/// Commonly used types for building side panels
pub mod prelude {
    pub use crate::config::{AnimationOptions, Dimension, PanelCallbacks, PanelConfig, Side};
    pub use crate::error::PanelError;
    pub use crate::panel::SidePanel;
    pub use splitpane_element::{Node, PanelElement, PanelEvent, PanelEventKind, PanelMode};
}
