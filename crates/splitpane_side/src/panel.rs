//! The side-panel component
//!
//! [`SidePanel`] reconciles a declarative [`PanelConfig`] with an
//! imperative panel element:
//!
//! - attribute projection on mount and on every update (see
//!   [`crate::project::project`])
//! - lifecycle event binding scoped exactly to the mounted lifetime
//! - an `open()`/`close()` command per update, derived from the declared
//!   open intent
//!
//! # Example
//!
//! ```ignore
//! use splitpane_element::HostPanel;
//! use splitpane_side::prelude::*;
//!
//! let mut panel = SidePanel::new(
//!     PanelConfig::new()
//!         .side(Side::Left)
//!         .width(200.0)
//!         .collapsed(true)
//!         .swipeable(true)
//!         .on_open(|_| println!("panel opened")),
//! )
//! .child(Node::text("Home"))
//! .child(Node::text("Settings"));
//!
//! panel.mount(HostPanel::new())?;
//! panel.update(panel.config().clone().open(true))?;
//! let element = panel.unmount()?;
//! ```

use tracing::{debug, trace};

use splitpane_element::{Node, PanelElement};

use crate::bind::{bind, unbind, Bindings};
use crate::config::PanelConfig;
use crate::error::{PanelError, Result};
use crate::project::project;
use crate::sync::sync_open_intent;

/// Exclusive reference to the element owned by a mounted panel
///
/// Created at mount and consumed at unmount. Not clonable, so one
/// component instance is the only holder for the mounted lifetime.
pub struct WidgetHandle<E> {
    element: E,
}

impl<E> WidgetHandle<E> {
    fn new(element: E) -> Self {
        Self { element }
    }

    fn into_inner(self) -> E {
        self.element
    }
}

/// A mounted element together with its lifecycle bindings
struct Mounted<E> {
    handle: WidgetHandle<E>,
    bindings: Bindings,
}

/// Declarative side panel bound to an imperative element
pub struct SidePanel<E: PanelElement> {
    config: PanelConfig,
    children: Vec<Node>,
    mounted: Option<Mounted<E>>,
}

impl<E: PanelElement> SidePanel<E> {
    /// Create an unmounted panel from its configuration
    pub fn new(config: PanelConfig) -> Self {
        Self {
            config,
            children: Vec::new(),
            mounted: None,
        }
    }

    /// Add content to the children slot
    ///
    /// Children are handed to the element unmodified at mount time.
    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    /// Current configuration
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Whether the panel currently owns an element
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Take ownership of `element` and bind to it
    ///
    /// Applies the attribute projection, hands over the children slot, and
    /// attaches the five lifecycle callbacks as captured in the current
    /// configuration. Issues no open/close command; intent reconciliation
    /// starts with the first [`SidePanel::update`].
    pub fn mount(&mut self, mut element: E) -> Result<()> {
        if self.mounted.is_some() {
            return Err(PanelError::AlreadyMounted);
        }

        element.apply_attributes(&project(&self.config));
        element.set_children(self.children.clone());
        let bindings = bind(&mut element, &self.config.callbacks);
        debug!(side = self.config.side.as_str(), "side panel mounted");

        self.mounted = Some(Mounted {
            handle: WidgetHandle::new(element),
            bindings,
        });
        Ok(())
    }

    /// Reconcile a new configuration with the mounted element
    ///
    /// Re-applies the attribute projection, then commands the element
    /// toward the declared open intent — in that order, so attributes
    /// reflect the new configuration before any open/close command runs.
    /// The command is issued on every update whether or not `is_open`
    /// changed.
    ///
    /// Lifecycle callbacks are NOT rebound: the identities captured at
    /// mount keep firing until unmount, even when `config` carries
    /// different ones. Remount to change callbacks.
    pub fn update(&mut self, config: PanelConfig) -> Result<()> {
        let mounted = self.mounted.as_mut().ok_or(PanelError::NotMounted)?;
        self.config = config;

        trace!("side panel update");
        let element = &mut mounted.handle.element;
        element.apply_attributes(&project(&self.config));
        sync_open_intent(element, self.config.is_open);
        Ok(())
    }

    /// Detach from the element and return it
    ///
    /// Removes exactly the five bindings attached at mount, on the same
    /// element; afterwards no callback can fire and the caller owns the
    /// element again.
    pub fn unmount(&mut self) -> Result<E> {
        let Mounted { handle, bindings } = self.mounted.take().ok_or(PanelError::NotMounted)?;
        let mut element = handle.into_inner();
        unbind(&mut element, bindings);
        debug!("side panel unmounted");
        Ok(element)
    }

    /// Access the mounted element
    ///
    /// For the host runtime that owns environmental input (viewport size
    /// and the like); fails when unmounted.
    pub fn element_mut(&mut self) -> Result<&mut E> {
        self.mounted
            .as_mut()
            .map(|mounted| &mut mounted.handle.element)
            .ok_or(PanelError::NotMounted)
    }

    /// Shared access to the mounted element
    pub fn element(&self) -> Result<&E> {
        self.mounted
            .as_ref()
            .map(|mounted| &mounted.handle.element)
            .ok_or(PanelError::NotMounted)
    }
}
