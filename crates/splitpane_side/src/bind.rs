//! Mount-scoped lifecycle event binding
//!
//! Attaches the five native-event-to-callback bindings when a panel mounts
//! and detaches the same five when it unmounts. Callback identities are
//! captured at bind time; a config change between mount and unmount does
//! not touch them.

use std::sync::Arc;

use smallvec::SmallVec;
use tracing::trace;

use splitpane_element::{ListenerId, PanelElement, PanelEventKind, PanelListener};

use crate::config::{PanelCallback, PanelCallbacks};

/// One native-event-to-callback binding held for the mounted lifetime
#[derive(Clone, Copy, Debug)]
pub(crate) struct EventBinding {
    pub(crate) kind: PanelEventKind,
    pub(crate) id: ListenerId,
}

/// The fixed set of bindings a mounted panel holds
pub(crate) type Bindings = SmallVec<[EventBinding; 5]>;

/// Attach the five lifecycle callbacks to `element`
///
/// An absent callback attaches as a no-op listener, so exactly five
/// bindings always exist and detach stays uniform.
pub(crate) fn bind<E: PanelElement>(element: &mut E, callbacks: &PanelCallbacks) -> Bindings {
    let pairs: [(PanelEventKind, Option<&PanelCallback>); 5] = [
        (PanelEventKind::PostOpen, callbacks.on_open.as_ref()),
        (PanelEventKind::PostClose, callbacks.on_close.as_ref()),
        (PanelEventKind::PreOpen, callbacks.on_pre_open.as_ref()),
        (PanelEventKind::PreClose, callbacks.on_pre_close.as_ref()),
        (PanelEventKind::ModeChange, callbacks.on_mode_change.as_ref()),
    ];

    pairs
        .into_iter()
        .map(|(kind, callback)| {
            let listener: PanelListener = match callback {
                Some(callback) => Arc::clone(callback),
                None => Arc::new(|_| {}),
            };
            EventBinding {
                kind,
                id: element.add_listener(kind, listener),
            }
        })
        .collect()
}

/// Detach bindings previously created by [`bind`] from the same element
pub(crate) fn unbind<E: PanelElement>(element: &mut E, bindings: Bindings) {
    for binding in bindings {
        trace!(event = binding.kind.name(), "detaching lifecycle binding");
        element.remove_listener(binding.id);
    }
}
