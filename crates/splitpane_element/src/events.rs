//! Panel lifecycle event dispatch
//!
//! Event model for the five native events a panel element emits
//! (`preopen`, `postopen`, `preclose`, `postclose`, `modechange`) and a
//! dispatcher whose registrations hand back an id, so a listener can be
//! detached symmetrically with the registration that created it.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::element::PanelMode;

/// Lifecycle events emitted by a panel element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelEventKind {
    /// Emitted before the open transition starts
    PreOpen,
    /// Emitted after the open transition finishes
    PostOpen,
    /// Emitted before the close transition starts
    PreClose,
    /// Emitted after the close transition finishes
    PostClose,
    /// Emitted when the element switches between collapse and split mode
    ModeChange,
}

impl PanelEventKind {
    /// All five lifecycle events, in the order the bridge binds them
    pub const ALL: [PanelEventKind; 5] = [
        PanelEventKind::PostOpen,
        PanelEventKind::PostClose,
        PanelEventKind::PreOpen,
        PanelEventKind::PreClose,
        PanelEventKind::ModeChange,
    ];

    /// Native event name used by the element
    pub fn name(&self) -> &'static str {
        match self {
            PanelEventKind::PreOpen => "preopen",
            PanelEventKind::PostOpen => "postopen",
            PanelEventKind::PreClose => "preclose",
            PanelEventKind::PostClose => "postclose",
            PanelEventKind::ModeChange => "modechange",
        }
    }
}

/// A lifecycle event with associated data
#[derive(Clone, Debug, PartialEq)]
pub struct PanelEvent {
    pub kind: PanelEventKind,
    pub data: PanelEventData,
}

/// Event-specific data
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanelEventData {
    /// Mode the element switched to
    ModeChange { mode: PanelMode },
    None,
}

impl PanelEvent {
    /// Event without a payload (the open/close lifecycle events)
    pub fn new(kind: PanelEventKind) -> Self {
        Self {
            kind,
            data: PanelEventData::None,
        }
    }

    /// `modechange` event carrying the mode the element switched to
    pub fn mode_change(mode: PanelMode) -> Self {
        Self {
            kind: PanelEventKind::ModeChange,
            data: PanelEventData::ModeChange { mode },
        }
    }

    /// Mode carried by a `modechange` event, if any
    pub fn mode(&self) -> Option<PanelMode> {
        match self.data {
            PanelEventData::ModeChange { mode } => Some(mode),
            PanelEventData::None => None,
        }
    }
}

/// Listener function type
pub type PanelListener = Arc<dyn Fn(&PanelEvent) + Send + Sync>;

new_key_type! {
    /// Identity of a single listener registration
    pub struct ListenerId;
}

struct ListenerEntry {
    kind: PanelEventKind,
    listener: PanelListener,
}

/// Dispatches panel events to registered listeners
///
/// Listeners for one event kind run in registration order. Removing a
/// [`ListenerId`] detaches exactly the listener its registration created;
/// removing an unknown id is a harmless no-op.
pub struct EventDispatcher {
    listeners: SlotMap<ListenerId, ListenerEntry>,
    by_kind: FxHashMap<PanelEventKind, SmallVec<[ListenerId; 4]>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            listeners: SlotMap::with_key(),
            by_kind: FxHashMap::default(),
        }
    }

    /// Register a listener for an event kind
    pub fn register(&mut self, kind: PanelEventKind, listener: PanelListener) -> ListenerId {
        let id = self.listeners.insert(ListenerEntry { kind, listener });
        self.by_kind.entry(kind).or_default().push(id);
        id
    }

    /// Remove a previously registered listener
    ///
    /// Returns `false` when the id was already removed or never registered.
    pub fn unregister(&mut self, id: ListenerId) -> bool {
        let Some(entry) = self.listeners.remove(id) else {
            tracing::debug!(?id, "unregister for unknown listener id");
            return false;
        };
        if let Some(ids) = self.by_kind.get_mut(&entry.kind) {
            ids.retain(|known| *known != id);
        }
        true
    }

    /// Dispatch an event to its listeners in registration order
    pub fn emit(&self, event: &PanelEvent) {
        let Some(ids) = self.by_kind.get(&event.kind) else {
            return;
        };
        for id in ids {
            if let Some(entry) = self.listeners.get(*id) {
                (entry.listener)(event);
            }
        }
    }

    /// Number of live registrations across all event kinds
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Check if no listeners are registered
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Number of live registrations for one event kind
    pub fn len_for(&self, kind: PanelEventKind) -> usize {
        self.by_kind.get(&kind).map_or(0, |ids| ids.len())
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn push_listener(log: &Arc<Mutex<Vec<&'static str>>>, tag: &'static str) -> PanelListener {
        let log = log.clone();
        Arc::new(move |_event: &PanelEvent| log.lock().unwrap().push(tag))
    }

    #[test]
    fn test_register_and_emit() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut dispatcher = EventDispatcher::new();

        dispatcher.register(PanelEventKind::PostOpen, push_listener(&log, "open"));

        dispatcher.emit(&PanelEvent::new(PanelEventKind::PostOpen));
        assert_eq!(log.lock().unwrap().as_slice(), &["open"]);
    }

    #[test]
    fn test_emit_without_listeners_is_noop() {
        let dispatcher = EventDispatcher::new();
        dispatcher.emit(&PanelEvent::new(PanelEventKind::PreClose));
    }

    #[test]
    fn test_emit_only_reaches_matching_kind() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut dispatcher = EventDispatcher::new();

        dispatcher.register(PanelEventKind::PostOpen, push_listener(&log, "open"));
        dispatcher.register(PanelEventKind::PostClose, push_listener(&log, "close"));

        dispatcher.emit(&PanelEvent::new(PanelEventKind::PostClose));
        assert_eq!(log.lock().unwrap().as_slice(), &["close"]);
    }

    #[test]
    fn test_registration_order_preserved() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut dispatcher = EventDispatcher::new();

        dispatcher.register(PanelEventKind::PreOpen, push_listener(&log, "first"));
        dispatcher.register(PanelEventKind::PreOpen, push_listener(&log, "second"));

        dispatcher.emit(&PanelEvent::new(PanelEventKind::PreOpen));
        assert_eq!(log.lock().unwrap().as_slice(), &["first", "second"]);
    }

    #[test]
    fn test_unregister_detaches_listener() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut dispatcher = EventDispatcher::new();

        let id = dispatcher.register(PanelEventKind::PostOpen, push_listener(&log, "open"));
        assert_eq!(dispatcher.len(), 1);

        assert!(dispatcher.unregister(id));
        assert!(dispatcher.is_empty());

        dispatcher.emit(&PanelEvent::new(PanelEventKind::PostOpen));
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_unregister_unknown_id_returns_false() {
        let mut dispatcher = EventDispatcher::new();
        let id = dispatcher.register(PanelEventKind::ModeChange, Arc::new(|_| {}));

        assert!(dispatcher.unregister(id));
        assert!(!dispatcher.unregister(id));
    }

    #[test]
    fn test_len_for_counts_per_kind() {
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(PanelEventKind::PreOpen, Arc::new(|_| {}));
        dispatcher.register(PanelEventKind::PreOpen, Arc::new(|_| {}));
        dispatcher.register(PanelEventKind::PreClose, Arc::new(|_| {}));

        assert_eq!(dispatcher.len_for(PanelEventKind::PreOpen), 2);
        assert_eq!(dispatcher.len_for(PanelEventKind::PreClose), 1);
        assert_eq!(dispatcher.len_for(PanelEventKind::ModeChange), 0);
        assert_eq!(dispatcher.len(), 3);
    }

    #[test]
    fn test_mode_change_event_carries_mode() {
        let event = PanelEvent::mode_change(PanelMode::Collapse);
        assert_eq!(event.kind, PanelEventKind::ModeChange);
        assert_eq!(event.mode(), Some(PanelMode::Collapse));

        let event = PanelEvent::new(PanelEventKind::PostOpen);
        assert_eq!(event.mode(), None);
    }

    #[test]
    fn test_event_names() {
        let names: Vec<&str> = PanelEventKind::ALL.iter().map(|kind| kind.name()).collect();
        assert_eq!(
            names,
            vec!["postopen", "postclose", "preopen", "preclose", "modechange"]
        );
    }
}
