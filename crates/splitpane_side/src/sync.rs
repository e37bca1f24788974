//! Per-update reconciliation of declarative open intent
//!
//! Open/closed state is element-owned and carries pre/post event
//! semantics, so it cannot be rendered as an attribute; it is commanded.

use tracing::trace;

use splitpane_element::PanelElement;

/// Drive the element toward the declared open intent
///
/// Runs on every update whether or not the intent changed; idempotence
/// when the element is already in the target state is delegated to the
/// element's `open`/`close` contract.
pub(crate) fn sync_open_intent<E: PanelElement>(element: &mut E, is_open: bool) {
    trace!(is_open, "syncing open intent");
    if is_open {
        element.open();
    } else {
        element.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use splitpane_element::HostPanel;

    #[test]
    fn test_sync_opens_and_closes() {
        let mut element = HostPanel::new();

        sync_open_intent(&mut element, true);
        assert!(element.is_open());

        sync_open_intent(&mut element, false);
        assert!(!element.is_open());
    }

    #[test]
    fn test_repeated_sync_is_stable() {
        let mut element = HostPanel::new();

        sync_open_intent(&mut element, true);
        sync_open_intent(&mut element, true);
        assert!(element.is_open());

        sync_open_intent(&mut element, false);
        sync_open_intent(&mut element, false);
        assert!(!element.is_open());
    }
}
