//! Dismissal watcher implementation
//!
//! Holds the pointer-down and key-down subscriptions that exist while the panel is
//! open. The watcher value *is* the ACTIVE state: constructing it registers both
//! listeners, dropping it deregisters both.

use crate::input::{EventKind, InputEvent, InputSurface, Position, Rect, Subscription};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Why the watcher asked for the panel to close
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DismissReason {
    /// Pointer pressed outside the panel region
    OutsidePointer,
    /// Escape key pressed
    EscapeKey,
}

impl fmt::Display for DismissReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DismissReason::OutsidePointer => f.write_str("pointer outside panel"),
            DismissReason::EscapeKey => f.write_str("escape key"),
        }
    }
}

/// Listener pair observing outside clicks and Escape while the panel is open
#[derive(Debug)]
pub struct DismissalWatcher {
    pointer: Subscription,
    key: Subscription,
    region: Option<Rect>,
}

impl DismissalWatcher {
    /// Register both listeners on `surface`
    ///
    /// `region` is the panel's rendered rectangle captured for this open cycle. When
    /// it is `None` (panel not laid out) pointer presses never dismiss; Escape still
    /// does. `on_dismiss` may run more than once if several qualifying events arrive
    /// before the watcher is dropped, so it must be idempotent.
    pub fn activate<F>(surface: &InputSurface, region: Option<Rect>, on_dismiss: F) -> Self
    where
        F: Fn(DismissReason) + Send + Sync + 'static,
    {
        let on_dismiss = Arc::new(on_dismiss);

        let pointer = {
            let on_dismiss = Arc::clone(&on_dismiss);
            surface.subscribe(EventKind::PointerDown, move |event| {
                if let InputEvent::PointerDown { position } = event
                    && is_outside(region, *position)
                {
                    on_dismiss(DismissReason::OutsidePointer);
                }
            })
        };

        let key = surface.subscribe(EventKind::KeyDown, move |event| {
            if let InputEvent::KeyDown { key } = event
                && key.is_escape()
            {
                on_dismiss(DismissReason::EscapeKey);
            }
        });

        debug!(
            "Dismissal watcher active (pointer {}, key {}, region {:?})",
            pointer.id(),
            key.id(),
            region
        );

        Self {
            pointer,
            key,
            region,
        }
    }

    /// Region captured when the watcher was activated
    pub fn region(&self) -> Option<Rect> {
        self.region
    }

    /// Whether both listeners are still registered
    pub fn is_active(&self) -> bool {
        self.pointer.is_active() && self.key.is_active()
    }
}

impl Drop for DismissalWatcher {
    fn drop(&mut self) {
        debug!(
            "Releasing dismissal watcher (pointer {}, key {})",
            self.pointer.id(),
            self.key.id()
        );
    }
}

fn is_outside(region: Option<Rect>, position: Position) -> bool {
    region.is_some_and(|rect| !rect.contains(position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use parking_lot::Mutex;

    fn recording_watcher(
        surface: &InputSurface,
        region: Option<Rect>,
    ) -> (DismissalWatcher, Arc<Mutex<Vec<DismissReason>>>) {
        let reasons = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&reasons);
        let watcher = DismissalWatcher::activate(surface, region, move |reason| {
            sink.lock().push(reason);
        });
        (watcher, reasons)
    }

    #[test]
    fn test_activate_registers_pair() {
        let surface = InputSurface::new();
        let (watcher, _) = recording_watcher(&surface, Some(Rect::new(0, 0, 10, 10)));

        assert!(watcher.is_active());
        assert_eq!(surface.listener_count_for(EventKind::PointerDown), 1);
        assert_eq!(surface.listener_count_for(EventKind::KeyDown), 1);

        drop(watcher);
        assert_eq!(surface.listener_count(), 0);
    }

    #[test]
    fn test_pointer_inside_region_is_ignored() {
        let surface = InputSurface::new();
        let (_watcher, reasons) = recording_watcher(&surface, Some(Rect::new(0, 0, 100, 100)));

        surface.dispatch(&InputEvent::pointer_down(50, 50));
        assert!(reasons.lock().is_empty());
    }

    #[test]
    fn test_pointer_outside_region_dismisses() {
        let surface = InputSurface::new();
        let (_watcher, reasons) = recording_watcher(&surface, Some(Rect::new(0, 0, 100, 100)));

        surface.dispatch(&InputEvent::pointer_down(150, 50));
        assert_eq!(*reasons.lock(), vec![DismissReason::OutsidePointer]);
    }

    #[test]
    fn test_missing_region_never_dismisses_on_pointer() {
        let surface = InputSurface::new();
        let (_watcher, reasons) = recording_watcher(&surface, None);

        surface.dispatch(&InputEvent::pointer_down(-500, 9000));
        assert!(reasons.lock().is_empty());

        surface.dispatch(&InputEvent::key_down(Key::Escape));
        assert_eq!(*reasons.lock(), vec![DismissReason::EscapeKey]);
    }

    #[test]
    fn test_only_escape_key_dismisses() {
        let surface = InputSurface::new();
        let (_watcher, reasons) = recording_watcher(&surface, Some(Rect::new(0, 0, 1, 1)));

        surface.dispatch(&InputEvent::key_down(Key::Enter));
        surface.dispatch(&InputEvent::key_down(Key::Char('q')));
        surface.dispatch(&InputEvent::key_down(Key::Named("Esc-ish".to_string())));
        assert!(reasons.lock().is_empty());

        surface.dispatch(&InputEvent::key_down(Key::Escape));
        assert_eq!(*reasons.lock(), vec![DismissReason::EscapeKey]);
    }

    #[test]
    fn test_dropped_watcher_sees_nothing() {
        let surface = InputSurface::new();
        let (watcher, reasons) = recording_watcher(&surface, Some(Rect::new(0, 0, 10, 10)));
        drop(watcher);

        surface.dispatch(&InputEvent::pointer_down(500, 500));
        surface.dispatch(&InputEvent::key_down(Key::Escape));
        assert!(reasons.lock().is_empty());
    }

    #[test]
    fn test_region_is_fixed_per_activation() {
        let surface = InputSurface::new();
        let (first, _) = recording_watcher(&surface, Some(Rect::new(0, 0, 10, 10)));
        assert_eq!(first.region(), Some(Rect::new(0, 0, 10, 10)));
        drop(first);

        let (second, reasons) = recording_watcher(&surface, Some(Rect::new(100, 0, 10, 10)));
        assert_eq!(second.region(), Some(Rect::new(100, 0, 10, 10)));

        // Inside the old region, outside the new one
        surface.dispatch(&InputEvent::pointer_down(5, 5));
        assert_eq!(*reasons.lock(), vec![DismissReason::OutsidePointer]);
    }
}
