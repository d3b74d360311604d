//! Observer registry
//!
//! Fan-out of state and metadata changes to an arbitrary number of
//! registered observers, with late-joiner replay of the last known view.
//! Delivery failures are isolated per observer.

use crate::types::{PlaybackState, PreparedMedia, QueueItem};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Receives session change notifications
///
/// `None` means "state unknown"; observers should relax to a neutral
/// display.
pub trait SessionObserver: Send {
    /// Playback state changed
    fn on_state_changed(&mut self, state: Option<&PlaybackState>);

    /// Current-item metadata changed
    fn on_metadata_changed(&mut self, media: Option<&PreparedMedia>);

    /// Queue contents changed
    fn on_queue_changed(&mut self, items: &[QueueItem]) {
        let _ = items;
    }
}

/// Handle for a registered observer, usable for later deregistration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverHandle(u64);

/// Broadcaster of session change events
///
/// Observers are delivered to in registration order. A newly registered
/// observer is synchronously replayed the last known state, metadata, and
/// queue so it never starts in a stale view.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<(ObserverHandle, Box<dyn SessionObserver>)>,
    next_handle: u64,

    last_state: Option<PlaybackState>,
    last_media: Option<PreparedMedia>,
    last_queue: Option<Vec<QueueItem>>,
}

impl ObserverRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer, replaying the last known view to it
    pub fn register(&mut self, mut observer: Box<dyn SessionObserver>) -> ObserverHandle {
        let handle = ObserverHandle(self.next_handle);
        self.next_handle += 1;

        if let Some(state) = self.last_state {
            deliver(handle, observer.as_mut(), |observer| {
                observer.on_state_changed(Some(&state));
            });
        }
        if let Some(media) = self.last_media.clone() {
            deliver(handle, observer.as_mut(), |observer| {
                observer.on_metadata_changed(Some(&media));
            });
        }
        if let Some(items) = self.last_queue.clone() {
            deliver(handle, observer.as_mut(), |observer| {
                observer.on_queue_changed(&items);
            });
        }

        self.observers.push((handle, observer));
        handle
    }

    /// Remove an observer
    ///
    /// Returns false if the handle was not registered.
    pub fn deregister(&mut self, handle: ObserverHandle) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(registered, _)| *registered != handle);
        self.observers.len() != before
    }

    /// Broadcast a playback state change
    pub fn broadcast_state(&mut self, state: PlaybackState) {
        self.last_state = Some(state);
        for (handle, observer) in &mut self.observers {
            deliver(*handle, observer.as_mut(), |observer| {
                observer.on_state_changed(Some(&state));
            });
        }
    }

    /// Broadcast a metadata change
    pub fn broadcast_metadata(&mut self, media: Option<&PreparedMedia>) {
        self.last_media = media.cloned();
        for (handle, observer) in &mut self.observers {
            deliver(*handle, observer.as_mut(), |observer| {
                observer.on_metadata_changed(media);
            });
        }
    }

    /// Broadcast the queue contents
    pub fn broadcast_queue(&mut self, items: &[QueueItem]) {
        self.last_queue = Some(items.to_vec());
        for (handle, observer) in &mut self.observers {
            deliver(*handle, observer.as_mut(), |observer| {
                observer.on_queue_changed(items);
            });
        }
    }

    /// Push a synthetic "state unknown" view to every observer
    ///
    /// Used on session teardown; also clears the replay caches so
    /// observers registered afterwards start neutral.
    pub fn reset_all(&mut self) {
        self.last_state = None;
        self.last_media = None;
        self.last_queue = None;
        for (handle, observer) in &mut self.observers {
            deliver(*handle, observer.as_mut(), |observer| {
                observer.on_state_changed(None);
                observer.on_metadata_changed(None);
            });
        }
    }

    /// Number of registered observers
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Check if no observers are registered
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

/// Invoke one observer, isolating a panic so the remaining observers
/// still receive the event
fn deliver<F>(handle: ObserverHandle, observer: &mut dyn SessionObserver, notify: F)
where
    F: FnOnce(&mut dyn SessionObserver),
{
    if catch_unwind(AssertUnwindSafe(|| notify(observer))).is_err() {
        tracing::warn!("observer {handle:?} panicked during delivery");
    }
}
