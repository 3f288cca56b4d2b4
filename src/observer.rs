//! State-change notifications for UI layers.
//!
//! Observer pattern over [`PlaybackState`] snapshots: the session notifies
//! registered observers after every mutation and on every poll tick while
//! playing. Observers only read snapshots; they never touch the tracks.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::player::PlaybackState;

/// An observer receiving playback state snapshots.
pub trait PlaybackObserver: Send + Sync {
    /// Called with a fresh snapshot after the state changed.
    fn on_state_change(&self, state: PlaybackState);
}

/// Fan-out of state snapshots to registered observers.
pub struct StateReporter {
    observers: RwLock<HashMap<usize, Arc<dyn PlaybackObserver>>>,
    next_id: AtomicUsize,
}

impl StateReporter {
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(HashMap::new()),
            next_id: AtomicUsize::new(0),
        }
    }

    /// Register an observer; the returned id removes it again.
    pub fn add_observer(&self, observer: Box<dyn PlaybackObserver>) -> usize {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.observers.write().insert(id, Arc::from(observer));
        id
    }

    /// Remove an observer by id.
    pub fn remove_observer(&self, id: usize) -> Option<Arc<dyn PlaybackObserver>> {
        self.observers.write().remove(&id)
    }

    /// Send a snapshot to every registered observer.
    ///
    /// The receiver list is snapshotted before any callback runs, so an
    /// observer may register or remove observers from inside
    /// `on_state_change` without deadlocking on the registry lock. An
    /// observer removed mid-notification still receives the in-flight
    /// snapshot.
    pub fn notify(&self, state: &PlaybackState) {
        let observers: Vec<Arc<dyn PlaybackObserver>> =
            self.observers.read().values().cloned().collect();
        for observer in observers {
            observer.on_state_change(state.clone());
        }
    }
}

impl Default for StateReporter {
    fn default() -> Self {
        Self::new()
    }
}
