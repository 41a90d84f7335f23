//! Thread-safe state container and dispatch channel.
//!
//! The container owns the one live [`TripState`] value. Every state change,
//! whether from hydration or from user interaction, is requested through
//! [`TripStore::dispatch`], which serializes concurrent submissions on the
//! state lock into one logical order of updates.

use std::sync::Arc;

use parking_lot::RwLock;

use super::action::{Action, ActionEnvelope, ActionError};
use super::reducer::TripReducer;
use super::state::{CountryRef, Draft, Trip, TripState};
use super::Reducer;

/// Shared handle to the live trip state and its dispatch entry point.
///
/// Cheap to clone; all clones observe the same state. Consumers read
/// snapshots and submit actions — only the transition engine mutates the
/// state, exactly one transition at a time.
#[derive(Clone, Default)]
pub struct TripStore {
    inner: Arc<RwLock<TripState>>,
}

impl TripStore {
    /// Create a store holding the default (empty) state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with an explicit state value.
    pub fn with_state(state: TripState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(state)),
        }
    }

    /// Apply a typed action through the transition engine.
    ///
    /// Actions are applied strictly in the order their dispatch acquires
    /// the write lock; there is no reordering or batching. A suspended
    /// asynchronous task never holds the lock across an await point.
    pub fn dispatch(&self, action: Action) {
        let kind = action.kind();
        let mut guard = self.inner.write();
        let current = std::mem::take(&mut *guard);
        *guard = TripReducer::reduce(current, action);
        drop(guard);
        tracing::debug!(action = kind, "state transition applied");
    }

    /// Decode a wire envelope and apply it.
    ///
    /// # Errors
    /// Returns [`ActionError::UnhandledKind`] for a kind outside the closed
    /// vocabulary, or a payload error for a malformed body. The state is
    /// left untouched on error.
    pub fn dispatch_envelope(&self, envelope: ActionEnvelope) -> Result<(), ActionError> {
        let action = Action::try_from(envelope)?;
        self.dispatch(action);
        Ok(())
    }

    /// Snapshot of the full current state.
    pub fn state(&self) -> TripState {
        self.inner.read().clone()
    }

    /// Snapshot of the committed trips.
    pub fn trips(&self) -> Vec<Trip> {
        self.inner.read().trips.clone()
    }

    /// Snapshot of the country reference list.
    pub fn countries(&self) -> Vec<CountryRef> {
        self.inner.read().countries.clone()
    }

    /// Snapshot of the in-progress draft.
    pub fn form(&self) -> Draft {
        self.inner.read().form.clone()
    }

    /// The current country display token (`flag-<code>`, empty when none).
    pub fn selected_country(&self) -> String {
        self.inner.read().selected_country.clone()
    }
}
