//! Unidirectional state management for the trip model.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Consumers
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of the trip model
//! - **Action**: user edits, hydration completions and failures
//! - **Reducer**: pure function that transforms state per action
//! - **Container**: owns the live state and the single dispatch entry point

mod action;
mod container;
mod reducer;
mod state;

pub use action::{Action, ActionEnvelope, ActionError, AddressPatch, DraftPatch};
pub use container::TripStore;
pub use reducer::TripReducer;
pub use state::{
    flag_class, Address, CountryRef, Draft, HydrationFailure, HydrationSource, Trip, TripState,
};

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: Clone + PartialEq + Default + Send + 'static;

    /// The action type this reducer handles.
    type Action: Send + 'static;

    /// Process an action and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}
