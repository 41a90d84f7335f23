//! Client-side state core for a trip record collection.
//!
//! The crate is built around three pieces:
//!
//! - [`store`] — the data model, the closed action vocabulary, the pure
//!   transition engine, and the [`store::TripStore`] container that
//!   serializes every state change through one dispatch entry point.
//! - [`hydration`] — two one-shot asynchronous routines that populate the
//!   model from the remote `/trip` and `/country` read endpoints.
//! - [`config`] — TOML configuration for the endpoint location and timeouts.

pub mod config;
pub mod hydration;
pub mod store;
