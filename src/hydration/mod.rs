//! Startup hydration: populate the store from the remote read endpoints.
//!
//! Two independent routines run exactly once per container start, each
//! producing a single completion or failure action on the dispatch channel.
//! The routines run concurrently with each other and with user-initiated
//! actions; neither retries, and neither is re-entered automatically.
//!
//! A cancellation token keys both routines to the container's lifetime:
//! the token is checked immediately before the action is submitted, so a
//! routine that completes after [`HydrationHandle::cancel`] submits
//! nothing against the stale container.

mod client;

pub use client::{ApiClient, CountryEntry, HydrationError};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::store::{Action, CountryRef, HydrationSource, TripStore};

/// Cancellation token shared between the container and its hydration tasks.
#[derive(Clone, Default)]
pub struct HydrationToken {
    cancelled: Arc<AtomicBool>,
}

impl HydrationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the owning container as gone; pending completions are dropped.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Handle to the two in-flight hydration tasks.
pub struct HydrationHandle {
    token: HydrationToken,
    trips: JoinHandle<()>,
    countries: JoinHandle<()>,
}

impl HydrationHandle {
    /// The token both tasks check before submitting their action.
    pub fn token(&self) -> HydrationToken {
        self.token.clone()
    }

    /// Stop results from landing in the store. In-flight requests are not
    /// interrupted; their completion actions are discarded.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Wait for both tasks to settle.
    pub async fn join(self) {
        let _ = self.trips.await;
        let _ = self.countries.await;
    }
}

/// Launch both hydration routines against the given store.
///
/// Called once at container start.
pub fn spawn(store: TripStore, api: ApiClient) -> HydrationHandle {
    let token = HydrationToken::new();

    let trips = tokio::spawn(hydrate_trips(
        store.clone(),
        api.clone(),
        token.clone(),
    ));
    let countries = tokio::spawn(hydrate_countries(store, api, token.clone()));

    HydrationHandle {
        token,
        trips,
        countries,
    }
}

async fn hydrate_trips(store: TripStore, api: ApiClient, token: HydrationToken) {
    let action = match api.fetch_trips().await {
        Ok(trips) => {
            tracing::info!(count = trips.len(), "trip hydration complete");
            Action::SetTrips(trips)
        }
        Err(err) => {
            tracing::warn!(error = %err, "trip hydration failed");
            Action::HydrationFailed {
                source: HydrationSource::Trips,
                message: err.to_string(),
            }
        }
    };

    if token.is_cancelled() {
        return;
    }
    store.dispatch(action);
}

async fn hydrate_countries(store: TripStore, api: ApiClient, token: HydrationToken) {
    let action = match api.fetch_countries().await {
        Ok(entries) => {
            let countries = sorted_country_refs(entries);
            tracing::info!(count = countries.len(), "country hydration complete");
            Action::SetCountries(countries)
        }
        Err(err) => {
            tracing::warn!(error = %err, "country hydration failed");
            Action::HydrationFailed {
                source: HydrationSource::Countries,
                message: err.to_string(),
            }
        }
    };

    if token.is_cancelled() {
        return;
    }
    store.dispatch(action);
}

/// Sort raw country rows ascending by label and derive their flag classes.
///
/// The comparator is byte-wise on the label, so the order is
/// locale-agnostic; the sort is stable, so ties keep their served order.
pub fn sorted_country_refs(mut entries: Vec<CountryEntry>) -> Vec<CountryRef> {
    entries.sort_by(|a, b| a.label.cmp(&b.label));
    entries
        .into_iter()
        .map(|entry| CountryRef::new(&entry.value, &entry.label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(value: &str, label: &str) -> CountryEntry {
        CountryEntry {
            value: value.to_string(),
            label: label.to_string(),
        }
    }

    #[test]
    fn countries_are_sorted_by_label() {
        let refs = sorted_country_refs(vec![
            entry("NO", "Norway"),
            entry("AT", "Austria"),
            entry("BR", "Brazil"),
        ]);

        let labels: Vec<_> = refs.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["Austria", "Brazil", "Norway"]);
    }

    #[test]
    fn flag_classes_are_derived_from_codes() {
        let refs = sorted_country_refs(vec![entry("BR", "Brazil")]);
        assert_eq!(refs[0].class_name, "flag-BR");
    }

    #[test]
    fn equal_labels_keep_served_order() {
        let refs = sorted_country_refs(vec![
            entry("B", "Same"),
            entry("A", "Aaa"),
            entry("C", "Same"),
        ]);

        let values: Vec<_> = refs.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, ["A", "B", "C"]);
    }

    #[test]
    fn token_starts_live_and_cancels_once() {
        let token = HydrationToken::new();
        assert!(!token.is_cancelled());

        let shared = token.clone();
        shared.cancel();
        assert!(token.is_cancelled());
    }
}
