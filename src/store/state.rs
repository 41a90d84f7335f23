//! Data model for the trip store.

use serde::{Deserialize, Serialize};

/// Build the display token for a country code, e.g. `flag-BR`.
pub fn flag_class(code: &str) -> String {
    format!("flag-{}", code)
}

/// A committed trip record.
///
/// `id` is assigned by the remote store before the record is merged into
/// the collection; this core never generates identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: u64,
    pub company_name: String,
    pub address: Address,
    pub covid: Option<bool>,
    pub covid_test_date: String,
    pub start_date: String,
    pub end_date: String,
}

impl Trip {
    /// Build a committed record from the draft form plus an externally
    /// assigned id.
    pub fn from_draft(draft: Draft, id: u64) -> Self {
        Self {
            id,
            company_name: draft.company_name,
            address: draft.address,
            covid: draft.covid,
            covid_test_date: draft.covid_test_date,
            start_date: draft.start_date,
            end_date: draft.end_date,
        }
    }
}

/// Postal address fields. Plain text; no format constraints are enforced.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub country: String,
    pub street: String,
    pub street_num: String,
    pub zip: String,
}

/// The single in-progress editable trip, before commit.
///
/// Shape is [`Trip`] minus `id`. The default value is the canonical empty
/// draft that `SET_INITIAL` resets to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Draft {
    pub address: Address,
    pub company_name: String,
    pub covid: Option<bool>,
    pub covid_test_date: String,
    pub end_date: String,
    pub start_date: String,
}

/// A country reference entry used to populate the draft form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRef {
    pub value: String,
    pub label: String,
    /// Display class, always `flag-<value>`. Serialized as `className`
    /// to match the wire format of the country list.
    #[serde(rename = "className")]
    pub class_name: String,
}

impl CountryRef {
    /// Build an entry, deriving the flag class from the code.
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            class_name: flag_class(value),
        }
    }
}

/// Which hydration routine produced a failure record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HydrationSource {
    Trips,
    Countries,
}

impl std::fmt::Display for HydrationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HydrationSource::Trips => write!(f, "trips"),
            HydrationSource::Countries => write!(f, "countries"),
        }
    }
}

/// Record of a failed hydration attempt.
///
/// A failure never corrupts existing state; the record is the
/// consumer-visible signal that a collection may be unpopulated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrationFailure {
    pub source: HydrationSource,
    pub message: String,
}

/// The complete in-memory model owned by the container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TripState {
    /// Committed trip records, unique by `id`.
    pub trips: Vec<Trip>,
    /// The in-progress editable record.
    pub form: Draft,
    /// Country reference list, sorted ascending by `label`.
    pub countries: Vec<CountryRef>,
    /// Display token of the chosen country (`flag-<code>`); empty when
    /// no country has been chosen.
    pub selected_country: String,
    /// Failed hydration attempts, oldest first.
    pub hydration_failures: Vec<HydrationFailure>,
}

impl TripState {
    /// Look up a committed trip by id.
    pub fn trip(&self, id: u64) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id == id)
    }

    /// Whether a country has been chosen at least once.
    pub fn has_selection(&self) -> bool {
        !self.selected_country.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_empty() {
        let state = TripState::default();
        assert!(state.trips.is_empty());
        assert!(state.countries.is_empty());
        assert_eq!(state.form, Draft::default());
        assert_eq!(state.selected_country, "");
        assert!(!state.has_selection());
    }

    #[test]
    fn flag_class_prefixes_code() {
        assert_eq!(flag_class("BR"), "flag-BR");
        assert_eq!(flag_class(""), "flag-");
    }

    #[test]
    fn country_ref_derives_class_name() {
        let country = CountryRef::new("AT", "Austria");
        assert_eq!(country.value, "AT");
        assert_eq!(country.label, "Austria");
        assert_eq!(country.class_name, "flag-AT");
    }

    #[test]
    fn country_ref_serializes_class_name_as_className() {
        let country = CountryRef::new("NO", "Norway");
        let json = serde_json::to_value(&country).unwrap();
        assert_eq!(json["className"], "flag-NO");
    }

    #[test]
    fn from_draft_carries_every_field() {
        let draft = Draft {
            address: Address {
                city: "Oslo".to_string(),
                country: "NO".to_string(),
                street: "Karl Johans gate".to_string(),
                street_num: "7".to_string(),
                zip: "0154".to_string(),
            },
            company_name: "Acme".to_string(),
            covid: Some(true),
            covid_test_date: "2021-05-01".to_string(),
            end_date: "2021-06-14".to_string(),
            start_date: "2021-06-01".to_string(),
        };

        let trip = Trip::from_draft(draft.clone(), 42);
        assert_eq!(trip.id, 42);
        assert_eq!(trip.company_name, draft.company_name);
        assert_eq!(trip.address, draft.address);
        assert_eq!(trip.covid, draft.covid);
        assert_eq!(trip.covid_test_date, draft.covid_test_date);
        assert_eq!(trip.start_date, draft.start_date);
        assert_eq!(trip.end_date, draft.end_date);
    }

    #[test]
    fn trip_lookup_by_id() {
        let state = TripState {
            trips: vec![Trip::from_draft(Draft::default(), 7)],
            ..TripState::default()
        };
        assert!(state.trip(7).is_some());
        assert!(state.trip(8).is_none());
    }
}
