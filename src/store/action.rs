//! Action vocabulary and the wire envelope it decodes from.
//!
//! The typed [`Action`] enum is the closed vocabulary the reducer consumes.
//! External consumers program against [`ActionEnvelope`], a kind string
//! plus a kind-specific JSON payload; decoding is where a kind outside the
//! vocabulary surfaces as an [`ActionError::UnhandledKind`] fault.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::{CountryRef, HydrationSource, Trip};

/// Errors produced when decoding a wire envelope into a typed action.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The kind string is outside the closed vocabulary. Fatal to this
    /// dispatch; the caller decides whether to crash or degrade.
    #[error("unhandled action kind '{kind}'")]
    UnhandledKind { kind: String },

    /// The kind is known but the payload does not match its shape.
    #[error("invalid payload for action '{kind}': {source}")]
    InvalidPayload {
        kind: String,
        #[source]
        source: serde_json::Error,
    },

    /// The kind requires a payload and none was provided.
    #[error("missing payload for action '{kind}'")]
    MissingPayload { kind: String },
}

/// The closed action vocabulary of the trip store.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Reset the draft form and the country selection; keep trips and
    /// countries.
    SetInitial,
    /// Replace the trip collection wholesale (trip hydration completion).
    SetTrips(Vec<Trip>),
    /// Append a committed trip.
    AddTrip(Trip),
    /// Upsert by id: rebuild the trip with this `id` from the current form.
    EditTrip { id: u64 },
    /// Remove the trip with the given id; no-op when absent.
    RemoveTrip(u64),
    /// Replace the country list wholesale (country hydration completion).
    SetCountries(Vec<CountryRef>),
    /// Choose a country: sets the display token and the draft's country.
    SetSelectedCountry(String),
    SetCompanyName(String),
    SetStreet(String),
    SetStreetNumber(String),
    SetZip(String),
    SetCovid(Option<bool>),
    SetCity(String),
    SetStartDate(String),
    SetEndDate(String),
    /// Shallow-merge a partial draft; `address` merges one level deeper.
    SetForm(DraftPatch),
    /// A hydration routine failed; record it without touching the model.
    HydrationFailed {
        source: HydrationSource,
        message: String,
    },
}

impl Action {
    /// Wire kind string for this action.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SetInitial => "SET_INITIAL",
            Action::SetTrips(_) => "SET_TRIPS",
            Action::AddTrip(_) => "ADD_TRIP",
            Action::EditTrip { .. } => "EDIT_TRIP",
            Action::RemoveTrip(_) => "REMOVE_TRIP",
            Action::SetCountries(_) => "SET_COUNTRIES",
            Action::SetSelectedCountry(_) => "SET_SELECTED_COUNTRY",
            Action::SetCompanyName(_) => "SET_CompanyName",
            Action::SetStreet(_) => "SET_Street",
            Action::SetStreetNumber(_) => "SET_StreetNumber",
            Action::SetZip(_) => "SET_ZIP",
            Action::SetCovid(_) => "SET_Covid",
            Action::SetCity(_) => "SET_CITY",
            Action::SetStartDate(_) => "SET_StartDate",
            Action::SetEndDate(_) => "SET_EndDate",
            Action::SetForm(_) => "SET_FORM",
            Action::HydrationFailed { .. } => "HYDRATION_FAILED",
        }
    }
}

/// Partial draft used by `SET_FORM`. Absent fields are left untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DraftPatch {
    pub address: Option<AddressPatch>,
    pub company_name: Option<String>,
    pub covid: Option<bool>,
    pub covid_test_date: Option<String>,
    pub end_date: Option<String>,
    pub start_date: Option<String>,
}

/// Partial address used by `SET_FORM`; merged one level deep into the
/// draft's address.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AddressPatch {
    pub city: Option<String>,
    pub country: Option<String>,
    pub street: Option<String>,
    pub street_num: Option<String>,
    pub zip: Option<String>,
}

/// Wire form of an action: a kind string plus a kind-specific JSON payload.
///
/// This is the surface downstream consumers program against; decoding into
/// the typed [`Action`] happens at dispatch time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionEnvelope {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl ActionEnvelope {
    /// Envelope with a payload.
    pub fn new(kind: &str, payload: serde_json::Value) -> Self {
        Self {
            kind: kind.to_string(),
            payload: Some(payload),
        }
    }

    /// Envelope for a payload-less kind.
    pub fn bare(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            payload: None,
        }
    }
}

// Payload bodies for the single-field setters. The wire nests address
// leaves under an `address` object, mirroring the draft shape.
#[derive(Deserialize)]
struct AddressBody<T> {
    address: T,
}

#[derive(Deserialize)]
struct StreetField {
    street: String,
}

#[derive(Deserialize)]
struct StreetNumField {
    street_num: String,
}

#[derive(Deserialize)]
struct ZipField {
    zip: String,
}

#[derive(Deserialize)]
struct CityField {
    city: String,
}

#[derive(Deserialize)]
struct IdField {
    id: u64,
}

#[derive(Deserialize)]
struct CompanyNameField {
    company_name: String,
}

#[derive(Deserialize)]
struct CovidField {
    covid: Option<bool>,
}

#[derive(Deserialize)]
struct StartDateField {
    start_date: String,
}

#[derive(Deserialize)]
struct EndDateField {
    end_date: String,
}

fn decode<T: serde::de::DeserializeOwned>(
    kind: &str,
    payload: Option<serde_json::Value>,
) -> Result<T, ActionError> {
    let value = payload.ok_or_else(|| ActionError::MissingPayload {
        kind: kind.to_string(),
    })?;
    serde_json::from_value(value).map_err(|e| ActionError::InvalidPayload {
        kind: kind.to_string(),
        source: e,
    })
}

impl TryFrom<ActionEnvelope> for Action {
    type Error = ActionError;

    fn try_from(envelope: ActionEnvelope) -> Result<Self, Self::Error> {
        let ActionEnvelope { kind, payload } = envelope;
        let action = match kind.as_str() {
            "SET_INITIAL" => Action::SetInitial,
            "SET_TRIPS" => Action::SetTrips(decode(&kind, payload)?),
            "ADD_TRIP" => Action::AddTrip(decode(&kind, payload)?),
            "EDIT_TRIP" => {
                let IdField { id } = decode(&kind, payload)?;
                Action::EditTrip { id }
            }
            "REMOVE_TRIP" => Action::RemoveTrip(decode(&kind, payload)?),
            "SET_COUNTRIES" => Action::SetCountries(decode(&kind, payload)?),
            "SET_SELECTED_COUNTRY" => Action::SetSelectedCountry(decode(&kind, payload)?),
            "SET_CompanyName" => {
                let CompanyNameField { company_name } = decode(&kind, payload)?;
                Action::SetCompanyName(company_name)
            }
            "SET_Street" => {
                let AddressBody {
                    address: StreetField { street },
                } = decode(&kind, payload)?;
                Action::SetStreet(street)
            }
            "SET_StreetNumber" => {
                let AddressBody {
                    address: StreetNumField { street_num },
                } = decode(&kind, payload)?;
                Action::SetStreetNumber(street_num)
            }
            "SET_ZIP" => {
                let AddressBody {
                    address: ZipField { zip },
                } = decode(&kind, payload)?;
                Action::SetZip(zip)
            }
            "SET_Covid" => {
                let CovidField { covid } = decode(&kind, payload)?;
                Action::SetCovid(covid)
            }
            "SET_CITY" => {
                let AddressBody {
                    address: CityField { city },
                } = decode(&kind, payload)?;
                Action::SetCity(city)
            }
            "SET_StartDate" => {
                let StartDateField { start_date } = decode(&kind, payload)?;
                Action::SetStartDate(start_date)
            }
            "SET_EndDate" => {
                let EndDateField { end_date } = decode(&kind, payload)?;
                Action::SetEndDate(end_date)
            }
            "SET_FORM" => Action::SetForm(decode(&kind, payload)?),
            "HYDRATION_FAILED" => {
                #[derive(Deserialize)]
                struct FailureBody {
                    source: HydrationSource,
                    message: String,
                }
                let FailureBody { source, message } = decode(&kind, payload)?;
                Action::HydrationFailed { source, message }
            }
            _ => return Err(ActionError::UnhandledKind { kind: kind.clone() }),
        };
        Ok(action)
    }
}
