//! The pure transition engine for the trip model.

use super::action::Action;
use super::state::{flag_class, Draft, HydrationFailure, Trip, TripState};
use super::Reducer;

/// Reducer for the trip model.
///
/// Pure function; all side effects (network calls, logging, lock handling)
/// are handled by the container around the dispatch call. The reducer
/// consumes the old state and returns an owned successor, so no data is
/// ever shared between the two.
pub struct TripReducer;

impl Reducer for TripReducer {
    type State = TripState;
    type Action = Action;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            Action::SetInitial => TripState {
                form: Draft::default(),
                selected_country: String::new(),
                ..state
            },

            Action::SetTrips(trips) => TripState { trips, ..state },

            Action::AddTrip(trip) => {
                let mut trips = state.trips;
                trips.push(trip);
                TripState { trips, ..state }
            }

            Action::EditTrip { id } => {
                // The incoming id is authoritative: full replacement of any
                // existing trip with that id, not a field merge.
                let trip = Trip::from_draft(state.form.clone(), id);
                let mut trips = state.trips;
                trips.retain(|t| t.id != id);
                trips.push(trip);
                TripState { trips, ..state }
            }

            Action::RemoveTrip(id) => {
                let mut trips = state.trips;
                trips.retain(|t| t.id != id);
                TripState { trips, ..state }
            }

            Action::SetCountries(countries) => TripState { countries, ..state },

            Action::SetSelectedCountry(code) => {
                let mut form = state.form;
                form.address.country = code.clone();
                TripState {
                    form,
                    selected_country: flag_class(&code),
                    ..state
                }
            }

            Action::SetCompanyName(company_name) => {
                let mut form = state.form;
                form.company_name = company_name;
                TripState { form, ..state }
            }

            Action::SetStreet(street) => {
                let mut form = state.form;
                form.address.street = street;
                TripState { form, ..state }
            }

            Action::SetStreetNumber(street_num) => {
                let mut form = state.form;
                form.address.street_num = street_num;
                TripState { form, ..state }
            }

            Action::SetZip(zip) => {
                let mut form = state.form;
                form.address.zip = zip;
                TripState { form, ..state }
            }

            Action::SetCovid(covid) => {
                let mut form = state.form;
                form.covid = covid;
                TripState { form, ..state }
            }

            Action::SetCity(city) => {
                let mut form = state.form;
                form.address.city = city;
                TripState { form, ..state }
            }

            Action::SetStartDate(start_date) => {
                let mut form = state.form;
                form.start_date = start_date;
                TripState { form, ..state }
            }

            Action::SetEndDate(end_date) => {
                let mut form = state.form;
                form.end_date = end_date;
                TripState { form, ..state }
            }

            Action::SetForm(patch) => {
                let mut form = state.form;
                let mut selected_country = state.selected_country;

                if let Some(company_name) = patch.company_name {
                    form.company_name = company_name;
                }
                if let Some(covid) = patch.covid {
                    form.covid = Some(covid);
                }
                if let Some(covid_test_date) = patch.covid_test_date {
                    form.covid_test_date = covid_test_date;
                }
                if let Some(start_date) = patch.start_date {
                    form.start_date = start_date;
                }
                if let Some(end_date) = patch.end_date {
                    form.end_date = end_date;
                }
                if let Some(address) = patch.address {
                    // The selection token only moves when the patch
                    // actually carries a country.
                    if let Some(country) = address.country {
                        selected_country = flag_class(&country);
                        form.address.country = country;
                    }
                    if let Some(city) = address.city {
                        form.address.city = city;
                    }
                    if let Some(street) = address.street {
                        form.address.street = street;
                    }
                    if let Some(street_num) = address.street_num {
                        form.address.street_num = street_num;
                    }
                    if let Some(zip) = address.zip {
                        form.address.zip = zip;
                    }
                }

                TripState {
                    form,
                    selected_country,
                    ..state
                }
            }

            Action::HydrationFailed { source, message } => {
                let mut hydration_failures = state.hydration_failures;
                hydration_failures.push(HydrationFailure { source, message });
                TripState {
                    hydration_failures,
                    ..state
                }
            }
        }
    }
}
