//!  SwiftTrip
//!
//!  Copyright (C) 2026  The SwiftTrip developers
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! # Result Aggregator
//!
//! Fans one trip search out into up to three concurrent category searches
//! and folds the results back into the application state. Categories are
//! independent: no ordering, no streaming, and one category's failure never
//! blanks the other two.

use crate::app_state::AppState;
use crate::cars_query_builder::CarQuery;
use crate::flights_query_builder::FlightQuery;
use crate::hotels_query_builder::HotelQuery;
use crate::search_gateway::{GatewayError, SearchCategory, SearchGateway};

#[derive(Debug)]
pub struct CategoryFailure {
    pub category: SearchCategory,
    pub error: GatewayError,
}

#[derive(Debug)]
pub enum SearchOutcome {
    /// Origin, destination or departure date missing; nothing was issued and
    /// the state was left untouched.
    NotReady,
    Completed { failures: Vec<CategoryFailure> },
}

impl SearchOutcome {
    pub fn is_not_ready(&self) -> bool {
        matches!(self, SearchOutcome::NotReady)
    }

    pub fn failures(&self) -> &[CategoryFailure] {
        match self {
            SearchOutcome::NotReady => &[],
            SearchOutcome::Completed { failures } => failures,
        }
    }
}

/// Run one search for the current criteria.
///
/// On entry the result lists and selections are cleared and the criteria is
/// recorded in the recent-search history; each enabled category then
/// populates its own list when its request resolves. `is_searching` is reset
/// once every attempted request has completed, success or failure.
pub async fn run_search<G: SearchGateway>(gateway: &G, state: &mut AppState) -> SearchOutcome {
    let Some(flight_query) = FlightQuery::from_criteria(&state.criteria) else {
        tracing::debug!("Search skipped: origin, destination and departure date are required");
        return SearchOutcome::NotReady;
    };
    let hotel_query = HotelQuery::from_criteria(&state.criteria);
    let car_query = CarQuery::from_criteria(&state.criteria);

    state.is_searching = true;
    state.flights.clear();
    state.hotels.clear();
    state.cars.clear();
    state.selection.clear();
    state.preferences.push_recent(state.criteria.clone());

    tracing::info!(
        "Searching {} -> {} departing {} (hotels: {}, cars: {})",
        flight_query.origin,
        flight_query.destination,
        flight_query.departure_date,
        hotel_query.is_some(),
        car_query.is_some()
    );

    let flights_fut = gateway.search_flights(&flight_query);
    let hotels_fut = async {
        match hotel_query.as_ref() {
            Some(query) => Some(gateway.search_hotels(query).await),
            None => None,
        }
    };
    let cars_fut = async {
        match car_query.as_ref() {
            Some(query) => Some(gateway.search_cars(query).await),
            None => None,
        }
    };

    let (flights_result, hotels_result, cars_result) =
        tokio::join!(flights_fut, hotels_fut, cars_fut);

    let mut failures = Vec::new();
    match flights_result {
        Ok(flights) => state.flights = flights,
        Err(error) => {
            tracing::warn!("Flight search failed: {}", error);
            failures.push(CategoryFailure {
                category: SearchCategory::Flights,
                error,
            });
        }
    }
    if let Some(result) = hotels_result {
        match result {
            Ok(hotels) => state.hotels = hotels,
            Err(error) => {
                tracing::warn!("Hotel search failed: {}", error);
                failures.push(CategoryFailure {
                    category: SearchCategory::Hotels,
                    error,
                });
            }
        }
    }
    if let Some(result) = cars_result {
        match result {
            Ok(cars) => state.cars = cars,
            Err(error) => {
                tracing::warn!("Car search failed: {}", error);
                failures.push(CategoryFailure {
                    category: SearchCategory::Cars,
                    error,
                });
            }
        }
    }

    state.is_searching = false;
    tracing::info!(
        "Search complete: {} flights, {} hotels, {} cars ({} category failures)",
        state.flights.len(),
        state.hotels.len(),
        state.cars.len(),
        failures.len()
    );

    SearchOutcome::Completed { failures }
}
