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

// Library for swifttrip-trip-planner
// Trip search, selection tracking and booking handoff for flights, hotels
// and car rentals.

mod aggregator;
mod app_state;
mod booking;
mod cars_query_builder;
mod cars_results_parser;
mod date_suggestions;
mod flights_query_builder;
mod flights_results_parser;
mod hotels_query_builder;
mod hotels_results_parser;
mod locations_lookup;
mod money;
mod preferences;
mod search_client;
mod search_gateway;
mod selection;
mod trip_criteria;

pub use aggregator::{CategoryFailure, SearchOutcome, run_search};
pub use app_state::{AppState, CategoryStatus};
pub use booking::{
    BookingError, DispatchedBooking, SystemUrlOpener, UrlOpener, dispatch_booking,
};
pub use cars_query_builder::CarQuery;
pub use cars_results_parser::{CarRental, MAX_CAR_RESULTS, Transmission, parse_cars_response};
pub use date_suggestions::{DateSuggestion, quick_date_suggestions};
pub use flights_query_builder::FlightQuery;
pub use flights_results_parser::{
    Badge, FlightItinerary, FlightLeg, MAX_FLIGHT_RESULTS, fmt_duration, parse_flights_response,
    stops_label,
};
pub use hotels_query_builder::HotelQuery;
pub use hotels_results_parser::{Hotel, MAX_HOTEL_RESULTS, parse_hotels_response};
pub use locations_lookup::{
    Airport, AutocompleteField, MIN_QUERY_CHARS, parse_locations_response, popular_destinations,
};
pub use money::{Price, format_amount};
pub use preferences::{PreferencesFile, RECENT_SEARCH_LIMIT, SavedPreferences};
pub use search_client::{DEFAULT_BASE_URL, TravelApiClient};
pub use search_gateway::{GatewayError, SearchCategory, SearchGateway};
pub use selection::TripSelection;
pub use trip_criteria::{CabinClass, CriteriaUpdate, TripCriteria, TripStep};
