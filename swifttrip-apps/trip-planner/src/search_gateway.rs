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

//! # Search Gateway
//!
//! The contract this side depends on from the external travel search
//! service. The aggregator and the autocomplete fields only ever talk to
//! this trait.

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::cars_query_builder::CarQuery;
use crate::cars_results_parser::CarRental;
use crate::flights_query_builder::FlightQuery;
use crate::flights_results_parser::FlightItinerary;
use crate::hotels_query_builder::HotelQuery;
use crate::hotels_results_parser::Hotel;
use crate::locations_lookup::Airport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchCategory {
    Flights,
    Hotels,
    Cars,
}

impl fmt::Display for SearchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchCategory::Flights => "flights",
            SearchCategory::Hotels => "hotels",
            SearchCategory::Cars => "cars",
        };
        f.write_str(name)
    }
}

/// Upstream request failure. One category failing never implies anything
/// about the other two.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid query: {0}")]
    InvalidQuery(String),
    #[error("request failed: {0}")]
    Http(String),
    #[error("HTTP error {status}: {preview}")]
    Status { status: u16, preview: String },
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait SearchGateway: Send + Sync {
    async fn search_flights(
        &self,
        query: &FlightQuery,
    ) -> Result<Vec<FlightItinerary>, GatewayError>;

    async fn search_hotels(&self, query: &HotelQuery) -> Result<Vec<Hotel>, GatewayError>;

    async fn search_cars(&self, query: &CarQuery) -> Result<Vec<CarRental>, GatewayError>;

    /// Free-text location autocomplete, minimum 2 characters.
    async fn suggest_locations(&self, query: &str) -> Result<Vec<Airport>, GatewayError>;
}
