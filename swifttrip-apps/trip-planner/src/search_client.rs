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

//! # Travel API Client
//!
//! Effectful (time, network) operations against the travel search service.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use async_trait::async_trait;
use wreq::redirect::Policy;
use wreq_util::Emulation;

use crate::cars_query_builder::CarQuery;
use crate::cars_results_parser::{CarRental, parse_cars_response};
use crate::flights_query_builder::FlightQuery;
use crate::flights_results_parser::{FlightItinerary, parse_flights_response};
use crate::hotels_query_builder::HotelQuery;
use crate::hotels_results_parser::{Hotel, parse_hotels_response};
use crate::locations_lookup::{Airport, MIN_QUERY_CHARS, parse_locations_response};
use crate::search_gateway::{GatewayError, SearchGateway};

pub const DEFAULT_BASE_URL: &str = "https://skyscanner44.p.rapidapi.com";

/// Requests are bounded so a stalled upstream cannot pin the searching state.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone)]
pub struct TravelApiClient {
    client: Arc<wreq::Client>,
    base_url: String,
    api_host: String,
    api_key: String,
    currency: String,
}

impl TravelApiClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, api_key, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self> {
        let client = wreq::Client::builder()
            .emulation(Emulation::Safari18_5)
            .redirect(Policy::default())
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        let api_host = base_url
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .to_string();

        Ok(Self {
            client: Arc::new(client),
            base_url,
            api_host,
            api_key: api_key.into(),
            currency: "USD".to_string(),
        })
    }

    fn build_url(&self, path: &str, pairs: &[(&'static str, String)]) -> String {
        let query = pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}{}?{}", self.base_url, path, query)
    }

    async fn get_json(
        &self,
        path: &str,
        pairs: &[(&'static str, String)],
    ) -> Result<String, GatewayError> {
        let url = self.build_url(path, pairs);
        tracing::debug!("[get_json] GET {}", url);

        let start = Instant::now();
        let response = self
            .client
            .get(&url)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.api_host)
            .send()
            .await
            .map_err(|e| GatewayError::Http(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Http(e.to_string()))?;
        tracing::debug!(
            "[get_json] {} {} in {:?}: {} KB",
            status.as_u16(),
            path,
            start.elapsed(),
            body.len() / 1024
        );

        if !status.is_success() {
            let preview = body.chars().take(300).collect::<String>();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                preview,
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl SearchGateway for TravelApiClient {
    async fn search_flights(
        &self,
        query: &FlightQuery,
    ) -> Result<Vec<FlightItinerary>, GatewayError> {
        query
            .validate()
            .map_err(|e| GatewayError::InvalidQuery(e.to_string()))?;

        let body = self.get_json("/search", &query.query_pairs()).await?;
        let itineraries = parse_flights_response(&body, &self.currency)?;
        tracing::info!(
            "Flight search {} -> {} returned {} itineraries",
            query.origin,
            query.destination,
            itineraries.len()
        );
        Ok(itineraries)
    }

    async fn search_hotels(&self, query: &HotelQuery) -> Result<Vec<Hotel>, GatewayError> {
        query
            .validate()
            .map_err(|e| GatewayError::InvalidQuery(e.to_string()))?;

        let body = self.get_json("/hotels/search", &query.query_pairs()).await?;
        let hotels = parse_hotels_response(&body, &self.currency)?;
        tracing::info!(
            "Hotel search in {} returned {} hotels",
            query.destination_entity,
            hotels.len()
        );
        Ok(hotels)
    }

    async fn search_cars(&self, query: &CarQuery) -> Result<Vec<CarRental>, GatewayError> {
        query
            .validate()
            .map_err(|e| GatewayError::InvalidQuery(e.to_string()))?;

        let body = self.get_json("/cars/search", &query.query_pairs()).await?;
        let cars = parse_cars_response(&body, &self.currency)?;
        tracing::info!("Car search at {} returned {} cars", query.pickup, cars.len());
        Ok(cars)
    }

    async fn suggest_locations(&self, query: &str) -> Result<Vec<Airport>, GatewayError> {
        let trimmed = query.trim();
        if trimmed.chars().count() < MIN_QUERY_CHARS {
            return Err(GatewayError::InvalidQuery(format!(
                "Autocomplete needs at least {} characters",
                MIN_QUERY_CHARS
            )));
        }

        let pairs = [("query", trimmed.to_string())];
        let body = self.get_json("/autocomplete", &pairs).await?;
        parse_locations_response(&body)
    }
}
