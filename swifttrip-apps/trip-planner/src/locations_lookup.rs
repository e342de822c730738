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

//! # Locations Lookup
//!
//! Airport model, autocomplete response decoding and the per-field debounced
//! lookup used while the user is still typing.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use swifttrip_debounce_timers::DebounceTimer;

use crate::search_gateway::{GatewayError, SearchGateway};

/// Queries shorter than this never reach the autocomplete service.
pub const MIN_QUERY_CHARS: usize = 2;

const AUTOCOMPLETE_QUIET_WINDOW: Duration = Duration::from_millis(300);

/// An airport (or city-level location) candidate. Immutable once fetched;
/// used as both origin and destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    pub place_id: String,
    pub entity_id: String,
    pub name: String,
    pub iata: String,
    pub city: String,
    pub country: String,
}

#[derive(Deserialize)]
struct LocationsEnvelope {
    #[serde(default)]
    data: Vec<WireLocation>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireLocation {
    sky_id: Option<String>,
    entity_id: Option<String>,
    id: Option<String>,
    name: Option<String>,
    iata: Option<String>,
    code: Option<String>,
    city: Option<String>,
    country: Option<String>,
    presentation: Option<WirePresentation>,
    navigation: Option<WireNavigation>,
}

#[derive(Deserialize)]
struct WirePresentation {
    title: Option<String>,
    subtitle: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireNavigation {
    relevant_flight_params: Option<WireFlightParams>,
}

#[derive(Deserialize)]
struct WireFlightParams {
    market: Option<String>,
}

/// Decode the autocomplete response. Upstream entries are sparsely populated,
/// so each field falls back across its known aliases.
pub fn parse_locations_response(body: &str) -> Result<Vec<Airport>, GatewayError> {
    let envelope: LocationsEnvelope = serde_json::from_str(body)?;
    Ok(envelope.data.into_iter().map(convert_location).collect())
}

fn convert_location(wire: WireLocation) -> Airport {
    let fallback_id = wire.id.unwrap_or_default();
    let title = wire.presentation.as_ref().and_then(|p| p.title.clone());
    let subtitle_city = wire
        .presentation
        .as_ref()
        .and_then(|p| p.subtitle.as_ref())
        .and_then(|s| s.split(',').next())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    let market = wire
        .navigation
        .and_then(|n| n.relevant_flight_params)
        .and_then(|p| p.market);

    Airport {
        place_id: wire.sky_id.unwrap_or_else(|| fallback_id.clone()),
        entity_id: wire.entity_id.unwrap_or_else(|| fallback_id.clone()),
        name: title.or(wire.name).unwrap_or_default(),
        iata: wire.iata.or(wire.code).unwrap_or_default(),
        city: subtitle_city.or(wire.city).unwrap_or_default(),
        country: market.or(wire.country).unwrap_or_default(),
    }
}

/// Static quick-access list shown before the user has typed anything.
pub fn popular_destinations() -> Vec<Airport> {
    let entries = [
        ("LOND", "London", "LON", "London", "GB"),
        ("NYC", "New York", "NYC", "New York", "US"),
        ("PARI", "Paris", "PAR", "Paris", "FR"),
        ("TOKY", "Tokyo", "TYO", "Tokyo", "JP"),
        ("DUBA", "Dubai", "DXB", "Dubai", "AE"),
        ("SING", "Singapore", "SIN", "Singapore", "SG"),
    ];
    entries
        .into_iter()
        .map(|(id, name, iata, city, country)| Airport {
            place_id: id.to_string(),
            entity_id: id.to_string(),
            name: name.to_string(),
            iata: iata.to_string(),
            city: city.to_string(),
            country: country.to_string(),
        })
        .collect()
}

/// One debounced autocomplete input field.
///
/// Each keystroke cancels the prior pending quiet window and opens a new one;
/// only a window that elapses undisturbed triggers the gateway lookup.
#[derive(Clone, Debug, Default)]
pub struct AutocompleteField {
    timer: DebounceTimer,
}

impl AutocompleteField {
    pub fn new() -> Self {
        Self {
            timer: DebounceTimer::new(AUTOCOMPLETE_QUIET_WINDOW),
        }
    }

    pub fn with_quiet_window(quiet: Duration) -> Self {
        Self {
            timer: DebounceTimer::new(quiet),
        }
    }

    /// Feed one keystroke's worth of input.
    ///
    /// Returns `None` when no lookup ran: the query is still too short, or a
    /// newer keystroke arrived during the quiet window. A lookup that fails
    /// degrades to an empty candidate list.
    pub async fn keystroke<G: SearchGateway>(
        &self,
        gateway: &G,
        query: &str,
    ) -> Option<Vec<Airport>> {
        let trimmed = query.trim();
        if trimmed.chars().count() < MIN_QUERY_CHARS {
            self.timer.cancel();
            return None;
        }

        let trimmed = trimmed.to_string();
        self.timer
            .debounce(|| async move {
                match gateway.suggest_locations(&trimmed).await {
                    Ok(candidates) => candidates,
                    Err(e) => {
                        tracing::warn!("Location lookup failed for '{}': {}", trimmed, e);
                        Vec::new()
                    }
                }
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_field_fallbacks() {
        let body = r#"{
            "data": [
                {
                    "skyId": "LHR",
                    "entityId": "27544008",
                    "iata": "LHR",
                    "presentation": {
                        "title": "London Heathrow",
                        "subtitle": "London, United Kingdom"
                    },
                    "navigation": {"relevantFlightParams": {"market": "GB"}}
                },
                {
                    "id": "fallback-1",
                    "name": "Plain Name",
                    "code": "PLN",
                    "city": "Plainville",
                    "country": "US"
                }
            ]
        }"#;

        let airports = parse_locations_response(body).unwrap();
        assert_eq!(airports.len(), 2);

        assert_eq!(airports[0].place_id, "LHR");
        assert_eq!(airports[0].entity_id, "27544008");
        assert_eq!(airports[0].name, "London Heathrow");
        assert_eq!(airports[0].city, "London");
        assert_eq!(airports[0].country, "GB");

        assert_eq!(airports[1].place_id, "fallback-1");
        assert_eq!(airports[1].entity_id, "fallback-1");
        assert_eq!(airports[1].name, "Plain Name");
        assert_eq!(airports[1].iata, "PLN");
        assert_eq!(airports[1].city, "Plainville");
        assert_eq!(airports[1].country, "US");
    }

    #[test]
    fn test_popular_destinations_are_complete() {
        let destinations = popular_destinations();
        assert_eq!(destinations.len(), 6);
        assert!(destinations.iter().all(|a| !a.iata.is_empty()));
        assert_eq!(destinations[0].iata, "LON");
    }
}
