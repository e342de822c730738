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

//! # Flights Results Parser
//!
//! Side-effect free decoding of the flight search response into itineraries.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::money::Price;
use crate::search_gateway::GatewayError;

/// Only the top results are kept; the rest are noise for this view.
pub const MAX_FLIGHT_RESULTS: usize = 20;

const FALLBACK_BOOKING_URL: &str = "https://www.skyscanner.com";

/// Quality label assigned by the search service. At most one per itinerary;
/// never recomputed on this side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Fastest,
    Cheapest,
    Best,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightLeg {
    pub origin: String,
    pub destination: String,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
    pub duration_minutes: u32,
    pub airline: String,
    pub flight_number: String,
    pub stops: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightItinerary {
    pub id: String,
    pub price: Price,
    pub outbound: Vec<FlightLeg>,
    /// Present only for round trips.
    pub inbound: Option<Vec<FlightLeg>>,
    pub total_duration_minutes: u32,
    /// De-duplicated carrier names across all legs, in first-seen order.
    pub airlines: Vec<String>,
    pub booking_url: String,
    pub badge: Option<Badge>,
}

#[derive(Deserialize)]
struct FlightsEnvelope {
    data: Option<FlightsData>,
}

#[derive(Deserialize)]
struct FlightsData {
    #[serde(default)]
    itineraries: Vec<WireItinerary>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireItinerary {
    id: Option<String>,
    price: Option<WirePrice>,
    #[serde(default)]
    legs: Vec<WireLeg>,
    deep_link: Option<String>,
    badge: Option<Badge>,
}

#[derive(Deserialize)]
struct WirePrice {
    raw: Option<f64>,
    amount: Option<f64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireLeg {
    #[serde(default)]
    duration_in_minutes: u32,
    #[serde(default)]
    stop_count: u32,
    #[serde(default)]
    segments: Vec<WireSegment>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSegment {
    origin: Option<WirePlace>,
    destination: Option<WirePlace>,
    departure: NaiveDateTime,
    arrival: NaiveDateTime,
    #[serde(default)]
    duration_in_minutes: u32,
    marketing_carrier: Option<WireCarrier>,
    #[serde(default)]
    flight_number: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePlace {
    display_code: Option<String>,
    iata: Option<String>,
}

#[derive(Deserialize)]
struct WireCarrier {
    name: Option<String>,
}

/// Decode the flight search response. Zero itineraries is a valid empty
/// result, not an error.
pub fn parse_flights_response(
    body: &str,
    currency: &str,
) -> Result<Vec<FlightItinerary>, GatewayError> {
    let envelope: FlightsEnvelope = serde_json::from_str(body)?;
    let itineraries = envelope
        .data
        .map(|data| data.itineraries)
        .unwrap_or_default();

    Ok(itineraries
        .into_iter()
        .take(MAX_FLIGHT_RESULTS)
        .enumerate()
        .map(|(index, wire)| convert_itinerary(wire, index, currency))
        .collect())
}

fn convert_itinerary(wire: WireItinerary, index: usize, currency: &str) -> FlightItinerary {
    let amount = wire
        .price
        .as_ref()
        .and_then(|price| price.raw.or(price.amount))
        .unwrap_or(0.0);

    let total_duration_minutes = wire.legs.iter().map(|leg| leg.duration_in_minutes).sum();

    let mut airlines: Vec<String> = Vec::new();
    for leg in &wire.legs {
        for segment in &leg.segments {
            let name = carrier_name(segment);
            if !airlines.contains(&name) {
                airlines.push(name);
            }
        }
    }

    let mut legs = wire.legs.into_iter();
    let outbound = legs.next().map(convert_leg).unwrap_or_default();
    let inbound = legs.next().map(convert_leg);

    FlightItinerary {
        id: wire.id.unwrap_or_else(|| format!("flight-{}", index)),
        price: Price::new(amount, currency),
        outbound,
        inbound,
        total_duration_minutes,
        airlines,
        booking_url: wire
            .deep_link
            .unwrap_or_else(|| FALLBACK_BOOKING_URL.to_string()),
        badge: wire.badge,
    }
}

fn convert_leg(leg: WireLeg) -> Vec<FlightLeg> {
    let stops = leg.stop_count;
    leg.segments
        .into_iter()
        .map(|segment| {
            let airline = carrier_name(&segment);
            FlightLeg {
                origin: place_code(segment.origin),
                destination: place_code(segment.destination),
                departure: segment.departure,
                arrival: segment.arrival,
                duration_minutes: segment.duration_in_minutes,
                airline,
                flight_number: segment.flight_number,
                stops,
            }
        })
        .collect()
}

fn carrier_name(segment: &WireSegment) -> String {
    segment
        .marketing_carrier
        .as_ref()
        .and_then(|carrier| carrier.name.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

fn place_code(place: Option<WirePlace>) -> String {
    place
        .and_then(|p| p.display_code.or(p.iata))
        .unwrap_or_default()
}

/// "6h 30m" style display for a duration in minutes.
pub fn fmt_duration(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

pub fn stops_label(stops: u32) -> String {
    match stops {
        0 => "Non-stop".to_string(),
        1 => "1 stop".to_string(),
        n => format!("{} stops", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_duration() {
        assert_eq!(fmt_duration(390), "6h 30m");
        assert_eq!(fmt_duration(60), "1h 0m");
        assert_eq!(fmt_duration(45), "0h 45m");
    }

    #[test]
    fn test_stops_label() {
        assert_eq!(stops_label(0), "Non-stop");
        assert_eq!(stops_label(1), "1 stop");
        assert_eq!(stops_label(3), "3 stops");
    }

    #[test]
    fn test_empty_body_is_an_empty_result() {
        assert!(parse_flights_response("{}", "USD").unwrap().is_empty());
        assert!(
            parse_flights_response(r#"{"data": {"itineraries": []}}"#, "USD")
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_malformed_body_is_a_decode_error() {
        assert!(matches!(
            parse_flights_response("not json", "USD"),
            Err(GatewayError::Decode(_))
        ));
    }
}
