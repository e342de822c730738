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

//! # Hotels Results Parser
//!
//! Side-effect free decoding of the hotel search response.

use serde::{Deserialize, Serialize};

use crate::money::Price;
use crate::search_gateway::GatewayError;

pub const MAX_HOTEL_RESULTS: usize = 15;

const FALLBACK_BOOKING_URL: &str = "https://www.skyscanner.com";
const FALLBACK_IMAGE_URL: &str = "https://images.unsplash.com/photo-1566073771259-6a8506099945";
const FALLBACK_STARS: u8 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub rating: f64,
    /// Star class, 1-5.
    pub stars: u8,
    /// Per-night price.
    pub price: Price,
    pub image_url: String,
    pub address: String,
    pub amenities: Vec<String>,
    /// Distance-from-center label, verbatim from upstream.
    pub distance: String,
    pub booking_url: String,
}

#[derive(Deserialize)]
struct HotelsEnvelope {
    #[serde(default)]
    hotels: Vec<WireHotel>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireHotel {
    id: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    rating: f64,
    stars: Option<u8>,
    price: Option<WireAmount>,
    image: Option<String>,
    #[serde(default)]
    address: String,
    #[serde(default)]
    amenities: Vec<String>,
    #[serde(default)]
    distance: String,
    deep_link: Option<String>,
}

#[derive(Deserialize)]
struct WireAmount {
    amount: Option<f64>,
}

/// Decode the hotel search response. Zero hotels is a valid empty result.
pub fn parse_hotels_response(body: &str, currency: &str) -> Result<Vec<Hotel>, GatewayError> {
    let envelope: HotelsEnvelope = serde_json::from_str(body)?;
    Ok(envelope
        .hotels
        .into_iter()
        .take(MAX_HOTEL_RESULTS)
        .enumerate()
        .map(|(index, wire)| convert_hotel(wire, index, currency))
        .collect())
}

fn convert_hotel(wire: WireHotel, index: usize, currency: &str) -> Hotel {
    let amount = wire
        .price
        .as_ref()
        .and_then(|price| price.amount)
        .unwrap_or(0.0);

    Hotel {
        id: wire.id.unwrap_or_else(|| format!("hotel-{}", index)),
        name: wire.name,
        rating: wire.rating,
        stars: wire.stars.unwrap_or(FALLBACK_STARS).clamp(1, 5),
        price: Price::new(amount, currency),
        image_url: wire.image.unwrap_or_else(|| FALLBACK_IMAGE_URL.to_string()),
        address: wire.address,
        amenities: wire.amenities,
        distance: wire.distance,
        booking_url: wire
            .deep_link
            .unwrap_or_else(|| FALLBACK_BOOKING_URL.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_is_an_empty_result() {
        assert!(parse_hotels_response("{}", "USD").unwrap().is_empty());
    }

    #[test]
    fn test_missing_fields_take_the_documented_defaults() {
        let body = r#"{"hotels": [{"name": "The Spartan"}]}"#;
        let hotels = parse_hotels_response(body, "USD").unwrap();
        assert_eq!(hotels.len(), 1);
        assert_eq!(hotels[0].id, "hotel-0");
        assert_eq!(hotels[0].stars, 3);
        assert_eq!(hotels[0].price.formatted, "$0");
        assert_eq!(hotels[0].image_url, FALLBACK_IMAGE_URL);
        assert_eq!(hotels[0].booking_url, FALLBACK_BOOKING_URL);
    }
}
