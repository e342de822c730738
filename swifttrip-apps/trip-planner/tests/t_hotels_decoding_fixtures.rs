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

//! Decoding tests for the hotel search response against a JSON fixture.

use std::path::PathBuf;

use swifttrip_trip_planner::{MAX_HOTEL_RESULTS, parse_hotels_response};

fn load_fixture(name: &str) -> String {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let path = manifest_dir.join("tests/fixtures").join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

#[test]
fn test_fixture_decodes_to_domain_hotels() {
    let body = load_fixture("hotels_search.json");
    let hotels = parse_hotels_response(&body, "USD").unwrap();
    assert_eq!(hotels.len(), 2);

    let plaza = &hotels[0];
    assert_eq!(plaza.id, "h-plaza");
    assert_eq!(plaza.name, "The Plaza");
    assert_eq!(plaza.stars, 5);
    assert_eq!(plaza.rating, 4.8);
    assert_eq!(plaza.price.amount, 180.0);
    assert_eq!(plaza.price.formatted, "$180");
    assert_eq!(plaza.amenities, vec!["WiFi", "Spa", "Gym"]);
    assert_eq!(plaza.distance, "0.5 km from center");
    assert_eq!(plaza.booking_url, "https://partners.example.com/book/h-plaza");

    // sparse entry: id, stars, image and link fall back
    let budget = &hotels[1];
    assert_eq!(budget.id, "hotel-1");
    assert_eq!(budget.stars, 3);
    assert_eq!(budget.price.formatted, "$85");
    assert_eq!(budget.booking_url, "https://www.skyscanner.com");
    assert!(budget.amenities.is_empty());
}

#[test]
fn test_results_are_truncated_to_the_top_fifteen() {
    let hotels: Vec<serde_json::Value> = (0..20)
        .map(|i| serde_json::json!({"id": format!("hotel-{}", i), "name": "H"}))
        .collect();
    let body = serde_json::json!({"hotels": hotels}).to_string();

    let parsed = parse_hotels_response(&body, "USD").unwrap();
    assert_eq!(parsed.len(), MAX_HOTEL_RESULTS);
}
