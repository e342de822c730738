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

//! Decoding tests for the car rental search response against a JSON fixture.

use std::path::PathBuf;

use swifttrip_trip_planner::{MAX_CAR_RESULTS, Transmission, parse_cars_response};

fn load_fixture(name: &str) -> String {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let path = manifest_dir.join("tests/fixtures").join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

#[test]
fn test_fixture_decodes_to_domain_cars() {
    let body = load_fixture("cars_search.json");
    let cars = parse_cars_response(&body, "USD").unwrap();
    assert_eq!(cars.len(), 2);

    let hertz = &cars[0];
    assert_eq!(hertz.id, "c-hertz-1");
    assert_eq!(hertz.company, "Hertz");
    assert_eq!(hertz.car_type, "Toyota Corolla");
    assert_eq!(hertz.category, "Compact");
    assert_eq!(hertz.transmission, Transmission::Manual);
    assert_eq!(hertz.passengers, 5);
    assert_eq!(hertz.doors, 4);
    assert_eq!(hertz.price.formatted, "$210");
    assert_eq!(hertz.fuel_policy, "Full to Full");

    // empty deep link is kept verbatim; the booking dispatcher skips it later
    let sixt = &cars[1];
    assert_eq!(sixt.transmission, Transmission::Automatic);
    assert_eq!(sixt.booking_url, "");
}

#[test]
fn test_results_are_truncated_to_the_top_ten() {
    let cars: Vec<serde_json::Value> = (0..14)
        .map(|i| serde_json::json!({"id": format!("car-{}", i)}))
        .collect();
    let body = serde_json::json!({"cars": cars}).to_string();

    let parsed = parse_cars_response(&body, "USD").unwrap();
    assert_eq!(parsed.len(), MAX_CAR_RESULTS);
}
