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

//! # Cars Results Parser
//!
//! Side-effect free decoding of the car rental search response.

use serde::{Deserialize, Serialize};

use crate::money::Price;
use crate::search_gateway::GatewayError;

pub const MAX_CAR_RESULTS: usize = 10;

const FALLBACK_BOOKING_URL: &str = "https://www.skyscanner.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Transmission {
    #[default]
    Automatic,
    Manual,
}

impl Transmission {
    pub fn label(&self) -> &'static str {
        match self {
            Transmission::Automatic => "Automatic",
            Transmission::Manual => "Manual",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarRental {
    pub id: String,
    pub company: String,
    pub car_type: String,
    pub category: String,
    /// Total price for the rental period.
    pub price: Price,
    pub passengers: u32,
    pub doors: u32,
    pub transmission: Transmission,
    pub fuel_policy: String,
    pub booking_url: String,
}

#[derive(Deserialize)]
struct CarsEnvelope {
    #[serde(default)]
    cars: Vec<WireCar>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireCar {
    id: Option<String>,
    company: Option<String>,
    vehicle_info: Option<WireVehicleInfo>,
    price: Option<WireAmount>,
    fuel_policy: Option<String>,
    deep_link: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireVehicleInfo {
    model: Option<String>,
    category: Option<String>,
    passengers: Option<u32>,
    doors: Option<u32>,
    transmission: Option<Transmission>,
}

#[derive(Deserialize)]
struct WireAmount {
    amount: Option<f64>,
}

/// Decode the car search response. Zero cars is a valid empty result.
pub fn parse_cars_response(body: &str, currency: &str) -> Result<Vec<CarRental>, GatewayError> {
    let envelope: CarsEnvelope = serde_json::from_str(body)?;
    Ok(envelope
        .cars
        .into_iter()
        .take(MAX_CAR_RESULTS)
        .enumerate()
        .map(|(index, wire)| convert_car(wire, index, currency))
        .collect())
}

fn convert_car(wire: WireCar, index: usize, currency: &str) -> CarRental {
    let amount = wire
        .price
        .as_ref()
        .and_then(|price| price.amount)
        .unwrap_or(0.0);
    let vehicle = wire.vehicle_info.unwrap_or(WireVehicleInfo {
        model: None,
        category: None,
        passengers: None,
        doors: None,
        transmission: None,
    });

    CarRental {
        id: wire.id.unwrap_or_else(|| format!("car-{}", index)),
        company: wire.company.unwrap_or_else(|| "Car Rental Co.".to_string()),
        car_type: vehicle.model.unwrap_or_else(|| "Standard".to_string()),
        category: vehicle.category.unwrap_or_else(|| "Economy".to_string()),
        price: Price::new(amount, currency),
        passengers: vehicle.passengers.unwrap_or(5),
        doors: vehicle.doors.unwrap_or(4),
        transmission: vehicle.transmission.unwrap_or_default(),
        fuel_policy: wire
            .fuel_policy
            .unwrap_or_else(|| "Full to Full".to_string()),
        booking_url: wire
            .deep_link
            .unwrap_or_else(|| FALLBACK_BOOKING_URL.to_string()),
    }
}
