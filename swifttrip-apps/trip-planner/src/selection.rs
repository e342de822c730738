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

//! # Trip Selection
//!
//! At most one chosen item per category, plus the running trip total.
//! Selections are deliberately not cross-validated against each other.

use crate::cars_results_parser::CarRental;
use crate::flights_results_parser::FlightItinerary;
use crate::hotels_results_parser::Hotel;
use crate::money::format_amount;

const FALLBACK_CURRENCY: &str = "USD";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripSelection {
    pub flight: Option<FlightItinerary>,
    pub hotel: Option<Hotel>,
    pub car: Option<CarRental>,
}

impl TripSelection {
    /// Replaces the prior flight selection outright; `None` deselects.
    pub fn select_flight(&mut self, flight: Option<FlightItinerary>) {
        self.flight = flight;
    }

    pub fn select_hotel(&mut self, hotel: Option<Hotel>) {
        self.hotel = hotel;
    }

    pub fn select_car(&mut self, car: Option<CarRental>) {
        self.car = car;
    }

    pub fn clear(&mut self) {
        self.flight = None;
        self.hotel = None;
        self.car = None;
    }

    pub fn is_empty(&self) -> bool {
        self.flight.is_none() && self.hotel.is_none() && self.car.is_none()
    }

    /// The booking summary is shown iff something is selected.
    pub fn summary_visible(&self) -> bool {
        !self.is_empty()
    }

    /// Sum of the selected items' amounts. The hotel amount is the raw
    /// per-night price, not multiplied by nights.
    pub fn trip_total(&self) -> f64 {
        let flight = self.flight.as_ref().map_or(0.0, |f| f.price.amount);
        let hotel = self.hotel.as_ref().map_or(0.0, |h| h.price.amount);
        let car = self.car.as_ref().map_or(0.0, |c| c.price.amount);
        flight + hotel + car
    }

    pub fn trip_total_display(&self) -> String {
        format_amount(self.trip_total(), self.display_currency())
    }

    fn display_currency(&self) -> &str {
        self.flight
            .as_ref()
            .map(|f| f.price.currency.as_str())
            .or_else(|| self.hotel.as_ref().map(|h| h.price.currency.as_str()))
            .or_else(|| self.car.as_ref().map(|c| c.price.currency.as_str()))
            .filter(|currency| !currency.is_empty())
            .unwrap_or(FALLBACK_CURRENCY)
    }
}
