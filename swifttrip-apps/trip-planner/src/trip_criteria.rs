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

//! # Trip Criteria
//!
//! The user's current search parameters, mutated in place by partial updates.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::locations_lookup::Airport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CabinClass {
    #[default]
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl CabinClass {
    /// Wire value sent to the flight search service.
    pub fn as_query_value(&self) -> &'static str {
        match self {
            CabinClass::Economy => "economy",
            CabinClass::PremiumEconomy => "premium_economy",
            CabinClass::Business => "business",
            CabinClass::First => "first",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CabinClass::Economy => "Economy",
            CabinClass::PremiumEconomy => "Premium Economy",
            CabinClass::Business => "Business",
            CabinClass::First => "First Class",
        }
    }
}

impl FromStr for CabinClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "economy" | "e" => Ok(CabinClass::Economy),
            "premium_economy" | "premium" | "pe" => Ok(CabinClass::PremiumEconomy),
            "business" | "b" => Ok(CabinClass::Business),
            "first" | "f" => Ok(CabinClass::First),
            _ => Err(format!(
                "Invalid cabin class: {}. Use: economy, premium_economy, business, first",
                s
            )),
        }
    }
}

/// One selection step of the results view, derived from the inclusion flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripStep {
    Flight,
    Hotel,
    Car,
}

impl TripStep {
    pub fn label(&self) -> &'static str {
        match self {
            TripStep::Flight => "Flight",
            TripStep::Hotel => "Hotel",
            TripStep::Car => "Car",
        }
    }
}

/// The user's search parameters. Created with defaults at session start and
/// mutated by [`CriteriaUpdate`]s as the user edits the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripCriteria {
    pub origin: Option<Airport>,
    pub destination: Option<Airport>,
    pub departure_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub adults: u32,
    pub cabin_class: CabinClass,
    pub direct_only: bool,
    pub include_hotel: bool,
    pub include_car: bool,
}

impl Default for TripCriteria {
    fn default() -> Self {
        Self {
            origin: None,
            destination: None,
            departure_date: None,
            return_date: None,
            adults: 1,
            cabin_class: CabinClass::Economy,
            direct_only: false,
            include_hotel: true,
            include_car: false,
        }
    }
}

impl TripCriteria {
    /// A search may only execute once origin, destination and departure date
    /// are all present.
    pub fn is_searchable(&self) -> bool {
        self.origin.is_some() && self.destination.is_some() && self.departure_date.is_some()
    }

    /// Merge semantics: only the provided fields change.
    pub fn apply(&mut self, update: CriteriaUpdate) {
        if let Some(origin) = update.origin {
            self.origin = Some(origin);
        }
        if let Some(destination) = update.destination {
            self.destination = Some(destination);
        }
        if let Some(departure_date) = update.departure_date {
            self.departure_date = Some(departure_date);
        }
        if let Some(return_date) = update.return_date {
            self.return_date = Some(return_date);
        }
        if let Some(adults) = update.adults {
            self.adults = adults.max(1);
        }
        if let Some(cabin_class) = update.cabin_class {
            self.cabin_class = cabin_class;
        }
        if let Some(direct_only) = update.direct_only {
            self.direct_only = direct_only;
        }
        if let Some(include_hotel) = update.include_hotel {
            self.include_hotel = include_hotel;
        }
        if let Some(include_car) = update.include_car {
            self.include_car = include_car;
        }
    }

    /// Selection steps enabled by the current inclusion flags, in display
    /// order. The flight step is always present.
    pub fn enabled_steps(&self) -> Vec<TripStep> {
        let mut steps = vec![TripStep::Flight];
        if self.include_hotel {
            steps.push(TripStep::Hotel);
        }
        if self.include_car {
            steps.push(TripStep::Car);
        }
        steps
    }
}

/// A partial update to [`TripCriteria`]; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct CriteriaUpdate {
    pub origin: Option<Airport>,
    pub destination: Option<Airport>,
    pub departure_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub adults: Option<u32>,
    pub cabin_class: Option<CabinClass>,
    pub direct_only: Option<bool>,
    pub include_hotel: Option<bool>,
    pub include_car: Option<bool>,
}
