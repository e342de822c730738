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

//! # Cars Query Builder
//!
//! Side-effect free construction of the car rental search request parameters.

use anyhow::{Result, ensure};
use chrono::NaiveDate;

use crate::trip_criteria::TripCriteria;

const ISO_DATE: &str = "%Y-%m-%d";
const DEFAULT_PICKUP_TIME: &str = "10:00";

#[derive(Debug, Clone, PartialEq)]
pub struct CarQuery {
    pub pickup: String,
    /// Defaults to the pickup location when absent.
    pub dropoff: Option<String>,
    pub pickup_date: NaiveDate,
    pub dropoff_date: NaiveDate,
    pub pickup_time: String,
    pub dropoff_time: String,
}

impl CarQuery {
    /// `None` unless cars are included and a full rental range is present.
    /// Pickup happens at the trip destination.
    pub fn from_criteria(criteria: &TripCriteria) -> Option<Self> {
        if !criteria.include_car {
            return None;
        }
        let destination = criteria.destination.as_ref()?;
        let pickup_date = criteria.departure_date?;
        let dropoff_date = criteria.return_date?;

        Some(Self {
            pickup: destination.iata.clone(),
            dropoff: None,
            pickup_date,
            dropoff_date,
            pickup_time: DEFAULT_PICKUP_TIME.to_string(),
            dropoff_time: DEFAULT_PICKUP_TIME.to_string(),
        })
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(!self.pickup.is_empty(), "Pickup location is required");
        ensure!(
            self.dropoff_date >= self.pickup_date,
            "Dropoff date cannot be before pickup"
        );
        Ok(())
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("pickup", self.pickup.clone()),
            (
                "dropoff",
                self.dropoff.clone().unwrap_or_else(|| self.pickup.clone()),
            ),
            ("pickupDate", self.pickup_date.format(ISO_DATE).to_string()),
            (
                "dropoffDate",
                self.dropoff_date.format(ISO_DATE).to_string(),
            ),
            ("pickupTime", self.pickup_time.clone()),
            ("dropoffTime", self.dropoff_time.clone()),
            ("currency", "USD".to_string()),
        ]
    }
}
