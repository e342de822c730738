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

//! # Flights Query Builder
//!
//! Side-effect free construction of the flight search request parameters.

use anyhow::{Result, ensure};
use chrono::NaiveDate;

use crate::trip_criteria::{CabinClass, TripCriteria};

const ISO_DATE: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq)]
pub struct FlightQuery {
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub adults: u32,
    pub cabin_class: CabinClass,
    pub direct_only: bool,
}

impl FlightQuery {
    /// `None` when origin, destination or departure date is missing — the
    /// fail-fast precondition of every search.
    pub fn from_criteria(criteria: &TripCriteria) -> Option<Self> {
        let origin = criteria.origin.as_ref()?;
        let destination = criteria.destination.as_ref()?;
        let departure_date = criteria.departure_date?;

        Some(Self {
            origin: origin.iata.clone(),
            destination: destination.iata.clone(),
            departure_date,
            return_date: criteria.return_date,
            adults: criteria.adults,
            cabin_class: criteria.cabin_class,
            direct_only: criteria.direct_only,
        })
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(!self.origin.is_empty(), "Origin airport is required");
        ensure!(
            !self.destination.is_empty(),
            "Destination airport is required"
        );
        ensure!(self.adults >= 1, "At least one adult is required");
        if let Some(return_date) = self.return_date {
            ensure!(
                return_date >= self.departure_date,
                "Return date cannot be before departure"
            );
        }
        Ok(())
    }

    /// Query-string parameters for the flight search endpoint.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("origin", self.origin.clone()),
            ("destination", self.destination.clone()),
            ("date", self.departure_date.format(ISO_DATE).to_string()),
        ];
        if let Some(return_date) = self.return_date {
            pairs.push(("returnDate", return_date.format(ISO_DATE).to_string()));
        }
        pairs.push(("adults", self.adults.to_string()));
        pairs.push(("cabinClass", self.cabin_class.as_query_value().to_string()));
        pairs.push(("directFlightsOnly", self.direct_only.to_string()));
        pairs.push(("currency", "USD".to_string()));
        pairs.push(("market", "US".to_string()));
        pairs.push(("locale", "en-US".to_string()));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locations_lookup::Airport;
    use crate::trip_criteria::CriteriaUpdate;

    fn airport(iata: &str) -> Airport {
        Airport {
            place_id: iata.to_string(),
            entity_id: format!("entity-{}", iata.to_lowercase()),
            name: iata.to_string(),
            iata: iata.to_string(),
            city: String::new(),
            country: String::new(),
        }
    }

    #[test]
    fn test_from_criteria_maps_the_airport_codes() {
        let mut criteria = TripCriteria::default();
        criteria.apply(CriteriaUpdate {
            origin: Some(airport("LHR")),
            destination: Some(airport("JFK")),
            departure_date: NaiveDate::from_ymd_opt(2024, 6, 10),
            return_date: NaiveDate::from_ymd_opt(2024, 6, 17),
            adults: Some(2),
            ..Default::default()
        });

        let query = FlightQuery::from_criteria(&criteria).unwrap();
        assert_eq!(query.origin, "LHR");
        assert_eq!(query.destination, "JFK");
        assert_eq!(query.departure_date, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        assert_eq!(query.return_date, NaiveDate::from_ymd_opt(2024, 6, 17));
        assert_eq!(query.adults, 2);
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_from_criteria_requires_the_mandatory_fields() {
        let mut criteria = TripCriteria::default();
        assert!(FlightQuery::from_criteria(&criteria).is_none());

        criteria.apply(CriteriaUpdate {
            origin: Some(airport("LHR")),
            departure_date: NaiveDate::from_ymd_opt(2024, 6, 10),
            ..Default::default()
        });
        assert!(FlightQuery::from_criteria(&criteria).is_none());
    }

    #[test]
    fn test_query_pairs_omit_missing_return_date() {
        let query = FlightQuery {
            origin: "LHR".to_string(),
            destination: "JFK".to_string(),
            departure_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            return_date: None,
            adults: 1,
            cabin_class: CabinClass::Business,
            direct_only: true,
        };

        let pairs = query.query_pairs();
        assert!(pairs.contains(&("date", "2024-06-10".to_string())));
        assert!(pairs.contains(&("cabinClass", "business".to_string())));
        assert!(pairs.contains(&("directFlightsOnly", "true".to_string())));
        assert!(!pairs.iter().any(|(key, _)| *key == "returnDate"));
    }

    #[test]
    fn test_validate_rejects_inverted_dates() {
        let query = FlightQuery {
            origin: "LHR".to_string(),
            destination: "JFK".to_string(),
            departure_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            return_date: NaiveDate::from_ymd_opt(2024, 6, 1),
            adults: 1,
            cabin_class: CabinClass::Economy,
            direct_only: false,
        };
        assert!(query.validate().is_err());
    }
}
