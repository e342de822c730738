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

//! # Hotels Query Builder
//!
//! Side-effect free construction of the hotel search request parameters.

use anyhow::{Result, ensure};
use chrono::NaiveDate;

use crate::trip_criteria::TripCriteria;

const ISO_DATE: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq)]
pub struct HotelQuery {
    /// Destination entity id, not the IATA code — hotels resolve by place.
    pub destination_entity: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: u32,
    pub rooms: u32,
}

impl HotelQuery {
    /// `None` unless hotels are included and a full stay range is present:
    /// check-in is the departure date, check-out the return date.
    pub fn from_criteria(criteria: &TripCriteria) -> Option<Self> {
        if !criteria.include_hotel {
            return None;
        }
        let destination = criteria.destination.as_ref()?;
        let check_in = criteria.departure_date?;
        let check_out = criteria.return_date?;

        Some(Self {
            destination_entity: destination.entity_id.clone(),
            check_in,
            check_out,
            adults: criteria.adults,
            rooms: 1,
        })
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.destination_entity.is_empty(),
            "Destination is required"
        );
        ensure!(self.adults >= 1, "At least one adult is required");
        ensure!(
            self.check_out > self.check_in,
            "Hotel stay must be at least one night"
        );
        Ok(())
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("entityId", self.destination_entity.clone()),
            ("checkin", self.check_in.format(ISO_DATE).to_string()),
            ("checkout", self.check_out.format(ISO_DATE).to_string()),
            ("adults", self.adults.to_string()),
            ("rooms", self.rooms.to_string()),
            ("currency", "USD".to_string()),
            ("market", "US".to_string()),
            ("locale", "en-US".to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locations_lookup::Airport;
    use crate::trip_criteria::CriteriaUpdate;

    fn criteria_with_dates(include_hotel: bool, return_date: Option<NaiveDate>) -> TripCriteria {
        let mut criteria = TripCriteria::default();
        criteria.apply(CriteriaUpdate {
            destination: Some(Airport {
                place_id: "JFK".to_string(),
                entity_id: "entity-jfk".to_string(),
                name: "New York JFK".to_string(),
                iata: "JFK".to_string(),
                city: "New York".to_string(),
                country: "US".to_string(),
            }),
            departure_date: NaiveDate::from_ymd_opt(2024, 6, 10),
            return_date,
            include_hotel: Some(include_hotel),
            ..Default::default()
        });
        criteria
    }

    #[test]
    fn test_from_criteria_uses_the_entity_id_and_stay_range() {
        let criteria = criteria_with_dates(true, NaiveDate::from_ymd_opt(2024, 6, 17));
        let query = HotelQuery::from_criteria(&criteria).unwrap();
        assert_eq!(query.destination_entity, "entity-jfk");
        assert_eq!(query.check_in, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        assert_eq!(query.check_out, NaiveDate::from_ymd_opt(2024, 6, 17).unwrap());
        assert_eq!(query.rooms, 1);
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_no_query_without_a_return_date() {
        let criteria = criteria_with_dates(true, None);
        assert!(HotelQuery::from_criteria(&criteria).is_none());
    }

    #[test]
    fn test_no_query_when_hotels_are_excluded() {
        let criteria = criteria_with_dates(false, NaiveDate::from_ymd_opt(2024, 6, 17));
        assert!(HotelQuery::from_criteria(&criteria).is_none());
    }

    #[test]
    fn test_validate_rejects_a_zero_night_stay() {
        let criteria = criteria_with_dates(true, NaiveDate::from_ymd_opt(2024, 6, 10));
        let query = HotelQuery::from_criteria(&criteria).unwrap();
        assert!(query.validate().is_err());
    }
}
