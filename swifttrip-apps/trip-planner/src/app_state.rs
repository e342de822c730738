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

//! # Application State
//!
//! The single in-process store for one user session. Everything here is
//! session-scoped except `preferences`, the only subtree that is ever
//! persisted — which is why this struct itself is not serializable.

use crate::cars_results_parser::CarRental;
use crate::flights_results_parser::FlightItinerary;
use crate::hotels_results_parser::Hotel;
use crate::preferences::SavedPreferences;
use crate::search_gateway::SearchCategory;
use crate::selection::TripSelection;
use crate::trip_criteria::TripCriteria;

/// Derived per-category view status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryStatus {
    Searching,
    Results(usize),
    /// Zero matches: "no results, try adjusting your search", not an error.
    Empty,
}

#[derive(Debug, Default)]
pub struct AppState {
    pub criteria: TripCriteria,
    pub flights: Vec<FlightItinerary>,
    pub hotels: Vec<Hotel>,
    pub cars: Vec<CarRental>,
    pub is_searching: bool,
    pub selection: TripSelection,
    pub preferences: SavedPreferences,
}

impl AppState {
    /// Session start: default criteria seeded from the saved preferences.
    pub fn with_preferences(preferences: SavedPreferences) -> Self {
        let mut criteria = TripCriteria::default();
        preferences.apply_to(&mut criteria);
        Self {
            criteria,
            preferences,
            ..Default::default()
        }
    }

    /// Back to a blank search form. Preferences survive.
    pub fn reset_search(&mut self) {
        self.criteria = TripCriteria::default();
        self.flights.clear();
        self.hotels.clear();
        self.cars.clear();
        self.selection.clear();
    }

    pub fn category_status(&self, category: SearchCategory) -> CategoryStatus {
        if self.is_searching {
            return CategoryStatus::Searching;
        }
        let count = match category {
            SearchCategory::Flights => self.flights.len(),
            SearchCategory::Hotels => self.hotels.len(),
            SearchCategory::Cars => self.cars.len(),
        };
        if count > 0 {
            CategoryStatus::Results(count)
        } else {
            CategoryStatus::Empty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Price;

    fn hotel() -> Hotel {
        Hotel {
            id: "h1".to_string(),
            name: "Hotel".to_string(),
            rating: 4.2,
            stars: 4,
            price: Price::new(180.0, "USD"),
            image_url: String::new(),
            address: String::new(),
            amenities: Vec::new(),
            distance: String::new(),
            booking_url: String::new(),
        }
    }

    #[test]
    fn test_category_status_derivation() {
        let mut state = AppState::default();
        assert_eq!(
            state.category_status(SearchCategory::Hotels),
            CategoryStatus::Empty
        );

        state.is_searching = true;
        assert_eq!(
            state.category_status(SearchCategory::Hotels),
            CategoryStatus::Searching
        );

        state.is_searching = false;
        state.hotels.push(hotel());
        assert_eq!(
            state.category_status(SearchCategory::Hotels),
            CategoryStatus::Results(1)
        );
    }

    #[test]
    fn test_reset_search_keeps_preferences() {
        let mut state = AppState::default();
        state.hotels.push(hotel());
        state.selection.select_hotel(Some(hotel()));
        state.preferences.push_recent(TripCriteria::default());

        state.reset_search();

        assert!(state.hotels.is_empty());
        assert!(state.selection.is_empty());
        assert_eq!(state.criteria, TripCriteria::default());
        assert_eq!(state.preferences.recent_searches.len(), 1);
    }
}
