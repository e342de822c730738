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

//! # Quick Date Suggestions
//!
//! Pure date arithmetic for the one-click date ranges on the search form.

use chrono::{Datelike, Duration, NaiveDate};

use crate::trip_criteria::CriteriaUpdate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSuggestion {
    pub label: &'static str,
    pub departure: NaiveDate,
    pub return_date: NaiveDate,
}

impl DateSuggestion {
    /// Applying a suggestion overwrites the dates and nothing else.
    pub fn as_update(&self) -> CriteriaUpdate {
        CriteriaUpdate {
            departure_date: Some(self.departure),
            return_date: Some(self.return_date),
            ..Default::default()
        }
    }
}

/// Offset in days from `weekday` (0 = Sunday) to the next `target` weekday,
/// with a zero offset mapped a full week out.
fn days_until(weekday: i64, target: i64) -> i64 {
    let offset = (target - weekday).rem_euclid(7);
    if offset == 0 { 7 } else { offset }
}

/// Three labeled ranges: the upcoming weekend, the next full work week, and
/// the work week after that.
pub fn quick_date_suggestions(today: NaiveDate) -> Vec<DateSuggestion> {
    let weekday = today.weekday().num_days_from_sunday() as i64;

    let this_weekend = DateSuggestion {
        label: "This Weekend",
        departure: today + Duration::days(days_until(weekday, 5)),
        return_date: today + Duration::days(days_until(weekday, 7)),
    };

    let in_a_week = today + Duration::days(7);
    let next_monday =
        in_a_week - Duration::days(in_a_week.weekday().num_days_from_monday() as i64);
    let next_week = DateSuggestion {
        label: "Next Week (Mon-Fri)",
        departure: next_monday,
        return_date: next_monday + Duration::days(4),
    };

    let two_weeks = DateSuggestion {
        label: "In 2 Weeks",
        departure: next_monday + Duration::days(7),
        return_date: next_monday + Duration::days(11),
    };

    vec![this_weekend, next_week, two_weeks]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_until_maps_zero_to_a_full_week() {
        // Friday asking for Friday
        assert_eq!(days_until(5, 5), 7);
        // Wednesday asking for Friday
        assert_eq!(days_until(3, 5), 2);
        // Sunday (7 ≡ 0) asking for Sunday
        assert_eq!(days_until(0, 7), 7);
    }
}
