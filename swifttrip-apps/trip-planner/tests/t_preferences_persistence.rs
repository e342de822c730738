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

//! Persistence tests: exactly the preferences subtree survives a restart.

use std::path::PathBuf;

use swifttrip_trip_planner::{
    Airport, AppState, CabinClass, PreferencesFile, SavedPreferences, TripCriteria,
};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("swifttrip-test-{}-{}.json", std::process::id(), name))
}

fn home_airport() -> Airport {
    Airport {
        place_id: "LHR".to_string(),
        entity_id: "entity-lhr".to_string(),
        name: "London Heathrow".to_string(),
        iata: "LHR".to_string(),
        city: "London".to_string(),
        country: "GB".to_string(),
    }
}

#[test]
fn test_round_trip_through_the_file() {
    let path = temp_path("roundtrip");
    let file = PreferencesFile::new(&path);

    let mut preferences = SavedPreferences {
        home_airport: Some(home_airport()),
        preferred_cabin_class: Some(CabinClass::Business),
        direct_only: Some(true),
        ..Default::default()
    };
    preferences.push_recent(TripCriteria::default());

    file.save(&preferences).unwrap();
    let loaded = file.load().unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, preferences);
}

#[test]
fn test_missing_file_yields_defaults() {
    let file = PreferencesFile::new(temp_path("does-not-exist"));
    assert_eq!(file.load().unwrap(), SavedPreferences::default());
}

#[test]
fn test_only_the_preferences_subtree_is_written() {
    let path = temp_path("allowlist");
    let file = PreferencesFile::new(&path);

    let mut state = AppState::with_preferences(SavedPreferences {
        home_airport: Some(home_airport()),
        ..Default::default()
    });
    state.preferences.push_recent(state.criteria.clone());

    file.save(&state.preferences).unwrap();
    let raw = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let object = value.as_object().unwrap();
    assert!(object.contains_key("home_airport"));
    assert!(object.contains_key("recent_searches"));
    // session-scoped state never reaches the file
    assert!(!object.contains_key("flights"));
    assert!(!object.contains_key("selection"));
    assert!(!object.contains_key("is_searching"));
    assert!(!object.contains_key("criteria"));
}

#[test]
fn test_unknown_fields_in_the_file_are_ignored() {
    let path = temp_path("unknown-fields");
    std::fs::write(
        &path,
        r#"{"direct_only": true, "legacy_theme": "dark", "recent_searches": []}"#,
    )
    .unwrap();

    let loaded = PreferencesFile::new(&path).load().unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.direct_only, Some(true));
    assert!(loaded.home_airport.is_none());
}

#[test]
fn test_session_state_resets_on_restart() {
    // A fresh session built from loaded preferences starts with default
    // criteria (seeded from the saved home airport), empty results and no
    // selections.
    let preferences = SavedPreferences {
        home_airport: Some(home_airport()),
        preferred_cabin_class: Some(CabinClass::First),
        ..Default::default()
    };

    let state = AppState::with_preferences(preferences);

    assert_eq!(state.criteria.origin.as_ref().unwrap().iata, "LHR");
    assert_eq!(state.criteria.cabin_class, CabinClass::First);
    assert!(state.criteria.destination.is_none());
    assert!(state.flights.is_empty());
    assert!(state.selection.is_empty());
    assert!(!state.is_searching);
}
