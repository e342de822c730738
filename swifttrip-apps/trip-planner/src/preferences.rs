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

//! # Saved Preferences
//!
//! The only state that survives a restart. Everything else in the
//! application state resets to defaults.

use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::locations_lookup::Airport;
use crate::trip_criteria::{CabinClass, TripCriteria};

/// Bounded history: newest first, oldest evicted.
pub const RECENT_SEARCH_LIMIT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_airport: Option<Airport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_airlines: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_cabin_class: Option<CabinClass>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_only: Option<bool>,
    pub recent_searches: Vec<TripCriteria>,
}

impl SavedPreferences {
    pub fn push_recent(&mut self, criteria: TripCriteria) {
        self.recent_searches.insert(0, criteria);
        self.recent_searches.truncate(RECENT_SEARCH_LIMIT);
    }

    /// Seed a fresh criteria with the saved defaults.
    pub fn apply_to(&self, criteria: &mut TripCriteria) {
        if let Some(home) = &self.home_airport {
            criteria.origin = Some(home.clone());
        }
        if let Some(cabin_class) = self.preferred_cabin_class {
            criteria.cabin_class = cabin_class;
        }
        if let Some(direct_only) = self.direct_only {
            criteria.direct_only = direct_only;
        }
    }
}

/// JSON-file persistence for exactly the preferences subtree. Unknown fields
/// in an existing file are ignored on load.
#[derive(Debug, Clone)]
pub struct PreferencesFile {
    path: PathBuf,
}

impl PreferencesFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A missing file is a fresh install: defaults, not an error.
    pub fn load(&self) -> Result<SavedPreferences> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw)
                .with_context(|| format!("Malformed preferences file {}", self.path.display())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(SavedPreferences::default()),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to read {}", self.path.display()))
            }
        }
    }

    pub fn save(&self, preferences: &SavedPreferences) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(preferences)
            .context("Failed to serialize preferences")?;
        std::fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_searches_evict_past_the_limit() {
        let mut preferences = SavedPreferences::default();
        for adults in 1..=6 {
            let mut criteria = TripCriteria::default();
            criteria.adults = adults;
            preferences.push_recent(criteria);
        }

        assert_eq!(preferences.recent_searches.len(), RECENT_SEARCH_LIMIT);
        // newest first, the very first search evicted
        assert_eq!(preferences.recent_searches[0].adults, 6);
        assert!(preferences.recent_searches.iter().all(|c| c.adults != 1));
    }

    #[test]
    fn test_apply_to_seeds_only_the_saved_fields() {
        let preferences = SavedPreferences {
            preferred_cabin_class: Some(CabinClass::Business),
            direct_only: Some(true),
            ..Default::default()
        };

        let mut criteria = TripCriteria::default();
        preferences.apply_to(&mut criteria);

        assert_eq!(criteria.cabin_class, CabinClass::Business);
        assert!(criteria.direct_only);
        assert!(criteria.origin.is_none());
        assert!(criteria.include_hotel);
    }
}
