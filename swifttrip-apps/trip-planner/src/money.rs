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

//! # Money
//!
//! The shared priced-item shape for flights, hotels and car rentals.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize};

static CURRENCY_SYMBOLS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("USD", "$"),
        ("EUR", "€"),
        ("GBP", "£"),
        ("JPY", "¥"),
        ("AUD", "A$"),
        ("CAD", "C$"),
    ])
});

/// Amount rendered with zero decimal places, prefixed with the currency
/// symbol (or the currency code itself when no symbol is known).
pub fn format_amount(amount: f64, currency: &str) -> String {
    match CURRENCY_SYMBOLS.get(currency) {
        Some(symbol) => format!("{}{:.0}", symbol, amount),
        None => format!("{} {:.0}", currency, amount),
    }
}

/// A price as shown to the user.
///
/// Invariant: `formatted` is always derived from `amount` + `currency`; it is
/// recomputed on deserialization and never read from the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Price {
    pub amount: f64,
    pub currency: String,
    pub formatted: String,
}

impl Price {
    /// Negative or non-finite amounts are clamped to zero.
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        let currency = currency.into();
        let amount = if amount.is_finite() { amount.max(0.0) } else { 0.0 };
        let formatted = format_amount(amount, &currency);
        Self {
            amount,
            currency,
            formatted,
        }
    }

    pub fn zero(currency: impl Into<String>) -> Self {
        Self::new(0.0, currency)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct PriceWire {
            #[serde(default)]
            amount: f64,
            #[serde(default)]
            currency: String,
        }

        let wire = PriceWire::deserialize(deserializer)?;
        Ok(Price::new(wire.amount, wire.currency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_string_derivation() {
        assert_eq!(Price::new(412.0, "USD").formatted, "$412");
        assert_eq!(Price::new(180.4, "USD").formatted, "$180");
        assert_eq!(Price::new(99.0, "EUR").formatted, "€99");
        assert_eq!(Price::new(250.0, "CHF").formatted, "CHF 250");
    }

    #[test]
    fn test_negative_amount_clamped() {
        let price = Price::new(-10.0, "USD");
        assert_eq!(price.amount, 0.0);
        assert_eq!(price.formatted, "$0");
    }

    #[test]
    fn test_deserialize_recomputes_display() {
        let price: Price =
            serde_json::from_str(r#"{"amount": 42.0, "currency": "USD", "formatted": "bogus"}"#)
                .unwrap();
        assert_eq!(price.formatted, "$42");
    }
}
