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

//! # Booking Dispatcher
//!
//! Fire-and-forget handoff to the external booking pages. Opening the link
//! is the terminal action; no confirmation ever comes back.

use std::process::{Command, Stdio};

use thiserror::Error;

use crate::search_gateway::SearchCategory;
use crate::selection::TripSelection;

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("failed to launch browser: {0}")]
    Launch(#[from] std::io::Error),
}

/// Opens a URL in a new, independent browsing context.
pub trait UrlOpener {
    fn open(&self, url: &str) -> Result<(), BookingError>;
}

/// Opens URLs through the platform's default handler, detached.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUrlOpener;

impl UrlOpener for SystemUrlOpener {
    fn open(&self, url: &str) -> Result<(), BookingError> {
        #[cfg(target_os = "macos")]
        let mut command = {
            let mut c = Command::new("open");
            c.arg(url);
            c
        };
        #[cfg(target_os = "windows")]
        let mut command = {
            let mut c = Command::new("cmd");
            c.args(["/C", "start", "", url]);
            c
        };
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let mut command = {
            let mut c = Command::new("xdg-open");
            c.arg(url);
            c
        };

        command.stdout(Stdio::null()).stderr(Stdio::null()).spawn()?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchedBooking {
    pub category: SearchCategory,
    pub url: String,
    pub opened: bool,
}

/// Open the booking link of every non-null selection with a non-empty URL,
/// in no particular order. Selections are left untouched; whether a booking
/// actually happened on the other side is unknowable here.
pub fn dispatch_booking(
    selection: &TripSelection,
    opener: &dyn UrlOpener,
) -> Vec<DispatchedBooking> {
    let links = [
        (
            SearchCategory::Flights,
            selection.flight.as_ref().map(|f| f.booking_url.as_str()),
        ),
        (
            SearchCategory::Hotels,
            selection.hotel.as_ref().map(|h| h.booking_url.as_str()),
        ),
        (
            SearchCategory::Cars,
            selection.car.as_ref().map(|c| c.booking_url.as_str()),
        ),
    ];

    let mut dispatched = Vec::new();
    for (category, url) in links {
        let Some(url) = url else { continue };
        if url.is_empty() {
            tracing::debug!("No booking link for the selected {} item", category);
            continue;
        }

        let opened = match opener.open(url) {
            Ok(()) => {
                tracing::info!("Opened {} booking link: {}", category, url);
                true
            }
            Err(e) => {
                tracing::warn!("Could not open {} booking link: {}", category, e);
                false
            }
        };
        dispatched.push(DispatchedBooking {
            category,
            url: url.to_string(),
            opened,
        });
    }
    dispatched
}
