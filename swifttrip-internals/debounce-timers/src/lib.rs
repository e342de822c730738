//! SwiftTrip Debounce Timers
//! Copyright (c) 2026 The SwiftTrip developers
//! Licensed and distributed under either of
//!   * MIT license (license terms at the root of the package or at http://opensource.org/licenses/MIT).
//!   * Apache v2 license (license terms at the root of the package or at http://www.apache.org/licenses/LICENSE-2.0).
//! at your option. This file may not be copied, modified, or distributed except according to those terms.

//! swifttrip-internals/debounce-timers
//! Cancellable quiet-window timers: a burst of events collapses into a single
//! callback for the newest event, once the input has been quiet long enough.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::time;

/// Quiet window applied when none is configured explicitly.
pub const DEFAULT_QUIET_WINDOW: Duration = Duration::from_millis(300);

/// Custom error for debounce tickets
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DebounceError {
    #[error("superseded by a newer event")]
    Superseded,
}

/// A cancellable quiet-window timer for a single input field.
///
/// Every event (`touch`) cancels the pending window and opens a new one;
/// only the ticket belonging to the newest event survives its window.
/// Clones share the same window state.
///
/// # Examples
///
/// ```ignore
/// let timer = DebounceTimer::new(Duration::from_millis(300));
/// if let Some(results) = timer.debounce(|| lookup(query)).await {
///     // no newer keystroke arrived during the quiet window
/// }
/// ```
#[derive(Clone, Debug)]
pub struct DebounceTimer {
    generation: Arc<AtomicU64>,
    quiet: Duration,
}

impl Default for DebounceTimer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_WINDOW)
    }
}

impl DebounceTimer {
    /// Create a timer with the given quiet window.
    pub fn new(quiet: Duration) -> Self {
        Self {
            generation: Arc::new(AtomicU64::new(0)),
            quiet,
        }
    }

    /// Record a new event: cancels any pending window and returns the ticket
    /// for the freshly opened one.
    pub fn touch(&self) -> DebounceTicket {
        let issued = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        DebounceTicket {
            generation: Arc::clone(&self.generation),
            issued,
            quiet: self.quiet,
        }
    }

    /// Cancel the pending window without opening a new one.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Debounce one event: wait out the quiet window, then run `f` only if no
    /// newer event arrived meanwhile. Returns `None` when superseded.
    pub async fn debounce<F, Fut, T>(&self, f: F) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        match self.touch().settle().await {
            Ok(()) => Some(f().await),
            Err(DebounceError::Superseded) => None,
        }
    }
}

/// Handle to one opened quiet window.
#[derive(Debug)]
pub struct DebounceTicket {
    generation: Arc<AtomicU64>,
    issued: u64,
    quiet: Duration,
}

impl DebounceTicket {
    /// Wait out the quiet window. `Ok` means this ticket still belongs to the
    /// newest event and the debounced action should run.
    pub async fn settle(self) -> Result<(), DebounceError> {
        time::sleep(self.quiet).await;
        if self.generation.load(Ordering::SeqCst) == self.issued {
            Ok(())
        } else {
            Err(DebounceError::Superseded)
        }
    }
}
