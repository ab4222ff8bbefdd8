//! Auto-refresh timer controller.
//!
//! [`RefreshController`] owns at most one repeating timer. Enabling cancels
//! any previous handle before starting the next one, so flipping the toggle
//! twice can never leave two reload timers running. Ticks are delivered over
//! a channel; dropping the timer closes the channel, which lets consumers
//! notice deactivation as end-of-stream.

use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;

/// Fixed period between automatic reloads.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Single-owner handle for the auto-refresh timer.
#[derive(Debug, Default)]
pub struct RefreshController {
    timer: Option<JoinHandle<()>>,
}

impl RefreshController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the repeating timer, returning its tick stream.
    ///
    /// Any previously running timer is cancelled first; at most one timer is
    /// ever outstanding.
    pub fn enable(&mut self, period: Duration) -> UnboundedReceiver<u64> {
        self.disable();
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // the first tick completes immediately; the reload cadence
            // starts one full period after activation
            interval.tick().await;
            let mut ticks = 0u64;
            loop {
                interval.tick().await;
                ticks += 1;
                if tx.send(ticks).is_err() {
                    break;
                }
            }
        });
        self.timer = Some(handle);
        rx
    }

    /// Cancel the timer if one is running.
    pub fn disable(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for RefreshController {
    fn drop(&mut self) {
        self.disable();
    }
}
