// src/services/pacing.rs
// DOCUMENTATION: Shared pacing gate for outbound API calls
// PURPOSE: Keep consecutive outbound call starts at least one interval apart

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};

/// Minimum spacing between the start times of consecutive outbound calls
pub const MIN_REQUEST_INTERVAL: Duration = Duration::from_millis(1000);

/// Gate serializing the issuance of outbound API calls
/// DOCUMENTATION: Guards the process-wide "time of last outbound call".
/// The lock is held across the wait, so concurrent callers line up and each
/// observes the timestamp written by its predecessor. Only call starts are
/// spaced; completion order is unconstrained.
pub struct PacingGate {
    last_request: Mutex<Option<Instant>>,
    min_interval: Duration,
}

impl PacingGate {
    /// Create a gate with the given minimum interval
    pub fn new(min_interval: Duration) -> Self {
        Self {
            last_request: Mutex::new(None),
            min_interval,
        }
    }

    /// Suspend until at least the minimum interval has passed since the
    /// previous acquisition, then record the new call's start time
    pub async fn acquire(&self) {
        let mut last = self.last_request.lock().await;

        if let Some(previous) = *last {
            let next_allowed = previous + self.min_interval;
            let now = Instant::now();
            if now < next_allowed {
                log::debug!("Pacing outbound call: waiting {:?}", next_allowed - now);
                sleep_until(next_allowed).await;
            }
        }

        *last = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn first_acquisition_is_immediate() {
        let gate = PacingGate::new(MIN_REQUEST_INTERVAL);
        let start = Instant::now();

        gate.acquire().await;

        assert_eq!(Instant::now() - start, Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn consecutive_acquisitions_are_spaced() {
        let gate = PacingGate::new(MIN_REQUEST_INTERVAL);
        let mut starts = Vec::new();

        for _ in 0..4 {
            gate.acquire().await;
            starts.push(Instant::now());
        }

        for pair in starts.windows(2) {
            assert!(pair[1] - pair[0] >= MIN_REQUEST_INTERVAL);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_callers_serialize() {
        let gate = Arc::new(PacingGate::new(MIN_REQUEST_INTERVAL));
        let starts = Arc::new(std::sync::Mutex::new(Vec::new()));
        let mut handles = Vec::new();

        for _ in 0..3 {
            let gate = gate.clone();
            let starts = starts.clone();
            handles.push(tokio::spawn(async move {
                gate.acquire().await;
                starts.lock().unwrap().push(Instant::now());
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let mut starts = starts.lock().unwrap().clone();
        starts.sort();
        assert_eq!(starts.len(), 3);
        for pair in starts.windows(2) {
            assert!(pair[1] - pair[0] >= MIN_REQUEST_INTERVAL);
        }
    }
}
