//! Non-queueing "one operation at a time" guard.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Admits one holder at a time and turns everyone else away.
///
/// Unlike a mutex, a second caller is not queued: [`SingleFlight::try_acquire`]
/// returns `None` while a [`FlightPermit`] is alive. The permit clears the
/// flag when dropped, whichever way the guarded operation ends.
///
/// # Examples
///
/// ```
/// # use cafe_backend::domain::SingleFlight;
/// let flight = SingleFlight::default();
/// let permit = flight.try_acquire().expect("idle");
/// assert!(flight.try_acquire().is_none());
/// drop(permit);
/// assert!(flight.try_acquire().is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SingleFlight {
    busy: Arc<AtomicBool>,
}

impl SingleFlight {
    /// Claim the flight, or `None` when it is already taken.
    #[must_use]
    pub fn try_acquire(&self) -> Option<FlightPermit> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| FlightPermit {
                busy: Arc::clone(&self.busy),
            })
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Proof of holding a [`SingleFlight`]; releases it on drop.
#[derive(Debug)]
#[must_use = "the flight is released as soon as the permit is dropped"]
pub struct FlightPermit {
    busy: Arc<AtomicBool>,
}

impl Drop for FlightPermit {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
