//! Delayed-unmount timer
//!
//! Tracks whether an overlay is "present" (must stay rendered) separately
//! from whether it is "open". Presence turns on synchronously with `open`
//! and turns off `unmount_delay` after `open` goes false.
//!
//! The delay is a deadline the host polls from its tick loop rather than a
//! callback, so cancelling is just forgetting the deadline.

use std::time::{Duration, Instant};

/// Single-deadline transition tracker
#[derive(Debug, Clone)]
pub struct TransitionTimer {
    unmount_delay: Duration,
    transitioning: bool,
    /// When the pending "stop transitioning" fires, if scheduled
    clear_at: Option<Instant>,
}

impl TransitionTimer {
    /// Create an idle timer
    pub fn new(unmount_delay: Duration) -> Self {
        Self {
            unmount_delay,
            transitioning: false,
            clear_at: None,
        }
    }

    /// Feed the latest `open` value
    ///
    /// - open: transitioning immediately, any pending clear is discarded
    /// - closed while transitioning: schedule the clear unless already scheduled
    /// - closed while idle: nothing
    pub fn evaluate(&mut self, open: bool, now: Instant) -> bool {
        if open {
            if self.clear_at.take().is_some() {
                log::debug!("TransitionTimer: reopened, pending unmount discarded");
            }
            self.transitioning = true;
        } else if self.transitioning && self.clear_at.is_none() {
            self.clear_at = Some(now + self.unmount_delay);
        }
        self.transitioning
    }

    /// Fire the pending clear if its deadline has passed
    ///
    /// Returns true if `is_transitioning` changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.clear_at {
            Some(deadline) if now >= deadline => {
                self.clear_at = None;
                self.transitioning = false;
                true
            }
            _ => false,
        }
    }

    /// Discard any pending clear without changing the current state
    pub fn cancel(&mut self) {
        self.clear_at = None;
    }

    /// Whether the overlay must stay rendered for its transition
    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Deadline of the pending clear, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.clear_at
    }

    /// Configured unmount delay
    pub fn unmount_delay(&self) -> Duration {
        self.unmount_delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn test_open_is_immediate() {
        let mut timer = TransitionTimer::new(DELAY);
        let t0 = Instant::now();
        assert!(timer.evaluate(true, t0));
        assert!(timer.deadline().is_none());
    }

    #[test]
    fn test_close_clears_after_delay() {
        let mut timer = TransitionTimer::new(DELAY);
        let t0 = Instant::now();
        timer.evaluate(true, t0);
        assert!(timer.evaluate(false, t0));

        assert!(!timer.poll(t0 + Duration::from_millis(299)));
        assert!(timer.is_transitioning());

        assert!(timer.poll(t0 + Duration::from_millis(300)));
        assert!(!timer.is_transitioning());
        assert!(timer.deadline().is_none());
    }

    #[test]
    fn test_repeated_close_does_not_reschedule() {
        let mut timer = TransitionTimer::new(DELAY);
        let t0 = Instant::now();
        timer.evaluate(true, t0);
        timer.evaluate(false, t0);
        let first = timer.deadline();

        timer.evaluate(false, t0 + Duration::from_millis(200));
        assert_eq!(timer.deadline(), first);
    }

    #[test]
    fn test_reopen_within_window_keeps_transitioning() {
        let mut timer = TransitionTimer::new(DELAY);
        let t0 = Instant::now();
        timer.evaluate(true, t0);
        timer.evaluate(false, t0);
        assert!(timer.evaluate(true, t0 + Duration::from_millis(150)));

        // The discarded deadline never fires
        assert!(!timer.poll(t0 + Duration::from_secs(10)));
        assert!(timer.is_transitioning());
    }

    #[test]
    fn test_closed_while_idle_schedules_nothing() {
        let mut timer = TransitionTimer::new(DELAY);
        assert!(!timer.evaluate(false, Instant::now()));
        assert!(timer.deadline().is_none());
    }

    #[test]
    fn test_cancel_drops_deadline() {
        let mut timer = TransitionTimer::new(DELAY);
        let t0 = Instant::now();
        timer.evaluate(true, t0);
        timer.evaluate(false, t0);
        timer.cancel();
        assert!(!timer.poll(t0 + DELAY * 2));
    }
}
