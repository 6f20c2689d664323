//! Trailing-edge debouncing driven by the event loop.
//!
//! Time is passed in explicitly so the behavior is testable without sleeping.

use std::time::{Duration, Instant};

/// Collapses bursts of triggers into one action after a quiet period.
///
/// Each [`trigger`](Self::trigger) pushes the deadline out to `now + delay`;
/// [`fire_if_due`](Self::fire_if_due) reports `true` exactly once, when the
/// deadline has passed. There is no leading-edge call.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Debouncer with nothing pending.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Quiet period required before firing.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a trigger at `now`, restarting the quiet period.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop any pending action.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a trigger is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// `true` if the quiet period has elapsed; clears the pending action.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the pending action is due, if any.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn idle_debouncer_never_fires() {
        let mut debouncer = Debouncer::new(DELAY);
        let now = Instant::now();
        assert!(!debouncer.is_pending());
        assert!(!debouncer.fire_if_due(now + Duration::from_secs(10)));
        assert_eq!(debouncer.time_until_due(now), None);
    }

    #[test]
    fn no_leading_edge_call() {
        let mut debouncer = Debouncer::new(DELAY);
        let t0 = Instant::now();
        debouncer.trigger(t0);
        assert!(!debouncer.fire_if_due(t0), "must not fire at trigger time");
        assert!(!debouncer.fire_if_due(t0 + Duration::from_millis(299)));
    }

    #[test]
    fn fires_once_after_delay() {
        let mut debouncer = Debouncer::new(DELAY);
        let t0 = Instant::now();
        debouncer.trigger(t0);

        assert!(debouncer.fire_if_due(t0 + DELAY));
        assert!(!debouncer.fire_if_due(t0 + DELAY * 2), "fires only once");
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn burst_collapses_to_one_timed_from_last_event() {
        let mut debouncer = Debouncer::new(DELAY);
        let t0 = Instant::now();
        debouncer.trigger(t0);
        debouncer.trigger(t0 + Duration::from_millis(100));
        debouncer.trigger(t0 + Duration::from_millis(250));

        // 300ms after the first event is still inside the window of the last
        assert!(!debouncer.fire_if_due(t0 + Duration::from_millis(300)));
        assert!(!debouncer.fire_if_due(t0 + Duration::from_millis(549)));
        assert!(debouncer.fire_if_due(t0 + Duration::from_millis(550)));
        assert!(!debouncer.fire_if_due(t0 + Duration::from_millis(900)));
    }

    #[test]
    fn cancel_drops_pending_action() {
        let mut debouncer = Debouncer::new(DELAY);
        let t0 = Instant::now();
        debouncer.trigger(t0);
        debouncer.cancel();
        assert!(!debouncer.fire_if_due(t0 + DELAY));
    }

    #[test]
    fn time_until_due_counts_down_and_saturates() {
        let mut debouncer = Debouncer::new(DELAY);
        let t0 = Instant::now();
        debouncer.trigger(t0);
        assert_eq!(
            debouncer.time_until_due(t0 + Duration::from_millis(100)),
            Some(Duration::from_millis(200))
        );
        assert_eq!(
            debouncer.time_until_due(t0 + Duration::from_secs(1)),
            Some(Duration::ZERO)
        );
    }
}
