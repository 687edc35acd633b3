//! Rate limiter for high-frequency events such as `scroll`.
//!
//! At most one run per window. A call that lands inside the window is not
//! dropped: the throttle remembers it and reports a trailing run, so the
//! last position is always handled.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThrottleDecision {
    /// Run the handler now.
    Run,
    /// Schedule a trailing run after this many milliseconds, unless one is
    /// already scheduled. The timer hands `generation` back to `flush`.
    Defer {
        wait_ms: f64,
        already_scheduled: bool,
        generation: u64,
    },
}

#[derive(Debug, Clone)]
pub struct Throttle {
    window_ms: f64,
    last_fired: Option<f64>,
    pending: bool,
    // Bumped by every run, so a trailing timer armed before it goes stale.
    generation: u64,
}

impl Throttle {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms: window_ms.max(0.0),
            last_fired: None,
            pending: false,
            generation: 0,
        }
    }

    /// Registers a call at `now` (milliseconds, monotonic).
    pub fn call(&mut self, now: f64) -> ThrottleDecision {
        match self.last_fired {
            Some(last) if now - last < self.window_ms => {
                let already_scheduled = self.pending;
                self.pending = true;
                ThrottleDecision::Defer {
                    wait_ms: self.window_ms - (now - last),
                    already_scheduled,
                    generation: self.generation,
                }
            }
            _ => {
                self.mark_run(now);
                ThrottleDecision::Run
            }
        }
    }

    /// Called when a deferred timer expires with the generation it was armed
    /// with. Returns whether the trailing run should happen; a timer armed
    /// before a later run never does.
    pub fn flush(&mut self, generation: u64, now: f64) -> bool {
        if !self.pending || generation != self.generation {
            return false;
        }
        self.mark_run(now);
        true
    }

    fn mark_run(&mut self, now: f64) {
        self.last_fired = Some(now);
        self.pending = false;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_runs() {
        let mut throttle = Throttle::new(16.0);
        assert_eq!(throttle.call(0.0), ThrottleDecision::Run);
    }

    #[test]
    fn calls_inside_window_defer_once() {
        let mut throttle = Throttle::new(100.0);
        throttle.call(0.0);
        assert_eq!(
            throttle.call(30.0),
            ThrottleDecision::Defer { wait_ms: 70.0, already_scheduled: false, generation: 1 }
        );
        assert_eq!(
            throttle.call(60.0),
            ThrottleDecision::Defer { wait_ms: 40.0, already_scheduled: true, generation: 1 }
        );
    }

    fn deferred_generation(decision: ThrottleDecision) -> u64 {
        match decision {
            ThrottleDecision::Defer { generation, .. } => generation,
            ThrottleDecision::Run => panic!("expected a deferred call, got {:?}", decision),
        }
    }

    #[test]
    fn trailing_run_happens_once() {
        let mut throttle = Throttle::new(100.0);
        throttle.call(0.0);
        let generation = deferred_generation(throttle.call(50.0));
        assert!(throttle.flush(generation, 100.0));
        assert!(!throttle.flush(generation, 101.0));
        // The trailing run starts a new window.
        assert!(matches!(throttle.call(150.0), ThrottleDecision::Defer { .. }));
        assert_eq!(throttle.call(200.0), ThrottleDecision::Run);
    }

    #[test]
    fn flush_without_suppressed_call_is_noop() {
        let mut throttle = Throttle::new(100.0);
        throttle.call(0.0);
        assert!(!throttle.flush(1, 100.0));
    }

    #[test]
    fn run_after_window_clears_pending() {
        let mut throttle = Throttle::new(10.0);
        throttle.call(0.0);
        let generation = deferred_generation(throttle.call(5.0));
        assert_eq!(throttle.call(20.0), ThrottleDecision::Run);
        assert!(!throttle.flush(generation, 21.0));
    }

    #[test]
    fn timer_armed_before_a_run_goes_stale() {
        let mut throttle = Throttle::new(100.0);
        throttle.call(0.0);
        let stale = deferred_generation(throttle.call(50.0));
        assert_eq!(throttle.call(120.0), ThrottleDecision::Run);
        let fresh = throttle.call(130.0);
        assert!(matches!(
            fresh,
            ThrottleDecision::Defer { already_scheduled: false, .. }
        ));

        // The first timer lands 11 ms after the run at 120: no second run.
        assert!(!throttle.flush(stale, 131.0));
        assert!(throttle.flush(deferred_generation(fresh), 220.0));
    }
}
