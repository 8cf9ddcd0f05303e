use super::constants::{OVERLAP_BACKSTOP_MS, OVERLAP_DEBOUNCE_MS};
use std::time::Duration;

// Times are offsets from session start, supplied by the caller.

/// Cancel-and-reschedule timer: only the latest request in a burst fires,
/// `window` after that request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Debounce {
    window: Duration,
    deadline: Option<Duration>,
}

impl Debounce {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    pub fn schedule(&mut self, now: Duration) {
        self.deadline = Some(now + self.window);
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True once when the pending deadline has passed.
    pub fn fire_due(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Fixed-period timer. Missed periods collapse into a single firing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    next: Duration,
}

impl Interval {
    pub fn new(period: Duration, start: Duration) -> Self {
        Self {
            period,
            next: start + period,
        }
    }

    pub fn fire_due(&mut self, now: Duration) -> bool {
        if now < self.next {
            return false;
        }
        if self.period.is_zero() {
            self.next = now;
            return true;
        }
        while self.next <= now {
            self.next += self.period;
        }
        true
    }
}

/// When overlap detection should run: debounced camera/resize requests plus
/// a periodic backstop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlapSchedule {
    debounce: Debounce,
    backstop: Interval,
}

impl OverlapSchedule {
    pub fn new(debounce: Duration, backstop: Duration, start: Duration) -> Self {
        Self {
            debounce: Debounce::new(debounce),
            backstop: Interval::new(backstop, start),
        }
    }

    pub fn camera_changed(&mut self, now: Duration) {
        self.debounce.schedule(now);
    }

    pub fn resized(&mut self, now: Duration) {
        self.debounce.schedule(now);
    }

    pub fn is_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    /// Whether a pass should run now. Both timers are consumed, so a frame
    /// where both are due still yields one pass.
    pub fn due(&mut self, now: Duration) -> bool {
        let debounced = self.debounce.fire_due(now);
        let periodic = self.backstop.fire_due(now);
        debounced || periodic
    }
}

impl Default for OverlapSchedule {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(OVERLAP_DEBOUNCE_MS),
            Duration::from_millis(OVERLAP_BACKSTOP_MS),
            Duration::ZERO,
        )
    }
}
