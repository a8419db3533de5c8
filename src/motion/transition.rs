use std::time::Duration;

/// A single delayed, fixed-length animation driven by UI ticks.
///
/// Nothing here touches the clock: callers feed elapsed time through
/// [`Transition::advance`], which keeps animations deterministic under test.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    delay: Duration,
    duration: Duration,
    elapsed: Duration,
}

impl Transition {
    pub fn new(duration: Duration) -> Self {
        Self {
            delay: Duration::ZERO,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// A transition that has already run to completion.
    pub fn completed() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Advance by `dt`. Returns `true` while the transition still needs frames.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.is_done() {
            return false;
        }
        self.elapsed = (self.elapsed + dt).min(self.delay + self.duration);
        true
    }

    pub fn is_started(&self) -> bool {
        self.elapsed >= self.delay
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.delay + self.duration
    }

    /// Eased progress in `0.0..=1.0`; zero until the delay has passed.
    pub fn progress(&self) -> f32 {
        if self.is_done() {
            return 1.0;
        }
        if self.elapsed < self.delay {
            return 0.0;
        }
        let t = (self.elapsed - self.delay).as_secs_f32() / self.duration.as_secs_f32();
        ease_out(t.clamp(0.0, 1.0))
    }
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}
