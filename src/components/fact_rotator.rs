//! Self-advancing fun-fact display.

use crate::app::event::{AppEvent, EventSender, Generation};
use crate::app::timer::IntervalTimer;
use crate::motion::{Presence, Timing, Visibility};
use std::time::Duration;
use tracing::{debug, info};

pub const FACTS: [&str; 5] = [
    "Dogs have a sense of time and can tell how long you've been gone.",
    "A dog's nose print is unique, much like a human's fingerprint.",
    "Dalmatians are born completely white and develop their spots as they grow older.",
    "The Basenji is the only breed of dog that can't bark, but they can yodel!",
    "The Greyhound is the fastest dog breed and can run up to 45 miles per hour.",
];

pub const FACT_INTERVAL: Duration = Duration::from_millis(5000);

pub const FACT_TIMING: Timing = Timing::symmetric(Duration::from_millis(500));

pub fn next_index(index: usize) -> usize {
    (index + 1) % FACTS.len()
}

/// Owns the rotation timer for as long as it is mounted. Firings that carry
/// another mount's generation, or arrive after unmount, are ignored.
pub struct FactRotator {
    index: usize,
    generation: Generation,
    timer: Option<IntervalTimer>,
    presence: Presence<usize>,
}

impl FactRotator {
    pub fn mount(
        events: EventSender,
        period: Duration,
        generation: Generation,
        timing: Timing,
    ) -> Self {
        let timer = IntervalTimer::start(events, period, move || AppEvent::FactTimer {
            generation,
        });
        info!(generation, "fact rotator mounted");
        Self {
            index: 0,
            generation,
            timer: Some(timer),
            presence: Presence::new(0, timing),
        }
    }

    /// Cancel the timer and reset the index. Safe to call more than once.
    pub fn unmount(&mut self) {
        if self.timer.take().is_some() {
            info!(generation = self.generation, "fact rotator unmounted");
        }
        self.index = 0;
    }

    pub fn on_timer(&mut self, generation: Generation) -> bool {
        if generation != self.generation || self.timer.is_none() {
            debug!(
                generation,
                current = self.generation,
                "discarding stale fact timer firing"
            );
            return false;
        }
        self.index = next_index(self.index);
        self.presence.switch(self.index);
        debug_assert_eq!(*self.presence.key(), self.index);
        debug!(index = self.index, "fact advanced");
        true
    }

    pub fn index(&self) -> usize {
        self.index
    }

    #[cfg(test)]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Animation key; tracks `index` exactly.
    #[cfg(test)]
    pub fn key(&self) -> usize {
        *self.presence.key()
    }

    /// The fact to draw this frame. During a change this is the old fact
    /// leaving, then the new one arriving.
    pub fn displayed(&self) -> (&'static str, Visibility) {
        let (idx, vis) = self.presence.visible();
        (FACTS[*idx], vis)
    }

    pub fn advance(&mut self, dt: Duration) -> bool {
        self.presence.advance(dt)
    }

    pub fn is_animating(&self) -> bool {
        self.presence.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    async fn idle(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    /// Feed every queued firing to the rotator, returning the indexes seen.
    fn pump(rotator: &mut FactRotator, rx: &mut mpsc::UnboundedReceiver<AppEvent>) -> Vec<usize> {
        let mut seen = Vec::new();
        while let Ok(event) = rx.try_recv() {
            if let AppEvent::FactTimer { generation } = event {
                if rotator.on_timer(generation) {
                    seen.push(rotator.index());
                }
            }
        }
        seen
    }

    #[test]
    fn test_next_index_wraps() {
        assert_eq!(next_index(0), 1);
        assert_eq!(next_index(3), 4);
        assert_eq!(next_index(4), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_cycle_in_five_intervals() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut rotator = FactRotator::mount(tx, FACT_INTERVAL, 1, FACT_TIMING);
        assert_eq!(rotator.index(), 0);
        assert_eq!(rotator.displayed().0, FACTS[0]);

        idle(25_001).await;
        assert_eq!(pump(&mut rotator, &mut rx), vec![1, 2, 3, 4, 0]);
        assert_eq!(rotator.index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_index_is_firings_mod_len() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut rotator = FactRotator::mount(tx, FACT_INTERVAL, 1, FACT_TIMING);

        // Sample just after each boundary.
        idle(1).await;
        for n in 1..=12usize {
            idle(5000).await;
            pump(&mut rotator, &mut rx);
            assert_eq!(rotator.index(), n % FACTS.len());
            assert_eq!(rotator.key(), rotator.index());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_before_first_firing_leaves_no_timer() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut rotator = FactRotator::mount(tx, FACT_INTERVAL, 1, FACT_TIMING);
        idle(4000).await;
        rotator.unmount();
        assert!(!rotator.is_running());

        idle(30_000).await;
        assert!(pump(&mut rotator, &mut rx).is_empty());
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_queued_firing_after_unmount_is_ignored() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut rotator = FactRotator::mount(tx, FACT_INTERVAL, 7, FACT_TIMING);
        idle(5001).await;
        rotator.unmount();
        assert!(pump(&mut rotator, &mut rx).is_empty());
        assert_eq!(rotator.index(), 0);
    }

    #[tokio::test]
    async fn test_other_generation_is_ignored() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut rotator = FactRotator::mount(tx, FACT_INTERVAL, 2, FACT_TIMING);
        assert!(!rotator.on_timer(1));
        assert_eq!(rotator.index(), 0);
        assert!(rotator.on_timer(2));
        assert_eq!(rotator.index(), 1);
        assert_eq!(rotator.generation(), 2);
    }

    #[tokio::test]
    async fn test_old_fact_exits_before_new_enters() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut rotator = FactRotator::mount(tx, FACT_INTERVAL, 1, FACT_TIMING);
        rotator.advance(Duration::from_millis(500));
        assert_eq!(rotator.displayed(), (FACTS[0], Visibility::Shown));

        rotator.on_timer(1);
        let (text, vis) = rotator.displayed();
        assert_eq!(text, FACTS[0]);
        assert!(matches!(vis, Visibility::Exiting(_)));

        rotator.advance(Duration::from_millis(500));
        let (text, vis) = rotator.displayed();
        assert_eq!(text, FACTS[1]);
        assert!(matches!(vis, Visibility::Entering(_)));

        rotator.advance(Duration::from_millis(500));
        assert!(!rotator.is_animating());
    }
}
