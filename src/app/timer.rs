//! Scoped repeating timer.
//!
//! An [`IntervalTimer`] owns a background task that posts an event into the
//! app channel once per period. Dropping the timer aborts the task, so a
//! component holding one cannot outlive its timer.

use crate::app::event::{AppEvent, EventSender};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::debug;

pub struct IntervalTimer {
    handle: JoinHandle<()>,
    period: Duration,
}

impl IntervalTimer {
    /// Start firing `make_event` every `period`. The first firing happens one
    /// full period after start; late firings are delayed, never bunched up.
    pub fn start<F>(events: EventSender, period: Duration, make_event: F) -> Self
    where
        F: Fn() -> AppEvent + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if events.send(make_event()).is_err() {
                    break;
                }
            }
        });
        debug!(period_ms = period.as_millis() as u64, "interval timer started");
        Self { handle, period }
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        self.handle.abort();
        debug!(period_ms = self.period.as_millis() as u64, "interval timer cancelled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    const PERIOD: Duration = Duration::from_millis(5000);

    async fn idle(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    fn count(rx: &mut mpsc::UnboundedReceiver<AppEvent>) -> usize {
        let mut n = 0;
        while rx.try_recv().is_ok() {
            n += 1;
        }
        n
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_firing_after_one_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _timer = IntervalTimer::start(tx, PERIOD, || AppEvent::Tick);

        idle(4999).await;
        assert_eq!(count(&mut rx), 0);

        idle(2).await;
        assert_eq!(count(&mut rx), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_once_per_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _timer = IntervalTimer::start(tx, PERIOD, || AppEvent::Tick);

        idle(25_001).await;
        assert_eq!(count(&mut rx), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_firings() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = IntervalTimer::start(tx, PERIOD, || AppEvent::Tick);
        drop(timer);

        idle(60_000).await;
        assert_eq!(count(&mut rx), 0);
        // The aborted task released its sender.
        assert!(rx.recv().await.is_none());
    }
}
