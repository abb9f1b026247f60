//! Autoplay policy and the scoped timer task that drives it

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::trace;

use crate::error::ConfigError;

/// Delay between two autoplay steps unless configured otherwise
pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(1500);

/// How often autoplay advances a navigator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayPolicy {
    interval: Duration,
}

impl AutoplayPolicy {
    /// Create a policy; the interval must be non-zero
    pub fn new(interval: Duration) -> Result<Self, ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(Self { interval })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for AutoplayPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_AUTOPLAY_INTERVAL,
        }
    }
}

/// A running autoplay timer
///
/// The task is aborted when this guard is dropped, so whoever owns the
/// guard owns the timer's lifetime.
#[derive(Debug)]
pub(crate) struct AutoplayTimer {
    epoch: u64,
    handle: JoinHandle<()>,
}

impl AutoplayTimer {
    /// Spawn a timer that calls `on_tick` once per interval
    ///
    /// The first call happens one full interval after spawning. The task
    /// ends as soon as `on_tick` returns `false`.
    pub(crate) fn spawn<F>(runtime: &Handle, policy: AutoplayPolicy, epoch: u64, mut on_tick: F) -> Self
    where
        F: FnMut() -> bool + Send + 'static,
    {
        let period = policy.interval();
        let handle = runtime.spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if !on_tick() {
                    trace!(epoch, "autoplay timer finished");
                    break;
                }
            }
        });

        Self { epoch, handle }
    }

    pub(crate) fn epoch(&self) -> u64 {
        self.epoch
    }
}

impl Drop for AutoplayTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_zero_interval_rejected() {
        assert!(matches!(
            AutoplayPolicy::new(Duration::ZERO),
            Err(ConfigError::ZeroInterval)
        ));
        assert_eq!(AutoplayPolicy::default().interval(), DEFAULT_AUTOPLAY_INTERVAL);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_first_tick_after_one_interval() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&ticks);
        let policy = AutoplayPolicy::new(Duration::from_millis(100)).unwrap();
        let _timer = AutoplayTimer::spawn(&Handle::current(), policy, 1, move || {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(260)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_stops_when_callback_declines() {
        let policy = AutoplayPolicy::new(Duration::from_millis(10)).unwrap();
        let mut remaining = 2;
        let timer = AutoplayTimer::spawn(&Handle::current(), policy, 7, move || {
            remaining -= 1;
            remaining > 0
        });
        assert_eq!(timer.epoch(), 7);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(timer.handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_timer_cancels_task() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&ticks);
        let policy = AutoplayPolicy::new(Duration::from_millis(10)).unwrap();
        let timer = AutoplayTimer::spawn(&Handle::current(), policy, 1, move || {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });

        tokio::time::sleep(Duration::from_millis(25)).await;
        drop(timer);
        let seen = ticks.load(Ordering::SeqCst);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), seen);
    }
}
