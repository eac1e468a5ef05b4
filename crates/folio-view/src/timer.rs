//! Section timers.
//!
//! Each timer is a tokio task owned by a [`ScopedTask`]; dropping the handle
//! aborts the task, so tearing down a section stops its timers.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

#[derive(Debug)]
pub struct ScopedTask {
    handle: JoinHandle<()>,
}

impl ScopedTask {
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(future),
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the task to end on its own. A panic in the task is logged,
    /// not propagated.
    pub async fn wait(&mut self) {
        if let Err(error) = (&mut self.handle).await {
            if !error.is_cancelled() {
                tracing::warn!(%error, "section task failed");
            }
        }
    }

    /// Stop the timer now instead of at drop.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for ScopedTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Run `tick` every `period`, first after one full period.
pub fn spawn_interval<F>(period: Duration, mut tick: F) -> ScopedTask
where
    F: FnMut() + Send + 'static,
{
    ScopedTask::spawn(async move {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            tick();
        }
    })
}

/// Run `once` after `delay`.
pub fn spawn_after<F>(delay: Duration, once: F) -> ScopedTask
where
    F: FnOnce() + Send + 'static,
{
    ScopedTask::spawn(async move {
        tokio::time::sleep(delay).await;
        once();
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, impl FnMut() + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let inner = Arc::clone(&count);
        (count, move || {
            inner.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn interval_waits_a_full_period_first() {
        let (count, tick) = counter();
        let _timer = spawn_interval(Duration::from_secs(1), tick);

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
        tokio::time::sleep(Duration::from_millis(2_100)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_stops_the_timer() {
        let (count, tick) = counter();
        let timer = spawn_interval(Duration::from_secs(1), tick);

        tokio::time::sleep(Duration::from_millis(2_500)).await;
        timer.cancel();
        let seen = count.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_secs(10)).await;

        assert_eq!(seen, 2);
        assert_eq!(count.load(Ordering::SeqCst), seen);
    }

    #[tokio::test(start_paused = true)]
    async fn one_shot_fires_once() {
        let (count, tick) = counter();
        let mut tick = tick;
        let timer = spawn_after(Duration::from_millis(400), move || tick());

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(timer.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn one_shot_dropped_early_never_fires() {
        let (count, tick) = counter();
        let mut tick = tick;
        drop(spawn_after(Duration::from_millis(400), move || tick()));

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
