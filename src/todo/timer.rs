//! Auto-clear timer for the notification banner.
//!
//! Each scheduled clear is a background task that sleeps until its deadline
//! and then posts [`AppEvent::NotificationExpired`] back to the main loop.
//! Only one task is ever pending: scheduling a new clear or cancelling
//! aborts the previous task.

use crate::app::event::AppEvent;
use crate::todo::notification::Generation;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tokio::time::{sleep_until, Instant};

pub struct ClearTimer {
    event_tx: mpsc::UnboundedSender<AppEvent>,
    pending: Option<(Generation, AbortHandle)>,
}

impl ClearTimer {
    pub fn new(event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            event_tx,
            pending: None,
        }
    }

    /// Schedule the clear for `generation` after `delay`, replacing any
    /// pending one.
    pub fn schedule(&mut self, generation: Generation, delay: Duration) {
        self.cancel();
        // Deadline is fixed now, not when the task first gets polled.
        let deadline = Instant::now() + delay;
        let tx = self.event_tx.clone();
        let handle = tokio::spawn(async move {
            sleep_until(deadline).await;
            let _ = tx.send(AppEvent::NotificationExpired { generation });
        });
        self.pending = Some((generation, handle.abort_handle()));
    }

    pub fn cancel(&mut self) {
        if let Some((generation, handle)) = self.pending.take() {
            tracing::debug!(generation, "cancelling notification timer");
            handle.abort();
        }
    }
}

impl Drop for ClearTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::advance;

    const DELAY: Duration = Duration::from_millis(3000);

    fn expired_generation(event: AppEvent) -> Generation {
        match event {
            AppEvent::NotificationExpired { generation } => generation,
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = ClearTimer::new(tx);
        let start = Instant::now();

        timer.schedule(1, DELAY);
        let event = rx.recv().await.expect("timer should fire");

        assert_eq!(expired_generation(event), 1);
        assert!(start.elapsed() >= DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn rescheduling_voids_earlier_timer() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = ClearTimer::new(tx);
        let start = Instant::now();

        timer.schedule(1, DELAY);
        advance(Duration::from_millis(1000)).await;
        timer.schedule(2, DELAY);

        // Past the first deadline, before the second.
        advance(Duration::from_millis(2500)).await;
        assert!(rx.try_recv().is_err());

        let event = rx.recv().await.expect("second timer should fire");
        assert_eq!(expired_generation(event), 2);
        assert!(start.elapsed() >= Duration::from_millis(4000));

        advance(Duration::from_millis(10_000)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_prevents_firing() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = ClearTimer::new(tx);

        timer.schedule(1, DELAY);
        timer.cancel();

        advance(Duration::from_millis(5000)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
    }
}
