//! One-shot timer backing the overlay shown between wizard steps.
//!
//! The timer is a single tokio task that sleeps for the overlay duration.
//! Cancelling or dropping the timer aborts the task, so nothing outlives the
//! screen that started it.

use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Default time the overlay stays up.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(2000);

/// How a transition timer ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    Elapsed,
    Cancelled,
}

/// A cancellable one-shot timer.
///
/// Must be started from within a tokio runtime.
#[derive(Debug)]
pub struct TransitionTimer {
    started: Instant,
    duration: Duration,
    task: JoinHandle<()>,
    fired: Option<oneshot::Receiver<()>>,
}

impl TransitionTimer {
    pub fn start(duration: Duration) -> Self {
        let (tx, rx) = oneshot::channel();
        let task = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let _ = tx.send(());
        });
        tracing::debug!(duration_ms = duration.as_millis() as u64, "transition timer started");
        Self {
            started: Instant::now(),
            duration,
            task,
            fired: Some(rx),
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Fraction of the duration that has elapsed, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = self.started.elapsed().as_secs_f64();
        (elapsed / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Time left before the timer fires.
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.started.elapsed())
    }

    /// Wait for the timer. Returns [`TimerOutcome::Cancelled`] if it was
    /// cancelled before elapsing, or if it was already waited on.
    pub async fn wait(&mut self) -> TimerOutcome {
        let Some(rx) = self.fired.take() else {
            return TimerOutcome::Cancelled;
        };
        match rx.await {
            Ok(()) => TimerOutcome::Elapsed,
            Err(_) => TimerOutcome::Cancelled,
        }
    }

    /// Abort the pending timer. Waiting afterwards reports `Cancelled`.
    pub fn cancel(&mut self) {
        if !self.task.is_finished() {
            tracing::debug!("transition timer cancelled");
        }
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TransitionTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
