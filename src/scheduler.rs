//! Deferred-callback scheduling capability.
//!
//! The flow uses timers for UI sequencing only: presenting the follow-up
//! prompt after the host's save dialog has settled, and releasing the
//! transient export document. None of it carries a correctness guarantee,
//! so callbacks are fire-and-forget with no cancellation.

use std::time::Duration;

/// A deferred callback.
pub type Callback = Box<dyn FnOnce() + Send + 'static>;

/// Injectable scheduling capability.
///
/// Tests substitute [`InlineScheduler`] to run everything synchronously.
pub trait Scheduler: Send + Sync {
    /// Run `callback` after roughly `delay`. No cancellation, no ordering
    /// guarantee relative to other scheduled callbacks.
    fn schedule(&self, delay: Duration, callback: Callback);
}

/// Scheduler backed by a tokio runtime.
#[derive(Clone)]
pub struct TokioScheduler {
    handle: tokio::runtime::Handle,
}

impl TokioScheduler {
    /// Create a scheduler on the given runtime handle.
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        Self { handle }
    }

    /// Create a scheduler on the current runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime, same as
    /// [`tokio::runtime::Handle::current`].
    pub fn current() -> Self {
        Self::new(tokio::runtime::Handle::current())
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, callback: Callback) {
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
    }
}

/// Scheduler that ignores the delay and runs callbacks at schedule time.
///
/// Collapses the flow's timers so tests observe every transition
/// synchronously. The timers exist for perceived smoothness only, so any
/// delay, including zero, is correct.
#[derive(Clone, Copy, Default)]
pub struct InlineScheduler;

impl Scheduler for InlineScheduler {
    fn schedule(&self, _delay: Duration, callback: Callback) {
        callback();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_inline_scheduler_runs_immediately() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();

        InlineScheduler.schedule(
            Duration::from_secs(3600),
            Box::new(move || flag.store(true, Ordering::SeqCst)),
        );

        assert!(fired.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_scheduler_fires_after_delay() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();

        let scheduler = TokioScheduler::current();
        scheduler.schedule(
            Duration::from_millis(400),
            Box::new(move || flag.store(true, Ordering::SeqCst)),
        );

        tokio::time::sleep(Duration::from_millis(399)).await;
        assert!(!fired.load(Ordering::SeqCst));

        tokio::time::sleep(Duration::from_millis(2)).await;
        // Yield so the spawned task observes the elapsed timer.
        tokio::task::yield_now().await;
        assert!(fired.load(Ordering::SeqCst));
    }
}
