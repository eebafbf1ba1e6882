//! Deferred hiding of the status banner

use std::time::Duration;

/// A scheduled hide task that can still be called off
pub trait HideHandle: Send + 'static {
    fn cancel(self);
}

/// Runs a task once after a delay
pub trait HideScheduler: Send + Sync + 'static {
    type Handle: HideHandle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send + 'static>) -> Self::Handle;
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::{TokioHideHandle, TokioScheduler};

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::{HideHandle, HideScheduler};
    use crate::{ContactError, ContactResult};
    use std::time::Duration;
    use tokio::runtime::Handle;
    use tokio::task::JoinHandle;

    /// Schedules hide tasks on a tokio runtime
    #[derive(Debug, Clone)]
    pub struct TokioScheduler {
        runtime: Handle,
    }

    impl TokioScheduler {
        pub fn new(runtime: Handle) -> Self {
            Self { runtime }
        }

        /// Use the runtime the caller is running on.
        pub fn current() -> ContactResult<Self> {
            Handle::try_current()
                .map(Self::new)
                .map_err(|e| ContactError::Config(format!("No tokio runtime: {}", e)))
        }
    }

    #[derive(Debug)]
    pub struct TokioHideHandle(JoinHandle<()>);

    impl HideHandle for TokioHideHandle {
        fn cancel(self) {
            self.0.abort();
        }
    }

    impl HideScheduler for TokioScheduler {
        type Handle = TokioHideHandle;

        fn schedule(
            &self,
            delay: Duration,
            task: Box<dyn FnOnce() + Send + 'static>,
        ) -> Self::Handle {
            TokioHideHandle(self.runtime.spawn(async move {
                tokio::time::sleep(delay).await;
                task();
            }))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::Arc;

        #[tokio::test(start_paused = true)]
        async fn test_task_runs_after_delay() {
            let scheduler = TokioScheduler::current().unwrap();
            let fired = Arc::new(AtomicBool::new(false));
            let flag = fired.clone();

            let _handle = scheduler.schedule(
                Duration::from_millis(4000),
                Box::new(move || flag.store(true, Ordering::SeqCst)),
            );

            tokio::time::sleep(Duration::from_millis(3990)).await;
            assert!(!fired.load(Ordering::SeqCst));

            tokio::time::sleep(Duration::from_millis(20)).await;
            tokio::task::yield_now().await;
            assert!(fired.load(Ordering::SeqCst));
        }

        #[tokio::test(start_paused = true)]
        async fn test_cancelled_task_never_runs() {
            let scheduler = TokioScheduler::current().unwrap();
            let fired = Arc::new(AtomicBool::new(false));
            let flag = fired.clone();

            let handle = scheduler.schedule(
                Duration::from_millis(100),
                Box::new(move || flag.store(true, Ordering::SeqCst)),
            );
            handle.cancel();

            tokio::time::sleep(Duration::from_millis(500)).await;
            tokio::task::yield_now().await;
            assert!(!fired.load(Ordering::SeqCst));
        }

        #[test]
        fn test_current_outside_runtime() {
            assert!(matches!(
                TokioScheduler::current(),
                Err(ContactError::Config(_))
            ));
        }
    }
}
