//! Submission Controller
//!
//! Drives one contact form submission: show the pending banner, make a
//! single delivery attempt, publish the outcome, clear the form on success,
//! and hide the banner again after a fixed delay.
//!
//! Submissions are not serialized. Each call runs independently and the
//! last status written wins. A newer status always cancels the hide task of
//! an earlier attempt, so a stale timer cannot hide a fresh message.

use crate::form::{FormData, FormState};
use crate::schedule::{HideHandle, HideScheduler};
use crate::status::{StatusBoard, SubmissionStatus};
use crate::transport::ContactTransport;
use crate::SubmitError;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// How a submission ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The endpoint answered with a success status
    Delivered,
    /// The endpoint answered with a failing status code
    Rejected { status: u16 },
    /// No response was obtained
    Unreachable,
}

impl SubmissionOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, SubmissionOutcome::Delivered)
    }
}

impl From<&SubmitError> for SubmissionOutcome {
    fn from(err: &SubmitError) -> Self {
        match err {
            SubmitError::Http { status, .. } => SubmissionOutcome::Rejected { status: *status },
            SubmitError::Transport(_) => SubmissionOutcome::Unreachable,
        }
    }
}

pub struct SubmissionController<T, S: HideScheduler> {
    inner: Arc<Inner<T, S>>,
}

struct Inner<T, S: HideScheduler> {
    transport: T,
    scheduler: S,
    form: FormState,
    status: StatusBoard,
    hide_delay: Duration,
    hide: Arc<Mutex<HideSlot<S::Handle>>>,
}

/// The hide task owned by the latest status write.
///
/// Status writes happen with this slot locked, so a write and the swap of
/// its hide task are never interleaved with another attempt's.
struct HideSlot<H> {
    generation: u64,
    handle: Option<H>,
}

impl<H: HideHandle> HideSlot<H> {
    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
    }
}

fn lock_slot<H>(slot: &Mutex<HideSlot<H>>) -> MutexGuard<'_, HideSlot<H>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<T, S: HideScheduler> Clone for SubmissionController<T, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, S> SubmissionController<T, S>
where
    T: ContactTransport + 'static,
    S: HideScheduler,
{
    pub fn new(
        transport: T,
        scheduler: S,
        form: FormState,
        status: StatusBoard,
        hide_delay: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                transport,
                scheduler,
                form,
                status,
                hide_delay,
                hide: Arc::new(Mutex::new(HideSlot {
                    generation: 0,
                    handle: None,
                })),
            }),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.inner.form
    }

    pub fn status(&self) -> &StatusBoard {
        &self.inner.status
    }

    pub fn transport(&self) -> &T {
        &self.inner.transport
    }

    /// Submit `payload`.
    ///
    /// The pending status is published before this returns; the returned
    /// future performs the request and resolves once the outcome has been
    /// published and the hide task scheduled.
    pub fn submit(&self, payload: FormData) -> impl Future<Output = SubmissionOutcome> + 'static {
        let inner = Arc::clone(&self.inner);
        inner.publish(SubmissionStatus::pending(), false);

        async move { inner.deliver(payload).await }
    }

    /// Submit whatever the form currently holds.
    pub fn submit_current(&self) -> impl Future<Output = SubmissionOutcome> + 'static {
        self.submit(self.inner.form.snapshot())
    }
}

impl<T, S> Inner<T, S>
where
    T: ContactTransport,
    S: HideScheduler,
{
    async fn deliver(&self, payload: FormData) -> SubmissionOutcome {
        match self.transport.deliver(&payload).await {
            Ok(()) => {
                tracing::info!("Contact inquiry delivered");
                self.publish(SubmissionStatus::success(), true);
                self.form.reset();
                SubmissionOutcome::Delivered
            }
            Err(err) => {
                tracing::warn!("Submission error: {}", err);
                self.publish(SubmissionStatus::failure(err.status_message()), true);
                SubmissionOutcome::from(&err)
            }
        }
    }

    /// Write `status`, cancelling the previous hide task, and optionally
    /// schedule a hide for this write.
    fn publish(&self, status: SubmissionStatus, hide_later: bool) {
        let mut slot = lock_slot(&self.hide);
        slot.cancel();
        slot.generation += 1;
        self.status.set(status);

        if hide_later {
            let generation = slot.generation;
            let board = self.status.clone();
            let hide = Arc::clone(&self.hide);
            let task = move || {
                // A task that already fired cannot be aborted; it must still
                // leave newer writes alone.
                let mut slot = lock_slot(&hide);
                if slot.generation == generation {
                    board.hide();
                    slot.handle = None;
                }
            };
            slot.handle = Some(self.scheduler.schedule(self.hide_delay, Box::new(task)));
        }
    }
}
