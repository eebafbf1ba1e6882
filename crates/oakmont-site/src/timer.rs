//! Browser timers for hiding the status banner

use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use oakmont_contact::{HideHandle, HideScheduler};
use std::time::Duration;

/// Schedules hide tasks with `window.setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

#[derive(Debug)]
pub struct BrowserHideHandle(Option<TimeoutHandle>);

impl HideHandle for BrowserHideHandle {
    fn cancel(self) {
        if let Some(handle) = self.0 {
            handle.clear();
        }
    }
}

impl HideScheduler for BrowserScheduler {
    type Handle = BrowserHideHandle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send + 'static>) -> Self::Handle {
        match set_timeout_with_handle(task, delay) {
            Ok(handle) => BrowserHideHandle(Some(handle)),
            Err(e) => {
                tracing::error!("Failed to schedule status hide: {:?}", e);
                BrowserHideHandle(None)
            }
        }
    }
}
