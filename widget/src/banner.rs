use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::debug;

use crate::surface::Surface;

pub const DEFAULT_HIDE_AFTER: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn class_name(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiMessage {
    pub text: String,
    pub severity: Severity,
}

impl UiMessage {
    pub fn success(text: impl Into<String>) -> Self {
        UiMessage {
            text: text.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        UiMessage {
            text: text.into(),
            severity: Severity::Error,
        }
    }
}

/// Shows one message at a time and hides it after `hide_after`.
///
/// At most one hide timer is pending: showing a new message aborts the
/// previous timer, so a later message always gets its full display time.
/// Must be used from inside a tokio runtime.
pub struct MessageBanner<S> {
    surface: Arc<Mutex<S>>,
    hide_after: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<S: Surface> MessageBanner<S> {
    pub fn new(surface: Arc<Mutex<S>>, hide_after: Duration) -> Self {
        MessageBanner {
            surface,
            hide_after,
            pending: Mutex::new(None),
        }
    }

    pub fn show(&self, message: UiMessage) {
        let mut pending = self.pending.lock();

        if let Some(timer) = pending.take() {
            timer.abort();
        }

        self.surface.lock().show_message(&message);

        let surface = self.surface.clone();
        let deadline = Instant::now() + self.hide_after;

        *pending = Some(tokio::spawn(async move {
            sleep_until(deadline).await;
            surface.lock().hide_message();
            debug!("message banner hidden");
        }));
    }

    pub fn has_pending_hide(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|timer| !timer.is_finished())
    }
}

impl<S> Drop for MessageBanner<S> {
    fn drop(&mut self) {
        if let Some(timer) = self.pending.get_mut().take() {
            timer.abort();
        }
    }
}
