use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::api::{ActivitiesApi, SignupReply};
use crate::banner::{MessageBanner, UiMessage};
use crate::error::SubmitFailure;
use crate::loader::ActivityLoader;
use crate::surface::{SignupRequest, Surface};

pub const GENERIC_ERROR: &str = "An error occurred";
pub const TRANSPORT_ERROR: &str = "Failed to sign up. Please try again.";

/// A form submission as delivered by the host.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        SubmitEvent::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    SignedUp,
    Rejected,
    Failed,
    /// Another submission was still pending; nothing was sent.
    InFlight,
}

pub struct SignupSubmitter<A, S> {
    api: Arc<A>,
    surface: Arc<Mutex<S>>,
    loader: ActivityLoader<A, S>,
    banner: Arc<MessageBanner<S>>,
    in_flight: AtomicBool,
    refresh: Mutex<Option<JoinHandle<()>>>,
}

impl<A: ActivitiesApi, S: Surface> SignupSubmitter<A, S> {
    pub fn new(
        api: Arc<A>,
        surface: Arc<Mutex<S>>,
        loader: ActivityLoader<A, S>,
        banner: Arc<MessageBanner<S>>,
    ) -> Self {
        SignupSubmitter {
            api,
            surface,
            loader,
            banner,
            in_flight: AtomicBool::new(false),
            refresh: Mutex::new(None),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub async fn submit(&self, event: &mut SubmitEvent) -> SubmitOutcome {
        event.prevent_default();

        let Some(_guard) = InFlightGuard::acquire(&self.in_flight, &self.surface) else {
            debug!("signup already in flight, ignoring submit");
            return SubmitOutcome::InFlight;
        };

        let request = self.surface.lock().signup_request();

        match self.send(&request).await {
            Ok(message) => {
                info!("signed up {} for {}", request.email, request.activity);

                self.banner.show(UiMessage::success(message));
                self.surface.lock().reset_signup_form();

                let loader = self.loader.clone();
                let refresh = tokio::spawn(async move {
                    let _ = loader.load().await;
                });
                *self.refresh.lock() = Some(refresh);

                SubmitOutcome::SignedUp
            }
            Err(failure) => {
                self.banner.show(UiMessage::error(failure.user_message()));

                match failure {
                    SubmitFailure::Rejected { .. } => {
                        warn!("{}", failure);
                        SubmitOutcome::Rejected
                    }
                    SubmitFailure::Transport(_) => {
                        error!("Error signing up: {}", failure);
                        SubmitOutcome::Failed
                    }
                }
            }
        }
    }

    /// Waits for the list reload started by the last successful signup, if
    /// it is still outstanding.
    pub async fn refreshed(&self) {
        let refresh = self.refresh.lock().take();

        if let Some(refresh) = refresh {
            if let Err(err) = refresh.await {
                warn!("activity refresh did not complete: {}", err);
            }
        }
    }

    async fn send(&self, request: &SignupRequest) -> Result<String, SubmitFailure> {
        match self.api.signup(&request.activity, &request.email).await? {
            SignupReply::Accepted(response) => Ok(response.message),
            SignupReply::Rejected { status, detail } => {
                Err(SubmitFailure::Rejected { status, detail })
            }
        }
    }
}

/// Holds the in-flight flag and keeps the submit control disabled until dropped.
struct InFlightGuard<'a, S: Surface> {
    flag: &'a AtomicBool,
    surface: &'a Mutex<S>,
}

impl<'a, S: Surface> InFlightGuard<'a, S> {
    fn acquire(flag: &'a AtomicBool, surface: &'a Mutex<S>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()?;

        surface.lock().set_submit_enabled(false);

        Some(InFlightGuard { flag, surface })
    }
}

impl<S: Surface> Drop for InFlightGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.lock().set_submit_enabled(true);
        self.flag.store(false, Ordering::SeqCst);
    }
}
