use std::sync::Arc;

use parking_lot::Mutex;

use crate::api::ActivitiesApi;
use crate::banner::MessageBanner;
use crate::config::WidgetConfig;
use crate::error::LoadFailure;
use crate::loader::ActivityLoader;
use crate::submitter::{SignupSubmitter, SubmitEvent, SubmitOutcome};
use crate::surface::Surface;

/// The activity list and signup form wired to one host surface.
pub struct Widget<A, S> {
    surface: Arc<Mutex<S>>,
    loader: ActivityLoader<A, S>,
    submitter: SignupSubmitter<A, S>,
}

impl<A: ActivitiesApi, S: Surface> Widget<A, S> {
    pub fn mount(api: A, surface: S, config: &WidgetConfig) -> Self {
        let api = Arc::new(api);
        let surface = Arc::new(Mutex::new(surface));

        let loader = ActivityLoader::new(api.clone(), surface.clone());
        let banner = Arc::new(MessageBanner::new(
            surface.clone(),
            config.message_timeout,
        ));
        let submitter = SignupSubmitter::new(api, surface.clone(), loader.clone(), banner);

        Widget {
            surface,
            loader,
            submitter,
        }
    }

    /// Initial render, run once the host page is ready.
    pub async fn start(&self) -> Result<usize, LoadFailure> {
        self.loader.load().await
    }

    pub async fn submit(&self, event: &mut SubmitEvent) -> SubmitOutcome {
        self.submitter.submit(event).await
    }

    /// Resolves once the reload after a successful signup has rendered.
    pub async fn refreshed(&self) {
        self.submitter.refreshed().await
    }

    pub fn surface(&self) -> &Arc<Mutex<S>> {
        &self.surface
    }
}
