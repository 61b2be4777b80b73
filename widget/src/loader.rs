use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{error, info};

use crate::api::ActivitiesApi;
use crate::error::LoadFailure;
use crate::render::{render_activities, ActivitiesView, LOAD_FAILURE};
use crate::surface::{SelectOption, Surface};

pub struct ActivityLoader<A, S> {
    api: Arc<A>,
    surface: Arc<Mutex<S>>,
}

impl<A, S> Clone for ActivityLoader<A, S> {
    fn clone(&self) -> Self {
        ActivityLoader {
            api: self.api.clone(),
            surface: self.surface.clone(),
        }
    }
}

impl<A: ActivitiesApi, S: Surface> ActivityLoader<A, S> {
    pub fn new(api: Arc<A>, surface: Arc<Mutex<S>>) -> Self {
        ActivityLoader { api, surface }
    }

    /// Fetches the activities and re-renders the list and the select.
    ///
    /// A failure is shown on the surface and logged before it is returned;
    /// callers are free to ignore the result.
    pub async fn load(&self) -> Result<usize, LoadFailure> {
        match self.fetch().await {
            Ok(view) => {
                apply(&mut *self.surface.lock(), &view);
                info!("rendered {} activities", view.cards.len());
                Ok(view.cards.len())
            }
            Err(err) => {
                self.surface.lock().show_load_failure(LOAD_FAILURE);
                error!("Error fetching activities: {}", err);
                Err(err)
            }
        }
    }

    async fn fetch(&self) -> Result<ActivitiesView, LoadFailure> {
        let activities = self.api.activities().await?;

        Ok(render_activities(&activities))
    }
}

fn apply<S: Surface>(surface: &mut S, view: &ActivitiesView) {
    surface.clear_activities();
    surface.reset_activity_options(SelectOption::placeholder());

    for card in &view.cards {
        surface.append_activity_card(card.to_node());
    }

    for option in &view.options {
        surface.append_activity_option(option.clone());
    }
}
