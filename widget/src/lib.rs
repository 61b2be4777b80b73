//! Client side of the activities signup page.
//!
//! [`ActivityLoader`] renders the activity list and the activity select,
//! [`SignupSubmitter`] posts the signup form and reports the outcome through a
//! timed [`MessageBanner`]. Both act on a host page through the [`Surface`]
//! trait; [`Page`] is the in-memory host.

pub mod api;
pub mod app;
pub mod banner;
pub mod config;
pub mod error;
pub mod escape;
pub mod loader;
pub mod page;
pub mod render;
pub mod submitter;
pub mod surface;
pub mod view;

#[cfg(test)]
mod testing;

pub use api::{ActivitiesApi, HttpApi, SignupReply};
pub use app::Widget;
pub use banner::{MessageBanner, Severity, UiMessage};
pub use config::WidgetConfig;
pub use error::{ApiError, LoadFailure, SubmitFailure};
pub use loader::ActivityLoader;
pub use page::Page;
pub use submitter::{SignupSubmitter, SubmitEvent, SubmitOutcome};
pub use surface::{SelectOption, SignupRequest, Surface};
