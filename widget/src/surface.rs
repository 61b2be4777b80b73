use crate::banner::UiMessage;
use crate::view::Node;

pub const PLACEHOLDER_LABEL: &str = "-- Select an activity --";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn placeholder() -> Self {
        SelectOption {
            value: String::new(),
            label: PLACEHOLDER_LABEL.to_string(),
        }
    }

    /// Value and label are the raw activity name; the host assigns both as text.
    pub fn activity(name: &str) -> Self {
        SelectOption {
            value: name.to_string(),
            label: name.to_string(),
        }
    }
}

/// Form state read at submission time. Taken verbatim, unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupRequest {
    pub activity: String,
    pub email: String,
}

/// The host page as seen by the widget: the `activities-list` container, the
/// `activity` select, the `signup-form` and the `message` area.
pub trait Surface: Send + 'static {
    fn clear_activities(&mut self);

    fn append_activity_card(&mut self, card: Node);

    /// Replaces the whole list with a single failure notice.
    fn show_load_failure(&mut self, text: &str);

    /// Drops every option and leaves only `placeholder`.
    fn reset_activity_options(&mut self, placeholder: SelectOption);

    fn append_activity_option(&mut self, option: SelectOption);

    fn signup_request(&self) -> SignupRequest;

    fn reset_signup_form(&mut self);

    fn set_submit_enabled(&mut self, enabled: bool);

    fn show_message(&mut self, message: &UiMessage);

    fn hide_message(&mut self);
}
