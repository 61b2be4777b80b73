use crate::banner::{Severity, UiMessage};
use crate::surface::{SelectOption, SignupRequest, Surface};
use crate::view::{Element, Node};

const LOADING: &str = "Loading activities...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageArea {
    pub text: String,
    pub severity: Option<Severity>,
    pub hidden: bool,
}

impl MessageArea {
    pub fn class_name(&self) -> String {
        let mut class = match self.severity {
            Some(severity) => format!("message {}", severity.class_name()),
            None => String::new(),
        };

        if self.hidden {
            if !class.is_empty() {
                class.push(' ');
            }
            class.push_str("hidden");
        }

        class
    }
}

impl Default for MessageArea {
    fn default() -> Self {
        MessageArea {
            text: String::new(),
            severity: None,
            hidden: true,
        }
    }
}

/// In-memory host page implementing the widget's DOM contract.
#[derive(Debug, Clone)]
pub struct Page {
    activities_list: Vec<Node>,
    activity_options: Vec<SelectOption>,
    email: String,
    selected_activity: String,
    submit_enabled: bool,
    message: MessageArea,
}

impl Default for Page {
    fn default() -> Self {
        Page::new()
    }
}

impl Page {
    pub fn new() -> Self {
        Page {
            activities_list: vec![Element::new("p").text(LOADING).into()],
            activity_options: vec![SelectOption::placeholder()],
            email: String::new(),
            selected_activity: String::new(),
            submit_enabled: true,
            message: MessageArea::default(),
        }
    }

    /// What a user typing into the form would leave behind.
    pub fn fill_signup_form(&mut self, email: &str, activity: &str) {
        self.email = email.to_string();
        self.selected_activity = activity.to_string();
    }

    pub fn activity_cards(&self) -> Vec<&Element> {
        self.activities_list
            .iter()
            .filter_map(Node::as_element)
            .filter(|element| element.has_class("activity-card"))
            .collect()
    }

    pub fn activity_options(&self) -> &[SelectOption] {
        &self.activity_options
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn selected_activity(&self) -> &str {
        &self.selected_activity
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn message(&self) -> &MessageArea {
        &self.message
    }

    pub fn activities_html(&self) -> String {
        self.activities_list.iter().map(Node::to_html).collect()
    }

    /// Serializes the page fragment the widget owns.
    pub fn to_html(&self) -> String {
        let list = self
            .activities_list
            .iter()
            .cloned()
            .fold(
                Element::new("div").attr("id", "activities-list"),
                |list, node| list.child(node),
            );

        let select = self.activity_options.iter().fold(
            Element::new("select").attr("id", "activity"),
            |select, option| {
                let mut element = Element::new("option").attr("value", option.value.clone());
                if option.value == self.selected_activity {
                    element = element.attr("selected", "selected");
                }
                select.child(element.text(option.label.clone()))
            },
        );

        let mut button = Element::new("button").attr("type", "submit");
        if !self.submit_enabled {
            button = button.attr("disabled", "disabled");
        }

        let form = Element::new("form")
            .attr("id", "signup-form")
            .child(
                Element::new("input")
                    .attr("type", "email")
                    .attr("id", "email")
                    .attr("value", self.email.clone()),
            )
            .child(select)
            .child(button.text("Sign Up"));

        let message = Element::new("div")
            .attr("id", "message")
            .class(self.message.class_name())
            .text(self.message.text.clone());

        [list, form, message]
            .into_iter()
            .map(|element| Node::from(element).to_html())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Surface for Page {
    fn clear_activities(&mut self) {
        self.activities_list.clear();
    }

    fn append_activity_card(&mut self, card: Node) {
        self.activities_list.push(card);
    }

    fn show_load_failure(&mut self, text: &str) {
        self.activities_list = vec![Element::new("p").text(text).into()];
    }

    fn reset_activity_options(&mut self, placeholder: SelectOption) {
        // A select whose options are replaced falls back to its first option.
        self.selected_activity = placeholder.value.clone();
        self.activity_options = vec![placeholder];
    }

    fn append_activity_option(&mut self, option: SelectOption) {
        self.activity_options.push(option);
    }

    fn signup_request(&self) -> SignupRequest {
        SignupRequest {
            activity: self.selected_activity.clone(),
            email: self.email.clone(),
        }
    }

    fn reset_signup_form(&mut self) {
        self.email.clear();
        self.selected_activity = self
            .activity_options
            .first()
            .map(|option| option.value.clone())
            .unwrap_or_default();
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn show_message(&mut self, message: &UiMessage) {
        self.message = MessageArea {
            text: message.text.clone(),
            severity: Some(message.severity),
            hidden: false,
        };
    }

    fn hide_message(&mut self) {
        self.message.hidden = true;
    }
}
