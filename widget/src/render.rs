//! Pure mapping from activities to render instructions.

use shared::models::activity::{Activities, Activity};

use crate::escape::escape_html;
use crate::surface::SelectOption;
use crate::view::{Element, Node};

pub const NO_PARTICIPANTS: &str = "No participants yet";
pub const LOAD_FAILURE: &str = "Failed to load activities. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantItem {
    pub text: String,
    pub muted: bool,
}

/// One card. `heading`, `description` and `schedule` are escaped markup;
/// `name` and participant texts stay raw and are only ever assigned as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub heading: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivitiesView {
    pub cards: Vec<ActivityCard>,
    pub options: Vec<SelectOption>,
}

pub fn render_activities(activities: &Activities) -> ActivitiesView {
    let mut view = ActivitiesView::default();

    for (name, activity) in activities {
        view.cards.push(render_card(name, activity));
        view.options.push(SelectOption::activity(name));
    }

    view
}

pub fn render_card(name: &str, activity: &Activity) -> ActivityCard {
    let participants = if activity.participants.is_empty() {
        vec![ParticipantItem {
            text: NO_PARTICIPANTS.to_string(),
            muted: true,
        }]
    } else {
        activity
            .participants
            .iter()
            .map(|participant| ParticipantItem {
                text: participant.clone(),
                muted: false,
            })
            .collect()
    };

    ActivityCard {
        name: name.to_string(),
        heading: escape_html(name),
        description: escape_html(&activity.description),
        schedule: escape_html(&activity.schedule),
        spots_left: activity.spots_left(),
        participants,
    }
}

impl ActivityCard {
    pub fn to_node(&self) -> Node {
        let list = self.participants.iter().fold(
            Element::new("ul")
                .class("participants-list")
                .attr("aria-live", "polite")
                .attr("role", "list"),
            |list, item| {
                let class = if item.muted {
                    "participant-item muted"
                } else {
                    "participant-item"
                };

                list.child(
                    Element::new("li")
                        .class(class)
                        .attr("role", "listitem")
                        .text(item.text.clone()),
                )
            },
        );

        let section = Element::new("div")
            .class("participants-section")
            .attr("aria-label", format!("{} participants", self.name))
            .attr("role", "region")
            .child(
                Element::new("div")
                    .class("participants-title")
                    .text("Participants"),
            )
            .child(list);

        Element::new("div")
            .class("activity-card")
            .child(Element::new("h4").markup(self.heading.clone()))
            .child(Element::new("p").markup(self.description.clone()))
            .child(
                Element::new("p")
                    .child(Element::new("strong").text("Schedule:"))
                    .markup(format!(" {}", self.schedule)),
            )
            .child(
                Element::new("p")
                    .child(Element::new("strong").text("Availability:"))
                    .text(format!(" {} spots left", self.spots_left)),
            )
            .child(section)
            .into()
    }
}
