//! View model of the board and the render target trait.
//!
//! `BoardSnapshot` mirrors the page: the activity list, the activity
//! selection control, the signup form and the message area. It is rebuilt
//! wholesale from each fetched collection; there is no diffing.

use crate::domain::{Activity, ActivityCollection};

use super::message::StatusMessage;

pub const PARTICIPANT_ICON: &str = "👤";
pub const REMOVE_GLYPH: &str = "✕";
pub const REMOVE_TITLE: &str = "Remove participant";
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet.";
pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_FAILURE_TEXT: &str = "Failed to load activities. Please try again later.";

/// Removal control of a participant row, tagged with its owning activity
/// and the participant's email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveControl {
    pub activity: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    pub email: String,
    pub remove: RemoveControl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Roster {
    /// Rendered as the "no participants" placeholder
    Empty,
    /// One row per participant, in server order
    Participants(Vec<ParticipantRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub roster: Roster,
}

impl ActivityCard {
    pub fn from_activity(activity: &Activity) -> Self {
        let roster = if activity.has_participants() {
            Roster::Participants(
                activity
                    .participants
                    .iter()
                    .map(|email| ParticipantRow {
                        email: email.clone(),
                        remove: RemoveControl {
                            activity: activity.name.clone(),
                            email: email.clone(),
                        },
                    })
                    .collect(),
            )
        } else {
            Roster::Empty
        };

        Self {
            name: activity.name.clone(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            roster,
        }
    }

    pub fn availability_text(&self) -> String {
        format!("{} spots left", self.spots_left)
    }

    pub fn rows(&self) -> &[ParticipantRow] {
        match &self.roster {
            Roster::Empty => &[],
            Roster::Participants(rows) => rows,
        }
    }
}

/// Content of the activity list container
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListContent {
    Loading,
    Activities(Vec<ActivityCard>),
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub selected_activity: Option<String>,
    pub email: String,
}

impl SignupForm {
    pub fn reset(&mut self) {
        self.selected_activity = None;
        self.email.clear();
    }
}

/// Everything the page shows at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub list: ListContent,
    /// Options of the activity selection control
    pub options: Vec<String>,
    pub form: SignupForm,
    pub message: Option<StatusMessage>,
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self {
            list: ListContent::Loading,
            options: Vec::new(),
            form: SignupForm::default(),
            message: None,
        }
    }
}

impl BoardSnapshot {
    /// Rebuild the list and the selection control from a fetched collection.
    ///
    /// The current selection survives only if its activity is still offered.
    pub fn apply_collection(&mut self, collection: &ActivityCollection) {
        self.list = ListContent::Activities(
            collection
                .iter()
                .map(ActivityCard::from_activity)
                .collect(),
        );
        self.options = collection.names();

        if let Some(selected) = &self.form.selected_activity
            && !self.options.contains(selected)
        {
            self.form.selected_activity = None;
        }
    }

    /// Replace the list with the static failure text; the options stay as they were.
    pub fn apply_load_failure(&mut self) {
        self.list = ListContent::Failed(LOAD_FAILURE_TEXT.to_string());
    }

    pub fn cards(&self) -> &[ActivityCard] {
        match &self.list {
            ListContent::Activities(cards) => cards,
            ListContent::Loading | ListContent::Failed(_) => &[],
        }
    }

    /// Removal control of row `row` in card `card` (both zero-based)
    pub fn remove_control(&self, card: usize, row: usize) -> Option<&RemoveControl> {
        self.cards()
            .get(card)
            .and_then(|c| c.rows().get(row))
            .map(|r| &r.remove)
    }

    /// The status message if it is currently shown
    pub fn visible_message(&self) -> Option<&StatusMessage> {
        self.message.as_ref().filter(|m| m.visible)
    }
}

/// Render target of the board.
///
/// Called after every state change while the board state is locked, so
/// calls arrive in the order the state changed.
pub trait BoardView: Send + Sync {
    /// The list, the selection control or the form changed
    fn render_board(&self, snapshot: &BoardSnapshot);

    /// The message area changed; `None` means it is hidden
    fn render_message(&self, message: Option<&StatusMessage>);
}
