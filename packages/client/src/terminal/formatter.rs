//! Text rendering of the board for the terminal.

use crate::board::{
    BoardSnapshot, StatusMessage,
    view::{
        ActivityCard, LOADING_TEXT, ListContent, NO_PARTICIPANTS_TEXT, PARTICIPANT_ICON,
        REMOVE_GLYPH, Roster,
    },
};

const DOUBLE_RULE: &str = "============================================================";
const SINGLE_RULE: &str = "------------------------------------------------------------";

/// Board formatter for terminal display
pub struct BoardFormatter;

impl BoardFormatter {
    /// Format the whole board: the activity list and the signup form
    ///
    /// Cards are numbered like the selection options; participant rows are
    /// numbered `<card>.<row>` so they can be targeted by `remove`.
    pub fn format_board(snapshot: &BoardSnapshot) -> String {
        let mut output = String::new();
        output.push_str("\n\n");
        output.push_str(DOUBLE_RULE);
        output.push_str("\nActivities:\n");

        match &snapshot.list {
            ListContent::Loading => {
                output.push_str(LOADING_TEXT);
                output.push('\n');
            }
            ListContent::Failed(text) => {
                output.push_str(text);
                output.push('\n');
                if !snapshot.options.is_empty() {
                    output.push_str(&Self::format_options(&snapshot.options));
                }
            }
            ListContent::Activities(cards) if cards.is_empty() => {
                output.push_str("(No activities)\n");
            }
            ListContent::Activities(cards) => {
                for (index, card) in cards.iter().enumerate() {
                    if index > 0 {
                        output.push_str(SINGLE_RULE);
                        output.push('\n');
                    }
                    output.push_str(&Self::format_card(index + 1, card));
                }
            }
        }

        output.push_str(DOUBLE_RULE);
        output.push('\n');
        output.push_str(&Self::format_form(snapshot));
        output
    }

    /// Format one activity card
    ///
    /// # Arguments
    ///
    /// * `number` - 1-based card number
    /// * `card` - The card to format
    pub fn format_card(number: usize, card: &ActivityCard) -> String {
        let mut output = format!(
            "[{}] {}\n    {}\n    Schedule: {}\n    Availability: {}\n    Participants:\n",
            number,
            card.name,
            card.description,
            card.schedule,
            card.availability_text()
        );

        match &card.roster {
            Roster::Empty => {
                output.push_str(&format!("      {}\n", NO_PARTICIPANTS_TEXT));
            }
            Roster::Participants(rows) => {
                for (index, row) in rows.iter().enumerate() {
                    output.push_str(&format!(
                        "      [{}.{}] {} {}  {}\n",
                        number,
                        index + 1,
                        PARTICIPANT_ICON,
                        row.email,
                        REMOVE_GLYPH
                    ));
                }
            }
        }

        output
    }

    /// Format the options of the selection control
    pub fn format_options(options: &[String]) -> String {
        let listed: Vec<String> = options
            .iter()
            .enumerate()
            .map(|(index, name)| format!("[{}] {}", index + 1, name))
            .collect();
        format!("Activities available for signup: {}\n", listed.join(", "))
    }

    /// Format the current state of the signup form
    pub fn format_form(snapshot: &BoardSnapshot) -> String {
        let activity = snapshot
            .form
            .selected_activity
            .as_deref()
            .unwrap_or("-- Select an activity --");
        let email = if snapshot.form.email.is_empty() {
            "(empty)"
        } else {
            snapshot.form.email.as_str()
        };
        format!("Signup form: activity = {}, email = {}\n", activity, email)
    }

    /// Format a status message with its severity
    pub fn format_message(message: &StatusMessage) -> String {
        format!("\n[{}] {}\n", message.severity.as_class(), message.text)
    }
}
