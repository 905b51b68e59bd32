//! `BoardView` implementation that prints to stdout.

use crate::board::{BoardSnapshot, BoardView, StatusMessage};

use super::{formatter::BoardFormatter, ui::redisplay_prompt};

/// Renders the board as text on the terminal
pub struct TerminalView {
    prompt: String,
}

impl TerminalView {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

impl BoardView for TerminalView {
    fn render_board(&self, snapshot: &BoardSnapshot) {
        print!("{}", BoardFormatter::format_board(snapshot));
        redisplay_prompt(&self.prompt);
    }

    fn render_message(&self, message: Option<&StatusMessage>) {
        match message {
            Some(message) => {
                print!("{}", BoardFormatter::format_message(message));
                redisplay_prompt(&self.prompt);
            }
            // Printed lines cannot be taken back.
            None => tracing::debug!("Status message hidden"),
        }
    }
}
