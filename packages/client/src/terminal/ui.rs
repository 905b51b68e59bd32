//! UI utilities for the terminal.

use std::io::Write;

/// Prompt shown by the interactive session
pub const PROMPT: &str = "activities> ";

/// Redisplay the prompt after printing output
pub fn redisplay_prompt(prompt: &str) {
    print!("{}", prompt);
    std::io::stdout().flush().ok();
}
