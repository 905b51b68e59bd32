//! Interactive terminal front end of the activity board.

mod command;
mod formatter;
mod runner;
mod session;
mod ui;
mod view;

pub use command::{ActivityChoice, Command, CommandError, parse_command};
pub use formatter::BoardFormatter;
pub use runner::run_client;
pub use view::TerminalView;
