//! Activity board component, its view model and status messages.

mod component;
pub mod message;
pub mod view;

pub use component::ActivityBoard;
pub use message::{ActionOutcome, Severity, StatusMessage};
pub use view::{BoardSnapshot, BoardView, RemoveControl};
