//! Status messages and the outcome of mutating actions.

use std::fmt;

use crate::error::ApiError;

/// Fallback when the server rejects a request without a detail text
pub const GENERIC_ERROR_TEXT: &str = "An error occurred";
pub const SIGNUP_FAILURE_TEXT: &str = "Failed to sign up. Please try again.";
pub const REMOVE_FAILURE_TEXT: &str = "Failed to remove participant. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    /// Style class of the message area
    pub fn as_class(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

/// The message area: text, styling and visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Increases with every shown message; the hide timer only hides its own message
    pub id: u64,
    pub text: String,
    pub severity: Severity,
    pub visible: bool,
}

/// Mutating user actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    Signup,
    Remove,
}

impl BoardAction {
    /// Text shown when no usable response arrived
    pub fn failure_text(&self) -> &'static str {
        match self {
            BoardAction::Signup => SIGNUP_FAILURE_TEXT,
            BoardAction::Remove => REMOVE_FAILURE_TEXT,
        }
    }
}

impl fmt::Display for BoardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardAction::Signup => write!(f, "signing up"),
            BoardAction::Remove => write!(f, "removing participant"),
        }
    }
}

/// Which branch a mutating action took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Succeeded { message: String },
    Failed { message: String },
}

impl ActionOutcome {
    /// Map an API result onto the message the user sees.
    ///
    /// Server rejections show the server's detail text; failures without a
    /// usable response show the action's fixed failure text.
    pub fn from_result(action: BoardAction, result: Result<String, ApiError>) -> Self {
        match result {
            Ok(message) => ActionOutcome::Succeeded { message },
            Err(ApiError::Server { detail, .. }) => ActionOutcome::Failed {
                message: detail.unwrap_or_else(|| GENERIC_ERROR_TEXT.to_string()),
            },
            Err(ApiError::Network(_)) | Err(ApiError::MalformedResponse(_)) => {
                ActionOutcome::Failed {
                    message: action.failure_text().to_string(),
                }
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ActionOutcome::Succeeded { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            ActionOutcome::Succeeded { message } | ActionOutcome::Failed { message } => message,
        }
    }

    pub fn severity(&self) -> Severity {
        if self.is_success() {
            Severity::Success
        } else {
            Severity::Error
        }
    }
}
