//! The activity board: keeps the rendered activities and the selection
//! control in sync with the server.
//!
//! ## Action lifecycle
//!
//! ```text
//! Idle -> Requesting -> Success -> Refreshing -> Idle
//!                    \-> Failure -> Idle
//! ```
//!
//! A successful signup or removal triggers exactly one refresh, a failed
//! one none. Actions are not serialized: overlapping refreshes each apply
//! their result when their response arrives, so the last response to
//! arrive determines what is shown.

use std::sync::Arc;

use tokio::{sync::Mutex, task::JoinHandle};

use crate::{
    api::ActivityApi,
    config::BoardConfig,
    error::{ApiError, FormError},
};

use super::{
    message::{ActionOutcome, BoardAction, Severity, StatusMessage},
    view::{BoardSnapshot, BoardView},
};

struct BoardState {
    snapshot: BoardSnapshot,
    last_message_id: u64,
    /// Pending auto-hide of the current message
    hide_timer: Option<JoinHandle<()>>,
}

struct BoardInner {
    /// Activities API（HTTP クライアントの抽象化）
    api: Arc<dyn ActivityApi>,
    /// Render target
    view: Arc<dyn BoardView>,
    config: BoardConfig,
    /// Never held across a network request
    state: Mutex<BoardState>,
}

/// Activity board component
///
/// Cheap to clone; clones share the same state.
#[derive(Clone)]
pub struct ActivityBoard {
    inner: Arc<BoardInner>,
}

impl ActivityBoard {
    /// Create a new board. Nothing is fetched until `refresh` is called.
    ///
    /// # Arguments
    ///
    /// * `api` - Activities API used for every request
    /// * `view` - Render target notified after every state change
    /// * `config` - Board configuration (message auto-hide delay)
    pub fn new(api: Arc<dyn ActivityApi>, view: Arc<dyn BoardView>, config: BoardConfig) -> Self {
        Self {
            inner: Arc::new(BoardInner {
                api,
                view,
                config,
                state: Mutex::new(BoardState {
                    snapshot: BoardSnapshot::default(),
                    last_message_id: 0,
                    hide_timer: None,
                }),
            }),
        }
    }

    /// Copy of the current board state
    pub async fn snapshot(&self) -> BoardSnapshot {
        self.inner.state.lock().await.snapshot.clone()
    }

    /// Fetch the whole collection and rebuild the list and the selection control.
    ///
    /// On failure the list shows the static failure text and the selection
    /// control keeps its previous options. Errors are logged, never returned.
    pub async fn refresh(&self) {
        tracing::debug!("Fetching activities");
        let result = self.inner.api.list_activities().await;

        let mut state = self.inner.state.lock().await;
        match result {
            Ok(collection) => {
                state.snapshot.apply_collection(&collection);
                tracing::info!("Loaded {} activities", collection.len());
            }
            Err(e) => {
                tracing::error!("Error fetching activities: {}", e);
                state.snapshot.apply_load_failure();
            }
        }
        self.inner.view.render_board(&state.snapshot);
    }

    /// Choose an activity in the selection control.
    pub async fn select_activity(&self, name: &str) -> Result<(), FormError> {
        let mut state = self.inner.state.lock().await;
        if !state.snapshot.options.iter().any(|option| option == name) {
            return Err(FormError::UnknownActivity(name.to_string()));
        }
        state.snapshot.form.selected_activity = Some(name.to_string());
        Ok(())
    }

    /// Type into the email field. The value is not validated.
    pub async fn set_email(&self, email: &str) {
        let mut state = self.inner.state.lock().await;
        state.snapshot.form.email = email.to_string();
    }

    /// Submit the signup form.
    ///
    /// Both fields are required; a missing field is returned as `FormError`
    /// without issuing a request.
    pub async fn submit_signup(&self) -> Result<ActionOutcome, FormError> {
        let (activity, email) = {
            let state = self.inner.state.lock().await;
            let form = &state.snapshot.form;
            let activity = form
                .selected_activity
                .clone()
                .ok_or(FormError::MissingActivity)?;
            let email = form.email.trim().to_string();
            if email.is_empty() {
                return Err(FormError::MissingEmail);
            }
            (activity, email)
        };

        Ok(self.signup(&activity, &email).await)
    }

    /// Sign `email` up for `activity`.
    ///
    /// On success the message is shown, the form is reset and the
    /// collection is refreshed once.
    pub async fn signup(&self, activity: &str, email: &str) -> ActionOutcome {
        tracing::info!("Signing up {} for {}", email, activity);
        let result = self.inner.api.signup(activity, email).await;

        let outcome = self.settle(BoardAction::Signup, result).await;
        if outcome.is_success() {
            self.inner.state.lock().await.snapshot.form.reset();
            self.refresh().await;
        }
        outcome
    }

    /// Remove `email` from `activity`, as tagged on a participant's removal control.
    ///
    /// On success the message is shown and the collection is refreshed once.
    pub async fn remove_participant(&self, activity: &str, email: &str) -> ActionOutcome {
        tracing::info!("Removing {} from {}", email, activity);
        let result = self.inner.api.unregister(activity, email).await;

        let outcome = self.settle(BoardAction::Remove, result).await;
        if outcome.is_success() {
            self.refresh().await;
        }
        outcome
    }

    /// Log the result of a mutating request and show its message.
    async fn settle(&self, action: BoardAction, result: Result<String, ApiError>) -> ActionOutcome {
        match &result {
            Ok(_) => tracing::debug!("Finished {}", action),
            Err(e @ ApiError::Server { .. }) => tracing::warn!("Server rejected {}: {}", action, e),
            Err(e) => tracing::error!("Error {}: {}", action, e),
        }

        let outcome = ActionOutcome::from_result(action, result);
        self.show_message(outcome.message().to_string(), outcome.severity())
            .await;
        outcome
    }

    /// Show a status message and (re)start its auto-hide timer.
    async fn show_message(&self, text: String, severity: Severity) {
        let mut state = self.inner.state.lock().await;
        state.last_message_id += 1;
        let id = state.last_message_id;
        state.snapshot.message = Some(StatusMessage {
            id,
            text,
            severity,
            visible: true,
        });
        self.inner
            .view
            .render_message(state.snapshot.visible_message());

        let board = self.clone();
        let ttl = self.inner.config.message_ttl;
        let timer = tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            board.hide_message(id).await;
        });

        if let Some(previous) = state.hide_timer.replace(timer) {
            previous.abort();
        }
    }

    /// Hide message `id` unless a newer message replaced it.
    async fn hide_message(&self, id: u64) {
        let mut state = self.inner.state.lock().await;
        if let Some(message) = state.snapshot.message.as_mut()
            && message.id == id
            && message.visible
        {
            message.visible = false;
            tracing::debug!("Status message {} hidden", id);
            self.inner.view.render_message(None);
        }
    }
}
