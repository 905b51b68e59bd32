//! Client execution logic.

use std::sync::Arc;

use crate::{
    api::HttpActivityApi, board::ActivityBoard, config::BoardConfig, error::ClientError,
};

use super::{session::run_session, ui::PROMPT, view::TerminalView};

/// Run the terminal client against the API at `base_url`
///
/// The first load runs in the background so the prompt is usable while it
/// is pending.
pub async fn run_client(base_url: String, config: BoardConfig) -> Result<(), ClientError> {
    let api = Arc::new(HttpActivityApi::new(&base_url)?);
    let view = Arc::new(TerminalView::new(PROMPT));
    let board = ActivityBoard::new(api, view, config);

    tracing::info!("Using activities API at {}", base_url);
    println!("\nExtracurricular activities. Type 'help' for the list of commands.\n");

    tokio::spawn({
        let board = board.clone();
        async move { board.refresh().await }
    });

    run_session(board).await
}
