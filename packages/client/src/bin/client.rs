//! Terminal client for the extracurricular activities API.
//!
//! Lists the activities with their participants, signs students up and
//! removes them. Every successful change reloads the whole list.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin activity-board
//! cargo run --bin activity-board -- --url http://127.0.0.1:8000 --message-timeout-secs 5
//! ```

use std::time::Duration;

use clap::Parser;

use activity_board_client::config::{BoardConfig, DEFAULT_API_URL, DEFAULT_MESSAGE_TTL_SECS};
use activity_board_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "activity-board")]
#[command(about = "Terminal client for signing up to extracurricular activities", long_about = None)]
struct Args {
    /// Base URL of the activities API
    #[arg(short = 'u', long, default_value = DEFAULT_API_URL)]
    url: String,

    /// Seconds a status message stays visible
    #[arg(long, default_value_t = DEFAULT_MESSAGE_TTL_SECS)]
    message_timeout_secs: u64,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();
    let config = BoardConfig::new(Duration::from_secs(args.message_timeout_secs));

    // Run the client
    if let Err(e) = activity_board_client::terminal::run_client(args.url, config).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
