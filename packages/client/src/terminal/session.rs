//! Interactive session: reads commands and turns them into board actions.
//!
//! Requests run as independent tasks, so a second command can be issued
//! while an earlier request is still in flight.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::{mpsc, oneshot};

use crate::{board::ActivityBoard, error::ClientError};

use super::{
    command::{ActivityChoice, Command, HELP_TEXT, is_exit_command, parse_command},
    ui::{PROMPT, redisplay_prompt},
};

/// Run the interactive session until the user quits
pub async fn run_session(board: ActivityBoard) -> Result<(), ClientError> {
    // Create channel for rustyline input
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<String>();
    let (ready_tx, ready_rx) = oneshot::channel::<Result<(), String>>();

    // Spawn a blocking thread for rustyline (synchronous readline)
    let _readline_handle = std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => {
                ready_tx.send(Ok(())).ok();
                rl
            }
            Err(e) => {
                ready_tx.send(Err(e.to_string())).ok();
                return;
            }
        };

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    rl.add_history_entry(line).ok();
                    if input_tx.send(line.to_string()).is_err() || is_exit_command(line) {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    match ready_rx.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => return Err(ClientError::Readline(e)),
        Err(_) => return Err(ClientError::Readline("readline thread exited".to_string())),
    }

    while let Some(line) = input_rx.recv().await {
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => handle_command(&board, command).await,
            Err(e) => {
                println!("{}", e);
                redisplay_prompt(PROMPT);
            }
        }
    }

    tracing::info!("Session ended");
    Ok(())
}

async fn handle_command(board: &ActivityBoard, command: Command) {
    match command {
        Command::List => {
            let board = board.clone();
            tokio::spawn(async move { board.refresh().await });
        }
        Command::Select(choice) => {
            select(board, &choice).await;
        }
        Command::Email(email) => {
            board.set_email(&email).await;
            println!("Email set to {}", email);
            redisplay_prompt(PROMPT);
        }
        Command::Submit => spawn_submit(board),
        Command::Signup { activity, email } => {
            if select(board, &activity).await {
                board.set_email(&email).await;
                spawn_submit(board);
            }
        }
        Command::Remove { card, row } => {
            let control = board.snapshot().await.remove_control(card, row).cloned();
            match control {
                Some(control) => {
                    let board = board.clone();
                    tokio::spawn(async move {
                        board
                            .remove_participant(&control.activity, &control.email)
                            .await
                    });
                }
                None => {
                    println!("No participant at {}.{}", card + 1, row + 1);
                    redisplay_prompt(PROMPT);
                }
            }
        }
        Command::Help => {
            print!("{}", HELP_TEXT);
            redisplay_prompt(PROMPT);
        }
        Command::Quit => {}
    }
}

/// Select an activity in the form, reporting problems to the user.
async fn select(board: &ActivityBoard, choice: &ActivityChoice) -> bool {
    let options = board.snapshot().await.options;
    let selected = match choice.resolve(&options) {
        Some(name) => board.select_activity(&name).await.map(|_| name),
        None => {
            println!("No activity with that number (1-{})", options.len());
            redisplay_prompt(PROMPT);
            return false;
        }
    };

    match selected {
        Ok(name) => {
            println!("Selected {}", name);
            redisplay_prompt(PROMPT);
            true
        }
        Err(e) => {
            println!("{}", e);
            redisplay_prompt(PROMPT);
            false
        }
    }
}

fn spawn_submit(board: &ActivityBoard) {
    let board = board.clone();
    tokio::spawn(async move {
        if let Err(e) = board.submit_signup().await {
            println!("{}", e);
            redisplay_prompt(PROMPT);
        }
    });
}
