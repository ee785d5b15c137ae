//! Terminal shell for the tic-tac-toe core.
//!
//! Plays the role the desktop window played: it owns the session,
//! forwards cell picks and button commands to the core, and renders
//! the board after every change.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tictactoe_core::{
    Autoplay, Difficulty, GameEvent, LineNotifier, Mode, Position, Session, codec, strategy_for,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let cli = Cli::parse();
    let mode = Mode::from_code(cli.mode)
        .ok_or_else(|| anyhow::anyhow!("unknown mode code {}", cli.mode))?;
    let mut notifier = open_notifier(&cli)?;

    info!(mode = %mode, "starting shell");
    let session = Arc::new(Mutex::new(Session::new(mode)));
    print_help();
    render(&session.lock().unwrap());

    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let input = line.trim();
        match input {
            "" => {}
            "quit" | "q" => return Ok(()),
            "help" => print_help(),
            "restart" => {
                session.lock().unwrap().restart();
                render(&session.lock().unwrap());
            }
            "new" => {
                session.lock().unwrap().new_game();
                render(&session.lock().unwrap());
            }
            "save" => match codec::save_to_file(&session.lock().unwrap(), &cli.save_file) {
                Ok(()) => println!("Game state saved!"),
                Err(err) => println!("Save failed: {err}"),
            },
            "load" => match codec::load_from_file(&cli.save_file) {
                // A failed load leaves the current session untouched.
                Ok(loaded) => {
                    *session.lock().unwrap() = loaded;
                    println!("Game state loaded!");
                    render(&session.lock().unwrap());
                }
                Err(err) => println!("Load failed: {err}"),
            },
            "start" => {
                if session.lock().unwrap().mode() == Mode::AiVsAi {
                    run_autoplay(&session, Duration::from_millis(cli.move_delay_ms)).await?;
                    announce(&mut notifier, &session);
                } else {
                    println!("start only applies in AI vs AI mode");
                }
            }
            _ if input.starts_with("mode ") => match input[5..].parse().ok().and_then(Mode::from_code) {
                Some(mode) => {
                    session.lock().unwrap().set_mode(mode);
                    println!("Mode: {mode}");
                }
                None => println!("Unknown mode; use 0-3"),
            },
            _ => match Position::from_key(input) {
                Some(pos) => {
                    play_cell(&session, pos);
                    announce(&mut notifier, &session);
                }
                None => println!("Unknown command {input:?}; type help"),
            },
        }
    }
}

/// Applies a human move and, in the AI modes, the AI's reply.
fn play_cell(session: &Arc<Mutex<Session>>, pos: Position) {
    let mut session = session.lock().unwrap();
    if let Err(err) = session.apply_move(pos) {
        println!("{err}");
        return;
    }

    let difficulty = match session.mode() {
        Mode::AiEasy => Some(Difficulty::Easy),
        Mode::AiHard => Some(Difficulty::Hard),
        _ => None,
    };
    if let Some(difficulty) = difficulty
        && !session.is_over()
    {
        let mark = session.turn();
        match strategy_for(difficulty).choose(session.board(), mark) {
            Some(reply) => {
                if let Err(err) = session.apply_move(reply) {
                    warn!(%err, "AI chose an invalid cell");
                }
            }
            None => warn!("AI produced no move for an open board"),
        }
    }
    render(&session);
}

/// Runs the AI-vs-AI loop, printing each event as it arrives.
async fn run_autoplay(session: &Arc<Mutex<Session>>, delay: Duration) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let autoplay = Autoplay::new(
        Arc::clone(session),
        strategy_for(Difficulty::Hard),
        strategy_for(Difficulty::Easy),
        tx,
    )
    .with_delay(delay);

    let printer = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            match event {
                GameEvent::MoveMade { mark, position } => println!("{mark} -> {position}"),
                GameEvent::StateChanged(board) => println!("{board}\n"),
                GameEvent::GameOver(_) | GameEvent::Cancelled => break,
            }
        }
    });
    autoplay.run().await?;
    printer.await?;
    render(&session.lock().unwrap());
    Ok(())
}

/// Delivers the outcome message to the notify device, if configured.
fn announce(notifier: &mut Option<LineNotifier<std::fs::File>>, session: &Arc<Mutex<Session>>) {
    let status = session.lock().unwrap().status();
    if let Some(notifier) = notifier {
        notifier.announce_outcome(&status);
    }
}

fn open_notifier(cli: &Cli) -> Result<Option<LineNotifier<std::fs::File>>> {
    let Some(path) = &cli.notify_device else {
        return Ok(None);
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(Some(LineNotifier::new(file)))
}

fn render(session: &Session) {
    let stats = session.stats();
    println!("{}", session.board().display());
    println!(
        "turn: {}  mode: {}  X: {}  O: {}  ties: {}",
        session.turn(),
        session.mode(),
        stats.wins_x,
        stats.wins_o,
        stats.ties
    );
    if let Some(message) = tictactoe_core::outcome_message(&session.status()) {
        println!("{message}");
    }
    let _ = std::io::stdout().flush();
}

fn print_help() {
    println!("commands: A1..C3 place a mark, mode <0-3>, start, save, load, restart, new, quit");
}
