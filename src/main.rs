//! Hit & Blow - CLI
//!
//! Runs duels over an in-process loopback channel: you against the
//! solver, or two solvers against each other.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use hit_and_blow::{
    EventSink, GuessSource, Hand, JudgeStatus, LineInput, MatchConfig, MatchEvent, Peer, Role,
    Side, Solver, hand_by_seed, memory_pair,
};
use tokio::sync::mpsc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => MatchConfig::from_file(path)?,
        None => MatchConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play {
            seed,
            opponent_seed,
            secret,
        } => {
            let secret = secret.as_deref().map(Hand::parse).transpose()?;
            let you = LineInput::stdin("You");
            run_duel(&config, you, seed, opponent_seed, secret).await
        }
        Command::Watch {
            seed,
            opponent_seed,
        } => {
            let seed = seed.unwrap_or_else(rand::random);
            let left = Solver::new("Left", seed).with_think_time(config.solver_delay());
            run_duel(&config, left, Some(seed), opponent_seed, None).await
        }
        Command::Hand { seed } => {
            println!("{}", hand_by_seed(seed));
            Ok(())
        }
    }
}

/// Plays `local` (as opener) against the solver (as joiner) and renders
/// the opener's view.
#[instrument(skip(config, local, secret), fields(local = local.name()))]
async fn run_duel<S>(
    config: &MatchConfig,
    local: S,
    seed: Option<u64>,
    opponent_seed: Option<u64>,
    secret: Option<Hand>,
) -> Result<()>
where
    S: GuessSource + 'static,
{
    let seed = seed.unwrap_or_else(rand::random);
    let opponent_seed = opponent_seed.unwrap_or_else(rand::random);
    info!(seed, opponent_seed, "Starting duel");

    let (near, far) = memory_pair();
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let renderer = tokio::spawn(render(event_rx));

    let mut opener = Peer::new(Role::Opener, near, local, seed)
        .with_timer(config.timer())
        .with_start_delay(config.start_delay())
        .with_events(EventSink::new(event_tx));
    if let Some(hand) = secret {
        opener = opener.with_hand(hand);
    }

    let solver = Solver::new("Solver", opponent_seed).with_think_time(config.solver_delay());
    let joiner = Peer::new(Role::Joiner, far, solver, opponent_seed).with_timer(config.timer());

    let joiner = tokio::spawn(joiner.run());
    let report = opener.run().await.context("match aborted")?;

    // Joiner finishes on its own once it has seen the last message.
    let theirs = joiner.await.context("opponent task panicked")?;
    renderer.await.context("renderer panicked")?;

    if let Ok(theirs) = theirs
        && let Some(hand) = theirs.board().hand()
    {
        println!("Opponent's hand was {}", hand);
    }
    println!("Result: {}", report.outcome());
    Ok(())
}

/// Prints display events until the engine drops its sink.
async fn render(mut rx: mpsc::UnboundedReceiver<MatchEvent>) {
    while let Some(event) = rx.recv().await {
        match event {
            MatchEvent::Started { first } => match first {
                Side::Mine => println!("[Sys]: You go first. Enter three digits."),
                Side::Opponent => println!("[Sys]: Opponent goes first."),
            },
            MatchEvent::Score(row) => println!("{}", row),
            MatchEvent::Countdown(remaining) if remaining % 10 == 0 || remaining <= 5 => {
                println!("[Sys]: {}s left", remaining)
            }
            MatchEvent::Countdown(_) => {}
            MatchEvent::Judgment(status) => match status {
                JudgeStatus::Win => println!("WIN"),
                JudgeStatus::Lose => println!("LOSE"),
                JudgeStatus::Draw => println!("DRAW"),
                JudgeStatus::NotYet => {}
            },
            MatchEvent::Notice(text) => println!("[Sys]: {}", text),
        }
    }
}
