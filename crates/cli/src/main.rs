//! Interactive Nim against the search engine.
//!
//! Take 1..3 stones per turn; whoever takes the last stone wins. The
//! engine answers after a short thinking pause and keeps a per-depth
//! minimax vs alpha-beta comparison of every search it runs.

mod config;
mod session;
mod think;
mod tree_view;

use std::sync::mpsc;
use std::time::Duration;

use analytics::ComparisonReport;
use anyhow::{Context, Result};
use nim_core::{Algorithm, game, search_depth};
use nim_engine::Analysis;
use tracing::debug;

use session::{Outcome, Session, Turn};
use think::{EngineWorker, Event};

/// The engine's most recent analysis, with the pile it was computed for.
struct Analyzed {
    stones: u32,
    analysis: Analysis,
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

fn print_rules() {
    println!("Rules:");
    println!("  - The game starts with a fixed pile of stones.");
    println!("  - You and the engine alternate turns; you move first.");
    println!("  - On each turn a player removes 1, 2, or 3 stones.");
    println!("  - Whoever takes the last stone wins.");
}

fn print_help() {
    println!("Commands:");
    println!("  1 | 2 | 3 | take N      remove N stones");
    println!("  algo minimax|alphabeta  switch the engine's algorithm");
    println!("  tree                    print the engine's last search tree");
    println!("  stats                   print the engine's last search stats");
    println!("  report                  print the per-depth comparison table");
    println!("  history                 list moves, newest first");
    println!("  rules                   reprint the rules");
    println!("  reset                   restart the game");
    println!("  quit                    exit");
}

fn main() -> Result<()> {
    init_tracing();

    let config = config::load().context("loading nim.toml")?;
    let algorithm = config.algorithm()?;
    anyhow::ensure!(config.initial_stones > 0, "initial_stones must be at least 1");

    let (events, rx) = mpsc::channel();
    think::spawn_stdin_reader(events.clone());
    let worker = EngineWorker::spawn(
        events,
        algorithm,
        config.seed,
        Duration::from_millis(config.ai_delay_ms),
    );

    let mut session = Session::new(config.initial_stones);
    let mut last: Option<Analyzed> = None;

    println!("Nim: last stone wins. The engine plays with {}.", algorithm);
    println!();
    print_rules();
    println!();
    print_help();
    println!();
    println!("{} stones in the pile. Your move.", session.stones);

    // Quiet first look at the opening pile.
    worker.request_analysis(session.epoch, session.stones, false);

    for event in rx {
        match event {
            Event::Line(line) => {
                if !handle_line(&line, &mut session, &worker, &mut last) {
                    break;
                }
            }
            Event::Eof => break,
            Event::MoveReady {
                epoch,
                stones,
                choice,
            } => {
                if session.accepts(epoch) {
                    let take = choice.take;
                    last = Some(Analyzed {
                        stones,
                        analysis: choice.analysis,
                    });
                    session.apply_take(take);
                    println!("Engine takes {}. {} stones left.", take, session.stones);
                    if session.outcome == Outcome::EngineWins {
                        println!("The engine took the last stone and wins. Type 'reset' to play again.");
                    } else {
                        println!("Your move.");
                    }
                } else {
                    debug!(epoch, "dropping stale engine move");
                }
            }
            Event::AnalysisReady {
                epoch,
                stones,
                analysis,
            } => {
                if session.accepts(epoch) {
                    last = Some(Analyzed { stones, analysis });
                }
            }
        }
    }

    Ok(())
}

/// Handles one input line. Returns false when the session should end.
fn handle_line(
    line: &str,
    session: &mut Session,
    worker: &EngineWorker,
    last: &mut Option<Analyzed>,
) -> bool {
    let parts: Vec<&str> = line.trim().split_whitespace().collect();
    if parts.is_empty() {
        return true;
    }

    match parts[0] {
        "1" | "2" | "3" => {
            let take = match parts[0] {
                "1" => 1,
                "2" => 2,
                _ => 3,
            };
            player_take(session, worker, take);
        }
        "take" => match parts.get(1).and_then(|n| n.parse::<u32>().ok()) {
            Some(take) => player_take(session, worker, take),
            None => println!("Usage: take N  (N = 1..3)"),
        },
        "algo" => match parts.get(1).copied().and_then(Algorithm::from_name) {
            Some(algorithm) => {
                worker.set_algorithm(algorithm);
                worker.request_analysis(
                    session.epoch,
                    session.stones,
                    !session.history.is_empty(),
                );
                println!("Engine now plays with {}.", algorithm);
            }
            None => println!("Usage: algo minimax|alphabeta"),
        },
        "tree" => match last {
            Some(analyzed) => print!("{}", tree_view::render_tree(&analyzed.analysis.tree)),
            None => println!("No analysis yet."),
        },
        "stats" => match last {
            Some(analyzed) => print_stats(analyzed),
            None => println!("No analysis yet."),
        },
        "report" => match last {
            Some(analyzed) => {
                ComparisonReport::new(analyzed.stones, analyzed.analysis.rows.clone())
                    .print_report();
            }
            None => println!("No analysis yet."),
        },
        "history" => print_history(session),
        "rules" => print_rules(),
        "help" => print_help(),
        "reset" => {
            worker.cancel_pending();
            session.reset();
            *last = None;
            worker.request_analysis(session.epoch, session.stones, false);
            println!(
                "Fresh game: {} stones in the pile. Your move.",
                session.stones
            );
        }
        "quit" | "exit" => return false,
        other => println!("Unknown command {:?}. Type 'help' for the command list.", other),
    }
    true
}

/// Validates and applies a player move, then hands the turn to the engine.
fn player_take(session: &mut Session, worker: &EngineWorker, take: u32) {
    if session.outcome != Outcome::InProgress {
        println!("The game is over. Type 'reset' to play again.");
        return;
    }
    if session.turn != Turn::Player {
        println!("The engine is still thinking.");
        return;
    }
    let max = game::max_take(session.stones);
    if take == 0 || take > max {
        println!("You can take 1 to {} stones.", max);
        return;
    }

    session.apply_take(take);
    println!("You take {}. {} stones left.", take, session.stones);

    if session.outcome == Outcome::PlayerWins {
        println!("You took the last stone. You win!");
        return;
    }
    println!("Engine is thinking...");
    worker.request_move(session.epoch, session.stones);
}

fn print_stats(analyzed: &Analyzed) {
    let analysis = &analyzed.analysis;
    println!(
        "Last search: {} stones, {} at depth {}",
        analyzed.stones,
        analysis.algorithm,
        search_depth(analyzed.stones)
    );
    println!("  minimax nodes:    {}", analysis.stats.minimax_nodes);
    println!("  alphabeta nodes:  {}", analysis.stats.alpha_beta_nodes);
    println!("  est. time:        {:.2} ms", analysis.stats.time_ms);
}

fn print_history(session: &Session) {
    if session.history.is_empty() {
        println!("No moves yet.");
        return;
    }
    for record in session.history.iter().rev() {
        println!("{} took {}, {} left", record.by, record.taken, record.left);
    }
}
