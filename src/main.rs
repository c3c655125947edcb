//! # Heuristic Board-Game Arena
//!
//! Terminal entry point for the three rules engines: Othello, Tic-Tac-Toe
//! (sliding-window variant) and Gomoku. A plain synchronous prompt loop
//! reads "row,col" coordinates, runs them through the game controller and
//! prints the updated board; with `--ai` the built-in heuristic opponent
//! answers for the second color.
//!
//! ## Usage
//! ```text
//! play --game othello --ai
//! play --game tictactoe
//! play --game gomoku
//! ```

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use rules::game_controller::{GameController, MoveOutcome};
use rules::game_wrapper::{GameVariant, MoveWrapper};
use rules::games::gomoku::GomokuMove;
use rules::games::othello::OthelloMove;
use rules::games::tictactoe::TicTacToeMove;
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Game to play: othello, tictactoe or gomoku
    #[clap(short, long, default_value = "othello")]
    game: String,

    /// Let the heuristic AI play the second color (not available for
    /// gomoku)
    #[clap(long, action = clap::ArgAction::SetTrue)]
    ai: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let variant: GameVariant = args
        .game
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))
        .context("valid games are othello, tictactoe and gomoku")?;

    if args.ai && variant == GameVariant::Gomoku {
        bail!("Gomoku has no AI opponent; run it without --ai");
    }

    let mut controller = GameController::new_game(variant);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{}", format!("=== {} ===", variant).bold());
    println!("Enter moves as row,col (0-based). 'r' restarts, 'q' quits.\n");

    loop {
        render(&controller);

        if controller.is_game_over() {
            announce_result(&controller);
            println!("{}", "Press 'r' to play again or 'q' to quit.".dimmed());
        } else {
            print!(
                "{} to move > ",
                controller.player_name(controller.get_current_player())
            );
            io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let input = line?.trim().to_lowercase();

        match input.as_str() {
            "q" | "quit" => break,
            "r" | "restart" => {
                controller.reset();
                continue;
            }
            "" => continue,
            _ => {}
        }

        if controller.is_game_over() {
            continue;
        }

        let mv = match parse_move(variant, &input) {
            Ok(mv) => mv,
            Err(e) => {
                println!("{}", e.red());
                continue;
            }
        };

        match controller.attempt_move(mv) {
            MoveOutcome::Accepted { terminal, .. } => {
                if !terminal && args.ai && controller.get_current_player() == -1 {
                    ai_turn(&mut controller);
                }
            }
            MoveOutcome::Rejected { reason } => {
                println!("{}", reason.to_string().red());
            }
        }
    }

    println!("\n{}", controller.format_history());
    Ok(())
}

/// Plays AI moves until the human is back on turn. A single reply in the
/// common case, but Othello's skip rule can hand the AI several moves in
/// a row.
fn ai_turn(controller: &mut GameController) {
    while !controller.is_game_over() && controller.get_current_player() == -1 {
        let Some(mv) = controller.compute_ai_move() else {
            break;
        };
        println!("{}", format!("AI plays {}", mv).cyan());
        if !controller.attempt_move(mv).accepted() {
            break;
        }
    }
}

fn parse_move(variant: GameVariant, input: &str) -> Result<MoveWrapper, String> {
    match variant {
        GameVariant::Othello => input.parse::<OthelloMove>().map(MoveWrapper::Othello),
        GameVariant::TicTacToe => input.parse::<TicTacToeMove>().map(MoveWrapper::TicTacToe),
        GameVariant::Gomoku => input.parse::<GomokuMove>().map(MoveWrapper::Gomoku),
    }
}

fn render(controller: &GameController) {
    let board = controller.get_board();
    let size = board.len();

    // Column header.
    print!("\n    ");
    for c in 0..size {
        print!("{:>2} ", c);
    }
    println!();

    for (r, row) in board.iter().enumerate() {
        print!("{:>3} ", r);
        for &cell in row {
            let symbol = match cell {
                1 => " ●".normal(),
                -1 => " ○".normal(),
                _ => " ·".dimmed(),
            };
            print!("{} ", symbol);
        }
        println!();
    }

    if let rules::game_wrapper::GameWrapper::Othello(state) = controller.get_render_state() {
        println!(
            "\n{}",
            format!(
                "Black {} - {} White",
                state.count_pieces(1),
                state.count_pieces(-1)
            )
            .dimmed()
        );
    }
    println!();
}

fn announce_result(controller: &GameController) {
    match controller.get_winner() {
        Some(winner) => {
            let line = format!("{} wins!", controller.player_name(winner));
            println!("{}", line.green().bold());
            if let Some(triple) = controller.winning_line() {
                println!(
                    "{}",
                    format!(
                        "Winning line: ({},{}) ({},{}) ({},{})",
                        triple[0].0, triple[0].1, triple[1].0, triple[1].1, triple[2].0, triple[2].1
                    )
                    .dimmed()
                );
            }
        }
        None => println!("{}", "Draw!".yellow().bold()),
    }
}
