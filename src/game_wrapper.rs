//! # Game Wrapper Module - Unified Game Interface
//!
//! This module provides the abstraction layer that lets host code work
//! with any supported game through a single interface. Using enums rather
//! than trait objects keeps dispatch static: no heap allocation, no
//! vtables, and exhaustive pattern matching whenever a game-specific
//! detail (like Othello's skip rule or Tic-Tac-Toe's winning line) needs
//! special handling.
//!
//! The wrapper is what the [`crate::game_controller::GameController`]
//! owns, and what a UI layer renders from.

use crate::games::gomoku::{GomokuMove, GomokuState};
use crate::games::othello::{self, OthelloMove, OthelloState};
use crate::games::tictactoe::{TicTacToeMove, TicTacToeState};
use crate::GameState;
use std::fmt;
use std::str::FromStr;

/// Which of the three games a session plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameVariant {
    Othello,
    TicTacToe,
    Gomoku,
}

impl fmt::Display for GameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameVariant::Othello => write!(f, "Othello"),
            GameVariant::TicTacToe => write!(f, "Tic-Tac-Toe"),
            GameVariant::Gomoku => write!(f, "Gomoku"),
        }
    }
}

impl FromStr for GameVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "othello" | "reversi" => Ok(GameVariant::Othello),
            "tictactoe" | "tic-tac-toe" => Ok(GameVariant::TicTacToe),
            "gomoku" => Ok(GameVariant::Gomoku),
            other => Err(format!("Unknown game type: {}", other)),
        }
    }
}

/// Wrapper enum for all supported game states.
///
/// Each variant holds the complete state of its game. All contained types
/// implement [`GameState`], so the wrapper does too, via the dispatch
/// macro below.
#[derive(Debug, Clone)]
pub enum GameWrapper {
    /// Othello (Reversi) on a 10x10 board
    Othello(OthelloState),
    /// Tic-Tac-Toe with the six-stone sliding window
    TicTacToe(TicTacToeState),
    /// Gomoku (Five in a Row) on a 15x15 board
    Gomoku(GomokuState),
}

/// Wrapper enum for all supported move types. Every game addresses moves
/// as 0-based (row, col) coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MoveWrapper {
    Othello(OthelloMove),
    TicTacToe(TicTacToeMove),
    Gomoku(GomokuMove),
}

impl MoveWrapper {
    /// The (row, col) coordinates of the move, whatever the game.
    pub fn coords(&self) -> (usize, usize) {
        match self {
            MoveWrapper::Othello(m) => (m.0, m.1),
            MoveWrapper::TicTacToe(m) => (m.0, m.1),
            MoveWrapper::Gomoku(m) => (m.0, m.1),
        }
    }

    /// True if this move addresses the same game the wrapper holds.
    pub fn matches(&self, game: &GameWrapper) -> bool {
        matches!(
            (game, self),
            (GameWrapper::Othello(_), MoveWrapper::Othello(_))
                | (GameWrapper::TicTacToe(_), MoveWrapper::TicTacToe(_))
                | (GameWrapper::Gomoku(_), MoveWrapper::Gomoku(_))
        )
    }
}

impl fmt::Display for MoveWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveWrapper::Othello(m) => write!(f, "O({},{})", m.0, m.1),
            MoveWrapper::TicTacToe(m) => write!(f, "T({},{})", m.0, m.1),
            MoveWrapper::Gomoku(m) => write!(f, "G({},{})", m.0, m.1),
        }
    }
}

impl fmt::Display for GameWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameWrapper::Othello(g) => write!(f, "{}", g),
            GameWrapper::TicTacToe(g) => write!(f, "{}", g),
            GameWrapper::Gomoku(g) => write!(f, "{}", g),
        }
    }
}

macro_rules! impl_game_dispatch {
    ($($variant:ident),*) => {
        impl GameState for GameWrapper {
            type Move = MoveWrapper;

            fn get_current_player(&self) -> i32 {
                match self {
                    $(GameWrapper::$variant(g) => g.get_current_player(),)*
                }
            }

            fn get_possible_moves(&self) -> Vec<Self::Move> {
                match self {
                    $(GameWrapper::$variant(g) => g
                        .get_possible_moves()
                        .into_iter()
                        .map(MoveWrapper::$variant)
                        .collect(),)*
                }
            }

            fn make_move(&mut self, mv: &Self::Move) {
                match (self, mv) {
                    $((GameWrapper::$variant(g), MoveWrapper::$variant(m)) => g.make_move(m),)*
                    _ => panic!("Mismatched game and move types"),
                }
            }

            fn is_terminal(&self) -> bool {
                match self {
                    $(GameWrapper::$variant(g) => g.is_terminal(),)*
                }
            }

            fn get_winner(&self) -> Option<i32> {
                match self {
                    $(GameWrapper::$variant(g) => g.get_winner(),)*
                }
            }

            fn get_board(&self) -> &Vec<Vec<i32>> {
                match self {
                    $(GameWrapper::$variant(g) => g.get_board(),)*
                }
            }
        }

        impl GameWrapper {
            /// Returns the size of the game board
            pub fn get_board_size(&self) -> usize {
                self.get_board().len()
            }

            /// Checks if a move is legal in the current game state
            pub fn is_legal(&self, mv: &MoveWrapper) -> bool {
                match (self, mv) {
                    $((GameWrapper::$variant(g), MoveWrapper::$variant(m)) => g.is_legal(m),)*
                    _ => false,
                }
            }
        }
    };
}

impl_game_dispatch!(Othello, TicTacToe, Gomoku);

impl GameWrapper {
    /// Creates the initial state for a game variant.
    pub fn new_game(variant: GameVariant) -> Self {
        match variant {
            GameVariant::Othello => {
                GameWrapper::Othello(OthelloState::new(othello::DEFAULT_BOARD_SIZE))
            }
            GameVariant::TicTacToe => GameWrapper::TicTacToe(TicTacToeState::new()),
            GameVariant::Gomoku => GameWrapper::Gomoku(GomokuState::default()),
        }
    }

    /// Which variant this wrapper holds.
    pub fn variant(&self) -> GameVariant {
        match self {
            GameWrapper::Othello(_) => GameVariant::Othello,
            GameWrapper::TicTacToe(_) => GameVariant::TicTacToe,
            GameWrapper::Gomoku(_) => GameVariant::Gomoku,
        }
    }

    /// Whether `color` has a legal move available. Only Othello can strand
    /// a player mid-game; for the other games this is simply "the game is
    /// still in progress".
    pub fn has_legal_move(&self, color: i32) -> bool {
        match self {
            GameWrapper::Othello(g) => g.has_legal_move(color),
            _ => !self.is_terminal(),
        }
    }

    /// Picks the heuristic opponent's move, for the games that have one.
    /// Gomoku ships without an AI, so it yields `None`.
    pub fn best_move(&self) -> Option<MoveWrapper> {
        match self {
            GameWrapper::Othello(g) => g.best_move().map(MoveWrapper::Othello),
            GameWrapper::TicTacToe(g) => g.best_move().map(MoveWrapper::TicTacToe),
            GameWrapper::Gomoku(_) => None,
        }
    }

    /// The winning triple for highlighting, where the game records one
    /// (Tic-Tac-Toe only).
    pub fn winning_line(&self) -> Option<[(usize, usize); 3]> {
        match self {
            GameWrapper::TicTacToe(g) => g.get_winning_line(),
            _ => None,
        }
    }
}
