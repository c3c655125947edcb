//! # Game Controller Module - Central Game State Management
//!
//! This module provides the `GameController`, the single source of truth
//! for a game session. All moves go through the controller, which
//! validates them before application, so a rejected move can never leave
//! a mark on the board. The controller also records the move history and
//! tracks whether the session is still in progress.
//!
//! A host UI consumes the controller through a narrow surface:
//! - [`GameController::attempt_move`] validates and applies a move,
//!   reporting which cells changed and whose turn is next
//! - [`GameController::compute_ai_move`] asks the heuristic opponent for
//!   a move (Othello and Tic-Tac-Toe)
//! - [`GameController::reset`] starts the same variant over

use crate::game_wrapper::{GameVariant, GameWrapper, MoveWrapper};
use crate::GameState;
use std::fmt;
use std::time::SystemTime;
use tracing::{debug, info};

/// Why a move was turned down.
///
/// A rejection is an expected result of probing the rules, not a failure;
/// the board is guaranteed untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// Coordinates fall outside the board
    OutOfBounds,
    /// The target cell already holds a stone
    Occupied,
    /// Othello: the placement would not flip a single piece
    FlipsNothing,
    /// The game has already ended
    GameAlreadyOver,
    /// The move addresses a different game than the one in progress
    MismatchedGameType,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::OutOfBounds => write!(f, "Coordinates are off the board"),
            MoveRejection::Occupied => write!(f, "That cell is already occupied"),
            MoveRejection::FlipsNothing => write!(f, "Placement must flip at least one piece"),
            MoveRejection::GameAlreadyOver => write!(f, "The game is already over"),
            MoveRejection::MismatchedGameType => write!(f, "Move doesn't match the current game"),
        }
    }
}

/// Result of attempting to apply a move.
#[derive(Debug, Clone)]
pub enum MoveOutcome {
    /// Move was validated and applied
    Accepted {
        /// The applied move
        move_made: MoveWrapper,
        /// Player who made the move
        player: i32,
        /// Every cell whose contents changed, placement and flips alike
        changed: Vec<(usize, usize)>,
        /// Player to act next (the mover again after an Othello skip)
        next_player: i32,
        /// Whether the game is now over
        terminal: bool,
        /// Winner if the game is over (None for a draw)
        winner: Option<i32>,
    },
    /// Move was rejected; the board is untouched
    Rejected {
        /// Why the move was turned down
        reason: MoveRejection,
    },
}

impl MoveOutcome {
    /// Whether the move was applied.
    pub fn accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }
}

/// A single entry in the move history.
#[derive(Debug, Clone)]
pub struct MoveHistoryEntry {
    /// When the move was made
    pub timestamp: SystemTime,
    /// Player who made the move
    pub player: i32,
    /// The move that was made
    pub move_made: MoveWrapper,
    /// Move number (1-indexed)
    pub move_number: usize,
}

impl MoveHistoryEntry {
    fn new(player: i32, move_made: MoveWrapper, move_number: usize) -> Self {
        Self {
            timestamp: SystemTime::now(),
            player,
            move_made,
            move_number,
        }
    }
}

/// Current game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is still in progress
    InProgress,
    /// Game ended with a winner
    Win(i32),
    /// Game ended in a draw
    Draw,
}

impl GameStatus {
    /// Check if the game is over
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// The central game controller that owns the authoritative game state.
#[derive(Debug, Clone)]
pub struct GameController {
    /// The authoritative game state
    game_state: GameWrapper,
    /// Complete history of moves made
    move_history: Vec<MoveHistoryEntry>,
    /// Current game status
    status: GameStatus,
}

impl GameController {
    /// Create a controller holding the initial position of `variant`.
    pub fn new_game(variant: GameVariant) -> Self {
        Self::new(GameWrapper::new_game(variant))
    }

    /// Create a new game controller with the given initial state.
    pub fn new(initial_state: GameWrapper) -> Self {
        Self {
            game_state: initial_state,
            move_history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Validate a move without applying it.
    ///
    /// Returns Ok(()) if the move is valid, or the reason it would be
    /// rejected. Validation is a pure read of the board.
    pub fn validate_move(&self, mv: &MoveWrapper) -> Result<(), MoveRejection> {
        if self.status.is_game_over() {
            return Err(MoveRejection::GameAlreadyOver);
        }
        if !mv.matches(&self.game_state) {
            return Err(MoveRejection::MismatchedGameType);
        }

        let (r, c) = mv.coords();
        let size = self.game_state.get_board_size();
        if r >= size || c >= size {
            return Err(MoveRejection::OutOfBounds);
        }
        if self.game_state.get_board()[r][c] != 0 {
            return Err(MoveRejection::Occupied);
        }
        // Bounds and occupancy are covered above, so the only way the
        // rules can still object is Othello's flip requirement.
        if !self.game_state.is_legal(mv) {
            return Err(MoveRejection::FlipsNothing);
        }

        Ok(())
    }

    /// Attempt to make a move.
    ///
    /// Validates the move and applies it if valid. The outcome reports
    /// every cell that changed (the placement plus any Othello flips and
    /// Tic-Tac-Toe eviction), the next player, and the terminal state.
    pub fn attempt_move(&mut self, mv: MoveWrapper) -> MoveOutcome {
        if let Err(reason) = self.validate_move(&mv) {
            debug!(%mv, %reason, "move rejected");
            return MoveOutcome::Rejected { reason };
        }

        let player = self.game_state.get_current_player();
        let move_number = self.move_history.len() + 1;
        let before = self.game_state.get_board().clone();

        self.game_state.make_move(&mv);
        self.move_history
            .push(MoveHistoryEntry::new(player, mv.clone(), move_number));

        let changed = diff_boards(&before, self.game_state.get_board());
        let terminal = self.game_state.is_terminal();
        let winner = if terminal {
            self.game_state.get_winner()
        } else {
            None
        };

        if terminal {
            self.status = match winner {
                Some(w) => GameStatus::Win(w),
                None => GameStatus::Draw,
            };
            info!(%mv, player, ?winner, "game over");
        } else {
            debug!(%mv, player, cells = changed.len(), "move applied");
        }

        MoveOutcome::Accepted {
            move_made: mv,
            player,
            changed,
            next_player: self.game_state.get_current_player(),
            terminal,
            winner,
        }
    }

    /// Ask the heuristic opponent for a move. Yields `None` when the game
    /// is over, the current player has no legal move, or the game ships
    /// without an AI (Gomoku).
    pub fn compute_ai_move(&self) -> Option<MoveWrapper> {
        if self.status.is_game_over() {
            return None;
        }
        self.game_state.best_move()
    }

    /// Whether `color` has a legal move available. Meaningful for Othello,
    /// where a player can be stranded mid-game; the other games always
    /// have moves while in progress.
    pub fn has_legal_move(&self, color: i32) -> bool {
        self.game_state.has_legal_move(color)
    }

    /// Get a reference to the game state for rendering.
    pub fn get_render_state(&self) -> &GameWrapper {
        &self.game_state
    }

    /// Get the current player.
    pub fn get_current_player(&self) -> i32 {
        self.game_state.get_current_player()
    }

    /// Get the current game status.
    pub fn get_status(&self) -> GameStatus {
        self.status
    }

    /// Check if the game is over.
    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    /// Get the winner if the game is over.
    pub fn get_winner(&self) -> Option<i32> {
        match self.status {
            GameStatus::Win(w) => Some(w),
            _ => None,
        }
    }

    /// The winning triple for highlighting, where the game records one
    /// (Tic-Tac-Toe only).
    pub fn winning_line(&self) -> Option<[(usize, usize); 3]> {
        self.game_state.winning_line()
    }

    /// Get the complete move history.
    pub fn get_move_history(&self) -> &[MoveHistoryEntry] {
        &self.move_history
    }

    /// Get the number of moves made.
    pub fn move_count(&self) -> usize {
        self.move_history.len()
    }

    /// Get the board for rendering.
    pub fn get_board(&self) -> &Vec<Vec<i32>> {
        self.game_state.get_board()
    }

    /// Get legal moves for the current player.
    pub fn get_legal_moves(&self) -> Vec<MoveWrapper> {
        if self.status.is_game_over() {
            Vec::new()
        } else {
            self.game_state.get_possible_moves()
        }
    }

    /// Reset the session to the initial position of the same variant.
    /// Resetting twice in a row yields the identical state both times.
    pub fn reset(&mut self) {
        self.game_state = GameWrapper::new_game(self.game_state.variant());
        self.move_history.clear();
        self.status = GameStatus::InProgress;
        debug!(variant = %self.game_state.variant(), "game reset");
    }

    /// Format the move history as a human-readable transcript.
    pub fn format_history(&self) -> String {
        if self.move_history.is_empty() {
            return String::from("No moves made yet.");
        }

        let mut output = format!("=== {} Game History ===\n\n", self.game_state.variant());

        for entry in &self.move_history {
            output.push_str(&format!(
                "{}. {} - {}\n",
                entry.move_number,
                self.player_name(entry.player),
                entry.move_made
            ));
        }

        match self.status {
            GameStatus::Win(winner) => {
                output.push_str(&format!("\nResult: {} wins!\n", self.player_name(winner)));
            }
            GameStatus::Draw => {
                output.push_str("\nResult: Draw\n");
            }
            GameStatus::InProgress => {
                output.push_str(&format!(
                    "\n(Game in progress - {} to move)\n",
                    self.player_name(self.get_current_player())
                ));
            }
        }

        output
    }

    /// Get a human-readable player name.
    pub fn player_name(&self, player_id: i32) -> String {
        match &self.game_state {
            GameWrapper::TicTacToe(_) => {
                if player_id == 1 { "X" } else { "O" }.to_string()
            }
            _ => {
                if player_id == 1 { "Black" } else { "White" }.to_string()
            }
        }
    }
}

/// Every coordinate whose cell differs between two boards, row-major.
fn diff_boards(before: &[Vec<i32>], after: &[Vec<i32>]) -> Vec<(usize, usize)> {
    let mut changed = Vec::new();
    for (r, (row_before, row_after)) in before.iter().zip(after.iter()).enumerate() {
        for (c, (cell_before, cell_after)) in row_before.iter().zip(row_after.iter()).enumerate() {
            if cell_before != cell_after {
                changed.push((r, c));
            }
        }
    }
    changed
}
