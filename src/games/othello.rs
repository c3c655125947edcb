//! # Othello (Reversi) Game Implementation
//!
//! This module implements the classic Othello (also known as Reversi)
//! board game on a 10x10 grid rather than the tournament 8x8. Players
//! take turns placing pieces, with the goal of having the most pieces of
//! their color when neither player can move.
//!
//! ## Rules
//! - A placement must "sandwich" at least one run of opponent pieces
//!   between the new piece and an existing piece of the same color
//! - All sandwiched pieces are flipped to the current player's color
//! - If a player has no legal moves, their turn is skipped
//! - Game ends when neither player can make a move
//! - Winner is determined by who has more pieces on the board

use crate::{Evaluate, GameState};
use std::fmt;
use std::str::FromStr;

/// Default board dimension.
pub const DEFAULT_BOARD_SIZE: usize = 10;

/// Positional weights for the greedy evaluator. Corners can never be
/// flipped back, edges only along one line, so they dominate the score.
const CORNER_WEIGHT: i32 = 10;
const EDGE_WEIGHT: i32 = 5;
const INTERIOR_WEIGHT: i32 = 1;

/// The eight directions a capture run can lie along.
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Represents a move in Othello.
///
/// Contains the row and column coordinates where a player wants to place
/// their piece. Both coordinates are 0-based indices.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct OthelloMove(pub usize, pub usize);

/// Represents the complete state of an Othello game.
///
/// The board uses 1 for black pieces, -1 for white pieces, and 0 for empty
/// squares. Black moves first.
#[derive(Debug, Clone)]
pub struct OthelloState {
    /// The game board as a 2D vector
    board: Vec<Vec<i32>>,
    /// Current player (1 for black, -1 for white)
    current_player: i32,
    /// Size of the board (NxN)
    board_size: usize,
    /// Last move made, if any
    last_move: Option<(usize, usize)>,
}

impl GameState for OthelloState {
    type Move = OthelloMove;

    fn get_board(&self) -> &Vec<Vec<i32>> {
        &self.board
    }

    fn get_possible_moves(&self) -> Vec<Self::Move> {
        let mut moves = Vec::new();
        for r in 0..self.board_size {
            for c in 0..self.board_size {
                if self.board[r][c] == 0 && self.flips_any(r, c, self.current_player) {
                    moves.push(OthelloMove(r, c));
                }
            }
        }
        moves
    }

    fn make_move(&mut self, mv: &Self::Move) {
        let (r, c) = (mv.0, mv.1);
        let color = self.current_player;
        self.board[r][c] = color;
        for (fr, fc) in self.captures(r, c, color) {
            self.board[fr][fc] = color;
        }
        self.last_move = Some((r, c));

        // Turn passes to the opponent unless they have no reply.
        self.current_player = -color;
        if !self.has_legal_move(self.current_player) {
            self.current_player = color;
        }
    }

    fn is_terminal(&self) -> bool {
        !self.has_legal_move(1) && !self.has_legal_move(-1)
    }

    fn get_winner(&self) -> Option<i32> {
        if !self.is_terminal() {
            return None;
        }

        let black = self.count_pieces(1);
        let white = self.count_pieces(-1);
        if black > white {
            Some(1)
        } else if white > black {
            Some(-1)
        } else {
            None // Draw
        }
    }

    fn get_current_player(&self) -> i32 {
        self.current_player
    }
}

impl OthelloState {
    /// Creates a new Othello game with the starting position: a 2x2 block
    /// in the center, black on the main diagonal, white on the
    /// anti-diagonal. Black (player 1) starts.
    ///
    /// # Arguments
    /// * `board_size` - Size of the board (NxN), 10 by default
    pub fn new(board_size: usize) -> Self {
        let mut board = vec![vec![0; board_size]; board_size];
        let center = board_size / 2;
        board[center - 1][center - 1] = 1; // Black
        board[center][center] = 1; // Black
        board[center - 1][center] = -1; // White
        board[center][center - 1] = -1; // White
        OthelloState {
            board,
            current_player: 1, // Black starts
            board_size,
            last_move: None,
        }
    }

    /// Returns the board dimension (NxN).
    pub fn get_board_size(&self) -> usize {
        self.board_size
    }

    /// Returns the coordinates of the last placement, if any.
    pub fn get_last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// Checks if a move is legal in the current game state.
    ///
    /// A move is legal if it's on an empty square and would flip at least
    /// one opponent piece. The check is a pure scan; the board is never
    /// touched.
    pub fn is_legal(&self, mv: &OthelloMove) -> bool {
        let (r, c) = (mv.0, mv.1);
        r < self.board_size
            && c < self.board_size
            && self.board[r][c] == 0
            && self.flips_any(r, c, self.current_player)
    }

    /// Returns true if `color` has at least one legal placement anywhere
    /// on the board. Always false on a full board.
    pub fn has_legal_move(&self, color: i32) -> bool {
        for r in 0..self.board_size {
            for c in 0..self.board_size {
                if self.board[r][c] == 0 && self.flips_any(r, c, color) {
                    return true;
                }
            }
        }
        false
    }

    /// Counts the pieces of one color currently on the board.
    pub fn count_pieces(&self, color: i32) -> usize {
        self.board
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == color)
            .count()
    }

    /// Picks the move the heuristic opponent would play: the greedy
    /// one-ply scan over the positional weight table. Ties are broken by
    /// first-found in row-major order. Returns `None` when the player to
    /// act has no legal move.
    pub fn best_move(&self) -> Option<OthelloMove> {
        crate::greedy_move(self)
    }

    /// Walks outward from (r, c) and returns the run of opponent pieces
    /// that placing `color` there would capture in one direction. The run
    /// is empty when the walk hits an empty square or the board edge
    /// before reaching a piece of `color`.
    fn captured_in_direction(
        &self,
        r: usize,
        c: usize,
        color: i32,
        dr: i32,
        dc: i32,
    ) -> Vec<(usize, usize)> {
        let mut run = Vec::new();
        let mut nr = r as i32 + dr;
        let mut nc = c as i32 + dc;

        while nr >= 0 && nr < self.board_size as i32 && nc >= 0 && nc < self.board_size as i32 {
            let cell = self.board[nr as usize][nc as usize];
            if cell == -color {
                run.push((nr as usize, nc as usize));
            } else if cell == color {
                return run;
            } else {
                break;
            }
            nr += dr;
            nc += dc;
        }
        Vec::new()
    }

    /// All opponent pieces captured by placing `color` at (r, c), across
    /// the eight directions.
    fn captures(&self, r: usize, c: usize, color: i32) -> Vec<(usize, usize)> {
        let mut flipped = Vec::new();
        for (dr, dc) in DIRECTIONS {
            flipped.extend(self.captured_in_direction(r, c, color, dr, dc));
        }
        flipped
    }

    /// True if placing `color` at (r, c) captures in any direction.
    fn flips_any(&self, r: usize, c: usize, color: i32) -> bool {
        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| !self.captured_in_direction(r, c, color, dr, dc).is_empty())
    }

    fn position_weight(&self, r: usize, c: usize) -> i32 {
        let last = self.board_size - 1;
        let edge_row = r == 0 || r == last;
        let edge_col = c == 0 || c == last;
        match (edge_row, edge_col) {
            (true, true) => CORNER_WEIGHT,
            (false, false) => INTERIOR_WEIGHT,
            _ => EDGE_WEIGHT,
        }
    }
}

impl Evaluate for OthelloState {
    /// Sum of positional weights over the player's pieces: corner 10,
    /// edge 5, interior 1.
    fn evaluate(&self, player: i32) -> i32 {
        let mut score = 0;
        for r in 0..self.board_size {
            for c in 0..self.board_size {
                if self.board[r][c] == player {
                    score += self.position_weight(r, c);
                }
            }
        }
        score
    }
}

impl fmt::Display for OthelloState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.board {
            for cell in row {
                let symbol = match cell {
                    1 => "B",
                    -1 => "W",
                    _ => ".",
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for OthelloMove {
    type Err = String;

    /// Parses an OthelloMove from "r,c" with 0-based indices.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(|s| s.trim()).collect();
        if parts.len() != 2 {
            return Err("Expected format: r,c".to_string());
        }
        let r = parts[0].parse::<usize>().map_err(|e| e.to_string())?;
        let c = parts[1].parse::<usize>().map_err(|e| e.to_string())?;
        Ok(OthelloMove(r, c))
    }
}
