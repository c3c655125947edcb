//! # Gomoku (Five in a Row) Game Implementation
//!
//! Players alternate placing stones on an open grid; the first to line up
//! `line_size` stones horizontally, vertically or diagonally wins. Board
//! size and run length are configurable; 15x15 with five in a row is the
//! default. There is no AI opponent for this game.

use crate::GameState;
use std::fmt;
use std::str::FromStr;

/// Default board dimension.
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Stones in a row needed to win.
pub const DEFAULT_LINE_SIZE: usize = 5;

/// The four axes a winning run can lie along.
const AXES: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Represents a move in Gomoku: 0-based (row, col).
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct GomokuMove(pub usize, pub usize);

/// Represents the complete state of a Gomoku game.
///
/// The board uses 1 for black stones, -1 for white stones, and 0 for
/// empty intersections. Black moves first.
#[derive(Debug, Clone)]
pub struct GomokuState {
    board: Vec<Vec<i32>>,
    current_player: i32,
    board_size: usize,
    line_size: usize,
    last_move: Option<(usize, usize)>,
}

impl GameState for GomokuState {
    type Move = GomokuMove;

    fn get_board(&self) -> &Vec<Vec<i32>> {
        &self.board
    }

    fn get_possible_moves(&self) -> Vec<Self::Move> {
        if self.get_winner().is_some() {
            return Vec::new();
        }
        let mut moves = Vec::new();
        for r in 0..self.board_size {
            for c in 0..self.board_size {
                if self.board[r][c] == 0 {
                    moves.push(GomokuMove(r, c));
                }
            }
        }
        moves
    }

    fn make_move(&mut self, mv: &Self::Move) {
        self.board[mv.0][mv.1] = self.current_player;
        self.last_move = Some((mv.0, mv.1));
        if self.get_winner().is_none() {
            self.current_player = -self.current_player;
        }
    }

    fn is_terminal(&self) -> bool {
        self.get_winner().is_some() || self.is_full()
    }

    /// Win detection radiates from the last placed stone: for each axis,
    /// the run length is the stone itself plus the contiguous same-color
    /// stones on both sides. Runs on different axes are never summed, so
    /// two separate fours don't win.
    fn get_winner(&self) -> Option<i32> {
        let (r, c) = self.last_move?;
        let color = self.board[r][c];
        if color == 0 {
            return None;
        }

        for (dr, dc) in AXES {
            let total = 1
                + self.run_length(r, c, dr, dc, color)
                + self.run_length(r, c, -dr, -dc, color);
            if total >= self.line_size {
                return Some(color);
            }
        }
        None
    }

    fn get_current_player(&self) -> i32 {
        self.current_player
    }
}

impl GomokuState {
    /// Creates a new game on an empty `board_size` x `board_size` grid.
    /// Black (player 1) starts.
    pub fn new(board_size: usize, line_size: usize) -> Self {
        GomokuState {
            board: vec![vec![0; board_size]; board_size],
            current_player: 1,
            board_size,
            line_size,
            last_move: None,
        }
    }

    /// Returns the board dimension (NxN).
    pub fn get_board_size(&self) -> usize {
        self.board_size
    }

    /// Returns the number of stones in a row needed to win.
    pub fn get_line_size(&self) -> usize {
        self.line_size
    }

    /// Returns the coordinates of the last placement, if any.
    pub fn get_last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// Checks if a move is legal: in bounds and on an empty intersection.
    pub fn is_legal(&self, mv: &GomokuMove) -> bool {
        mv.0 < self.board_size && mv.1 < self.board_size && self.board[mv.0][mv.1] == 0
    }

    fn is_full(&self) -> bool {
        self.board
            .iter()
            .all(|row| row.iter().all(|&cell| cell != 0))
    }

    /// Counts the contiguous stones of `color` extending from (r, c) in
    /// one direction, not counting (r, c) itself.
    fn run_length(&self, r: usize, c: usize, dr: i32, dc: i32, color: i32) -> usize {
        let mut len = 0;
        let mut nr = r as i32 + dr;
        let mut nc = c as i32 + dc;
        while nr >= 0
            && nr < self.board_size as i32
            && nc >= 0
            && nc < self.board_size as i32
            && self.board[nr as usize][nc as usize] == color
        {
            len += 1;
            nr += dr;
            nc += dc;
        }
        len
    }
}

impl Default for GomokuState {
    /// 15x15, five in a row.
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE, DEFAULT_LINE_SIZE)
    }
}

impl fmt::Display for GomokuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.board {
            for cell in row {
                let symbol = match cell {
                    1 => "X",
                    -1 => "O",
                    _ => ".",
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for GomokuMove {
    type Err = String;

    /// Parses a GomokuMove from "r,c" with 0-based indices.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(|s| s.trim()).collect();
        if parts.len() != 2 {
            return Err("Expected format: r,c".to_string());
        }
        let r = parts[0].parse::<usize>().map_err(|e| e.to_string())?;
        let c = parts[1].parse::<usize>().map_err(|e| e.to_string())?;
        Ok(GomokuMove(r, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Alternates black stones through `black` and white stones through
    /// `white`, interleaved so the turn order stays consistent.
    fn play_alternating(
        state: &mut GomokuState,
        black: &[(usize, usize)],
        white: &[(usize, usize)],
    ) {
        for i in 0..black.len().max(white.len()) {
            if i < black.len() {
                state.make_move(&GomokuMove(black[i].0, black[i].1));
            }
            if i < white.len() {
                state.make_move(&GomokuMove(white[i].0, white[i].1));
            }
        }
    }

    #[test]
    fn test_new_game() {
        let game = GomokuState::default();
        assert_eq!(game.get_board_size(), 15);
        assert_eq!(game.get_line_size(), 5);
        assert_eq!(game.get_current_player(), 1);
        assert_eq!(game.get_possible_moves().len(), 225);
    }

    #[test]
    fn test_horizontal_win() {
        let mut game = GomokuState::default();
        play_alternating(
            &mut game,
            &[(7, 3), (7, 4), (7, 5), (7, 6), (7, 7)],
            &[(8, 3), (8, 4), (8, 5), (8, 6)],
        );
        assert_eq!(game.get_winner(), Some(1));
        assert!(game.is_terminal());
        // The winner keeps the turn once the game is over.
        assert_eq!(game.get_current_player(), 1);
    }

    #[test]
    fn test_vertical_win() {
        let mut game = GomokuState::default();
        play_alternating(
            &mut game,
            &[(3, 7), (4, 7), (5, 7), (6, 7), (7, 7)],
            &[(3, 8), (4, 8), (5, 8), (6, 8)],
        );
        assert_eq!(game.get_winner(), Some(1));
    }

    #[test]
    fn test_diagonal_wins() {
        let mut game = GomokuState::default();
        play_alternating(
            &mut game,
            &[(3, 3), (4, 4), (5, 5), (6, 6), (7, 7)],
            &[(0, 1), (0, 2), (0, 3), (0, 4)],
        );
        assert_eq!(game.get_winner(), Some(1));

        let mut game = GomokuState::default();
        play_alternating(
            &mut game,
            &[(3, 7), (4, 6), (5, 5), (6, 4), (7, 3)],
            &[(0, 1), (0, 2), (0, 3), (0, 4)],
        );
        assert_eq!(game.get_winner(), Some(1));
    }

    #[test]
    fn test_four_in_a_row_does_not_win() {
        let mut game = GomokuState::default();
        play_alternating(
            &mut game,
            &[(7, 3), (7, 4), (7, 5), (7, 6)],
            &[(8, 3), (8, 4), (8, 5)],
        );
        assert_eq!(game.get_winner(), None);
        assert!(!game.is_terminal());
    }

    #[test]
    fn test_win_completed_in_the_middle_of_a_run() {
        let mut game = GomokuState::default();
        // Black fills (7,3) (7,4) (7,6) (7,7) and then closes the gap.
        play_alternating(
            &mut game,
            &[(7, 3), (7, 4), (7, 6), (7, 7), (7, 5)],
            &[(0, 0), (0, 1), (0, 2), (0, 3)],
        );
        assert_eq!(game.get_winner(), Some(1));
    }

    #[test]
    fn test_two_separate_fours_do_not_win() {
        let mut game = GomokuState::default();
        // The stone at (7,7) completes a horizontal four and a vertical
        // four at once; neither run reaches five.
        play_alternating(
            &mut game,
            &[(7, 4), (7, 5), (7, 6), (4, 7), (5, 7), (6, 7), (7, 7)],
            &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 5), (0, 6)],
        );
        assert_eq!(game.get_winner(), None);
        assert!(!game.is_terminal());
    }

    #[test]
    fn test_runs_count_through_the_board_edge_correctly() {
        let mut game = GomokuState::default();
        // Five stones hugging the top edge; the scan must stop at the
        // boundary without panicking.
        play_alternating(
            &mut game,
            &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)],
            &[(1, 0), (1, 1), (1, 2), (1, 3)],
        );
        assert_eq!(game.get_winner(), Some(1));
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(GomokuMove::from_str("7, 7"), Ok(GomokuMove(7, 7)));
        assert!(GomokuMove::from_str("x,y").is_err());
    }
}
