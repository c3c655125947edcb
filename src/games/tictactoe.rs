//! # Tic-Tac-Toe Game Implementation (sliding-window variant)
//!
//! Standard 3x3 tic-tac-toe with a twist: only the six most recent
//! stones stay on the board. Placing a seventh evicts the oldest stone,
//! so the position keeps evolving and the game can only end with a win,
//! never a draw or a full board.
//!
//! ## Rules
//! - X (player 1) moves first; players alternate placing on empty cells
//! - When a seventh stone is placed, the oldest stone on the board is
//!   removed before the new one lands
//! - Three equal stones on a row, column or diagonal win immediately
//! - The winning triple is recorded at the moment of victory, because the
//!   eviction rule can dismantle the line afterwards

use crate::GameState;
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// Board dimension.
const BOARD_SIZE: usize = 3;

/// How many stones survive on the board at once.
const WINDOW: usize = 6;

/// AI fallback placement order: center, then the corners, then the edges.
const PRIORITY: [(usize, usize); 9] = [
    (1, 1),
    (0, 0),
    (0, 2),
    (2, 0),
    (2, 2),
    (0, 1),
    (1, 0),
    (1, 2),
    (2, 1),
];

/// Every winning line, in the order the win scan reports them: the three
/// rows, the three columns, the main diagonal, the anti-diagonal.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Represents a move in Tic-Tac-Toe: 0-based (row, col).
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TicTacToeMove(pub usize, pub usize);

/// Represents the complete state of a Tic-Tac-Toe game.
///
/// The board uses 1 for X, -1 for O, and 0 for empty cells. The placement
/// history drives the sliding-window eviction.
#[derive(Debug, Clone)]
pub struct TicTacToeState {
    /// The game board as a 2D vector
    board: Vec<Vec<i32>>,
    /// Current player (1 for X, -1 for O)
    current_player: i32,
    /// Coordinates of the stones still on the board, oldest first
    history: VecDeque<(usize, usize)>,
    /// Winner, once a line is completed
    winner: Option<i32>,
    /// The completed line, snapshotted when the win was detected
    winning_line: Option<[(usize, usize); 3]>,
}

/// First completed line on `board` in scan order, if any.
fn completed_line(board: &[Vec<i32>]) -> Option<[(usize, usize); 3]> {
    LINES
        .iter()
        .find(|line| {
            let first = board[line[0].0][line[0].1];
            first != 0 && line.iter().all(|&(r, c)| board[r][c] == first)
        })
        .copied()
}

impl GameState for TicTacToeState {
    type Move = TicTacToeMove;

    fn get_board(&self) -> &Vec<Vec<i32>> {
        &self.board
    }

    fn get_possible_moves(&self) -> Vec<Self::Move> {
        if self.winner.is_some() {
            return Vec::new();
        }
        let mut moves = Vec::new();
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                if self.board[r][c] == 0 {
                    moves.push(TicTacToeMove(r, c));
                }
            }
        }
        moves
    }

    fn make_move(&mut self, mv: &Self::Move) {
        let (r, c) = (mv.0, mv.1);
        self.history.push_back((r, c));
        if self.history.len() > WINDOW {
            // The oldest stone leaves the board before the new one lands.
            if let Some((old_r, old_c)) = self.history.pop_front() {
                self.board[old_r][old_c] = 0;
            }
        }
        self.board[r][c] = self.current_player;

        if let Some(line) = completed_line(&self.board) {
            self.winner = Some(self.board[line[0].0][line[0].1]);
            self.winning_line = Some(line);
        } else {
            self.current_player = -self.current_player;
        }
    }

    fn is_terminal(&self) -> bool {
        // The sliding window keeps cells free forever, so a win is the
        // only way the game ends.
        self.winner.is_some()
    }

    fn get_winner(&self) -> Option<i32> {
        self.winner
    }

    fn get_current_player(&self) -> i32 {
        self.current_player
    }
}

impl TicTacToeState {
    /// Creates a new game with an empty board. X (player 1) starts.
    pub fn new() -> Self {
        TicTacToeState {
            board: vec![vec![0; BOARD_SIZE]; BOARD_SIZE],
            current_player: 1,
            history: VecDeque::new(),
            winner: None,
            winning_line: None,
        }
    }

    /// Returns the board dimension (always 3).
    pub fn get_board_size(&self) -> usize {
        BOARD_SIZE
    }

    /// Checks if a move is legal: in bounds and on an empty cell.
    pub fn is_legal(&self, mv: &TicTacToeMove) -> bool {
        mv.0 < BOARD_SIZE && mv.1 < BOARD_SIZE && self.board[mv.0][mv.1] == 0
    }

    /// The winning triple of coordinates, if the game has been won. Kept
    /// from the moment of victory so hosts can highlight it even though
    /// later eviction could have dismantled the line.
    pub fn get_winning_line(&self) -> Option<[(usize, usize); 3]> {
        self.winning_line
    }

    /// Number of stones currently on the board (at most six).
    pub fn stone_count(&self) -> usize {
        self.history.len().min(WINDOW)
    }

    /// Picks the move the heuristic opponent would play:
    /// 1. a placement that wins on the spot, if one exists;
    /// 2. otherwise a placement the opponent would win with next turn,
    ///    to block it;
    /// 3. otherwise the first free cell of the fixed priority table.
    pub fn best_move(&self) -> Option<TicTacToeMove> {
        if self.winner.is_some() {
            return None;
        }
        let me = self.current_player;
        if let Some(mv) = self.find_winning_move(me) {
            return Some(mv);
        }
        if let Some(mv) = self.find_winning_move(-me) {
            return Some(mv);
        }
        PRIORITY
            .iter()
            .find(|&&(r, c)| self.board[r][c] == 0)
            .map(|&(r, c)| TicTacToeMove(r, c))
    }

    /// Probes every empty cell in row-major order for a placement that
    /// completes a line for `player`. The probe drops the stone on a
    /// scratch copy and deliberately skips the eviction step: a threat is
    /// judged on the board as it stands.
    fn find_winning_move(&self, player: i32) -> Option<TicTacToeMove> {
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                if self.board[r][c] != 0 {
                    continue;
                }
                let mut probe = self.board.clone();
                probe[r][c] = player;
                if completed_line(&probe).is_some() {
                    return Some(TicTacToeMove(r, c));
                }
            }
        }
        None
    }
}

impl Default for TicTacToeState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TicTacToeState {
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

impl FromStr for TicTacToeMove {
    type Err = String;

    /// Parses a TicTacToeMove from "r,c" with 0-based indices.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(|s| s.trim()).collect();
        if parts.len() != 2 {
            return Err("Expected format: r,c".to_string());
        }
        let r = parts[0].parse::<usize>().map_err(|e| e.to_string())?;
        let c = parts[1].parse::<usize>().map_err(|e| e.to_string())?;
        Ok(TicTacToeMove(r, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut TicTacToeState, moves: &[(usize, usize)]) {
        for &(r, c) in moves {
            state.make_move(&TicTacToeMove(r, c));
        }
    }

    #[test]
    fn test_new_game() {
        let game = TicTacToeState::new();
        assert_eq!(game.get_current_player(), 1);
        assert_eq!(game.stone_count(), 0);
        assert_eq!(game.get_possible_moves().len(), 9);
        assert!(!game.is_terminal());
    }

    #[test]
    fn test_seventh_move_evicts_oldest() {
        let mut game = TicTacToeState::new();
        // Six stones without a completed line, then a seventh.
        play(
            &mut game,
            &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (1, 1)],
        );
        assert_eq!(game.stone_count(), 6);
        assert!(!game.is_terminal());

        game.make_move(&TicTacToeMove(2, 1));
        assert_eq!(game.stone_count(), 6);
        // The first stone (X at 0,0) is gone again.
        assert_eq!(game.get_board()[0][0], 0);
        assert_eq!(game.get_board()[2][1], 1);
        let stones: usize = game
            .get_board()
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell != 0)
            .count();
        assert_eq!(stones, 6);
    }

    #[test]
    fn test_row_win_records_line() {
        let mut game = TicTacToeState::new();
        play(&mut game, &[(1, 0), (0, 0), (1, 1), (0, 1), (1, 2)]);
        assert!(game.is_terminal());
        assert_eq!(game.get_winner(), Some(1));
        assert_eq!(game.get_winning_line(), Some([(1, 0), (1, 1), (1, 2)]));
        // The winner stays on turn once the game is decided.
        assert_eq!(game.get_current_player(), 1);
        assert!(game.get_possible_moves().is_empty());
    }

    #[test]
    fn test_winning_line_snapshot_survives_eviction_risk() {
        let mut game = TicTacToeState::new();
        // X's first stone at (0,0) is the oldest when X completes the
        // column with the seventh placement; eviction must not be applied
        // to the winning check's result.
        play(
            &mut game,
            &[(0, 0), (0, 1), (1, 0), (0, 2), (2, 2), (1, 1)],
        );
        assert!(!game.is_terminal());
        game.make_move(&TicTacToeMove(2, 0));
        // The eviction removed (0,0) before the new stone landed, so the
        // column is NOT complete and play continues.
        assert_eq!(game.get_board()[0][0], 0);
        assert!(!game.is_terminal());
    }

    #[test]
    fn test_ai_takes_winning_move_over_block() {
        let mut game = TicTacToeState::new();
        // X: (0,0), (0,1) threatens the top row; O: (1,0), (1,1) threatens
        // the middle row. O to move must complete its own row, not block.
        play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(game.get_current_player(), 1);
        game.make_move(&TicTacToeMove(2, 2)); // X plays elsewhere
        let mv = game.best_move().expect("O has moves");
        assert_eq!(mv, TicTacToeMove(1, 2));
    }

    #[test]
    fn test_ai_blocks_open_two() {
        let mut game = TicTacToeState::new();
        // X at center plus (0,0): the open two-in-a-row on the diagonal
        // must be blocked at (2,2).
        play(&mut game, &[(1, 1), (0, 1), (0, 0)]);
        assert_eq!(game.get_current_player(), -1);
        let mv = game.best_move().expect("O has moves");
        assert_eq!(mv, TicTacToeMove(2, 2));
    }

    #[test]
    fn test_ai_priority_fallback() {
        let game = TicTacToeState::new();
        // Empty board: nothing to win or block, so the center comes first.
        assert_eq!(game.best_move(), Some(TicTacToeMove(1, 1)));

        let mut game = TicTacToeState::new();
        play(&mut game, &[(1, 1)]);
        // Center taken, no threats yet: first corner.
        assert_eq!(game.best_move(), Some(TicTacToeMove(0, 0)));
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(TicTacToeMove::from_str("2,1"), Ok(TicTacToeMove(2, 1)));
        assert!(TicTacToeMove::from_str("2").is_err());
    }
}
