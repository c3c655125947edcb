//! Engine-level properties exercised through the public library API.

use rules::games::gomoku::{GomokuMove, GomokuState};
use rules::games::othello::{OthelloMove, OthelloState};
use rules::games::tictactoe::{TicTacToeMove, TicTacToeState};
use rules::{simulate, GameState};

#[test]
fn othello_opening_has_exactly_four_moves_for_black() {
    let game = OthelloState::new(10);
    let moves = game.get_possible_moves();
    assert_eq!(moves.len(), 4);
    for mv in &moves {
        assert!(game.is_legal(mv));
    }
}

#[test]
fn othello_probing_every_cell_leaves_the_board_unchanged() {
    let game = OthelloState::new(10);
    let before = game.get_board().clone();

    for r in 0..10 {
        for c in 0..10 {
            let _ = game.is_legal(&OthelloMove(r, c));
        }
    }
    let _ = game.has_legal_move(1);
    let _ = game.has_legal_move(-1);
    let _ = game.best_move();

    assert_eq!(game.get_board(), &before);
}

#[test]
fn othello_greedy_self_play_terminates_with_consistent_winner() {
    let mut game = OthelloState::new(6);
    let mut moves_played = 0;

    while !game.is_terminal() {
        let mv = game
            .best_move()
            .expect("non-terminal Othello always has a move for the player on turn");
        assert!(game.is_legal(&mv));
        game.make_move(&mv);
        moves_played += 1;
        assert!(moves_played <= 36, "self-play failed to terminate");
    }

    let black = game.count_pieces(1);
    let white = game.count_pieces(-1);
    match game.get_winner() {
        Some(1) => assert!(black > white),
        Some(-1) => assert!(white > black),
        Some(other) => panic!("impossible winner id {}", other),
        None => assert_eq!(black, white),
    }
}

#[test]
fn othello_simulate_does_not_touch_the_source_state() {
    let game = OthelloState::new(10);
    let before = game.get_board().clone();

    let mv = game.get_possible_moves().remove(0);
    let next = simulate(&game, &mv);

    assert_eq!(game.get_board(), &before);
    assert_ne!(next.get_board(), &before);
}

#[test]
fn tictactoe_seven_placements_leave_six_stones() {
    let mut game = TicTacToeState::new();
    let script = [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (1, 1), (2, 1)];
    for (r, c) in script {
        assert!(!game.is_terminal());
        game.make_move(&TicTacToeMove(r, c));
    }

    let stones: usize = game
        .get_board()
        .iter()
        .flat_map(|row| row.iter())
        .filter(|&&cell| cell != 0)
        .count();
    assert_eq!(stones, 6);
    // The first placement has been evicted and its cell is playable again.
    assert_eq!(game.get_board()[0][0], 0);
    assert!(game.is_legal(&TicTacToeMove(0, 0)));
}

#[test]
fn tictactoe_never_runs_out_of_moves() {
    // Drive a long scripted game; the window guarantees at least three
    // empty cells at every point, so the move list can never be empty
    // while the game is undecided.
    let mut game = TicTacToeState::new();
    let mut plays = 0;
    while !game.is_terminal() && plays < 25 {
        let moves = game.get_possible_moves();
        assert!(moves.len() >= 3);
        // Pick the last candidate to keep the script from winning early.
        let mv = moves.last().cloned().unwrap();
        game.make_move(&mv);
        plays += 1;
    }
}

#[test]
fn gomoku_five_in_a_row_wins_four_does_not() {
    let mut game = GomokuState::default();
    let black = [(7, 3), (7, 4), (7, 5), (7, 6), (7, 7)];
    let white = [(8, 3), (8, 4), (8, 5), (8, 6)];

    for i in 0..4 {
        game.make_move(&GomokuMove(black[i].0, black[i].1));
        assert_eq!(game.get_winner(), None, "four in a row must not win");
        game.make_move(&GomokuMove(white[i].0, white[i].1));
        assert_eq!(game.get_winner(), None);
    }

    game.make_move(&GomokuMove(black[4].0, black[4].1));
    assert_eq!(game.get_winner(), Some(1));
    assert!(game.is_terminal());
}

#[test]
fn gomoku_crossing_fours_do_not_win() {
    let mut game = GomokuState::default();
    // Black builds three horizontal and three vertical stones that all
    // meet at (7,7); white keeps out of the way.
    let black = [(7, 4), (7, 5), (7, 6), (4, 7), (5, 7), (6, 7), (7, 7)];
    let white = [(0, 0), (0, 1), (0, 2), (0, 3), (0, 5), (0, 6)];
    for i in 0..black.len() {
        game.make_move(&GomokuMove(black[i].0, black[i].1));
        if i < white.len() {
            game.make_move(&GomokuMove(white[i].0, white[i].1));
        }
    }
    // The crossing stone completes two fours, but no five.
    assert_eq!(game.get_winner(), None);
    assert!(!game.is_terminal());
}
