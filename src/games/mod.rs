//! # Game Implementations Module
//!
//! This module contains the rules engines for all supported games. Each
//! game implements the `GameState` trait to provide a consistent interface
//! for the heuristic AI and for host code.
//!
//! ## Supported Games
//! - **Othello (Reversi)**: piece-flipping strategy game on a 10x10 board
//! - **Tic-Tac-Toe**: 3x3 game where only the six most recent stones stay
//!   on the board
//! - **Gomoku (Five in a Row)**: configurable N-in-a-row game, 15x15 by
//!   default
//!
//! ## Adding New Games
//! To add a new game, create a new module and implement:
//! 1. A move type (typically a struct with coordinates)
//! 2. A game state type with the GameState trait
//! 3. Display and parsing implementations for moves
//! 4. Game-specific rules and win conditions

pub mod gomoku;
pub mod othello;
pub mod tictactoe;
