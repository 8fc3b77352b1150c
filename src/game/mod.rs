//! Core Connect Four game logic: board, players, and the observable game
//! state engine that UI collaborators drive and subscribe to.

mod board;
mod player;
mod state;

pub use board::{Axis, Board, Cell, COLS, ROWS, WIN_LENGTH};
pub use player::Player;
pub use state::{DropOutcome, Game, GameOutcome};
