//! Core Connect Four game logic: board representation, seats, the game value
//! with its derived turn, and the payload codec.

mod board;
pub mod codec;
mod player;
mod state;

pub use board::{Board, Cell, COLS, ROWS};
pub use codec::{decode, encode};
pub use player::Seat;
pub use state::{Game, GameOutcome};
