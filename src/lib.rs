//! # Chat Connect Four
//!
//! Connect Four for chat platforms that keep no server-side session. The whole
//! game (both player identities and the board) is packed into the payload of
//! each column button and decoded again when a button is pressed.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, seats, derived turn, payload codec
//! - [`callback`] — Button payload routing and turn authorization
//! - [`render`] — Text rendering of boards and game messages
//! - [`names`] — Display-name cache persisted as JSON
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod callback;
pub mod config;
pub mod error;
pub mod game;
pub mod names;
pub mod render;
