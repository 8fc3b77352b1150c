//! # Connect Four
//!
//! Rules engine for two-player Connect Four with observable state, plus a
//! terminal UI built with Ratatui that drives it.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, game state engine
//! - [`store`] — Observable value holder the engine publishes its state through
//! - [`ui`] — Terminal UI: game view that re-renders on state changes
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod store;
pub mod ui;
