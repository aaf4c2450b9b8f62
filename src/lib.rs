//! # Connect Four
//!
//! Rules engine for two-player Connect Four on a board of any size from 4x4
//! up, with a terminal front end built on Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player colors, game engine
//! - [`ui`] — Terminal UI that renders the board and forwards key presses
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
