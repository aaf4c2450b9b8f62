//! Core Connect Four rules: board representation, player colors, and the
//! game engine that owns turn order and win detection.

mod board;
mod engine;
mod player;

pub use board::{Board, Cell, Direction, CONNECT, MAX_DIMENSION, MIN_DIMENSION};
pub use engine::{GameEngine, GameOutcome, Placement, Verdict};
pub use player::Player;
