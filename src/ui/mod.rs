//! Terminal UI: a stateless game view redrawn from engine queries after
//! every key press.

mod app;
mod game_view;

pub use app::App;
