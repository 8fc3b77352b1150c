//! Terminal UI: game view for playing Connect Four against another person at
//! the same keyboard.

mod app;
mod game_view;

pub use app::App;
