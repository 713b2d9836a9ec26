//! Widgets composing the terminal UI.
//!
//! Each widget exposes a `render` function drawing into a given area.
pub mod footer;
pub mod game_over;
pub mod grid;
pub mod header;
pub mod messages;
pub mod start_screen;
pub mod status;
