//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. The result depends only
//! on the board contents.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinningLine, check_winner, detect_winner};
