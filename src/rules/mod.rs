//! Terminal-condition rules: winning patterns and draw detection.

pub mod draw;
pub mod win;

pub use draw::{DrawDetector, DrawReason};
pub use win::{has_win, winning_window};
