//! Game rules for Pente
//!
//! This module implements the rule set on top of a bare [`Grid`](crate::board::Grid):
//! - Capture rules (pair capture, exposed pairs)
//! - Line counting (five in a row, uninterrupted structures)

pub mod capture;
pub mod win;

// Re-exports for convenient access
pub use capture::{count_potential_captures, execute_captures, get_captured_positions};
pub use win::{count_lines_at, count_uninterrupted, has_winning_line, WIN_LENGTH};
