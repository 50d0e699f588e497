//! Pente against the computer
//!
//! Rules implemented:
//! - 19x19 board, White always opens on the centre (J10)
//! - White's second stone must be at least three intersections from the centre
//! - 5-in-a-row wins, overlines included
//! - Pair capture: X-O-O-X removes the O-O pair; five captured pairs win
//! - Rounds are scored and summed over a tournament
//!
//! # Architecture
//!
//! - [`board`]: board engine with placement, undo and directional scans
//! - [`rules`]: captures and line counting on a bare grid
//! - [`eval`]: one-ply move evaluation and recommendation
//! - [`game`]: rounds, the tournament and the save format
//! - [`config`]: runtime configuration
//! - [`ui`]: egui front-end
//!
//! # Quick Start
//!
//! ```
//! use pente::{Board, MoveEvaluator, Side};
//! use rand::SeedableRng;
//!
//! let mut board = Board::new();
//! board.set_bounds(0, 0).unwrap();
//!
//! let mut rng = rand_pcg::Pcg32::seed_from_u64(1);
//! let chosen = MoveEvaluator::default()
//!     .recommend_move(&board, Side::White, &mut rng)
//!     .unwrap();
//! assert_eq!(chosen.pos.to_string(), "J10");
//!
//! board.place_at(Side::White, chosen.pos).unwrap();
//! assert_eq!(board.stone_count(), 1);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Side, Stone, BOARD_SIZE};
pub use config::PenteConfig;
pub use error::BoardError;
pub use eval::{EvaluatedMove, MoveEvaluator};
pub use game::{PlayerKind, Tournament};
