//! Move evaluation
//!
//! - [`weights`]: scoring weights
//! - [`evaluator`]: one-ply evaluator and move recommendation

pub mod evaluator;
pub mod weights;

pub use evaluator::{EvaluatedMove, MoveEvaluator, MoveReason};
pub use weights::EvalWeights;
