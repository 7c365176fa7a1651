//! Input validation errors shared by every crate in the workspace.

use thiserror::Error;

/// The single error kind surfaced by the public API: a caller passed
/// arguments that violate a documented precondition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("Point sets differ in length: {source_len} source points, {target_len} target points")]
    ShapeMismatch {
        source_len: usize,
        target_len: usize,
    },

    #[error("Insufficient points: found {found}, need at least {required}")]
    InsufficientPoints { found: usize, required: usize },

    #[error("Coefficient vector for {axis} has {len} entries, expected {expected}")]
    CoefficientCount {
        axis: &'static str,
        len: usize,
        expected: usize,
    },

    #[error("Non-finite coordinate in point {index}")]
    NonFiniteCoordinate { index: usize },

    #[error("Base-36 encoding requires a non-negative integer, got {0}")]
    NegativeNumber(i64),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, InvalidInput>;
