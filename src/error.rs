//!
//! Error type shared by the model builder, the inference engine and the
//! maze/simulation collaborators.
//!
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridHmmError {
    /// Shapes `(rows, cols)` of the two operands of `op` are incompatible.
    #[error("dimension mismatch in {op}: {left:?} vs {right:?}")]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("invalid color symbol {0:?} (expected one of r, g, b, y)")]
    InvalidColorSymbol(char),

    #[error("invalid move symbol {0:?} (expected one of n, e, s, w)")]
    InvalidMove(char),

    /// The grid has no open cell, so there is no state to estimate.
    #[error("grid has no open cell")]
    EmptyModel,

    #[error("transition row of state {state} sums to {sum}, not 1")]
    MalformedTransition { state: usize, sum: f64 },

    #[error("observation likelihoods of state {state} sum to {sum}, not 1")]
    MalformedSensor { state: usize, sum: f64 },

    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    #[error("maze parse error at line {line}: {message}")]
    MazeParse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GridHmmError>;
