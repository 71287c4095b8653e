use thiserror::Error;

/// Errors raised by matrix/vector arithmetic and by network construction
/// and evaluation.
///
/// Every variant is a precondition violation detected before the offending
/// operation mutates anything.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetError {
    /// Operand shapes are incompatible. Shapes are `(rows, cols)`; vectors
    /// report themselves as a single column.
    #[error("dimension mismatch in {operation}: {left:?} vs {right:?}")]
    DimensionMismatch {
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("index {index:?} out of range for shape {shape:?}")]
    IndexOutOfRange {
        index: (usize, usize),
        shape: (usize, usize),
    },

    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    #[error("input has {actual} values, input layer expects {expected}")]
    InputShapeMismatch { expected: usize, actual: usize },

    /// An input value lies outside `[0.0, 1.0]` (NaN included).
    #[error("input value {value} at position {index} is outside [0, 1]")]
    InputRangeError { index: usize, value: f64 },
}

pub type Result<T> = std::result::Result<T, NetError>;
