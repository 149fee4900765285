use thiserror::Error;

/// Errors produced by the automaton engine.
///
/// Every operation that returns one of these leaves the engine untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A grid side was zero.
    #[error("invalid grid dimensions {width}x{height}: both sides must be positive")]
    InvalidDimension { width: usize, height: usize },

    /// Malformed birth/survival rule.
    #[error("invalid rule {rule:?}: {reason}")]
    InvalidRule { rule: String, reason: String },

    /// Coordinates outside `[0, width) x [0, height)`.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Restoring from a grid of another shape.
    #[error("grid dimensions differ: expected {expected:?}, found {found:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// History entry that was never recorded or was already dropped.
    #[error("generation {index} is not in history (length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Malformed RLE text.
    #[error("invalid RLE pattern: {0}")]
    InvalidPattern(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_rule(rule: &str, reason: impl Into<String>) -> Self {
        Self::InvalidRule {
            rule: rule.to_string(),
            reason: reason.into(),
        }
    }
}
