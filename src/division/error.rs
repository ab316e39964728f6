use std::fmt;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur while the
/// tool reads operands, divides them, or persists the quotient.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Raised when an input line is not a base-10 integer.
    #[error("{input:?} is not a valid integer ({source})")]
    InvalidOperand {
        input: String,
        #[source]
        source: ParseIntError,
    },

    /// Raised when an input line is numeric but does not fit into an `i32`.
    #[error("{input:?} is outside the range of a 32-bit integer")]
    OperandOutOfRange { input: String },

    /// Raised when the divisor is zero.
    #[error("cannot divide {dividend} by zero")]
    DivisionByZero { dividend: i32 },

    /// Raised when the quotient does not fit into an `i32`.
    #[error("dividing {dividend} by {divisor} overflows a 32-bit integer")]
    Overflow { dividend: i32, divisor: i32 },

    /// Raised when the result file cannot be created or written.
    #[error("could not write {}: {source}", .path.display())]
    ResultFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper for failures reading prompts from or writing them to the console.
    #[error("console I/O error: {0}")]
    Console(#[from] std::io::Error),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

/// The four user-facing failure categories a run can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidFormat,
    DivisionByZero,
    IoFailure,
    Unexpected,
}

impl ToolError {
    /// Classifies the error into the category used for reporting.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ToolError::InvalidOperand { .. } => ErrorKind::InvalidFormat,
            ToolError::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            ToolError::ResultFile { .. } => ErrorKind::IoFailure,
            ToolError::OperandOutOfRange { .. }
            | ToolError::Overflow { .. }
            | ToolError::Console(_)
            | ToolError::Logging(_) => ErrorKind::Unexpected,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidFormat => write!(f, "invalid-format"),
            ErrorKind::DivisionByZero => write!(f, "division-by-zero"),
            ErrorKind::IoFailure => write!(f, "io-failure"),
            ErrorKind::Unexpected => write!(f, "unexpected"),
        }
    }
}
