use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    result,
};

pub type Result<T> = result::Result<T, ErrorType>;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Enum with all possible buffer errors that could occur.
pub enum ErrorType {
    /// index or range is outside of `[0, bound)`
    OutOfBounds { index: usize, bound: usize },
    /// mutation attempted through a read-only buffer
    ReadOnly,
    /// `reset` called while no mark is set
    InvalidMark,
    /// new position or limit exceeds its bound
    IllegalArgument { value: usize, bound: usize },
}

impl Display for ErrorType {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ErrorType::OutOfBounds { index, bound } => write!(
                fmt,
                "Index {} is out of bounds, bound is {}.",
                index,
                bound
            ),
            ErrorType::ReadOnly => write!(
                fmt,
                "Buffer is read-only."
            ),
            ErrorType::InvalidMark => write!(
                fmt,
                "Buffer mark is not set."
            ),
            ErrorType::IllegalArgument { value, bound } => write!(
                fmt,
                "Value {} exceeds bound {}.",
                value,
                bound
            ),
        }
    }
}

impl Error for ErrorType {}
