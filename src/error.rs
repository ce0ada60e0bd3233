use std::error;
use std::fmt;
use std::result;

/// Errors returned by the linear containers when an operation cannot find its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The container holds no elements.
    Empty,
    /// No element equal to the requested value exists.
    NotFound,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Empty => write!(f, "collection is empty"),
            Error::NotFound => write!(f, "value not found"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
