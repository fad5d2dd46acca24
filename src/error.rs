//! Error handling.

use std::fmt;
use std::io;
use std::result;

/// Error type for encoding and decoding operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error on the underlying byte source or sink.
    IoError(io::Error),
    /// The symbol source ended in the middle of a group; holds how many
    /// symbols of the unfinished group were read (1 to 3).
    Truncated(usize),
    /// A code point that is neither an alphabet symbol nor a padding mark.
    InvalidSymbol(char),
}

/// Library result alias.
pub type Result<T> = result::Result<T, Error>;

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Error {
        Error::IoError(e)
    }
}

impl From<Error> for io::Error {
    fn from(e: Error) -> io::Error {
        match e {
            Error::IoError(e) => e,
            other => io::Error::new(io::ErrorKind::InvalidData, other.to_string()),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::IoError(e) => write!(f, "io error: {}", e),
            Error::Truncated(n) => write!(
                f,
                "truncated input: got {} of 4 symbols in the final group",
                n
            ),
            Error::InvalidSymbol(c) => write!(
                f,
                "code point U+{:04X} is not part of the base-1024 alphabet",
                u32::from(*c)
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(e) => Some(e),
            _ => None,
        }
    }
}
