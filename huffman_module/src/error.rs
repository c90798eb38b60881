use std::error::Error;
use std::fmt::{self, Display};
use std::io;

/// Errors surfaced by [`crate::encode`] and [`crate::decode`].
///
/// I/O failures on the caller's source or sink are fatal for the in-flight
/// operation and are wrapped verbatim rather than inspected further.
#[derive(Debug)]
pub enum CodecError {
    /// The 257-byte header is short, malformed, or the length multiset it
    /// describes does not form a complete canonical prefix code.
    CorruptHeader,
    /// A well-formed header decoded into a bitstream whose body could not be
    /// resolved to a valid symbol (dispatch or offset fell outside range).
    CorruptMessage,
    /// The source or sink raised an I/O error.
    Io(io::Error),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::CorruptHeader => write!(f, "corrupt huffman header"),
            CodecError::CorruptMessage => write!(f, "corrupt huffman message body"),
            CodecError::Io(e) => write!(f, "i/o error: {}", e),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CodecError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CodecError {
    fn from(error: io::Error) -> Self {
        CodecError::Io(error)
    }
}
