use std::error;
use std::fmt;

/// The class of failure behind an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The transport did not read or write the full packet.
    Transport,

    /// The checksum computed over a response does not match the transmitted one.
    ChecksumMismatch,

    /// The command echoed in a response is not the command that was sent.
    CommandMismatch,

    /// No aligned scan record was found within the resynchronization bound.
    ResyncExhausted,

    /// A command argument cannot be encoded on the wire.
    InvalidArgument,
}

/// Represents a failed protocol exchange.
///
/// Every error carries a static, human-readable message. Errors are only
/// created inside this crate; callers inspect them through [`Error::kind`]
/// and [`Error::message`] and release them by dropping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: &'static str,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, message: &'static str) -> Error {
        Error { kind, message }
    }

    pub(crate) fn transport(message: &'static str) -> Error {
        Error::new(ErrorKind::Transport, message)
    }

    /// Returns the class of this failure.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the static description of this failure.
    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl error::Error for Error {}

/// A specialized `Result` type for protocol operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_static_message() {
        let err = Error::new(ErrorKind::ChecksumMismatch, "invalid response header checksum");
        assert_eq!(err.to_string(), "invalid response header checksum");
        assert_eq!(err.message(), "invalid response header checksum");
        assert_eq!(err.kind(), ErrorKind::ChecksumMismatch);
    }

    #[test]
    fn transport_helper_sets_kind() {
        let err = Error::transport("unable to write command");
        assert_eq!(err.kind(), ErrorKind::Transport);
    }
}
