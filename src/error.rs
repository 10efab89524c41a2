use thiserror::Error;

/// Returned by [`crate::next_boundary_in_bytes`] when the input is not
/// valid UTF-8 and no boundary was found before the offending bytes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at byte offset {offset}")]
pub struct DecodeError {
    /// Byte offset of the first byte that could not be decoded.
    pub offset: usize,
    /// Whether the bytes are malformed or merely cut short.
    pub kind: DecodeErrorKind,
}

/// The reason a [`DecodeError`] was raised.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// The bytes can never form a valid UTF-8 sequence.
    #[error("invalid UTF-8 sequence")]
    Invalid,
    /// The input ended partway through a UTF-8 sequence.
    #[error("truncated UTF-8 sequence")]
    Truncated,
}
