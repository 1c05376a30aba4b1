//! Error types produced by the bit stream, block codec, and stream encoder.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Fault raised by the bit-level reader when a read would extend past the
/// logical end of the underlying bytes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamError {
    #[error("attempted to read past the end of the bit stream")]
    EndOfStream,
}

/// Top-level error for the block codec and the stream encoder.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The underlying bit stream ran out of bits mid-record.
    #[error(transparent)]
    Stream(#[from] StreamError),

    /// A value or timestamp record did not match any of the defined
    /// variable-length codes.
    #[error("corrupt block: {0}")]
    CorruptBlock(&'static str),

    /// An append arrived with a timestamp earlier than the last one accepted.
    #[error("out of order append: timestamp {timestamp} is before last accepted timestamp {last}")]
    OutOfOrderAppend { timestamp: u64, last: u64 },
}
