use thiserror::Error;

/// Errors raised by the integer codec. All of them are raised before a destination buffer is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A value does not fit into the integer width it is written as.
    #[error("value {value} is out of range, expected >= {min} and <= {max}")]
    Range { value: i128, min: i128, max: i128 },

    /// A read or write would reach past the end of the buffer.
    #[error("attempt to access {required} bytes at offset {offset}, but only {available} bytes are available")]
    OutOfBounds {
        offset: usize,
        required: usize,
        available: usize,
    },

    /// Variable-width operations only support widths from one to six bytes.
    #[error("byte length {0} is not supported, expected a value from 1 to 6")]
    InvalidByteLength(usize),
}

pub type Result<T> = std::result::Result<T, CodecError>;
