//! Fault taxonomy for marshaling and unmarshaling.

use dis_buffers::BufferError;
use thiserror::Error;

/// Error raised while encoding or decoding a record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Fault {
    /// The buffer holds fewer bytes than the field(s) being read require.
    #[error("underflow: needed {needed} bytes at offset {offset}, {remaining} remaining")]
    Underflow {
        needed: usize,
        remaining: usize,
        offset: usize,
    },
    /// A count or length field disagrees with the content it describes.
    #[error("inconsistent length in `{field}`: declared {declared}, actual {actual}")]
    InconsistentLength {
        field: &'static str,
        declared: usize,
        actual: usize,
    },
    /// Two records of different types were compared or decoded into one
    /// another.
    #[error("structural mismatch: expected {expected}, found {found}")]
    StructuralMismatch {
        expected: &'static str,
        found: String,
    },
}

impl From<BufferError> for Fault {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer {
                needed,
                remaining,
                offset,
            } => Fault::Underflow {
                needed,
                remaining,
                offset,
            },
        }
    }
}

/// Result alias used throughout the codec.
pub type Result<T> = std::result::Result<T, Fault>;
