//! Binary buffer utilities for the DIS PDU codec.
//!
//! Every multi-byte quantity on the DIS wire is big-endian (network byte
//! order) and packed without implicit padding, so this crate offers exactly
//! two primitives:
//!
//! - [`Reader`] - reads fixed-width values from a byte slice with cursor
//!   tracking. Every read is bounds-checked and fails with
//!   [`BufferError::EndOfBuffer`] instead of panicking.
//! - [`Writer`] - writes fixed-width values to an auto-growing buffer.
//!
//! # Example
//!
//! ```
//! use dis_buffers::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.u8(0x01);
//! writer.u16(0x0203);
//! writer.f32(1.5);
//! let data = writer.flush();
//!
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.u8().unwrap(), 0x01);
//! assert_eq!(reader.u16().unwrap(), 0x0203);
//! assert_eq!(reader.f32().unwrap(), 1.5);
//! assert!(reader.u8().is_err());
//! ```

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;

/// Error type for buffer operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    EndOfBuffer {
        /// Bytes the read required.
        needed: usize,
        /// Bytes left in the buffer at the time of the read.
        remaining: usize,
        /// Cursor position where the read started.
        offset: usize,
    },
}

impl std::fmt::Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferError::EndOfBuffer {
                needed,
                remaining,
                offset,
            } => write!(
                f,
                "end of buffer: needed {needed} bytes at offset {offset}, {remaining} remaining"
            ),
        }
    }
}

impl std::error::Error for BufferError {}
