//! Error types for the qr_reveal library.
//!
//! Setup failures (allocation, sizing, call order) are reported through
//! [`Error`] and abort a scan. Per-candidate failures are reported through
//! [`DecodeError`] and only ever reduce the usable count of a scan.

use thiserror::Error;

use crate::context::Stage;

/// Result type alias for qr_reveal operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a scan
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The engine could not allocate working memory
    #[error("failed to allocate {bytes} bytes for {what}")]
    Allocation {
        /// Which buffer was being allocated
        what: &'static str,
        /// Requested size in bytes
        bytes: usize,
    },

    /// Caller-supplied pixel buffer is shorter than width * height
    #[error("pixel buffer holds {actual} bytes, {width}x{height} image needs {expected}")]
    InvalidBufferSize {
        /// Image width in pixels
        width: usize,
        /// Image height in pixels
        height: usize,
        /// Required length (width * height)
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },

    /// Width or height is zero, or their product overflows
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// A context operation was called in the wrong lifecycle stage
    #[error("{operation} called while context is {stage}")]
    OutOfSequence {
        /// The rejected operation
        operation: &'static str,
        /// Stage the context was in
        stage: Stage,
    },

    /// A single candidate failed to decode
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),
}

impl Error {
    /// Create an allocation error
    pub fn allocation(what: &'static str, bytes: usize) -> Self {
        Self::Allocation { what, bytes }
    }

    /// Create an out-of-sequence error
    pub fn out_of_sequence(operation: &'static str, stage: Stage) -> Self {
        Self::OutOfSequence { operation, stage }
    }

    /// Returns true for failures caused by the caller's input rather than the engine
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidBufferSize { .. }
                | Self::InvalidDimensions { .. }
                | Self::OutOfSequence { .. }
        )
    }
}

/// Reason a located candidate could not be decoded
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DecodeError {
    /// Sampled grid is not 17 + 4v modules wide
    #[error("Invalid grid size")]
    InvalidGridSize,
    /// Version information contradicts the grid size
    #[error("Invalid version")]
    InvalidVersion,
    /// Neither copy of the format information could be corrected
    #[error("Format data ECC failure")]
    FormatEcc,
    /// Reed-Solomon correction failed on at least one block
    #[error("ECC failure")]
    DataEcc,
    /// Segment header carries an unsupported mode indicator
    #[error("Unknown data type")]
    UnknownDataType,
    /// Decoded payload exceeds the configured maximum
    #[error("Data overflow")]
    DataOverflow,
    /// Segment claims more bits than the symbol holds
    #[error("Data underflow")]
    DataUnderflow,
}
