use crate::types::FormatTag;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stream truncated: needed {needed} bytes at offset {offset} (length: {len})")]
    TruncatedStream { offset: u64, needed: u64, len: u64 },

    #[error("Position {position} is out of range (length: {len})")]
    OutOfRange { position: u64, len: u64 },

    #[error("Stream too small to hold an image header: {len} bytes")]
    TooSmall { len: u64 },

    #[error("Unrecognized format (leading word: {magic:#06X})")]
    UnrecognizedFormat { magic: u16 },

    #[error("Invalid {format} header: {reason}")]
    InvalidHeader {
        format: FormatTag,
        reason: &'static str,
    },
}

impl ProbeError {
    /// Whether the error must reach the caller. Everything else only means
    /// "not a recognized image" and is reported as [`FormatTag::Unknown`].
    #[inline]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Io(_) | Self::TruncatedStream { .. } | Self::OutOfRange { .. }
        )
    }

    #[inline]
    pub(crate) fn invalid(format: FormatTag, reason: &'static str) -> Self {
        Self::InvalidHeader { format, reason }
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;
