//! Per-format dimension extractors.
//!
//! Each extractor is entered with the cursor just past the two signature
//! bytes and works in post-padding coordinates (see [`crate::cursor`]).
//! A header that is readable but structurally wrong is reported as
//! [`ProbeError::InvalidHeader`](crate::ProbeError::InvalidHeader); running
//! out of stream is a fatal error.

pub mod avif;
pub mod bmp;
pub mod emf;
pub mod gif;
pub mod jpeg;
pub mod png;
pub mod psd;
pub mod tiff;
pub mod webp;
pub mod wmf;

use crate::error::{ProbeError, Result};
use crate::types::FormatTag;

#[inline]
pub(crate) fn expect_bytes(
    format: FormatTag,
    actual: &[u8],
    expected: &[u8],
    reason: &'static str,
) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(ProbeError::invalid(format, reason))
    }
}

/// `|a - b|` for two signed header coordinates.
#[inline]
pub(crate) fn span(a: i32, b: i32) -> u32 {
    (i64::from(a) - i64::from(b)).unsigned_abs() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expect_bytes() {
        assert!(expect_bytes(FormatTag::Gif, b"F89a", b"F89a", "x").is_ok());
        let err = expect_bytes(FormatTag::Gif, b"F88a", b"F89a", "bad version").unwrap_err();
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_span() {
        assert_eq!(span(10, 3), 7);
        assert_eq!(span(3, 10), 7);
        assert_eq!(span(i32::MAX, i32::MIN), u32::MAX);
    }
}
