use crate::cursor::{ByteCursor, Endian};
use crate::error::Result;
use crate::types::FormatTag;
use std::io::{Read, Seek};
use tracing::trace;

/// Streams shorter than this cannot hold any supported header.
pub const MIN_STREAM_LEN: u64 = 16;

/// Leading zero padding tolerated before a signature (four 16-bit words).
pub const MAX_BLANK_HEADER_LEN: u64 = 8;

pub const MAGIC_BMP: u16 = 0x424D;
pub const MAGIC_JPEG: u16 = 0xFFD8;
pub const MAGIC_GIF: u16 = 0x4749;
pub const MAGIC_PNG: u16 = 0x8950;
pub const MAGIC_PSD: u16 = 0x3842;
pub const MAGIC_WMF: u16 = 0xD7CD;
pub const MAGIC_EMF: u16 = 0x0100;
pub const MAGIC_TIFF_LE: u16 = 0x4949;
pub const MAGIC_TIFF_BE: u16 = 0x4D4D;
pub const MAGIC_RIFF: u16 = 0x5249;

/// Formats identified directly by their leading big-endian word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signature {
    Bmp,
    Jpeg,
    Gif,
    Png,
    Psd,
    Wmf,
    Emf,
    Tiff(Endian),
    Webp,
}

impl Signature {
    pub const fn from_magic(word: u16) -> Option<Self> {
        match word {
            MAGIC_BMP => Some(Self::Bmp),
            MAGIC_JPEG => Some(Self::Jpeg),
            MAGIC_GIF => Some(Self::Gif),
            MAGIC_PNG => Some(Self::Png),
            MAGIC_PSD => Some(Self::Psd),
            MAGIC_WMF => Some(Self::Wmf),
            MAGIC_EMF => Some(Self::Emf),
            MAGIC_TIFF_LE => Some(Self::Tiff(Endian::Little)),
            MAGIC_TIFF_BE => Some(Self::Tiff(Endian::Big)),
            MAGIC_RIFF => Some(Self::Webp),
            _ => None,
        }
    }

    pub const fn format(&self) -> FormatTag {
        match self {
            Self::Bmp => FormatTag::Bmp,
            Self::Jpeg => FormatTag::Jpeg,
            Self::Gif => FormatTag::Gif,
            Self::Png => FormatTag::Png,
            Self::Psd => FormatTag::Psd,
            Self::Wmf => FormatTag::Wmf,
            Self::Emf => FormatTag::Emf,
            Self::Tiff(_) => FormatTag::Tiff,
            Self::Webp => FormatTag::Webp,
        }
    }
}

/// The first significant word of a stream and the padding skipped to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lead {
    pub word: u16,
    pub blank_len: u64,
}

/// Reads big-endian words from the start of the stream, skipping zero words
/// until a non-zero one appears or [`MAX_BLANK_HEADER_LEN`] bytes have been
/// skipped. The skipped length is installed on the cursor, so on return
/// `cursor.position()` is 2 (just past the signature word).
pub fn read_lead<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Lead> {
    cursor.set_blank_header_len(0);
    cursor.seek(0)?;

    let mut word = cursor.read_u16(Endian::Big)?;
    let mut blank_len = 0u64;

    while word == 0 && blank_len < MAX_BLANK_HEADER_LEN {
        word = cursor.read_u16(Endian::Big)?;
        blank_len += 2;
    }

    if blank_len > 0 {
        trace!(blank_len, word, "skipped leading zero words");
    }

    cursor.set_blank_header_len(blank_len);
    Ok(Lead { word, blank_len })
}
