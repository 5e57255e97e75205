//! ISOBMFF box headers.

use crate::cursor::{ByteCursor, Endian};
use crate::error::{ProbeError, Result};
use crate::types::FormatTag;
use std::fmt;
use std::io::{Read, Seek};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourCc(pub [u8; 4]);

impl fmt::Display for FourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            if b.is_ascii_graphic() || b == b' ' {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{:02x}", b)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for FourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FourCc({})", self)
    }
}

pub const FTYP: FourCc = FourCc(*b"ftyp");

pub const META: FourCc = FourCc(*b"meta");

pub const IPRP: FourCc = FourCc(*b"iprp");

pub const IPCO: FourCc = FourCc(*b"ipco");

pub const ISPE: FourCc = FourCc(*b"ispe");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxHeader {
    pub kind: FourCc,
    /// Offset of the size field, in cursor coordinates.
    pub offset: u64,
    /// Total box size including the header.
    pub size: u64,
    pub header_len: u64,
}

impl BoxHeader {
    pub const MIN_SIZE: u64 = 8;

    pub const MIN_LARGE_SIZE: u64 = 16;

    /// Reads a box header at the cursor. A 32-bit size of 1 is followed by a
    /// 64-bit size; a size of 0 means the box runs to the end of the stream.
    pub fn read<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Self> {
        let offset = cursor.position();
        let size32 = cursor.read_u32(Endian::Big)?;
        let kind = FourCc(cursor.read_array::<4>()?);

        let (size, header_len) = match size32 {
            0 => (cursor.position() + cursor.remaining() - offset, Self::MIN_SIZE),
            1 => (cursor.read_u64(Endian::Big)?, Self::MIN_LARGE_SIZE),
            n => (u64::from(n), Self::MIN_SIZE),
        };

        if size < header_len {
            return Err(ProbeError::invalid(
                FormatTag::Avif,
                "box size smaller than its header",
            ));
        }

        Ok(Self {
            kind,
            offset,
            size,
            header_len,
        })
    }

    #[inline]
    pub const fn body_offset(&self) -> u64 {
        self.offset + self.header_len
    }

    #[inline]
    pub const fn end(&self) -> u64 {
        self.offset.saturating_add(self.size)
    }
}
