//! Bounds-checked, endian-aware reads over a seekable stream.
//!
//! # Coordinates
//!
//! A stream may start with up to four zero 16-bit words before the real
//! signature. Once the dispatcher has measured that padding it stores it as
//! the cursor's *blank header length*, and from then on [`ByteCursor::seek`]
//! and [`ByteCursor::position`] speak in post-padding coordinates: offset 0
//! is the first byte of the signature. Format parsers can therefore use the
//! offsets from their format documentation directly.
//!
//! [`ByteCursor::stream_len`] and [`ByteCursor::absolute_position`] always
//! refer to the true stream.

use crate::error::{ProbeError, Result};
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use std::io::{Read, Seek, SeekFrom};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Big,
    Little,
}

impl Endian {
    #[inline]
    pub fn u16(self, buf: &[u8]) -> u16 {
        match self {
            Self::Big => BigEndian::read_u16(buf),
            Self::Little => LittleEndian::read_u16(buf),
        }
    }

    #[inline]
    pub fn u24(self, buf: &[u8]) -> u32 {
        match self {
            Self::Big => BigEndian::read_u24(buf),
            Self::Little => LittleEndian::read_u24(buf),
        }
    }

    #[inline]
    pub fn u32(self, buf: &[u8]) -> u32 {
        match self {
            Self::Big => BigEndian::read_u32(buf),
            Self::Little => LittleEndian::read_u32(buf),
        }
    }

    #[inline]
    pub fn u64(self, buf: &[u8]) -> u64 {
        match self {
            Self::Big => BigEndian::read_u64(buf),
            Self::Little => LittleEndian::read_u64(buf),
        }
    }
}

pub struct ByteCursor<R> {
    inner: R,
    len: u64,
    pos: u64,
    blank: u64,
}

impl<R: Read + Seek> ByteCursor<R> {
    /// Wraps `inner`, measuring its length and rewinding it to the first byte.
    pub fn new(mut inner: R) -> Result<Self> {
        let len = inner.seek(SeekFrom::End(0))?;
        inner.seek(SeekFrom::Start(0))?;

        Ok(Self {
            inner,
            len,
            pos: 0,
            blank: 0,
        })
    }

    /// Total stream length in bytes.
    #[inline]
    pub fn stream_len(&self) -> u64 {
        self.len
    }

    #[inline]
    pub fn blank_header_len(&self) -> u64 {
        self.blank
    }

    #[inline]
    pub(crate) fn set_blank_header_len(&mut self, blank: u64) {
        self.blank = blank;
    }

    /// Read position in post-padding coordinates.
    #[inline]
    pub fn position(&self) -> u64 {
        self.pos.saturating_sub(self.blank)
    }

    #[inline]
    pub fn absolute_position(&self) -> u64 {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> u64 {
        self.len - self.pos
    }

    /// Moves to `position`, given in post-padding coordinates.
    pub fn seek(&mut self, position: u64) -> Result<()> {
        let absolute = position
            .checked_add(self.blank)
            .filter(|&abs| abs <= self.len)
            .ok_or(ProbeError::OutOfRange {
                position: position.saturating_add(self.blank),
                len: self.len,
            })?;

        self.inner.seek(SeekFrom::Start(absolute))?;
        self.pos = absolute;
        Ok(())
    }

    pub fn skip(&mut self, count: u64) -> Result<()> {
        let target = self
            .position()
            .checked_add(count)
            .ok_or(ProbeError::OutOfRange {
                position: u64::MAX,
                len: self.len,
            })?;
        self.seek(target)
    }

    pub fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        let needed = buf.len() as u64;
        if needed > self.remaining() {
            return Err(ProbeError::TruncatedStream {
                offset: self.pos,
                needed,
                len: self.len,
            });
        }

        self.inner.read_exact(buf)?;
        self.pos += needed;
        Ok(())
    }

    #[inline]
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.read_exact(&mut buf)?;
        Ok(buf)
    }

    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; count];
        self.read_exact(&mut buf)?;
        Ok(buf)
    }

    /// Reads `max` bytes, or whatever is left if the stream ends first.
    pub fn read_up_to(&mut self, max: usize) -> Result<Vec<u8>> {
        let count = (max as u64).min(self.remaining()) as usize;
        self.read_bytes(count)
    }

    #[inline]
    pub fn read_u16(&mut self, endian: Endian) -> Result<u16> {
        Ok(endian.u16(&self.read_array::<2>()?))
    }

    #[inline]
    pub fn read_i16(&mut self, endian: Endian) -> Result<i16> {
        Ok(self.read_u16(endian)? as i16)
    }

    #[inline]
    pub fn read_u32(&mut self, endian: Endian) -> Result<u32> {
        Ok(endian.u32(&self.read_array::<4>()?))
    }

    #[inline]
    pub fn read_i32(&mut self, endian: Endian) -> Result<i32> {
        Ok(self.read_u32(endian)? as i32)
    }

    #[inline]
    pub fn read_u64(&mut self, endian: Endian) -> Result<u64> {
        Ok(endian.u64(&self.read_array::<8>()?))
    }
}
