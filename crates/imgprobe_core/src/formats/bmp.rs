use crate::cursor::{ByteCursor, Endian};
use crate::error::{ProbeError, Result};
use crate::types::{Dimensions, FormatTag};
use std::io::{Read, Seek};

const INFO_HEADER_OFFSET: u64 = 0x0E;

/// OS/2 1.x `BITMAPCOREHEADER`, the only header with 16-bit dimensions.
const CORE_HEADER_SIZE: i32 = 12;

pub fn extract<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Dimensions> {
    cursor.seek(INFO_HEADER_OFFSET)?;
    let info_size = cursor.read_i32(Endian::Little)?;

    let (width, height) = match info_size {
        s if s < CORE_HEADER_SIZE => {
            return Err(ProbeError::invalid(FormatTag::Bmp, "info header too small"));
        }
        CORE_HEADER_SIZE => (
            i32::from(cursor.read_i16(Endian::Little)?),
            i32::from(cursor.read_i16(Endian::Little)?),
        ),
        _ => (
            cursor.read_i32(Endian::Little)?,
            cursor.read_i32(Endian::Little)?,
        ),
    };

    if width < 0 {
        return Err(ProbeError::invalid(FormatTag::Bmp, "negative width"));
    }

    // negative height marks a top-down bitmap
    Ok(Dimensions::new(width as u32, height.unsigned_abs()))
}
