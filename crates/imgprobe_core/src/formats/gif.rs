use super::expect_bytes;
use crate::cursor::{ByteCursor, Endian};
use crate::error::{ProbeError, Result};
use crate::types::{Dimensions, FormatTag};
use std::io::{Read, Seek};

pub fn extract<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Dimensions> {
    let version = cursor.read_array::<4>()?;
    expect_bytes(FormatTag::Gif, &version[..2], b"F8", "missing GIF8 signature")?;
    if !matches!(&version[2..], b"7a" | b"9a") {
        return Err(ProbeError::invalid(FormatTag::Gif, "unknown GIF version"));
    }

    let width = cursor.read_u16(Endian::Little)?;
    let height = cursor.read_u16(Endian::Little)?;
    Ok(Dimensions::new(u32::from(width), u32::from(height)))
}
