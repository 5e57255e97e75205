use super::expect_bytes;
use crate::cursor::{ByteCursor, Endian};
use crate::error::Result;
use crate::types::{Dimensions, FormatTag};
use std::io::{Read, Seek};

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

pub const IHDR: [u8; 4] = *b"IHDR";

/// The first chunk's type follows the signature and the chunk length.
const IHDR_TYPE_OFFSET: u64 = 0x0C;

pub fn extract<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Dimensions> {
    let tail = cursor.read_array::<6>()?;
    expect_bytes(FormatTag::Png, &tail, &PNG_SIGNATURE[2..], "bad signature")?;

    cursor.seek(IHDR_TYPE_OFFSET)?;
    let chunk_type = cursor.read_array::<4>()?;
    expect_bytes(FormatTag::Png, &chunk_type, &IHDR, "first chunk is not IHDR")?;

    let width = cursor.read_u32(Endian::Big)?;
    let height = cursor.read_u32(Endian::Big)?;
    Ok(Dimensions::new(width, height))
}
