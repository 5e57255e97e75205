use super::expect_bytes;
use crate::cursor::{ByteCursor, Endian};
use crate::error::Result;
use crate::types::{Dimensions, FormatTag};
use std::io::{Read, Seek};

const SIZE_OFFSET: u64 = 0x0E;

pub fn extract<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Dimensions> {
    let tail = cursor.read_array::<4>()?;
    expect_bytes(FormatTag::Psd, &tail, b"PS\x00\x01", "missing 8BPS version 1")?;

    cursor.seek(SIZE_OFFSET)?;
    // rows come before columns
    let height = cursor.read_u32(Endian::Big)?;
    let width = cursor.read_u32(Endian::Big)?;
    Ok(Dimensions::new(width, height))
}
