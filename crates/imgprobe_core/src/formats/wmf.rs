use super::{expect_bytes, span};
use crate::cursor::{ByteCursor, Endian};
use crate::error::Result;
use crate::types::{Dimensions, FormatTag};
use std::io::{Read, Seek};

const BOUNDS_OFFSET: u64 = 0x0A;

/// Placeable metafile: `D7 CD C6 9A` key, then a bounding box in logical units.
pub fn extract<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Dimensions> {
    let key_tail = cursor.read_array::<2>()?;
    expect_bytes(FormatTag::Wmf, &key_tail, &[0xC6, 0x9A], "bad placeable key")?;

    cursor.seek(BOUNDS_OFFSET)?;
    let left = cursor.read_i16(Endian::Little)?;
    let top = cursor.read_i16(Endian::Little)?;
    let right = cursor.read_i16(Endian::Little)?;
    let bottom = cursor.read_i16(Endian::Little)?;

    Ok(Dimensions::new(
        span(right.into(), left.into()),
        span(bottom.into(), top.into()),
    ))
}
