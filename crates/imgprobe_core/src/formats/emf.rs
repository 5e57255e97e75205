use super::{expect_bytes, span};
use crate::cursor::{ByteCursor, Endian};
use crate::error::{ProbeError, Result};
use crate::types::{Dimensions, FormatTag};
use std::io::{Read, Seek};

const BOUNDS_OFFSET: u64 = 0x08;

const SIGNATURE_OFFSET: u64 = 0x28;

pub const EMF_SIGNATURE: [u8; 4] = *b" EMF";

/// `EMR_HEADER` record; bounds are inclusive device-unit rectangles.
pub fn extract<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Dimensions> {
    let record_type_tail = cursor.read_array::<2>()?;
    expect_bytes(
        FormatTag::Emf,
        &record_type_tail,
        &[0x00, 0x00],
        "first record is not EMR_HEADER",
    )?;

    cursor.seek(BOUNDS_OFFSET)?;
    let left = cursor.read_i32(Endian::Little)?;
    let top = cursor.read_i32(Endian::Little)?;
    let right = cursor.read_i32(Endian::Little)?;
    let bottom = cursor.read_i32(Endian::Little)?;

    cursor.seek(SIGNATURE_OFFSET)?;
    let signature = cursor.read_array::<4>()?;
    expect_bytes(FormatTag::Emf, &signature, &EMF_SIGNATURE, "missing EMF signature")?;

    let width = span(right, left)
        .checked_add(1)
        .ok_or(ProbeError::invalid(FormatTag::Emf, "bounds overflow"))?;
    let height = span(bottom, top)
        .checked_add(1)
        .ok_or(ProbeError::invalid(FormatTag::Emf, "bounds overflow"))?;

    Ok(Dimensions::new(width, height))
}
