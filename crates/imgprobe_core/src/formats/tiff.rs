use crate::cursor::{ByteCursor, Endian};
use crate::error::{ProbeError, Result};
use crate::types::{Dimensions, FormatTag};
use std::io::{Read, Seek};
use tracing::trace;

pub const TIFF_VERSION: u16 = 0x2A;

pub const TAG_IMAGE_WIDTH: u16 = 0x100;

pub const TAG_IMAGE_LENGTH: u16 = 0x101;

pub const IFD_ENTRY_SIZE: u64 = 12;

const TYPE_SHORT: u16 = 3;

const TYPE_LONG: u16 = 4;

/// Scans the first IFD for `ImageWidth` and `ImageLength`.
pub fn extract<R: Read + Seek>(cursor: &mut ByteCursor<R>, endian: Endian) -> Result<Dimensions> {
    let version = cursor.read_u16(endian)?;
    if version != TIFF_VERSION {
        return Err(ProbeError::invalid(FormatTag::Tiff, "unsupported version"));
    }

    let ifd_offset = cursor.read_u32(endian)?;
    cursor.seek(u64::from(ifd_offset))?;

    let entry_count = cursor.read_u16(endian)?;
    let entries_start = cursor.position();
    trace!(ifd_offset, entry_count, "walking IFD");

    let mut width = None;
    let mut height = None;

    for i in 0..u64::from(entry_count) {
        cursor.seek(entries_start + i * IFD_ENTRY_SIZE)?;

        let tag = cursor.read_u16(endian)?;
        if tag != TAG_IMAGE_WIDTH && tag != TAG_IMAGE_LENGTH {
            continue;
        }

        let field_type = cursor.read_u16(endian)?;
        let _count = cursor.read_u32(endian)?;

        // short values are left-justified in the 4-byte value field
        let value = match field_type {
            TYPE_SHORT => u32::from(cursor.read_u16(endian)?),
            TYPE_LONG => cursor.read_u32(endian)?,
            _ => continue,
        };

        if tag == TAG_IMAGE_WIDTH {
            width = Some(value);
        } else {
            height = Some(value);
        }

        if let (Some(width), Some(height)) = (width, height) {
            return Ok(Dimensions::new(width, height));
        }
    }

    Err(ProbeError::invalid(
        FormatTag::Tiff,
        "IFD lacks image width or length",
    ))
}
