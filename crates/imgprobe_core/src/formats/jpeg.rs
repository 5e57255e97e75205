use crate::cursor::{ByteCursor, Endian};
use crate::error::{ProbeError, Result};
use crate::types::{Dimensions, FormatTag};
use std::io::{Read, Seek};
use tracing::trace;

pub const JPEG_EOI: u16 = 0xFFD9;

/// Segment length (2) plus sample precision (1) precede the frame size.
const SOF_SIZE_OFFSET: u64 = 3;

/// Start-of-frame markers. `C4` (DHT), `C8` (JPG) and `CC` (DAC) share the
/// range but carry no frame header.
#[inline]
pub const fn is_sof_marker(marker: u16) -> bool {
    matches!(marker, 0xFFC0..=0xFFCF) && !matches!(marker, 0xFFC4 | 0xFFC8 | 0xFFCC)
}

pub fn extract<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Dimensions> {
    let stream_end = cursor.position() + cursor.remaining();

    loop {
        let marker = cursor.read_u16(Endian::Big)?;

        if is_sof_marker(marker) {
            trace!(marker, offset = cursor.position() - 2, "found frame header");
            break;
        }

        if marker == JPEG_EOI {
            return Err(ProbeError::invalid(
                FormatTag::Jpeg,
                "end of image before any frame header",
            ));
        }

        if marker >> 8 != 0xFF {
            return Err(ProbeError::invalid(FormatTag::Jpeg, "expected a marker"));
        }

        let segment_len = cursor.read_u16(Endian::Big)?;
        if segment_len < 2 {
            return Err(ProbeError::invalid(FormatTag::Jpeg, "segment length below 2"));
        }

        // the next marker must fit; frame fields are bounds-checked on read
        let next = cursor.position() + u64::from(segment_len) - 2;
        if next + 2 > stream_end {
            return Err(ProbeError::TruncatedStream {
                offset: next + cursor.blank_header_len(),
                needed: 2,
                len: cursor.stream_len(),
            });
        }
        cursor.seek(next)?;
    }

    cursor.skip(SOF_SIZE_OFFSET)?;
    let height = cursor.read_u16(Endian::Big)?;
    let width = cursor.read_u16(Endian::Big)?;

    Ok(Dimensions::new(u32::from(width), u32::from(height)))
}
