//! AVIF, located through its ISOBMFF `ftyp` box.
//!
//! The `ftyp` box begins with a 32-bit size whose upper half is zero for any
//! realistic box, so the dispatcher has usually consumed that half as blank
//! padding by the time it gets here. [`detect_ftyp`] undoes that.

use crate::bmff::{BoxHeader, FTYP, IPCO, IPRP, ISPE, META};
use crate::cursor::{ByteCursor, Endian};
use crate::error::{ProbeError, Result};
use crate::signature::Lead;
use crate::types::{Dimensions, FormatTag};
use std::io::{Read, Seek};
use tracing::trace;

pub const AVIF_BRAND: [u8; 4] = *b"avif";

/// Version and flags of a full box.
const FULL_BOX_PREFIX: u64 = 4;

/// Completes the `ftyp` box size from the lead word and checks for the
/// `avif` major brand. On success the cursor's blank header length is
/// corrected so the `ftyp` box starts at position 0, and the box size is
/// returned.
pub fn detect_ftyp<R: Read + Seek>(cursor: &mut ByteCursor<R>, lead: Lead) -> Result<u64> {
    let unrecognized = ProbeError::UnrecognizedFormat { magic: lead.word };

    let box_size = if lead.blank_len == 0 {
        if cursor.remaining() < 2 {
            return Err(unrecognized);
        }
        (u32::from(lead.word) << 16) | u32::from(cursor.read_u16(Endian::Big)?)
    } else {
        u32::from(lead.word)
    };

    if cursor.remaining() < 8 {
        return Err(unrecognized);
    }
    let tag = cursor.read_array::<8>()?;
    if tag[..4] != FTYP.0 || tag[4..] != AVIF_BRAND {
        return Err(unrecognized);
    }

    cursor.set_blank_header_len(lead.blank_len.saturating_sub(2));
    trace!(box_size, blank_len = cursor.blank_header_len(), "found ftypavif");

    Ok(u64::from(box_size))
}

/// Walks the box tree after `ftyp` down `meta/iprp/ipco` to the first
/// `ispe` property with non-zero extents.
pub fn extract<R: Read + Seek>(cursor: &mut ByteCursor<R>, ftyp_size: u64) -> Result<Dimensions> {
    if ftyp_size < BoxHeader::MIN_SIZE + 8 {
        return Err(ProbeError::invalid(FormatTag::Avif, "ftyp box too small"));
    }
    cursor.seek(ftyp_size)?;

    while cursor.remaining() >= BoxHeader::MIN_SIZE {
        let header = BoxHeader::read(cursor)?;
        trace!(kind = %header.kind, offset = header.offset, size = header.size, "box");

        match header.kind {
            META => cursor.seek(header.body_offset() + FULL_BOX_PREFIX)?,
            IPRP | IPCO => {}
            ISPE => {
                cursor.seek(header.body_offset() + FULL_BOX_PREFIX)?;
                let width = cursor.read_u32(Endian::Big)?;
                let height = cursor.read_u32(Endian::Big)?;
                if width > 0 && height > 0 {
                    return Ok(Dimensions::new(width, height));
                }
                cursor.seek(header.end())?;
            }
            _ => cursor.seek(header.end())?,
        }
    }

    Err(ProbeError::invalid(
        FormatTag::Avif,
        "no image spatial extents",
    ))
}
