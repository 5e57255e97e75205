//! RIFF/WebP. All offsets below index a window that starts right after the
//! `RI` signature word, so window offset `n` is file offset `n + 2`.

use super::expect_bytes;
use crate::cursor::{ByteCursor, Endian};
use crate::error::{ProbeError, Result};
use crate::types::{Dimensions, FormatTag};
use std::io::{Read, Seek};

pub const WINDOW_LEN: usize = 30;

const VP8_START_CODE: [u8; 3] = [0x9D, 0x01, 0x2A];

const VP8L_SIGNATURE: u8 = 0x2F;

const CHUNK_VARIANT: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// `VP8 `
    Lossy,
    /// `VP8L`
    Lossless,
    /// `VP8X`
    Extended,
}

impl Variant {
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            b' ' => Some(Self::Lossy),
            b'L' => Some(Self::Lossless),
            b'X' => Some(Self::Extended),
            _ => None,
        }
    }

    /// Window bytes needed to reach the end of the size fields.
    const fn required_len(&self) -> usize {
        match self {
            Self::Lossy => 28,
            Self::Lossless => 23,
            Self::Extended => 28,
        }
    }
}

pub fn extract<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Dimensions> {
    let window_offset = cursor.absolute_position();
    let window = cursor.read_up_to(WINDOW_LEN)?;
    if window.len() <= CHUNK_VARIANT {
        return Err(truncated(window_offset, WINDOW_LEN, cursor.stream_len()));
    }

    expect_bytes(FormatTag::Webp, &window[0..2], b"FF", "missing RIFF signature")?;
    expect_bytes(FormatTag::Webp, &window[6..10], b"WEBP", "RIFF form is not WEBP")?;
    expect_bytes(FormatTag::Webp, &window[10..13], b"VP8", "first chunk is not VP8*")?;

    let variant = Variant::from_tag(window[CHUNK_VARIANT])
        .ok_or(ProbeError::invalid(FormatTag::Webp, "unknown VP8 chunk"))?;
    if window.len() < variant.required_len() {
        return Err(truncated(
            window_offset,
            variant.required_len(),
            cursor.stream_len(),
        ));
    }

    match variant {
        Variant::Lossy => lossy(&window),
        Variant::Lossless => lossless(&window),
        Variant::Extended => Ok(extended(&window)),
    }
}

fn truncated(offset: u64, needed: usize, len: u64) -> ProbeError {
    ProbeError::TruncatedStream {
        offset,
        needed: needed as u64,
        len,
    }
}

/// Key frame header: 14-bit sizes, the top two bits of each word are the
/// upscaling factor.
fn lossy(window: &[u8]) -> Result<Dimensions> {
    expect_bytes(
        FormatTag::Webp,
        &window[21..24],
        &VP8_START_CODE,
        "missing VP8 start code",
    )?;

    let width = Endian::Little.u16(&window[24..26]) & 0x3FFF;
    let height = Endian::Little.u16(&window[26..28]) & 0x3FFF;
    Ok(Dimensions::new(u32::from(width), u32::from(height)))
}

/// 14-bit width-1 and height-1 packed little-endian after the signature byte.
fn lossless(window: &[u8]) -> Result<Dimensions> {
    if window[18] != VP8L_SIGNATURE {
        return Err(ProbeError::invalid(
            FormatTag::Webp,
            "missing VP8L signature byte",
        ));
    }

    let b = &window[19..23];
    let width = 1 + (((u32::from(b[1]) & 0x3F) << 8) | u32::from(b[0]));
    let height = 1
        + (((u32::from(b[3]) & 0x0F) << 10)
            | (u32::from(b[2]) << 2)
            | ((u32::from(b[1]) & 0xC0) >> 6));
    Ok(Dimensions::new(width, height))
}

/// Canvas width-1 and height-1 as 24-bit little-endian fields.
fn extended(window: &[u8]) -> Dimensions {
    let width = Endian::Little.u24(&window[22..25]) + 1;
    let height = Endian::Little.u24(&window[25..28]) + 1;
    Dimensions::new(width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn riff(chunk: &[u8; 4], payload: &[u8]) -> Vec<u8> {
        let mut data = b"RIFF".to_vec();
        data.extend_from_slice(&((payload.len() + 12) as u32).to_le_bytes());
        data.extend_from_slice(b"WEBP");
        data.extend_from_slice(chunk);
        data.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        data.extend_from_slice(payload);
        data
    }

    fn run(data: Vec<u8>) -> Result<Dimensions> {
        let mut cursor = ByteCursor::new(Cursor::new(data)).unwrap();
        cursor.skip(2).unwrap();
        extract(&mut cursor)
    }

    #[test]
    fn test_extended() {
        let mut payload = vec![0x10, 0, 0, 0];
        payload.extend_from_slice(&639u32.to_le_bytes()[..3]);
        payload.extend_from_slice(&479u32.to_le_bytes()[..3]);
        assert_eq!(
            run(riff(b"VP8X", &payload)).unwrap(),
            Dimensions::new(640, 480)
        );
    }

    #[test]
    fn test_extended_24_bit_range() {
        let mut payload = vec![0, 0, 0, 0];
        payload.extend_from_slice(&0x01_2345u32.to_le_bytes()[..3]);
        payload.extend_from_slice(&0x00_FFFFu32.to_le_bytes()[..3]);
        assert_eq!(
            run(riff(b"VP8X", &payload)).unwrap(),
            Dimensions::new(0x01_2346, 0x01_0000)
        );
    }

    #[test]
    fn test_lossy() {
        let mut payload = vec![0x30, 0x01, 0x00];
        payload.extend_from_slice(&VP8_START_CODE);
        // scale bits set on both words
        payload.extend_from_slice(&(0x4000u16 | 400).to_le_bytes());
        payload.extend_from_slice(&(0xC000u16 | 300).to_le_bytes());
        payload.extend_from_slice(&[0u8; 4]);
        assert_eq!(
            run(riff(b"VP8 ", &payload)).unwrap(),
            Dimensions::new(400, 300)
        );
    }

    #[test]
    fn test_lossy_bad_start_code() {
        let mut payload = vec![0x30, 0x01, 0x00, 0x9D, 0x01, 0x2B];
        payload.extend_from_slice(&[0u8; 8]);
        assert!(!run(riff(b"VP8 ", &payload)).unwrap_err().is_fatal());
    }

    #[test]
    fn test_lossless() {
        let (w, h) = (1000u32 - 1, 700u32 - 1);
        let bits = w | (h << 14);
        let mut payload = vec![VP8L_SIGNATURE];
        payload.extend_from_slice(&bits.to_le_bytes());
        payload.extend_from_slice(&[0u8; 8]);
        assert_eq!(
            run(riff(b"VP8L", &payload)).unwrap(),
            Dimensions::new(1000, 700)
        );
    }

    #[test]
    fn test_lossless_bad_signature() {
        let mut payload = vec![0x2E];
        payload.extend_from_slice(&[0u8; 12]);
        assert!(!run(riff(b"VP8L", &payload)).unwrap_err().is_fatal());
    }

    #[test]
    fn test_unknown_chunk() {
        assert!(!run(riff(b"VP8Z", &[0u8; 16])).unwrap_err().is_fatal());
    }

    #[test]
    fn test_not_webp_form() {
        let mut data = riff(b"VP8X", &[0u8; 10]);
        data[8..12].copy_from_slice(b"WAVE");
        assert!(!run(data).unwrap_err().is_fatal());
    }

    #[test]
    fn test_short_extended_is_truncated() {
        let data = riff(b"VP8X", &[0u8; 6]);
        assert!(run(data).unwrap_err().is_fatal());
    }
}
