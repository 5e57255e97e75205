//! Hand-built image headers shared by the integration tests.

#![allow(dead_code)]

pub fn png(width: u32, height: u32) -> Vec<u8> {
    let mut data = b"\x89PNG\r\n\x1a\n".to_vec();
    data.extend_from_slice(&13u32.to_be_bytes());
    data.extend_from_slice(b"IHDR");
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&[8, 2, 0, 0, 0]);
    data.extend_from_slice(&[0x90, 0x77, 0x53, 0xDE]);
    data
}

pub fn bmp(info_size: i32, width: i32, height: i32) -> Vec<u8> {
    let mut data = b"BM".to_vec();
    data.extend_from_slice(&[0u8; 12]);
    data.extend_from_slice(&info_size.to_le_bytes());
    data.extend_from_slice(&width.to_le_bytes());
    data.extend_from_slice(&height.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes());
    data.extend_from_slice(&24u16.to_le_bytes());
    data.extend_from_slice(&[0u8; 24]);
    data
}

pub fn gif(width: u16, height: u16) -> Vec<u8> {
    let mut data = b"GIF89a".to_vec();
    data.extend_from_slice(&width.to_le_bytes());
    data.extend_from_slice(&height.to_le_bytes());
    data.extend_from_slice(&[0xF7, 0x00, 0x00]);
    data.extend_from_slice(&[0u8; 8]);
    data
}

pub fn jpeg(width: u16, height: u16) -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
    data.extend_from_slice(b"JFIF\x00\x01\x01\x00\x00\x01\x00\x01\x00\x00");
    data.extend_from_slice(&[0xFF, 0xDB, 0x00, 0x04, 0x00, 0x00]);
    data.extend_from_slice(&[0xFF, 0xC0, 0x00, 0x11, 0x08]);
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&[0x03, 0x01, 0x22, 0x00, 0x02, 0x11, 0x01, 0x03, 0x11, 0x01]);
    data.extend_from_slice(&[0xFF, 0xD9]);
    data
}

pub fn psd(width: u32, height: u32) -> Vec<u8> {
    let mut data = b"8BPS".to_vec();
    data.extend_from_slice(&1u16.to_be_bytes());
    data.extend_from_slice(&[0u8; 6]);
    data.extend_from_slice(&3u16.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&8u16.to_be_bytes());
    data.extend_from_slice(&3u16.to_be_bytes());
    data
}

pub fn wmf(left: i16, top: i16, right: i16, bottom: i16) -> Vec<u8> {
    let mut data = vec![0xD7, 0xCD, 0xC6, 0x9A];
    data.extend_from_slice(&[0u8; 6]);
    for v in [left, top, right, bottom] {
        data.extend_from_slice(&v.to_le_bytes());
    }
    data.extend_from_slice(&1440u16.to_le_bytes());
    data.extend_from_slice(&[0u8; 6]);
    data
}

pub fn emf(left: i32, top: i32, right: i32, bottom: i32) -> Vec<u8> {
    let mut data = 1u32.to_le_bytes().to_vec();
    data.extend_from_slice(&108u32.to_le_bytes());
    for v in [left, top, right, bottom] {
        data.extend_from_slice(&v.to_le_bytes());
    }
    data.extend_from_slice(&[0u8; 16]);
    data.extend_from_slice(b" EMF");
    data.extend_from_slice(&0x0001_0000u32.to_le_bytes());
    data
}

/// Little-endian TIFF whose first IFD holds `(tag, type, value)` entries.
pub fn tiff_le(entries: &[(u16, u16, u32)]) -> Vec<u8> {
    let mut data = b"II".to_vec();
    data.extend_from_slice(&42u16.to_le_bytes());
    data.extend_from_slice(&8u32.to_le_bytes());
    data.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    for &(tag, field_type, value) in entries {
        data.extend_from_slice(&tag.to_le_bytes());
        data.extend_from_slice(&field_type.to_le_bytes());
        data.extend_from_slice(&1u32.to_le_bytes());
        if field_type == 3 {
            data.extend_from_slice(&(value as u16).to_le_bytes());
            data.extend_from_slice(&[0, 0]);
        } else {
            data.extend_from_slice(&value.to_le_bytes());
        }
    }
    data.extend_from_slice(&0u32.to_le_bytes());
    data
}

/// Big-endian TIFF with width and length stored as LONG values.
pub fn tiff_be(width: u32, height: u32) -> Vec<u8> {
    let mut data = b"MM".to_vec();
    data.extend_from_slice(&42u16.to_be_bytes());
    data.extend_from_slice(&8u32.to_be_bytes());
    data.extend_from_slice(&2u16.to_be_bytes());
    for (tag, value) in [(0x100u16, width), (0x101u16, height)] {
        data.extend_from_slice(&tag.to_be_bytes());
        data.extend_from_slice(&4u16.to_be_bytes());
        data.extend_from_slice(&1u32.to_be_bytes());
        data.extend_from_slice(&value.to_be_bytes());
    }
    data.extend_from_slice(&0u32.to_be_bytes());
    data
}

pub fn webp(chunk: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut data = b"RIFF".to_vec();
    data.extend_from_slice(&((payload.len() + 12) as u32).to_le_bytes());
    data.extend_from_slice(b"WEBP");
    data.extend_from_slice(chunk);
    data.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    data.extend_from_slice(payload);
    data
}

/// VP8X canvas fields hold the size minus one.
pub fn webp_extended(width_minus_one: u32, height_minus_one: u32) -> Vec<u8> {
    let mut payload = vec![0x10, 0, 0, 0];
    payload.extend_from_slice(&width_minus_one.to_le_bytes()[..3]);
    payload.extend_from_slice(&height_minus_one.to_le_bytes()[..3]);
    webp(b"VP8X", &payload)
}

pub fn webp_lossy(width: u16, height: u16) -> Vec<u8> {
    let mut payload = vec![0x30, 0x01, 0x00, 0x9D, 0x01, 0x2A];
    payload.extend_from_slice(&width.to_le_bytes());
    payload.extend_from_slice(&height.to_le_bytes());
    webp(b"VP8 ", &payload)
}

pub fn webp_lossless(width: u32, height: u32) -> Vec<u8> {
    let bits = (width - 1) | ((height - 1) << 14);
    let mut payload = vec![0x2F];
    payload.extend_from_slice(&bits.to_le_bytes());
    webp(b"VP8L", &payload)
}

pub fn bmff_box(kind: &[u8; 4], body: &[u8]) -> Vec<u8> {
    let mut out = ((body.len() + 8) as u32).to_be_bytes().to_vec();
    out.extend_from_slice(kind);
    out.extend_from_slice(body);
    out
}

pub fn full_box(kind: &[u8; 4], body: &[u8]) -> Vec<u8> {
    let mut payload = vec![0u8; 4];
    payload.extend_from_slice(body);
    bmff_box(kind, &payload)
}

pub fn avif(width: u32, height: u32) -> Vec<u8> {
    let mut ispe = width.to_be_bytes().to_vec();
    ispe.extend_from_slice(&height.to_be_bytes());
    let ipco = bmff_box(b"ipco", &full_box(b"ispe", &ispe));
    let iprp = bmff_box(b"iprp", &ipco);

    let mut meta = full_box(b"hdlr", &[0u8; 20]);
    meta.extend_from_slice(&iprp);

    let mut data = bmff_box(b"ftyp", b"avif\x00\x00\x00\x00mif1miaf");
    data.extend_from_slice(&full_box(b"meta", &meta));
    data.extend_from_slice(&bmff_box(b"mdat", &[0u8; 16]));
    data
}

pub fn padded(words: usize, data: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; words * 2];
    out.extend_from_slice(data);
    out
}
