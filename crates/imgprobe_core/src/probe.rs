use crate::cursor::ByteCursor;
use crate::error::{ProbeError, Result};
use crate::formats;
use crate::result::ProbeResult;
use crate::signature::{MIN_STREAM_LEN, Signature, read_lead};
use crate::types::{Dimensions, FormatTag};
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;
use tracing::debug;

/// Opens `path` read-only, probes it and closes it again.
pub fn probe_path(path: impl AsRef<Path>) -> Result<ProbeResult> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let result = probe(BufReader::new(file))?;
    debug!(path = %path.display(), format = %result.file_type(), "probed file");
    Ok(result)
}

/// Probes an in-memory buffer.
pub fn probe_bytes(data: &[u8]) -> Result<ProbeResult> {
    probe(Cursor::new(data))
}

/// Probes a stream from its first byte. Pass `&mut stream` to keep
/// ownership; the stream is left positioned wherever probing stopped.
///
/// Streams that are not a recognizable image come back as
/// [`FormatTag::Unknown`]. Only I/O failures are returned as errors.
pub fn probe<R: Read + Seek>(stream: R) -> Result<ProbeResult> {
    let mut cursor = ByteCursor::new(stream)?;
    let file_size = cursor.stream_len();

    match detect(&mut cursor) {
        Ok((format, dimensions)) => Ok(ProbeResult::recognized(
            format,
            dimensions,
            file_size,
            cursor.blank_header_len(),
        )),
        Err(e) if !e.is_fatal() => {
            debug!(error = %e, file_size, "not a recognized image");
            Ok(ProbeResult::unknown(file_size, cursor.blank_header_len()))
        }
        Err(e) => Err(e),
    }
}

fn detect<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<(FormatTag, Dimensions)> {
    if cursor.stream_len() < MIN_STREAM_LEN {
        return Err(ProbeError::TooSmall { len: cursor.stream_len() });
    }

    let lead = read_lead(cursor)?;

    let Some(signature) = Signature::from_magic(lead.word) else {
        let ftyp_size = formats::avif::detect_ftyp(cursor, lead)?;
        let dimensions = formats::avif::extract(cursor, ftyp_size)?;
        return Ok((FormatTag::Avif, dimensions));
    };

    let dimensions = match signature {
        Signature::Bmp => formats::bmp::extract(cursor),
        Signature::Jpeg => formats::jpeg::extract(cursor),
        Signature::Gif => formats::gif::extract(cursor),
        Signature::Png => formats::png::extract(cursor),
        Signature::Psd => formats::psd::extract(cursor),
        Signature::Wmf => formats::wmf::extract(cursor),
        Signature::Emf => formats::emf::extract(cursor),
        Signature::Tiff(endian) => formats::tiff::extract(cursor, endian),
        Signature::Webp => formats::webp::extract(cursor),
    }?;

    Ok((signature.format(), dimensions))
}
