use crate::types::{Dimensions, FormatTag};
use serde::Serialize;

/// Outcome of one probe. Built once by the prober and never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    width: u32,
    height: u32,
    file_size: u64,
    file_type: FormatTag,
    blank_header_len: u32,
    is_meta_image: bool,
}

impl ProbeResult {
    pub(crate) fn recognized(
        file_type: FormatTag,
        dimensions: Dimensions,
        file_size: u64,
        blank_header_len: u64,
    ) -> Self {
        Self {
            width: dimensions.width,
            height: dimensions.height,
            file_size,
            file_type,
            blank_header_len: blank_header_len as u32,
            is_meta_image: file_type.is_meta(),
        }
    }

    pub(crate) fn unknown(file_size: u64, blank_header_len: u64) -> Self {
        Self::recognized(
            FormatTag::Unknown,
            Dimensions::default(),
            file_size,
            blank_header_len,
        )
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// Total stream length in bytes.
    #[inline]
    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    #[inline]
    pub fn file_type(&self) -> FormatTag {
        self.file_type
    }

    /// Zero bytes skipped before the signature.
    #[inline]
    pub fn blank_header_len(&self) -> u32 {
        self.blank_header_len
    }

    /// True for WMF and EMF, whose size is a logical bounding box.
    #[inline]
    pub fn is_meta_image(&self) -> bool {
        self.is_meta_image
    }

    #[inline]
    pub fn is_known(&self) -> bool {
        self.file_type != FormatTag::Unknown
    }
}
