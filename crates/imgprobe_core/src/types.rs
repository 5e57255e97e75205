use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatTag {
    #[default]
    Unknown,
    Bmp,
    Jpeg,
    Gif,
    Png,
    Psd,
    Wmf,
    Emf,
    Tiff,
    Webp,
    Avif,
}

impl FormatTag {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Bmp => "BMP",
            Self::Jpeg => "JPEG",
            Self::Gif => "GIF",
            Self::Png => "PNG",
            Self::Psd => "PSD",
            Self::Wmf => "WMF",
            Self::Emf => "EMF",
            Self::Tiff => "TIFF",
            Self::Webp => "WebP",
            Self::Avif => "AVIF",
        }
    }

    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Unknown => "bin",
            Self::Bmp => "bmp",
            Self::Jpeg => "jpg",
            Self::Gif => "gif",
            Self::Png => "png",
            Self::Psd => "psd",
            Self::Wmf => "wmf",
            Self::Emf => "emf",
            Self::Tiff => "tiff",
            Self::Webp => "webp",
            Self::Avif => "avif",
        }
    }

    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Unknown => "application/octet-stream",
            Self::Bmp => "image/bmp",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Png => "image/png",
            Self::Psd => "image/vnd.adobe.photoshop",
            Self::Wmf => "image/wmf",
            Self::Emf => "image/emf",
            Self::Tiff => "image/tiff",
            Self::Webp => "image/webp",
            Self::Avif => "image/avif",
        }
    }

    /// Vector metafiles, whose size is a logical bounding box rather than
    /// a pixel grid.
    #[must_use]
    pub const fn is_meta(&self) -> bool {
        matches!(self, Self::Wmf | Self::Emf)
    }
}

impl std::fmt::Display for FormatTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Width and height as read from a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}
