//! Header-only image probing.
//!
//! Reads just enough of a BMP, JPEG, GIF, PNG, PSD, WMF, EMF, TIFF, WebP or
//! AVIF stream to report its format and pixel dimensions, without decoding
//! any image data.
//!
//! ```no_run
//! let result = imgprobe_core::probe_path("photo.jpg")?;
//! println!("{} {}x{}", result.file_type(), result.width(), result.height());
//! # Ok::<(), imgprobe_core::ProbeError>(())
//! ```

pub mod bmff;
pub mod cursor;
mod error;
pub mod formats;
mod probe;
mod result;
pub mod signature;
mod types;

pub use cursor::{ByteCursor, Endian};
pub use error::{ProbeError, Result};
pub use probe::{probe, probe_bytes, probe_path};
pub use result::ProbeResult;
pub use types::{Dimensions, FormatTag};
