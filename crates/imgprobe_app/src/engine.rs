use anyhow::{Context, Result};
use humansize::{BINARY, format_size};
use imgprobe_core::{ProbeResult, probe_path};
use rayon::prelude::*;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::options::ProbeOptions;

/// Counters for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub recognized: usize,
    pub unknown: usize,
    pub failed: usize,
}

#[derive(Serialize)]
struct Record<'a> {
    path: String,
    mime_type: &'static str,
    extension: &'static str,
    #[serde(flatten)]
    result: &'a ProbeResult,
}

/// Probes every file on a dedicated rayon pool and writes one line per
/// result to `out`, in input order.
pub fn run_probe<W: Write>(
    files: &[PathBuf],
    options: &ProbeOptions,
    out: &mut W,
) -> Result<Summary> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.jobs)
        .build()
        .context("Failed to build worker pool")?;

    debug!(files = files.len(), threads = pool.current_num_threads(), "probing");

    let results: Vec<_> = pool.install(|| files.par_iter().map(probe_path).collect());

    let mut summary = Summary::default();
    for (path, result) in files.iter().zip(results) {
        let result = match result {
            Ok(result) => result,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "probe failed");
                summary.failed += 1;
                continue;
            }
        };

        if result.is_known() {
            summary.recognized += 1;
        } else {
            summary.unknown += 1;
            if options.known_only {
                continue;
            }
        }

        if options.json {
            let record = Record {
                path: path.to_string_lossy().into_owned(),
                mime_type: result.file_type().mime_type(),
                extension: result.file_type().extension(),
                result: &result,
            };
            serde_json::to_writer(&mut *out, &record).context("Failed to encode result")?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", text_line(path, &result))?;
        }
    }

    out.flush()?;
    Ok(summary)
}

pub fn text_line(path: &Path, result: &ProbeResult) -> String {
    let mut line = format!(
        "{}  {}  {}x{}  {}",
        path.display(),
        result.file_type(),
        result.width(),
        result.height(),
        format_size(result.file_size(), BINARY)
    );
    if result.blank_header_len() > 0 {
        line.push_str(&format!("  blank={}", result.blank_header_len()));
    }
    if result.is_meta_image() {
        line.push_str("  meta");
    }
    line
}
