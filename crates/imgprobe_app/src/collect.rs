use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Files gathered from the command line, plus how many directory entries
/// could not be read.
#[derive(Debug, Default)]
pub struct Collected {
    pub files: Vec<PathBuf>,
    pub walk_errors: usize,
}

/// Expands `paths` into a sorted list of files. Directories are walked only
/// when `recursive` is set and skipped with a warning otherwise. Paths that
/// do not exist are kept so the probe reports them as failures.
pub fn collect_files(paths: &[PathBuf], recursive: bool) -> Collected {
    let mut collected = Collected::default();

    for path in paths {
        if !path.is_dir() {
            collected.files.push(path.clone());
            continue;
        }

        if !recursive {
            warn!(path = %path.display(), "skipping directory (use --recursive)");
            continue;
        }

        walk(path, &mut collected);
    }

    collected
}

fn walk(root: &Path, collected: &mut Collected) {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(true) {
        match entry {
            Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
            Ok(_) => {}
            Err(e) => {
                warn!(root = %root.display(), error = %e, "failed to read directory entry");
                collected.walk_errors += 1;
            }
        }
    }

    files.sort();
    collected.files.extend(files);
}
