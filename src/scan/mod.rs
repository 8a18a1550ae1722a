//! Input directory enumeration.
//!
//! Walks the input tree and produces the ordered [`SourceFile`] list the
//! partitioner works from. Entries are visited in per-directory file-name
//! order so a given tree always enumerates (and therefore partitions) the
//! same way. Symlinks are skipped; only regular files become entries.

use crate::common::SourceFile;
use crate::SpanError;

use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Recursively collects all regular files under `input_dir`.
///
/// The entry name recorded for each file is the file's own name, not its
/// path relative to `input_dir`. Nested trees therefore produce flat entry
/// names inside the parts; see the crate documentation for why this is kept.
pub fn collect_source_files(input_dir: &Path) -> Result<Vec<SourceFile>, SpanError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(input_dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| input_dir.to_path_buf());
            SpanError::Io { source: e.into(), path }
        })?;

        if entry.file_type().is_symlink() || !entry.file_type().is_file() {
            continue;
        }

        let metadata = match entry.metadata() {
            Ok(md) => md,
            // The file vanished between the readdir and the stat; skip it.
            Err(e) if e.io_error().map(io::Error::kind) == Some(io::ErrorKind::NotFound) => {
                continue
            }
            Err(e) => {
                let path = entry.path().to_path_buf();
                return Err(SpanError::Io { source: e.into(), path });
            }
        };

        let relative_name = entry.file_name().to_string_lossy().into_owned();
        files.push(SourceFile {
            absolute_path: entry.path().to_path_buf(),
            relative_name,
            size: metadata.len(),
        });
    }

    Ok(files)
}
