//! Part archive construction.
//!
//! Compresses one planned group of files into a staging buffer as a zip
//! stream. Entries are written in input order under their flat entry names;
//! duplicate names are not deduplicated. Deflate is run at its maximum
//! level — output size matters more than speed when the target is
//! removable media.

use crate::buffer::PartBuffer;
use crate::common::SourceFile;
use crate::SpanError;

use std::fs::File;
use std::io;
use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

/// Compresses `files` into `buffer`, one zip entry per file, and returns the
/// buffer holding the finished archive bytes.
///
/// A failure on any entry aborts the part. The buffer is owned by the zip
/// writer for the duration of the build, so on the error path it is dropped
/// here and a disk-backed buffer's temp file is removed by its drop guard.
pub fn build_part(files: &[SourceFile], buffer: PartBuffer) -> Result<PartBuffer, SpanError> {
    let mut zip = ZipWriter::new(buffer);
    // large_file: a single entry can exceed 4 GiB under the DVD/BD budgets.
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(9))
        .large_file(true);

    for file in files {
        zip.start_file(file.relative_name.as_str(), options)?;

        let mut source = File::open(&file.absolute_path).map_err(|e| SpanError::Io {
            source: e,
            path: file.absolute_path.clone(),
        })?;
        io::copy(&mut source, &mut zip).map_err(|e| SpanError::Io {
            source: e,
            path: file.absolute_path.clone(),
        })?;
    }

    let buffer = zip.finish()?;
    Ok(buffer)
}
