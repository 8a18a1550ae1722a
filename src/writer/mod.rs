//! Final part flushing.
//!
//! Copies a finished staging buffer into its numbered output file
//! (`archive_partNNN.zip`) and releases the buffer. The output directory is
//! created by the pipeline before the first part is written.

use crate::buffer::PartBuffer;
use crate::common::OutputArtifact;
use crate::SpanError;

use std::fs::File;
use std::io::{self, Seek};
use std::path::Path;

/// Flushes `buffer` to `output_dir/archive_part{NNN}.zip` and disposes it.
///
/// The buffer is streamed with `io::copy` rather than read into memory, since
/// a disk-staged part can be as large as the Blu-ray budget. The buffer is
/// disposed on the error path too, before the failure propagates.
pub fn write_part(
    part_index: usize,
    mut buffer: PartBuffer,
    output_dir: &Path,
) -> Result<OutputArtifact, SpanError> {
    let path = output_dir.join(format!("archive_part{part_index:03}.zip"));

    if let Err(e) = flush(&mut buffer, &path) {
        let _ = buffer.dispose();
        return Err(e);
    }
    // A dispose failure concerns the staging temp file, not the part that
    // was just written.
    buffer
        .dispose()
        .map_err(|e| SpanError::Io { source: e, path: std::env::temp_dir() })?;

    Ok(OutputArtifact { part_index, path })
}

fn flush(buffer: &mut PartBuffer, path: &Path) -> Result<(), SpanError> {
    buffer
        .rewind()
        .map_err(|e| SpanError::Io { source: e, path: path.to_path_buf() })?;
    let mut output = File::create(path).map_err(|e| SpanError::Io {
        source: e,
        path: path.to_path_buf(),
    })?;
    io::copy(buffer, &mut output).map_err(|e| SpanError::Io {
        source: e,
        path: path.to_path_buf(),
    })?;
    Ok(())
}
