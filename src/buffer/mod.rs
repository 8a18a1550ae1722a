//! Part staging buffers.
//!
//! While a part is being compressed its bytes live in a [`PartBuffer`],
//! which is either an in-memory growable buffer or a uniquely-named
//! temporary file. [`BufferSelector`] picks the variant per part by
//! comparing available system memory against the configured threshold —
//! once per part, not once per run, since available memory drifts over a
//! long job. The memory reading is best-effort: if it cannot be obtained,
//! the selector falls back to the disk variant.

use crate::SpanError;

use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};
use sysinfo::System;
use tempfile::NamedTempFile;

/// A writable-then-readable staging area for one part's compressed bytes.
///
/// Exactly one buffer exists at a time; it is created right before a part's
/// entries are compressed and disposed right after the part is flushed to
/// its final output file. The disk variant's temp file is additionally
/// removed by `NamedTempFile`'s drop guard on early-error paths, so no exit
/// path leaks it (short of the process being killed outright).
#[derive(Debug)]
pub enum PartBuffer {
    Memory(Cursor<Vec<u8>>),
    Disk(NamedTempFile),
}

impl PartBuffer {
    /// Creates the in-memory variant.
    pub fn memory() -> Self {
        PartBuffer::Memory(Cursor::new(Vec::new()))
    }

    /// Creates the disk variant backed by a fresh uniquely-named temp file
    /// in the platform temp directory, open for read+write.
    pub fn disk() -> Result<Self, SpanError> {
        let tmp = NamedTempFile::new().map_err(|e| SpanError::Io {
            source: e,
            path: std::env::temp_dir(),
        })?;
        Ok(PartBuffer::Disk(tmp))
    }

    /// Human-readable variant name for status lines.
    pub fn kind(&self) -> &'static str {
        match self {
            PartBuffer::Memory(_) => "memory",
            PartBuffer::Disk(_) => "disk",
        }
    }

    /// Rewinds to offset 0 and returns the full buffer contents.
    pub fn read_all(&mut self) -> io::Result<Vec<u8>> {
        self.rewind()?;
        let mut contents = Vec::new();
        self.read_to_end(&mut contents)?;
        Ok(contents)
    }

    /// Releases the buffer. For the disk variant this closes the handle and
    /// deletes the temp file; a file that is already gone is a no-op, not an
    /// error.
    pub fn dispose(self) -> io::Result<()> {
        match self {
            PartBuffer::Memory(_) => Ok(()),
            PartBuffer::Disk(tmp) => match tmp.close() {
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
                other => other,
            },
        }
    }
}

impl Write for PartBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            PartBuffer::Memory(cursor) => cursor.write(buf),
            PartBuffer::Disk(tmp) => tmp.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            PartBuffer::Memory(cursor) => cursor.flush(),
            PartBuffer::Disk(tmp) => tmp.flush(),
        }
    }
}

impl Read for PartBuffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            PartBuffer::Memory(cursor) => cursor.read(buf),
            PartBuffer::Disk(tmp) => tmp.read(buf),
        }
    }
}

impl Seek for PartBuffer {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match self {
            PartBuffer::Memory(cursor) => cursor.seek(pos),
            PartBuffer::Disk(tmp) => tmp.seek(pos),
        }
    }
}

/// A callable returning the current available system memory in bytes, or
/// `None` when the reading cannot be obtained.
pub type MemoryProbe = Box<dyn Fn() -> Option<u64>>;

/// Decides, per part, whether to stage in memory or on disk.
pub struct BufferSelector {
    probe: MemoryProbe,
}

impl BufferSelector {
    /// Selector backed by the real system memory reading.
    pub fn new() -> Self {
        Self::with_probe(Box::new(system_available_memory))
    }

    /// Selector with a caller-supplied probe. Tests use this to make the
    /// memory/disk decision deterministic.
    pub fn with_probe(probe: MemoryProbe) -> Self {
        BufferSelector { probe }
    }

    /// Picks a buffer for the next part: memory if the probe reports more
    /// available memory than `memory_threshold_bytes`, disk otherwise —
    /// including when the probe fails, which is the conservative choice.
    pub fn select(&self, memory_threshold_bytes: u64) -> Result<PartBuffer, SpanError> {
        match (self.probe)() {
            Some(available) if available > memory_threshold_bytes => Ok(PartBuffer::memory()),
            _ => PartBuffer::disk(),
        }
    }
}

impl Default for BufferSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Best-effort available-memory query via `sysinfo`. The value is inherently
/// racy against the true system state; callers treat it as approximate.
fn system_available_memory() -> Option<u64> {
    let mut system = System::new();
    system.refresh_memory();
    let available = system.available_memory();
    (available > 0).then_some(available)
}
