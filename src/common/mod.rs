//! Common types and constants module.
// Shared structs for the split pipeline.

use std::path::PathBuf;

/// One megabyte; all CLI sizes are given in MB and converted with this.
pub const MB: u64 = 1024 * 1024;

/// A single regular file discovered under the input directory.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Absolute path used to open the file for compression.
    pub absolute_path: PathBuf,
    /// Entry name inside the part archive. This is the file's own name
    /// (relative to its containing directory, not the input root), so nested
    /// trees produce flat entry names. Collisions are possible and kept.
    pub relative_name: String,
    /// Uncompressed size in bytes, as reported by the filesystem at scan time.
    pub size: u64,
}

/// Size configuration for a whole run, constant across parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartBudget {
    /// Maximum cumulative uncompressed input size per part. A single file
    /// larger than this still gets its own (oversized) part.
    pub max_part_bytes: u64,
    /// If available system memory is above this, a part is staged in memory;
    /// otherwise on disk.
    pub memory_threshold_bytes: u64,
}

/// The finished archive file for one part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifact {
    pub part_index: usize,
    pub path: PathBuf,
}
