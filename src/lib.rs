//! # zipspan Core Library
//!
//! This crate provides the core functionality for the `zipspan` command-line tool.
//!
//! `zipspan` partitions the contents of a directory tree into a sequence of
//! size-bounded zip archive parts (sized for CD/DVD/Blu-ray capacities), and
//! decides per part whether to stage the compressed bytes in memory or in a
//! temporary file, depending on available system memory.
//!
//! It is designed to be used by the `zipspan` binary, but the public API can
//! also be used programmatically via [`split::run`].
//!
//! ## Key Modules
//!
//! - [`scan`]: Recursive enumeration of the input directory.
//! - [`partition`]: Greedy grouping of files into size-bounded parts.
//! - [`buffer`]: The memory/disk staging buffer and the selector that picks one.
//! - [`archive`]: Compresses one part's files into a staging buffer.
//! - [`writer`]: Flushes a finished buffer to its numbered output file.
//! - [`split`]: The sequential pipeline driving all of the above.

pub mod cli;
pub mod common;

pub mod scan;
pub mod partition;
pub mod buffer;
pub mod archive;
pub mod writer;
pub mod split;

pub mod error;
pub use error::SpanError;
