//! # Split Pipeline
//!
//! This module drives the whole run: enumerate the input tree, plan the
//! parts, then build them strictly one at a time. Per part it asks the
//! [`BufferSelector`] for a staging buffer (the memory check happens here,
//! once per part), compresses the part's files into it, and flushes the
//! result to its numbered output file. No buffer outlives its part, and no
//! two buffers exist at once.

use crate::buffer::BufferSelector;
use crate::common::{OutputArtifact, PartBudget, MB};
use crate::{archive, partition, scan, writer, SpanError};

use std::fs;
use std::path::PathBuf;

/// Everything a run needs: where to read, where to write, and the sizes.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub budget: PartBudget,
}

/// Runs a full split and returns the ordered output artifacts.
///
/// The output directory is created first so it exists before any part is
/// written. An input tree with zero files completes successfully with zero
/// parts. Any I/O or compression failure aborts the run; the buffer open at
/// that moment is still released (explicitly in the writer, via the temp
/// file's drop guard elsewhere).
pub fn run(
    config: &SplitConfig,
    selector: &BufferSelector,
) -> Result<Vec<OutputArtifact>, SpanError> {
    fs::create_dir_all(&config.output).map_err(|e| SpanError::Io {
        source: e,
        path: config.output.clone(),
    })?;

    let files = scan::collect_source_files(&config.input)?;
    let plan = partition::plan(&files, config.budget.max_part_bytes);

    let mut artifacts = Vec::with_capacity(plan.len());
    for (part_index, group) in plan.iter().enumerate() {
        let input_bytes: u64 = group.iter().map(|f| f.size).sum();

        let buffer = selector.select(config.budget.memory_threshold_bytes)?;
        println!(
            "[part {part_index:03}] staging in {} ({} file(s), {} MB input)",
            buffer.kind(),
            group.len(),
            input_bytes / MB
        );

        let built = archive::build_part(group, buffer)?;
        let artifact = writer::write_part(part_index, built, &config.output)?;
        println!("[part {part_index:03}] wrote {}", artifact.path.display());
        artifacts.push(artifact);
    }

    let total_input: u64 = files.iter().map(|f| f.size).sum();
    println!(
        "Done: {} part(s) from {} file(s), {} MB input total",
        artifacts.len(),
        files.len(),
        total_input / MB
    );
    Ok(artifacts)
}
