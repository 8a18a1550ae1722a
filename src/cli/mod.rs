use clap::Parser;
use std::path::PathBuf;

use crate::common::{PartBudget, MB};
use crate::split::SplitConfig;

/// Media preset capacities, in MB.
const CD_CAPACITY_MB: u64 = 700;
const DVD_CAPACITY_MB: u64 = 4700;
const BLURAY_CAPACITY_MB: u64 = 25_000;

const DEFAULT_PARTSIZE_MB: u64 = 100;
const DEFAULT_THRESHOLD_MB: u64 = 100;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The directory whose contents will be split into archive parts.
    #[arg(long)]
    pub input: PathBuf,

    /// The directory the numbered parts are written to. Created if missing.
    #[arg(long)]
    pub output: PathBuf,

    /// Maximum uncompressed input size per part, in MB. [default: 100]
    #[arg(long)]
    pub partsize: Option<u64>,

    /// Stage a part in memory when available system memory exceeds this many
    /// MB; otherwise spill it to a temp file. [default: 100]
    #[arg(long)]
    pub threshold: Option<u64>,

    /// CD preset: clamp partsize to 700 MB and set the threshold to 700 MB.
    #[arg(long, group = "preset")]
    pub cd: bool,

    /// DVD preset: clamp partsize to 4700 MB and set the threshold to 4700 MB.
    #[arg(long, group = "preset")]
    pub dvd: bool,

    /// Blu-ray preset: clamp partsize to 25000 MB and set the threshold to 25000 MB.
    #[arg(long, group = "preset")]
    pub bluray: bool,
}

impl Args {
    fn preset_capacity_mb(&self) -> Option<u64> {
        if self.cd {
            Some(CD_CAPACITY_MB)
        } else if self.dvd {
            Some(DVD_CAPACITY_MB)
        } else if self.bluray {
            Some(BLURAY_CAPACITY_MB)
        } else {
            None
        }
    }

    /// Resolves the flags into a run configuration.
    ///
    /// Resolution is order-independent. A preset sets partsize to its
    /// capacity when `--partsize` was not given, and clamps an explicit
    /// `--partsize` to the capacity otherwise; the threshold follows the
    /// same rule (preset value unless `--threshold` was given). The three
    /// preset flags are mutually exclusive.
    pub fn resolve(&self) -> SplitConfig {
        let mut partsize_mb = self.partsize.unwrap_or(DEFAULT_PARTSIZE_MB);
        let mut threshold_mb = self.threshold.unwrap_or(DEFAULT_THRESHOLD_MB);

        if let Some(capacity_mb) = self.preset_capacity_mb() {
            partsize_mb = match self.partsize {
                Some(explicit_mb) => explicit_mb.min(capacity_mb),
                None => capacity_mb,
            };
            if self.threshold.is_none() {
                threshold_mb = capacity_mb;
            }
        }

        SplitConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            budget: PartBudget {
                max_part_bytes: partsize_mb * MB,
                memory_threshold_bytes: threshold_mb * MB,
            },
        }
    }
}

/// Parses command-line arguments using `clap` and returns the resolved run
/// configuration.
///
/// This is the main entry point for the CLI logic. Missing required flags
/// make clap print usage and exit before this returns.
pub fn run() -> Result<SplitConfig, Box<dyn std::error::Error>> {
    let args = Args::parse();
    Ok(args.resolve())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        let mut full = vec!["zipspan", "--input", "/in", "--output", "/out"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn defaults_are_100_mb_each() {
        let config = parse(&[]).resolve();
        assert_eq!(config.budget.max_part_bytes, 100 * MB);
        assert_eq!(config.budget.memory_threshold_bytes, 100 * MB);
    }

    #[test]
    fn explicit_sizes_convert_mb_to_bytes() {
        let config = parse(&["--partsize", "250", "--threshold", "64"]).resolve();
        assert_eq!(config.budget.max_part_bytes, 250 * 1024 * 1024);
        assert_eq!(config.budget.memory_threshold_bytes, 64 * 1024 * 1024);
    }

    #[test]
    fn cd_preset_sets_threshold_and_clamps_partsize() {
        let config = parse(&["--cd"]).resolve();
        assert_eq!(config.budget.max_part_bytes, 700 * MB);
        assert_eq!(config.budget.memory_threshold_bytes, 700 * MB);
    }

    #[test]
    fn preset_clamp_beats_explicit_partsize_regardless_of_order() {
        let before = parse(&["--partsize", "1000", "--cd"]).resolve();
        let after = parse(&["--cd", "--partsize", "1000"]).resolve();
        assert_eq!(before.budget.max_part_bytes, 700 * MB);
        assert_eq!(after.budget.max_part_bytes, 700 * MB);
    }

    #[test]
    fn explicit_partsize_below_capacity_survives_a_preset() {
        let config = parse(&["--dvd", "--partsize", "1000"]).resolve();
        assert_eq!(config.budget.max_part_bytes, 1000 * MB);
        assert_eq!(config.budget.memory_threshold_bytes, 4700 * MB);
    }

    #[test]
    fn explicit_threshold_overrides_a_preset() {
        let config = parse(&["--bluray", "--threshold", "512"]).resolve();
        assert_eq!(config.budget.max_part_bytes, 25_000 * MB);
        assert_eq!(config.budget.memory_threshold_bytes, 512 * MB);
    }

    #[test]
    fn preset_alone_fills_the_medium() {
        let config = parse(&["--dvd"]).resolve();
        assert_eq!(config.budget.max_part_bytes, 4700 * MB);
        assert_eq!(config.budget.memory_threshold_bytes, 4700 * MB);
    }

    #[test]
    fn presets_are_mutually_exclusive() {
        let result = Args::try_parse_from([
            "zipspan", "--input", "/in", "--output", "/out", "--cd", "--dvd",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_required_flags_fail_parsing() {
        assert!(Args::try_parse_from(["zipspan", "--input", "/in"]).is_err());
    }
}
