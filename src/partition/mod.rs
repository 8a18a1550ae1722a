//! Greedy part planning.
//!
//! Groups the ordered file list into parts whose cumulative uncompressed
//! input size stays within the configured budget. Files are taken strictly
//! in enumeration order; there is no sorting or repacking. The budget bounds
//! input sizes only — zip header/footer overhead and the compressed output
//! size are accepted slack on top of it.

use crate::common::SourceFile;

/// Plans the parts for one run.
///
/// Single greedy pass: a file that would push the current group past
/// `max_part_bytes` closes that group and starts a new one. A single file
/// larger than the budget is never rejected or split — it gets a group of
/// its own whose total is allowed to exceed the budget. Zero input files
/// yield zero groups.
pub fn plan(files: &[SourceFile], max_part_bytes: u64) -> Vec<Vec<SourceFile>> {
    let mut groups = Vec::new();
    if files.is_empty() {
        return groups;
    }

    let mut current_group: Vec<SourceFile> = Vec::new();
    let mut current_size: u64 = 0;

    for file in files {
        if !current_group.is_empty() && current_size + file.size > max_part_bytes {
            groups.push(current_group);
            current_group = Vec::new();
            current_size = 0;
        }

        current_size += file.size;
        current_group.push(file.clone());
    }

    if !current_group.is_empty() {
        groups.push(current_group);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::MB;
    use std::path::PathBuf;

    fn file(name: &str, size: u64) -> SourceFile {
        SourceFile {
            absolute_path: PathBuf::from(format!("/in/{name}")),
            relative_name: name.to_string(),
            size,
        }
    }

    fn sizes(groups: &[Vec<SourceFile>]) -> Vec<Vec<u64>> {
        groups
            .iter()
            .map(|g| g.iter().map(|f| f.size).collect())
            .collect()
    }

    #[test]
    fn example_40_40_40_at_100() {
        let files = vec![file("a", 40 * MB), file("b", 40 * MB), file("c", 40 * MB)];
        let groups = plan(&files, 100 * MB);
        assert_eq!(sizes(&groups), vec![vec![40 * MB, 40 * MB], vec![40 * MB]]);
    }

    #[test]
    fn oversized_file_gets_its_own_group() {
        let files = vec![file("small", 10 * MB), file("huge", 150 * MB), file("tail", 10 * MB)];
        let groups = plan(&files, 100 * MB);
        assert_eq!(sizes(&groups), vec![vec![10 * MB], vec![150 * MB], vec![10 * MB]]);
        // The oversized group is allowed to exceed the budget.
        assert!(groups[1].iter().map(|f| f.size).sum::<u64>() > 100 * MB);
    }

    #[test]
    fn lone_oversized_file_is_a_single_group() {
        let files = vec![file("huge", 150 * MB)];
        let groups = plan(&files, 100 * MB);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 1);
    }

    #[test]
    fn empty_input_yields_zero_groups() {
        assert!(plan(&[], 100 * MB).is_empty());
    }

    #[test]
    fn exact_fit_stays_in_one_group() {
        let files = vec![file("a", 60 * MB), file("b", 40 * MB)];
        let groups = plan(&files, 100 * MB);
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn conservation_and_order_are_preserved() {
        let files: Vec<SourceFile> = (0..37u64)
            .map(|i| file(&format!("f{i:02}"), (i % 7 + 1) * 13 * MB))
            .collect();
        let groups = plan(&files, 100 * MB);

        // Every file appears exactly once, in the original order.
        let flattened: Vec<String> = groups
            .iter()
            .flatten()
            .map(|f| f.relative_name.clone())
            .collect();
        let original: Vec<String> = files.iter().map(|f| f.relative_name.clone()).collect();
        assert_eq!(flattened, original);

        // Every multi-file group respects the budget.
        for group in &groups {
            let total: u64 = group.iter().map(|f| f.size).sum();
            if group.len() > 1 {
                assert!(total <= 100 * MB, "group of {} files totals {total}", group.len());
            }
        }
    }

    #[test]
    fn zero_byte_files_do_not_open_new_groups() {
        let files = vec![file("a", 100 * MB), file("empty", 0), file("b", 1)];
        let groups = plan(&files, 100 * MB);
        // The empty file still fits into the full first group.
        assert_eq!(sizes(&groups), vec![vec![100 * MB, 0], vec![1]]);
    }
}
