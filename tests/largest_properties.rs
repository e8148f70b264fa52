//! Library-level checks of the largest-files contract on generated trees

use bigfiles::scanner::{find_largest_files, ScanOptions, MAX_TOP_N};
use bigfiles::ScanError;
use std::fs;
use tempfile::TempDir;

/// 3 directories x 40 files with distinct sizes, 120 files total
fn create_tree() -> (TempDir, Vec<u64>) {
    let dir = TempDir::new().unwrap();
    let mut sizes = Vec::new();

    for d in 0..3u64 {
        let sub = dir.path().join(format!("d{}", d));
        fs::create_dir(&sub).unwrap();
        for f in 0..40u64 {
            let size = (d * 40 + f) * 13 % 1021 + 1;
            fs::write(sub.join(format!("f{}.bin", f)), vec![0u8; size as usize]).unwrap();
            sizes.push(size);
        }
    }

    sizes.sort_unstable_by(|a, b| b.cmp(a));
    (dir, sizes)
}

#[test]
fn result_length_is_min_of_top_n_and_file_count() {
    let (dir, sizes) = create_tree();

    for top_n in [1, 7, 50, 100] {
        let options = ScanOptions::new().with_top_n(top_n);
        let result = find_largest_files(dir.path(), &options, None).unwrap();
        assert_eq!(result.entries.len(), top_n.min(sizes.len()));
    }
}

#[test]
fn result_matches_full_sort() {
    let (dir, sizes) = create_tree();

    let options = ScanOptions::new().with_top_n(MAX_TOP_N);
    let result = find_largest_files(dir.path(), &options, None).unwrap();

    let got: Vec<u64> = result.entries.iter().map(|e| e.size).collect();
    assert_eq!(got, sizes[..MAX_TOP_N].to_vec());
    assert_eq!(result.stats.files_scanned, 120);
}

#[test]
fn largest_file_always_present() {
    let (dir, sizes) = create_tree();

    let result = find_largest_files(dir.path(), &ScanOptions::new().with_top_n(1), None).unwrap();
    assert_eq!(result.entries[0].size, sizes[0]);

    let again = find_largest_files(dir.path(), &ScanOptions::new().with_top_n(1), None).unwrap();
    assert_eq!(result.entries, again.entries);
}

#[test]
fn boundary_top_n_values() {
    let (dir, _) = create_tree();

    for ok in [1, 100] {
        assert!(find_largest_files(dir.path(), &ScanOptions::new().with_top_n(ok), None).is_ok());
    }
    for bad in [0, 101] {
        let err = find_largest_files(dir.path(), &ScanOptions::new().with_top_n(bad), None);
        assert!(matches!(err, Err(ScanError::InvalidArgument(_))));
    }
}
