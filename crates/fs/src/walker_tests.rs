use super::*;

use std::fs::{self, create_dir, write};

use tempfile::TempDir;

use crate::get_files;

fn create_wide_tree(dirs: usize, files_per_dir: usize) -> TempDir {
    let tmp = TempDir::new().expect("create temp dir");
    let root = tmp.path();

    for d in 0..dirs {
        let dir = root.join(format!("dir{d:03}"));
        create_dir(&dir).expect("create dir");
        for f in 0..files_per_dir {
            write(dir.join(format!("file{f:03}.txt")), format!("{d}/{f}"))
                .expect("write file");
        }
    }

    tmp
}

#[test]
fn parallel_scan_matches_sequential_record_set() {
    let tmp = create_wide_tree(8, 5);

    let mut sequential = get_files(tmp.path()).expect("sequential scan");
    sequential.sort_by(|a, b| a.path.cmp(&b.path));

    // Several threads to exercise the queue handoff.
    let parallel = scan_parallel(tmp.path(), 4).expect("parallel scan");

    assert_eq!(parallel.len(), 40);
    let seq_paths: Vec<_> = sequential.iter().map(|r| (&r.path, r.size)).collect();
    let par_paths: Vec<_> = parallel.iter().map(|r| (&r.path, r.size)).collect();
    assert_eq!(seq_paths, par_paths);
}

#[test]
fn parallel_output_is_sorted_by_path() {
    let tmp = create_wide_tree(4, 4);

    let records = scan_parallel(tmp.path(), 3).expect("parallel scan");

    for pair in records.windows(2) {
        assert!(
            pair[0].path < pair[1].path,
            "{} should sort before {}",
            pair[0].path.display(),
            pair[1].path.display()
        );
    }
}

#[test]
fn single_thread_still_completes() {
    let tmp = create_wide_tree(3, 2);

    let records = scan_parallel(tmp.path(), 1).expect("parallel scan");
    assert_eq!(records.len(), 6);
}

#[test]
fn zero_threads_is_clamped() {
    let tmp = create_wide_tree(2, 2);

    let records = scan_parallel(tmp.path(), 0).expect("parallel scan");
    assert_eq!(records.len(), 4);
}

#[test]
fn file_root_yields_single_record() {
    let tmp = TempDir::new().expect("create temp dir");
    let file_path = tmp.path().join("solo.bin");
    write(&file_path, b"abc").expect("write file");

    let records = scan_parallel(&file_path, 4).expect("scan");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "solo.bin");
    assert_eq!(records[0].size, 3);
}

#[test]
fn nonexistent_root_is_not_found() {
    let tmp = TempDir::new().expect("create temp dir");
    let missing = tmp.path().join("gone");

    let err = scan_parallel(&missing, 4).expect_err("scan should fail");
    assert!(matches!(err, ScanError::NotFound { .. }));
}

#[cfg(unix)]
#[test]
fn unreadable_subdir_aborts_parallel_scan() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = create_wide_tree(6, 3);
    let locked = tmp.path().join("dir003");

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("chmod 000");

    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("chmod back");
        return;
    }

    let result = scan_parallel(tmp.path(), 4);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("chmod back");

    let err = result.expect_err("scan should fail, not return a partial list");
    match &err {
        ScanError::Traversal { path, .. } => assert_eq!(path, &locked),
        other => panic!("expected Traversal, got {other:?}"),
    }
}
