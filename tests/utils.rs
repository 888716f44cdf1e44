use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Root of a named fixture case under `tests/fixtures`.
pub fn fixture(case: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(case)
}

/// Copies the `input` tree of a fixture case into a fresh temporary directory.
///
/// # Arguments
/// * `case` - Name of the fixture case.
pub fn copy_input(case: &str) -> tempfile::TempDir {
    let source = fixture(case).join("input");
    let tmp_dir = tempfile::tempdir().unwrap();
    for entry in WalkDir::new(&source).into_iter().filter_map(Result::ok) {
        let rel = entry.path().strip_prefix(&source).unwrap();
        let target = tmp_dir.path().join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
    tmp_dir
}

/// Prints a diff of files and their contents between two directories.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let collect = |dir: &Path| -> std::collections::BTreeSet<PathBuf> {
        WalkDir::new(dir)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
            .collect()
    };
    let files1 = collect(dir1);
    let files2 = collect(dir2);

    println!("\n=== Directory Comparison ===");
    for file in files1.difference(&files2) {
        println!("  + {:?}", file);
    }
    for file in files2.difference(&files1) {
        println!("  - {:?}", file);
    }
    for file in files1.intersection(&files2) {
        let actual = fs::read_to_string(dir1.join(file)).unwrap_or_default();
        let expected = fs::read_to_string(dir2.join(file)).unwrap_or_default();
        if actual != expected {
            println!("\n  File: {:?}", file);
            println!("  --- Actual content:\n{actual}");
            println!("  --- Expected content:\n{expected}");
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts that `actual` matches the `expected` tree of a fixture case.
pub fn assert_matches_expected(actual: &Path, case: &str) {
    let expected = fixture(case).join("expected");
    match dir_diff::is_different(actual, &expected) {
        Ok(true) => {
            print_dir_diff(actual, &expected);
            panic!("Directories differ. See above for details.");
        }
        Ok(false) => {}
        Err(e) => {
            debug!("Error comparing directories: {e:?}");
            panic!("Could not compare directories.");
        }
    }
}
