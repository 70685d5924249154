//! Source-tree scanning helpers for layering checks.

use std::fs;
use std::path::{Path, PathBuf};

/// `(path relative to the crate root, 1-based line number, line text)`.
pub type Hit = (String, usize, String);

fn root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn rust_sources(dir: &Path, out: &mut Vec<PathBuf>) {
    let entries =
        fs::read_dir(dir).unwrap_or_else(|e| panic!("failed to read dir {}: {e}", dir.display()));
    for entry in entries {
        let path = entry
            .unwrap_or_else(|e| panic!("failed to read dir entry: {e}"))
            .path();
        if path.is_dir() {
            rust_sources(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

/// Every line of every `.rs` file under `relative_dir` accepted by `keep`,
/// restricted to files accepted by `file_filter`.
fn scan(
    relative_dir: &str,
    file_filter: impl Fn(&Path) -> bool,
    keep: impl Fn(&str) -> bool,
) -> Vec<Hit> {
    let root = root();
    let mut files = Vec::new();
    rust_sources(&root.join(relative_dir), &mut files);
    files.sort();

    files
        .into_iter()
        .filter(|file| file_filter(file.as_path()))
        .flat_map(|file| {
            let content = fs::read_to_string(&file)
                .unwrap_or_else(|e| panic!("failed to read {}: {e}", file.display()));
            let relative = file
                .strip_prefix(&root)
                .unwrap_or(&file)
                .to_string_lossy()
                .replace('\\', "/");
            content
                .lines()
                .enumerate()
                .filter(|&(_, line)| keep(line))
                .map(|(idx, line)| (relative.clone(), idx + 1, line.to_string()))
                .collect::<Vec<_>>()
        })
        .collect()
}

pub fn find_lines_containing(relative_dir: &str, patterns: &[&str]) -> Vec<Hit> {
    scan(relative_dir, |_| true, |line| patterns.iter().any(|p| line.contains(p)))
}

pub fn read_relative(relative_path: &str) -> String {
    fs::read_to_string(root().join(relative_path))
        .unwrap_or_else(|e| panic!("failed to read {relative_path}: {e}"))
}

/// Lines of `mod.rs` files that are anything but comments and module
/// declarations.
pub fn find_non_export_lines_in_mod_files(relative_dir: &str) -> Vec<Hit> {
    scan(
        relative_dir,
        |file| file.file_name().is_some_and(|name| name == "mod.rs"),
        |raw| {
            let line = raw.trim();
            !(line.is_empty()
                || line.starts_with("//")
                || line.starts_with("pub mod ")
                || line.starts_with("mod ")
                || line.starts_with("#[cfg"))
        },
    )
}
