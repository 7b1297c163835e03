use crate::ignore::IgnoreRules;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File suffixes considered scripts when `--all` is not given. The match is
/// a case-sensitive suffix check, not an extension lookup, so `.bash` works
/// even though `Path::extension` would report `bash`.
pub const SCRIPT_EXTENSIONS: &[&str] = &[".sh", ".bash", ".py", ".js", ".ts"];

fn is_candidate(file_name: &str, include_all: bool) -> bool {
    include_all || SCRIPT_EXTENSIONS.iter().any(|ext| file_name.ends_with(ext))
}

/// Walk the tree rooted at `root` and return the relative paths of every
/// candidate file. Directories matching the ignore rules are pruned whole;
/// their contents are never visited. Each queued path is echoed to stdout.
pub fn collect_files(root: &Path, rules: &IgnoreRules, include_all: bool) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        !entry.file_type().is_dir() || !rules.matches(entry.path(), root, true)
    });

    for entry in walker.flatten() {
        if !entry.file_type().is_file() {
            continue;
        }
        if !is_candidate(&entry.file_name().to_string_lossy(), include_all) {
            continue;
        }
        if rules.matches(entry.path(), root, false) {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or_else(|_| entry.path())
            .to_path_buf();
        println!("Analyzing: {}", relative.display());
        candidates.push(relative);
    }

    candidates
}
