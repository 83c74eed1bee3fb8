use anyhow::{bail, Context, Result};
use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name glob for plugin entry files, `index.ts` and `index.tsx` both.
const ENTRY_GLOB: &str = "index.ts*";

/// Recursively collect plugin entry files under `root`.
///
/// An entry file must sit at least one directory level below the root
/// (the scan looks for `*/index.ts*` relative to each walked directory),
/// so an `index.ts` directly in the root is not a plugin. Traversal order
/// follows whatever the filesystem yields; callers get no sorting
/// guarantee. A directory containing several matching files produces one
/// result per file.
pub fn find_entry_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        bail!("Not a directory: {}", root.display());
    }

    let pattern = Pattern::new(ENTRY_GLOB).expect("entry glob is valid");
    let mut files = Vec::new();
    collect_entry_files(root, root, &pattern, &mut files)?;

    debug!("Found {} entry file(s) under {}", files.len(), root.display());
    Ok(files)
}

fn collect_entry_files(
    dir: &Path,
    root: &Path,
    pattern: &Pattern,
    files: &mut Vec<PathBuf>,
) -> Result<()> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    for entry in entries.flatten() {
        let path = entry.path();

        if path.is_file() {
            // Files directly in the root are not plugin entries.
            if dir == root {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if pattern.matches(name) {
                    files.push(path);
                }
            }
        } else if path.is_dir() {
            // Skip vendored and generated trees; plugin repos are npm
            // projects and node_modules alone holds thousands of index.ts.
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if !matches!(name, ".git" | "node_modules" | "dist" | "build") {
                    collect_entry_files(&path, root, pattern, files)?;
                }
            }
        }
    }

    Ok(())
}
