use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::draft::{self, DocStatus};
use crate::scanner;

/// Scan `path` for plugin entry files and generate missing README drafts.
///
/// For every entry file found, its path is printed. Directories with a
/// `README.md` are left alone silently; those with a draft report
/// `Draft exists.`; everything else gets a draft generated from the
/// plugin's declared description. Extraction failure aborts the run
/// mid-traversal, keeping drafts already written.
pub fn run(path: &str) -> Result<()> {
    let root = Path::new(path);
    if !root.exists() {
        bail!("Path not found: {}", path);
    }
    if !root.is_dir() {
        bail!("Path is not a directory: {}", path);
    }

    let entries = scanner::find_entry_files(root)?;
    info!("Scanning {} entry file(s)", entries.len());

    for entry in entries {
        println!("{}", entry.display());

        let dir = entry
            .parent()
            .with_context(|| format!("Entry file has no parent directory: {}", entry.display()))?;

        match draft::doc_status(dir) {
            DocStatus::Readme => {}
            DocStatus::Draft => println!("Draft exists."),
            DocStatus::Missing => {
                let dir_name = dir.file_name().and_then(|n| n.to_str()).unwrap_or("?");
                println!("Generating {} for {}", draft::DRAFT, dir_name);
                let description = draft::write_draft(&entry)?;
                println!("{:?}", description);
            }
        }
    }

    Ok(())
}
