use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::extract;

/// Authoritative documentation file; its presence suppresses generation.
pub const README: &str = "README.md";
/// Generated draft file; written once, never overwritten.
pub const DRAFT: &str = "README.draft.md";

/// Documentation state of a plugin directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocStatus {
    /// `README.md` exists; the directory is documented for real.
    Readme,
    /// Only `README.draft.md` exists; a draft was generated earlier.
    Draft,
    /// Neither file exists; a draft can be generated.
    Missing,
}

/// Check which documentation file, if any, a directory already holds.
/// `README.md` wins over a stray draft.
pub fn doc_status(dir: &Path) -> DocStatus {
    if dir.join(README).exists() {
        DocStatus::Readme
    } else if dir.join(DRAFT).exists() {
        DocStatus::Draft
    } else {
        DocStatus::Missing
    }
}

/// Read the entry file, extract its plugin description, and append-or-create
/// `README.draft.md` next to it. Returns the extracted description.
///
/// Errors if the file cannot be read or carries no recognizable
/// `definePlugin({ ... description: "..." })` declaration. Callers are
/// expected to have checked [`doc_status`] first; because generation only
/// runs when no draft exists, the append open mode behaves as create-only.
pub fn write_draft(entry: &Path) -> Result<String> {
    let dir = entry
        .parent()
        .with_context(|| format!("Entry file has no parent directory: {}", entry.display()))?;

    let source = fs::read_to_string(entry)
        .with_context(|| format!("Failed to read entry file {}", entry.display()))?;

    let description = extract::extract_description(&source)
        .with_context(|| format!("No plugin description found in {}", entry.display()))?
        .to_string();

    let dir_name = dir
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("Cannot derive a name from {}", dir.display()))?;

    let draft_path = dir.join(DRAFT);
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(&draft_path)
        .with_context(|| format!("Failed to open {}", draft_path.display()))?;
    write!(file, "# {}\n\n{}", dir_name, description)
        .with_context(|| format!("Failed to write {}", draft_path.display()))?;

    debug!("Wrote {}", draft_path.display());
    Ok(description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn plugin_dir(tmp: &TempDir, name: &str, source: &str) -> std::path::PathBuf {
        let dir = tmp.path().join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("index.ts"), source).unwrap();
        dir
    }

    #[test]
    fn test_doc_status_missing() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(doc_status(tmp.path()), DocStatus::Missing);
    }

    #[test]
    fn test_doc_status_draft() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(DRAFT), "# x").unwrap();
        assert_eq!(doc_status(tmp.path()), DocStatus::Draft);
    }

    #[test]
    fn test_doc_status_readme_wins_over_draft() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(README), "# real").unwrap();
        fs::write(tmp.path().join(DRAFT), "# stale").unwrap();
        assert_eq!(doc_status(tmp.path()), DocStatus::Readme);
    }

    #[test]
    fn test_write_draft_content() {
        let tmp = TempDir::new().unwrap();
        let dir = plugin_dir(
            &tmp,
            "pluginA",
            r#"export default definePlugin({ name: "A", description: "Does A things." });"#,
        );

        let description = write_draft(&dir.join("index.ts")).unwrap();
        assert_eq!(description, "Does A things.");

        let content = fs::read_to_string(dir.join(DRAFT)).unwrap();
        assert_eq!(content, "# pluginA\n\nDoes A things.");
    }

    #[test]
    fn test_write_draft_missing_description_fails() {
        let tmp = TempDir::new().unwrap();
        let dir = plugin_dir(&tmp, "pluginB", "export const nothing = 1;");

        let result = write_draft(&dir.join("index.ts"));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("No plugin description found"));
        assert!(!dir.join(DRAFT).exists());
    }

    #[test]
    fn test_write_draft_unreadable_entry_fails() {
        let tmp = TempDir::new().unwrap();
        let result = write_draft(&tmp.path().join("pluginC/index.ts"));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read entry file"));
    }
}
