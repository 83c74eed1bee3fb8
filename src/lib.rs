//! plugdoc - Generate README drafts for plugin directories
//!
//! Scans a directory tree for plugin entry files (`index.ts` / `index.tsx`),
//! pulls the `description` string out of each plugin's `definePlugin({ ... })`
//! declaration, and writes a `README.draft.md` stub into the plugin's
//! directory when no documentation exists yet. An existing `README.md` is
//! authoritative and suppresses generation entirely.

pub mod cli;
pub mod draft;
pub mod extract;
pub mod scanner;
