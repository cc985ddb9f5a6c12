//! Recursive listing of the file names inside a directory tree.
//!
//! Names come back relative to the root, with sub-directories joined by the
//! platform path separator. Order follows the underlying directory reads and
//! is not sorted.
//!
//! Symbolic links to directories are descended like directories by default.
//! A link that points back at one of its own ancestors is not descended.
//!
//! Names that are not valid UTF-8 are converted lossily, so two distinct
//! files can come back as the same string. Each file is still reported once
//! per path it is reachable through.

pub mod entries;
pub mod error;
mod fs_walk;
pub mod options;

use std::path::Path;

pub use entries::{Entry, list_entries};
pub use error::{ListError, Result};
pub use options::{ErrorPolicy, ListOptions};

/// Lists every file below `path`. A missing or non-directory `path` gives an
/// empty vector.
pub fn list_file_names(path: impl AsRef<Path>) -> Vec<String> {
    DirectoryLister::default().list(path)
}

/// Like [`list_file_names`], with `prefix` prepended verbatim to every name.
pub fn list_file_names_with_prefix(path: impl AsRef<Path>, prefix: &str) -> Vec<String> {
    DirectoryLister::new(ListOptions::new().prefix(prefix)).list(path)
}

/// Strict listing: a missing root or an I/O failure is returned as an error
/// when `opts.on_error` is [`ErrorPolicy::Fail`].
pub fn try_list_file_names(path: impl AsRef<Path>, opts: &ListOptions) -> Result<Vec<String>> {
    fs_walk::collect_file_names(path.as_ref(), opts)
}

#[derive(Debug, Clone, Default)]
pub struct DirectoryLister {
    opts: ListOptions,
}

impl DirectoryLister {
    pub fn new(opts: ListOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &ListOptions {
        &self.opts
    }

    /// Never fails; anything unreadable contributes no names.
    pub fn list(&self, path: impl AsRef<Path>) -> Vec<String> {
        let opts = ListOptions {
            on_error: ErrorPolicy::Skip,
            ..self.opts.clone()
        };
        fs_walk::collect_file_names(path.as_ref(), &opts).unwrap_or_default()
    }

    pub fn try_list(&self, path: impl AsRef<Path>) -> Result<Vec<String>> {
        fs_walk::collect_file_names(path.as_ref(), &self.opts)
    }
}
