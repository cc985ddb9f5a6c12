use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ListError, Result};
use crate::options::{ErrorPolicy, ListOptions};

/// One filesystem object found directly inside a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Reads the immediate children of `dir` in the order the OS returns them.
///
/// With `follow_links` set, a symbolic link counts as a directory when its
/// target is one. A dangling link is never a directory.
pub(crate) fn read_entries(dir: &Path, opts: &ListOptions) -> Result<Vec<Entry>> {
    let iter = fs::read_dir(dir).map_err(|source| ListError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut out = Vec::new();
    for item in iter {
        let item = match item {
            Ok(item) => item,
            Err(source) => {
                if opts.on_error == ErrorPolicy::Fail {
                    return Err(ListError::Entry {
                        path: dir.to_path_buf(),
                        source,
                    });
                }
                debug!(dir = %dir.display(), error = %source, "skipping unreadable entry");
                continue;
            }
        };

        let path = item.path();
        let classified = item.file_type().and_then(|ft| {
            if ft.is_symlink() && opts.follow_links {
                match fs::metadata(&path) {
                    Ok(meta) => Ok(meta.is_dir()),
                    // dangling link
                    Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
                    Err(err) => Err(err),
                }
            } else {
                Ok(ft.is_dir())
            }
        });
        let is_dir = match classified {
            Ok(is_dir) => is_dir,
            Err(source) if opts.on_error == ErrorPolicy::Fail => {
                return Err(ListError::Entry { path, source });
            }
            Err(source) => {
                debug!(path = %path.display(), error = %source, "cannot classify entry");
                false
            }
        };

        out.push(Entry {
            name: item.file_name().to_string_lossy().into_owned(),
            path,
            is_dir,
        });
    }
    Ok(out)
}

/// Immediate children of `path`; empty when `path` is missing, is not a
/// directory, or cannot be read.
pub fn list_entries(path: impl AsRef<Path>) -> Vec<Entry> {
    read_entries(path.as_ref(), &ListOptions::default()).unwrap_or_default()
}
