use std::fs;
use std::io;
use std::path::{MAIN_SEPARATOR, MAIN_SEPARATOR_STR, Path};

use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::error::{ListError, Result};
use crate::options::{ErrorPolicy, ListOptions};

/// Walks `root` depth-first and returns the names of every non-directory
/// entry below it, each prefixed with `opts.prefix` and its relative
/// sub-path.
pub(crate) fn collect_file_names(root: &Path, opts: &ListOptions) -> Result<Vec<String>> {
    if !root.is_dir() {
        return match opts.on_error {
            ErrorPolicy::Skip => Ok(Vec::new()),
            ErrorPolicy::Fail => Err(ListError::NotADirectory(root.to_path_buf())),
        };
    }

    let mut out = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(opts.follow_links)
        .min_depth(1);

    for item in walker {
        let entry = match item {
            Ok(entry) => entry,
            Err(err) => {
                if err.loop_ancestor().is_some() {
                    debug!(error = %err, "not descending into link cycle");
                } else if let Some(link) = dangling_link(&err) {
                    out.push(relative_name(root, link, &opts.prefix));
                } else if opts.on_error == ErrorPolicy::Fail {
                    return Err(err.into());
                } else {
                    debug!(error = %err, "skipping unreadable entry");
                }
                continue;
            }
        };

        if entry.file_type().is_dir() {
            trace!(dir = %entry.path().display(), "entering directory");
            continue;
        }
        out.push(relative_name(root, entry.path(), &opts.prefix));
    }
    Ok(out)
}

// A followed link whose target is gone is still a non-directory object.
fn dangling_link(err: &walkdir::Error) -> Option<&Path> {
    let path = err.path()?;
    if err.io_error()?.kind() != io::ErrorKind::NotFound {
        return None;
    }
    let meta = fs::symlink_metadata(path).ok()?;
    meta.file_type().is_symlink().then_some(path)
}

fn relative_name(root: &Path, path: &Path, prefix: &str) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let joined = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join(MAIN_SEPARATOR_STR);
    format!("{prefix}{joined}")
}
