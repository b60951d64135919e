use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use ignore::{DirEntry, WalkBuilder};
use log::{debug, warn};
use once_cell::sync::Lazy;

/// Directory names pruned from every traversal level by default.
pub static DEFAULT_EXCLUDES: Lazy<HashSet<String>> = Lazy::new(|| {
    ["vendor", "node_modules", ".git"]
        .iter()
        .map(|name| name.to_string())
        .collect()
});

/// Walks `root` and yields every file path that should be dumped, in a
/// deterministic order (entries sorted by file name at each level).
///
/// Subdirectories whose name matches an entry of `excludes` are pruned
/// before descent, so their subtrees are never entered or stat'd. The
/// root itself is never pruned, even if its own name is in the set. The
/// output artifact at `output_path` lives inside `root` and is skipped so
/// the dump does not include itself.
///
/// Traversal is serial and synchronous. Entries that cannot be walked
/// (e.g. an unreadable intermediate directory) are logged and skipped;
/// they never abort the traversal.
pub fn find_files(
    root: &Path,
    excludes: &HashSet<String>,
    output_path: &Path,
) -> impl Iterator<Item = PathBuf> + use<> {
    let excludes = excludes.clone();
    let output_path = output_path.to_path_buf();

    let mut builder = WalkBuilder::new(root);
    builder
        // Dump everything that is not explicitly excluded: gitignore
        // semantics and hidden-file filtering do not apply to this tool.
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a: &OsStr, b: &OsStr| a.cmp(b));

    builder.filter_entry(move |entry| {
        // Depth 0 is the root the caller asked for; only subdirectories
        // are subject to exclusion.
        if entry.depth() == 0 {
            return true;
        }
        if is_dir_like(entry) {
            let name = entry.file_name().to_string_lossy();
            if excludes.contains(name.as_ref()) {
                debug!("pruning excluded directory {}", entry.path().display());
                return false;
            }
        }
        true
    });

    builder.build().filter_map(move |result| match result {
        Ok(entry) => {
            // Directories produce no records of their own.
            if is_dir_like(&entry) {
                return None;
            }
            let path = entry.path();
            if path == output_path {
                return None;
            }
            debug!("visiting {}", path.display());
            Some(path.to_path_buf())
        }
        Err(err) => {
            warn!("skipping unwalkable entry: {err}");
            None
        }
    })
}

/// A symlink pointing at a directory counts as a directory: it is
/// subject to name pruning and never dumped as a file. With link
/// following disabled it is not descended into either, so it produces
/// nothing. A dangling symlink has no target metadata and stays a file,
/// which later yields a `Could not read file` record.
fn is_dir_like(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_dir() => true,
        Some(ft) if ft.is_symlink() => entry.path().metadata().is_ok_and(|meta| meta.is_dir()),
        Some(_) => false,
        // A missing file type only happens for stdin, which cannot
        // occur here.
        None => true,
    }
}
