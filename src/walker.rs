use log::{debug, info};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::rewriter::ImportRewriter;

/// Counters collected over one traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Files carrying the target extension that were read.
    pub files_scanned: usize,
    /// Files with at least one rewritten import.
    pub files_rewritten: usize,
    /// Import statements rewritten across all files.
    pub imports_rewritten: usize,
}

/// Recursively visits a root directory and rewrites every target file in it.
///
/// Entries whose bare name appears in the exclusion list are skipped at any
/// depth; excluded directories are not descended into. The root itself is
/// never excluded. Symlinks are neither followed nor rewritten, and special
/// files (sockets, fifos, devices) are ignored. The first I/O error aborts
/// the walk.
pub struct TreeWalker<'a> {
    root: PathBuf,
    exclude: &'a [String],
    rewriter: &'a ImportRewriter,
}

impl<'a> TreeWalker<'a> {
    pub fn new<P: AsRef<Path>>(
        root: P,
        exclude: &'a [String],
        rewriter: &'a ImportRewriter,
    ) -> Self {
        Self { root: root.as_ref().to_path_buf(), exclude, rewriter }
    }

    /// Checks whether the entry name is listed in the exclusion set.
    fn is_excluded(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && self.exclude.iter().any(|name| entry.file_name() == OsStr::new(name))
    }

    /// Walks the tree and rewrites target files, returning what was done.
    ///
    /// # Arguments
    /// * `dry_run` - Count rewrites without writing any file
    pub fn walk(&self, dry_run: bool) -> Result<WalkSummary> {
        let metadata = std::fs::metadata(&self.root).map_err(|source| {
            Error::RootAccessError { root: self.root.clone(), source }
        })?;
        if !metadata.is_dir() {
            return Err(Error::RootNotADirectoryError {
                root: self.root.display().to_string(),
            });
        }

        let extension = self.rewriter.extension();
        let mut summary = WalkSummary::default();

        let entries = WalkDir::new(&self.root).sort_by_file_name().into_iter().filter_entry(
            |entry| {
                let excluded = self.is_excluded(entry);
                if excluded {
                    debug!("Skipping excluded entry: {}", entry.path().display());
                }
                !excluded
            },
        );

        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            let file_type = entry.file_type();

            if file_type.is_dir() {
                debug!("Entering directory: {}", path.display());
                continue;
            }
            if file_type.is_symlink() {
                debug!("Skipping symlink: {}", path.display());
                continue;
            }
            if !file_type.is_file() {
                debug!("Skipping special file: {}", path.display());
                continue;
            }
            if !path.has_target_extension(extension) {
                debug!("Skipping non-target file: {}", path.display());
                continue;
            }

            summary.files_scanned += 1;
            let rewritten = self.rewriter.rewrite_file(path, dry_run)?;
            if rewritten > 0 {
                let prefix = if dry_run { "[DRY RUN] " } else { "" };
                info!("{prefix}Rewrote {rewritten} import(s) in '{}'", path.display());
                summary.files_rewritten += 1;
                summary.imports_rewritten += rewritten;
            }
        }

        Ok(summary)
    }
}
