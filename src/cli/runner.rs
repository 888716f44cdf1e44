use crate::{
    cli::Args,
    error::{Error, Result},
    rewriter::ImportRewriter,
    walker::{TreeWalker, WalkSummary},
};

/// Normalises a user supplied extension to its bare form (`.js` -> `js`).
pub fn normalize_extension(extension: &str) -> Result<String> {
    let bare = extension.strip_prefix('.').unwrap_or(extension);
    let invalid = bare.is_empty()
        || bare.chars().any(|c| c == '/' || c == '\\' || c == '\'' || c.is_whitespace());
    if invalid {
        return Err(Error::InvalidExtensionError(extension.to_string()));
    }
    Ok(bare.to_string())
}

/// Main CLI runner that performs one scan-and-rewrite pass
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the pass and prints a summary line
    pub fn run(self) -> Result<WalkSummary> {
        let extension = normalize_extension(&self.args.extension)?;
        let rewriter = ImportRewriter::new(extension)?;

        log::debug!(
            "Scanning '{}' for .{} files, excluding {:?}",
            self.args.root.display(),
            rewriter.extension(),
            self.args.exclude
        );

        let walker = TreeWalker::new(&self.args.root, &self.args.exclude, &rewriter);
        let summary = walker.walk(self.args.dry_run)?;

        let prefix = if self.args.dry_run { "[DRY RUN] " } else { "" };
        println!(
            "{prefix}Rewrote {} import(s) in {} of {} file(s) under {}.",
            summary.imports_rewritten,
            summary.files_rewritten,
            summary.files_scanned,
            self.args.root.display()
        );
        Ok(summary)
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<WalkSummary> {
    let runner = Runner::new(args);
    runner.run()
}
