use log::trace;
use regex::Regex;
use std::path::Path;

use crate::error::{Error, Result};

/// Matches a single-line `import <bindings> from '<module>';` statement.
///
/// Bindings are matched lazily so several statements on one line are picked up
/// one by one. The specifier cannot span a quote or a line break, so a
/// specifier holding an escaped quote (`'./it\'s'`) is left unchanged.
const IMPORT_PATTERN: &str = r"import (?P<bindings>[^\n]*?) from '(?P<module>[^'\n]*)';";

/// One import statement whose specifier received the extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportMatch {
    pub bindings: String,
    pub module: String,
}

/// Result of rewriting a text buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    pub imports: Vec<ImportMatch>,
}

impl Rewrite {
    pub fn is_changed(&self) -> bool {
        !self.imports.is_empty()
    }
}

/// Appends a fixed extension to module specifiers of import statements.
///
/// Specifiers already ending in `.<extension>` are left untouched, which makes
/// the rewrite idempotent. Bare package specifiers are not told apart from
/// relative ones and are rewritten too.
#[derive(Debug, Clone)]
pub struct ImportRewriter {
    pattern: Regex,
    extension: String,
    suffix: String,
}

impl ImportRewriter {
    /// Creates a rewriter for `extension`, given without the leading dot.
    pub fn new<S: Into<String>>(extension: S) -> Result<Self> {
        let extension = extension.into();
        let suffix = format!(".{extension}");
        Ok(Self { pattern: Regex::new(IMPORT_PATTERN)?, extension, suffix })
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Rewrites every matching import statement in `text`.
    ///
    /// Only the extension is inserted; every other byte of the input is kept.
    pub fn rewrite_text(&self, text: &str) -> Rewrite {
        let mut output = String::with_capacity(text.len());
        let mut imports = Vec::new();
        let mut last = 0;

        for caps in self.pattern.captures_iter(text) {
            let (Some(bindings), Some(module)) = (caps.name("bindings"), caps.name("module"))
            else {
                continue;
            };
            if module.as_str().ends_with(&self.suffix) {
                continue;
            }

            output.push_str(&text[last..module.end()]);
            output.push_str(&self.suffix);
            last = module.end();

            trace!("'{}' -> '{}{}'", module.as_str(), module.as_str(), self.suffix);
            imports.push(ImportMatch {
                bindings: bindings.as_str().to_string(),
                module: module.as_str().to_string(),
            });
        }
        output.push_str(&text[last..]);

        Rewrite { text: output, imports }
    }

    /// Rewrites the file at `path` in place and returns the number of rewritten imports.
    ///
    /// The file is only written when at least one import changed and `dry_run` is off.
    pub fn rewrite_file<P: AsRef<Path>>(&self, path: P, dry_run: bool) -> Result<usize> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|source| Error::ReadError { path: path.to_path_buf(), source })?;

        let rewrite = self.rewrite_text(&content);
        if rewrite.is_changed() && !dry_run {
            std::fs::write(path, &rewrite.text)
                .map_err(|source| Error::WriteError { path: path.to_path_buf(), source })?;
        }
        Ok(rewrite.imports.len())
    }
}

/// Convenience wrapper around [`ImportRewriter::rewrite_text`].
pub fn add_extension(text: &str, extension: &str) -> Result<String> {
    Ok(ImportRewriter::new(extension)?.rewrite_text(text).text)
}
