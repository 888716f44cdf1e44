use std::path::Path;

/// Extension trait for Path to classify rewrite candidates
pub trait PathExt {
    /// Returns true when the file name ends with `.<extension>`.
    ///
    /// The check is made on the bare file name, so `foo.mjs` does not match `js`
    /// while a dotfile named `.js` does. Names that are not valid Unicode never match.
    ///
    /// # Examples
    /// ```
    /// use esmfix::ext::PathExt;
    /// use std::path::Path;
    ///
    /// assert!(Path::new("dist/index.js").has_target_extension("js"));
    /// assert!(!Path::new("src/index.ts").has_target_extension("js"));
    /// ```
    fn has_target_extension(&self, extension: &str) -> bool;
}

impl PathExt for Path {
    fn has_target_extension(&self, extension: &str) -> bool {
        self.file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.strip_suffix(extension))
            .is_some_and(|stem| stem.ends_with('.'))
    }
}
