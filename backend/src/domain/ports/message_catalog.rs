//! Port for localised message lookup.
//!
//! Domain code emits catalogue keys (violation kinds, attribute names, score
//! labels). A [`MessageCatalog`] turns keys into text for one locale, so the
//! rules stay locale agnostic and callers inject whichever catalogue they
//! render with.

/// Read-only key to text lookup for a single locale.
pub trait MessageCatalog: Send + Sync {
    /// Locale code served by this catalogue (for example `ja`).
    fn locale(&self) -> &str;

    /// Text stored under `key`, if any.
    fn lookup(&self, key: &str) -> Option<&str>;

    /// Text stored under `key`, falling back to the key itself.
    fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.lookup(key).unwrap_or(key)
    }
}
