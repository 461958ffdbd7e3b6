use std::collections::HashMap;

use super::element::Element;

/// Styles the lines of a code block.
pub trait Highlighter: Send + Sync {
    /// Returns the children of the block's `code` element.
    fn highlight(&self, lines: &[String]) -> Vec<Element>;
}

/// Entries registered under a name plus aliases, looked up
/// case-insensitively.
pub struct AliasMap<T> {
    entries: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for AliasMap<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> AliasMap<T> {
    /// Registers `entry`. Later registrations take over names and aliases
    /// already in use.
    pub fn insert(&mut self, name: &str, aliases: &[&str], entry: T) {
        let slot = self.entries.len();
        self.entries.push(entry);
        for key in std::iter::once(&name).chain(aliases) {
            self.index.insert(key.to_lowercase(), slot);
        }
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        let slot = *self.index.get(&name.to_lowercase())?;
        self.entries.get(slot)
    }
}

/// Highlighters keyed by language name.
#[derive(Default)]
pub struct HighlighterRegistry {
    highlighters: AliasMap<Box<dyn Highlighter>>,
}

impl HighlighterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, aliases: &[&str], highlighter: impl Highlighter + 'static) {
        self.highlighters.insert(name, aliases, Box::new(highlighter));
    }

    pub fn get(&self, language: &str) -> Option<&dyn Highlighter> {
        self.highlighters.get(language).map(|h| h.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl Highlighter for Upper {
        fn highlight(&self, lines: &[String]) -> Vec<Element> {
            lines.iter().map(|l| Element::text(l.to_uppercase())).collect()
        }
    }

    #[test]
    fn lookup_is_case_and_alias_insensitive() {
        let mut registry = HighlighterRegistry::new();
        registry.register("rust", &["rs"], Upper);
        assert!(registry.get("Rust").is_some());
        assert!(registry.get("RS").is_some());
        assert!(registry.get("python").is_none());
    }

    #[test]
    fn later_registration_wins() {
        let mut map = AliasMap::default();
        map.insert("a", &["x"], 1);
        map.insert("b", &["X"], 2);
        assert_eq!(map.get("x"), Some(&2));
        assert_eq!(map.get("a"), Some(&1));
    }
}
