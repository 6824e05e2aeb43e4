//! The fallback-literal table.
//!
//! Every call site of the key resolver carries a language-specific
//! fallback literal. Instead of duplicating those literals inline per
//! page, they live in one table keyed by `(section, key, language)`,
//! injected into the resolver at construction time (the server binary
//! loads them from its config file).

use std::collections::HashMap;

use crate::model::Language;

/// Fallback literals keyed by `(section, key, language)`.
#[derive(Debug, Clone, Default)]
pub struct FallbackTable {
    map: HashMap<(String, String, Language), String>,
}

impl FallbackTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        language: Language,
        literal: impl Into<String>,
    ) {
        self.map
            .insert((section.into(), key.into(), language), literal.into());
    }

    pub fn get(&self, section: &str, key: &str, language: Language) -> Option<&str> {
        self.map
            .get(&(section.to_string(), key.to_string(), language))
            .map(String::as_str)
    }

    /// All `(key, literal)` pairs of one section for one language.
    pub fn section(&self, section: &str, language: Language) -> Vec<(&str, &str)> {
        self.map
            .iter()
            .filter(|((s, _, l), _)| s == section && *l == language)
            .map(|((_, k, _), v)| (k.as_str(), v.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut t = FallbackTable::new();
        t.insert("about", "mission_text", Language::En, "We build software.");
        t.insert("about", "mission_text", Language::Ru, "Мы делаем софт.");

        assert_eq!(
            t.get("about", "mission_text", Language::En),
            Some("We build software.")
        );
        assert_eq!(
            t.get("about", "mission_text", Language::Ru),
            Some("Мы делаем софт.")
        );
        assert_eq!(t.get("about", "missing", Language::En), None);
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn section_listing_filters_by_language() {
        let mut t = FallbackTable::new();
        t.insert("home", "hero_title", Language::En, "Hello");
        t.insert("home", "hero_title", Language::Ru, "Привет");
        t.insert("about", "mission_text", Language::En, "x");

        let home_en = t.section("home", Language::En);
        assert_eq!(home_en, vec![("hero_title", "Hello")]);
    }
}
