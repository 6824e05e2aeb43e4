use serde::{Deserialize, Serialize};

use super::Language;

/// ContentEntry — one stored display string, unique per
/// `(section, key, language)`.
///
/// An entry with an empty value is treated as absent by the resolver;
/// deleting semantics beyond overwrite do not exist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentEntry {
    /// Page or block the entry belongs to (e.g. "about", "home_hero").
    pub section: String,

    /// Field key within the section (e.g. "mission_text").
    pub key: String,

    /// Language this value is written in.
    pub language: Language,

    /// The display string. Empty means "absent" to the resolver.
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_at: Option<String>,
}

impl ContentEntry {
    /// Deterministic storage id — one row per (section, key, language).
    pub fn storage_id(section: &str, key: &str, language: Language) -> String {
        format!("{}:{}:{}", section, key, language.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_json_roundtrip() {
        let e = ContentEntry {
            section: "about".into(),
            key: "mission_text".into(),
            language: Language::En,
            value: "We build software.".into(),
            update_at: None,
        };
        let json = serde_json::to_string(&e).unwrap();
        let back: ContentEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(e, back);
    }

    #[test]
    fn storage_id_is_per_language() {
        assert_eq!(
            ContentEntry::storage_id("about", "mission_text", Language::Ru),
            "about:mission_text:ru"
        );
        assert_ne!(
            ContentEntry::storage_id("about", "mission_text", Language::Ru),
            ContentEntry::storage_id("about", "mission_text", Language::En),
        );
    }
}
