//! Content entries and the key resolver.
//!
//! Resolution precedence, highest to lowest: a stored non-empty entry
//! for `(section, key, language)`, then the caller-supplied fallback
//! literal (or the injected fallback table), then the empty string. A
//! store failure degrades straight to the fallback tier with a
//! diagnostic — the read path never errors into a rendering page.

use std::collections::HashMap;

use vitrina_core::{now_rfc3339, ServiceError};
use vitrina_sql::Value;

use crate::model::{ContentEntry, Language};
use super::ContentService;

impl ContentService {
    /// Upsert one content entry (admin write-back). Overwrite is the
    /// only mutation; an empty value is how an entry is "removed".
    pub fn upsert_content_entry(&self, mut entry: ContentEntry) -> Result<ContentEntry, ServiceError> {
        if entry.section.trim().is_empty() || entry.key.trim().is_empty() {
            return Err(ServiceError::Validation(
                "section and key must be non-empty".into(),
            ));
        }

        let now = now_rfc3339();
        entry.update_at = Some(now.clone());

        let id = ContentEntry::storage_id(&entry.section, &entry.key, entry.language);
        self.upsert_record(
            "content_entries",
            &id,
            &entry,
            &[
                ("section", Value::Text(entry.section.clone())),
                ("key", Value::Text(entry.key.clone())),
                ("language", Value::Text(entry.language.as_str().into())),
                ("update_at", Value::Text(now)),
            ],
        )?;

        Ok(entry)
    }

    /// All stored entries, optionally restricted to one section.
    pub fn get_content_entries(&self, section: Option<&str>) -> Result<Vec<ContentEntry>, ServiceError> {
        let (sql, params): (&str, Vec<Value>) = match section {
            Some(s) => (
                "SELECT data FROM content_entries WHERE section = ?1 ORDER BY key, language",
                vec![Value::Text(s.to_string())],
            ),
            None => (
                "SELECT data FROM content_entries ORDER BY section, key, language",
                vec![],
            ),
        };

        let rows = self.sql
            .query(sql, &params)
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        let mut entries = Vec::with_capacity(rows.len());
        for row in &rows {
            let data = row.get_str("data")
                .ok_or_else(|| ServiceError::Internal("missing data column".into()))?;
            entries.push(
                serde_json::from_str(data)
                    .map_err(|e| ServiceError::Internal(e.to_string()))?,
            );
        }
        Ok(entries)
    }

    fn get_entry(
        &self,
        section: &str,
        key: &str,
        language: Language,
    ) -> Result<Option<ContentEntry>, ServiceError> {
        let id = ContentEntry::storage_id(section, key, language);
        self.get_record_opt("content_entries", &id)
    }

    /// Resolve one `(section, key, language)` to a display string with
    /// an explicit caller-supplied fallback literal.
    pub fn resolve_with(
        &self,
        section: &str,
        key: &str,
        language: Language,
        fallback: Option<&str>,
    ) -> String {
        match self.get_entry(section, key, language) {
            Ok(Some(entry)) if !entry.value.trim().is_empty() => return entry.value,
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(section, key, %language, error = %e, "content resolve: store failed, using fallback");
            }
        }

        if let Some(f) = fallback {
            return f.to_string();
        }
        if let Some(f) = self.fallbacks.get(section, key, language) {
            return f.to_string();
        }
        String::new()
    }

    /// Resolve against the injected fallback table.
    pub fn resolve(&self, section: &str, key: &str, language: Language) -> String {
        self.resolve_with(section, key, language, None)
    }

    /// Resolve every key of a section for one language in a single
    /// store round trip (the page-mount pattern). Keys known only to
    /// the fallback table are included with their literals.
    pub fn resolve_section(&self, section: &str, language: Language) -> HashMap<String, String> {
        let mut out: HashMap<String, String> = self
            .fallbacks
            .section(section, language)
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let rows = self.sql.query(
            "SELECT data FROM content_entries WHERE section = ?1 AND language = ?2",
            &[
                Value::Text(section.to_string()),
                Value::Text(language.as_str().to_string()),
            ],
        );

        let rows = match rows {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(section, %language, error = %e, "content resolve_section: store failed, using fallbacks only");
                return out;
            }
        };

        for row in &rows {
            let entry: ContentEntry = match row.get_str("data").map(serde_json::from_str) {
                Some(Ok(e)) => e,
                _ => continue,
            };
            if !entry.value.trim().is_empty() {
                out.insert(entry.key, entry.value);
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use vitrina_sql::SqliteStore;

    use super::*;
    use crate::service::FallbackTable;

    fn svc() -> ContentService {
        let sql = Arc::new(SqliteStore::open_in_memory().unwrap());
        let mut fallbacks = FallbackTable::new();
        fallbacks.insert("about", "mission_text", Language::En, "We build software.");
        fallbacks.insert("about", "mission_text", Language::Ru, "Мы делаем софт.");
        ContentService::new(sql, fallbacks).unwrap()
    }

    fn entry(section: &str, key: &str, language: Language, value: &str) -> ContentEntry {
        ContentEntry {
            section: section.into(),
            key: key.into(),
            language,
            value: value.into(),
            update_at: None,
        }
    }

    #[test]
    fn stored_entry_wins() {
        let svc = svc();
        svc.upsert_content_entry(entry("about", "mission_text", Language::En, "Stored mission."))
            .unwrap();
        assert_eq!(
            svc.resolve("about", "mission_text", Language::En),
            "Stored mission."
        );
        // The other language still falls back.
        assert_eq!(
            svc.resolve("about", "mission_text", Language::Ru),
            "Мы делаем софт."
        );
    }

    #[test]
    fn missing_entry_returns_fallback_literal() {
        let svc = svc();
        assert_eq!(
            svc.resolve("about", "mission_text", Language::En),
            "We build software."
        );
    }

    #[test]
    fn explicit_fallback_beats_table() {
        let svc = svc();
        assert_eq!(
            svc.resolve_with("about", "mission_text", Language::En, Some("Custom.")),
            "Custom."
        );
    }

    #[test]
    fn empty_stored_value_is_treated_as_absent() {
        let svc = svc();
        svc.upsert_content_entry(entry("about", "mission_text", Language::En, "  "))
            .unwrap();
        assert_eq!(
            svc.resolve("about", "mission_text", Language::En),
            "We build software."
        );
    }

    #[test]
    fn unknown_key_without_fallback_is_empty() {
        let svc = svc();
        assert_eq!(svc.resolve("about", "nonexistent", Language::En), "");
    }

    #[test]
    fn overwrite_replaces_value() {
        let svc = svc();
        svc.upsert_content_entry(entry("home", "hero", Language::Ru, "Первый"))
            .unwrap();
        svc.upsert_content_entry(entry("home", "hero", Language::Ru, "Второй"))
            .unwrap();
        assert_eq!(svc.resolve("home", "hero", Language::Ru), "Второй");
        assert_eq!(svc.get_content_entries(Some("home")).unwrap().len(), 1);
    }

    #[test]
    fn resolve_section_overlays_stored_on_fallbacks() {
        let svc = svc();
        svc.upsert_content_entry(entry("about", "mission_text", Language::En, "Stored."))
            .unwrap();
        svc.upsert_content_entry(entry("about", "team_intro", Language::En, "The team."))
            .unwrap();
        // Empty stored value must not shadow a fallback.
        svc.upsert_content_entry(entry("about", "cta", Language::En, ""))
            .unwrap();

        let resolved = svc.resolve_section("about", Language::En);
        assert_eq!(resolved.get("mission_text").unwrap(), "Stored.");
        assert_eq!(resolved.get("team_intro").unwrap(), "The team.");
        assert!(!resolved.contains_key("cta"));
    }

    #[test]
    fn validation_rejects_blank_section_or_key() {
        let svc = svc();
        assert!(svc
            .upsert_content_entry(entry("", "k", Language::Ru, "v"))
            .is_err());
        assert!(svc
            .upsert_content_entry(entry("s", " ", Language::Ru, "v"))
            .is_err());
    }
}
