use serde::{Deserialize, Serialize};

use super::{EntityType, Language};

/// A translation row — the secondary-language overlay for one entity.
///
/// Holds only the localizable subset of fields, as a JSON object keyed
/// by wire (camelCase) field names. Which keys are honored is decided
/// by the entity type's declared localizable field list at merge time,
/// not at write time, so a stale extra key can never leak into a
/// merged record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRow {
    /// Tag of the entity type this row translates.
    pub entity_type: String,

    /// Base-row identifier.
    pub entity_id: String,

    /// Language of this overlay. Never the primary language.
    pub language: Language,

    /// Localizable field values, keyed by wire field name.
    pub fields: serde_json::Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_at: Option<String>,
}

impl TranslationRow {
    /// Deterministic storage id — one row per (entity_type, entity_id, language).
    pub fn storage_id(entity_type: EntityType, entity_id: &str, language: Language) -> String {
        format!("{}:{}:{}", entity_type.as_str(), entity_id, language.as_str())
    }
}
