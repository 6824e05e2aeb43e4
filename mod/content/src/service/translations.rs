//! Translation-row storage — the secondary-language tier of the
//! two-tier write-back shape. All entity types share one table.

use std::collections::HashMap;

use serde::Deserialize;

use vitrina_core::{now_rfc3339, ServiceError};
use vitrina_sql::Value;

use crate::merge;
use crate::model::{EntityType, Language, TranslationRow};
use super::ContentService;

/// Translation payload attached to an admin save request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationInput {
    pub language: Language,
    #[serde(default)]
    pub fields: serde_json::Value,
}

impl ContentService {
    /// Upsert a translation row keyed by `(entity_type, entity_id,
    /// language)` (admin write-back).
    ///
    /// Returns `None` without persisting anything when the payload is
    /// entirely empty — an empty translation row would wrongly shadow
    /// base-row fallback under a differently-defined merge policy, so
    /// it must never exist.
    pub fn upsert_translation(
        &self,
        entity_type: EntityType,
        entity_id: &str,
        language: Language,
        fields: serde_json::Value,
    ) -> Result<Option<TranslationRow>, ServiceError> {
        if language.is_primary() {
            return Err(ServiceError::Validation(format!(
                "translations may not target the primary language '{}'",
                Language::PRIMARY
            )));
        }
        if !fields.is_object() && !fields.is_null() {
            return Err(ServiceError::Validation(
                "translation fields must be a JSON object".into(),
            ));
        }

        // The base row must exist before a translation can shadow it.
        let exists = self.sql
            .query(
                &format!("SELECT id FROM {} WHERE id = ?1", entity_type.table()),
                &[Value::Text(entity_id.to_string())],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        if exists.is_empty() {
            return Err(ServiceError::NotFound(format!(
                "{}/{}",
                entity_type.table(),
                entity_id
            )));
        }

        // Only declared localizable fields are stored.
        let localizable = merge::localizable_fields(entity_type);
        let filtered: serde_json::Map<String, serde_json::Value> = fields
            .as_object()
            .map(|obj| {
                obj.iter()
                    .filter(|(k, _)| localizable.contains(&k.as_str()))
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect()
            })
            .unwrap_or_default();
        let filtered = serde_json::Value::Object(filtered);

        if merge::payload_is_empty(&filtered) {
            return Ok(None);
        }

        let now = now_rfc3339();
        let row = TranslationRow {
            entity_type: entity_type.as_str().to_string(),
            entity_id: entity_id.to_string(),
            language,
            fields: filtered,
            update_at: Some(now.clone()),
        };

        let id = TranslationRow::storage_id(entity_type, entity_id, language);
        self.upsert_record(
            "translations",
            &id,
            &row,
            &[
                ("entity_type", Value::Text(row.entity_type.clone())),
                ("entity_id", Value::Text(row.entity_id.clone())),
                ("language", Value::Text(language.as_str().into())),
                ("update_at", Value::Text(now)),
            ],
        )?;

        Ok(Some(row))
    }

    /// Get the translation row for one entity, or None.
    pub fn get_translation(
        &self,
        entity_type: EntityType,
        entity_id: &str,
        language: Language,
    ) -> Result<Option<TranslationRow>, ServiceError> {
        let id = TranslationRow::storage_id(entity_type, entity_id, language);
        self.get_record_opt("translations", &id)
    }

    /// Translation rows for a set of entities in one query, keyed by
    /// entity id.
    pub fn get_translation_rows(
        &self,
        entity_type: EntityType,
        entity_ids: &[String],
        language: Language,
    ) -> Result<HashMap<String, TranslationRow>, ServiceError> {
        if entity_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let placeholders: Vec<String> = (0..entity_ids.len())
            .map(|i| format!("?{}", i + 3))
            .collect();
        let sql = format!(
            "SELECT data FROM translations WHERE entity_type = ?1 AND language = ?2 AND entity_id IN ({})",
            placeholders.join(", "),
        );

        let mut params = vec![
            Value::Text(entity_type.as_str().to_string()),
            Value::Text(language.as_str().to_string()),
        ];
        params.extend(entity_ids.iter().map(|id| Value::Text(id.clone())));

        let rows = self.sql
            .query(&sql, &params)
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        let mut map = HashMap::with_capacity(rows.len());
        for row in &rows {
            let data = row.get_str("data")
                .ok_or_else(|| ServiceError::Internal("missing data column".into()))?;
            let tr: TranslationRow = serde_json::from_str(data)
                .map_err(|e| ServiceError::Internal(e.to_string()))?;
            map.insert(tr.entity_id.clone(), tr);
        }
        Ok(map)
    }

    /// Delete every translation row of one entity (entity deletion).
    pub fn delete_translations(
        &self,
        entity_type: EntityType,
        entity_id: &str,
    ) -> Result<(), ServiceError> {
        self.sql
            .exec(
                "DELETE FROM translations WHERE entity_type = ?1 AND entity_id = ?2",
                &[
                    Value::Text(entity_type.as_str().to_string()),
                    Value::Text(entity_id.to_string()),
                ],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(())
    }

    // ── Fail-soft wrappers for read paths ──

    pub(crate) fn translation_for(
        &self,
        entity_type: EntityType,
        entity_id: &str,
        language: Language,
    ) -> Option<TranslationRow> {
        match self.get_translation(entity_type, entity_id, language) {
            Ok(tr) => tr,
            Err(e) => {
                tracing::warn!(
                    entity = entity_type.as_str(),
                    id = entity_id,
                    %language,
                    error = %e,
                    "translation fetch failed, rendering base language"
                );
                None
            }
        }
    }

    pub(crate) fn translations_for(
        &self,
        entity_type: EntityType,
        entity_ids: &[String],
        language: Language,
    ) -> HashMap<String, TranslationRow> {
        match self.get_translation_rows(entity_type, entity_ids, language) {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!(
                    entity = entity_type.as_str(),
                    %language,
                    error = %e,
                    "translation fetch failed, rendering base language"
                );
                HashMap::new()
            }
        }
    }
}
