pub mod cases;
pub mod entries;
pub mod legal;
pub mod resolve;
pub mod schema;
pub mod seo;
pub mod services;
pub mod team;
pub mod translations;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use vitrina_core::{merge_patch, now_rfc3339, ListResult, ServiceError};
use vitrina_sql::{SQLStore, Value};

use crate::merge;
use crate::model::{Language, Localized};

pub use resolve::FallbackTable;
pub use translations::TranslationInput;

/// Content service — holds the store client and the fallback-literal
/// table, and provides all resolution and write-back logic.
pub struct ContentService {
    pub(crate) sql: Arc<dyn SQLStore>,
    pub(crate) fallbacks: FallbackTable,
}

impl ContentService {
    pub fn new(sql: Arc<dyn SQLStore>, fallbacks: FallbackTable) -> Result<Self, ServiceError> {
        schema::init_schema(sql.as_ref())?;
        Ok(Self { sql, fallbacks })
    }

    // ── Generic CRUD helpers ──
    //
    // Every table stores the full record as JSON in a `data` column
    // with extracted indexed columns for filtering and uniqueness.

    /// Insert a record as JSON into a table with indexed columns.
    pub(crate) fn insert_record<T: Serialize>(
        &self,
        table: &str,
        id: &str,
        record: &T,
        indexes: &[(&str, Value)],
    ) -> Result<(), ServiceError> {
        let json = serde_json::to_string(record)
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        let mut cols = vec!["id", "data"];
        let mut placeholders = vec!["?1".to_string(), "?2".to_string()];
        let mut params = vec![Value::Text(id.to_string()), Value::Text(json)];

        for (i, (col, val)) in indexes.iter().enumerate() {
            let idx = i + 3;
            cols.push(col);
            placeholders.push(format!("?{}", idx));
            params.push(val.clone());
        }

        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table,
            cols.join(", "),
            placeholders.join(", "),
        );

        self.sql.exec(&sql, &params).map_err(|e| {
            let msg = e.to_string();
            if msg.contains("UNIQUE constraint") {
                ServiceError::Conflict(msg)
            } else {
                ServiceError::Storage(msg)
            }
        })?;

        Ok(())
    }

    /// Insert-or-replace keyed by id. Used by the two-tier write-back
    /// tables whose ids are deterministic (entries, translations,
    /// page_seo).
    pub(crate) fn upsert_record<T: Serialize>(
        &self,
        table: &str,
        id: &str,
        record: &T,
        indexes: &[(&str, Value)],
    ) -> Result<(), ServiceError> {
        let json = serde_json::to_string(record)
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        let mut cols = vec!["id", "data"];
        let mut placeholders = vec!["?1".to_string(), "?2".to_string()];
        let mut params = vec![Value::Text(id.to_string()), Value::Text(json)];
        let mut sets = vec!["data = excluded.data".to_string()];

        for (i, (col, val)) in indexes.iter().enumerate() {
            let idx = i + 3;
            cols.push(col);
            placeholders.push(format!("?{}", idx));
            params.push(val.clone());
            sets.push(format!("{} = excluded.{}", col, col));
        }

        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({}) ON CONFLICT(id) DO UPDATE SET {}",
            table,
            cols.join(", "),
            placeholders.join(", "),
            sets.join(", "),
        );

        self.sql
            .exec(&sql, &params)
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        Ok(())
    }

    /// Get a record by id, deserializing the JSON `data` column.
    pub(crate) fn get_record<T: DeserializeOwned>(
        &self,
        table: &str,
        id: &str,
    ) -> Result<T, ServiceError> {
        self.get_record_opt(table, id)?
            .ok_or_else(|| ServiceError::NotFound(format!("{}/{}", table, id)))
    }

    /// Get a record by id, or None when it does not exist.
    pub(crate) fn get_record_opt<T: DeserializeOwned>(
        &self,
        table: &str,
        id: &str,
    ) -> Result<Option<T>, ServiceError> {
        let sql = format!("SELECT data FROM {} WHERE id = ?1", table);
        let rows = self.sql
            .query(&sql, &[Value::Text(id.to_string())])
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        let row = match rows.first() {
            Some(r) => r,
            None => return Ok(None),
        };
        let data = row.get_str("data")
            .ok_or_else(|| ServiceError::Internal("missing data column".into()))?;
        serde_json::from_str(data)
            .map(Some)
            .map_err(|e| ServiceError::Internal(e.to_string()))
    }

    /// Update a record's JSON data and indexed columns.
    pub(crate) fn update_record<T: Serialize>(
        &self,
        table: &str,
        id: &str,
        record: &T,
        indexes: &[(&str, Value)],
    ) -> Result<(), ServiceError> {
        let json = serde_json::to_string(record)
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        let mut sets = vec!["data = ?1".to_string()];
        let mut params: Vec<Value> = vec![Value::Text(json)];

        for (i, (col, val)) in indexes.iter().enumerate() {
            let idx = i + 2;
            sets.push(format!("{} = ?{}", col, idx));
            params.push(val.clone());
        }

        let id_idx = params.len() + 1;
        params.push(Value::Text(id.to_string()));

        let sql = format!(
            "UPDATE {} SET {} WHERE id = ?{}",
            table,
            sets.join(", "),
            id_idx,
        );

        let affected = self.sql
            .exec(&sql, &params)
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        if affected == 0 {
            return Err(ServiceError::NotFound(format!("{}/{}", table, id)));
        }

        Ok(())
    }

    /// Delete a record by id.
    pub(crate) fn delete_record(&self, table: &str, id: &str) -> Result<(), ServiceError> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", table);
        let affected = self.sql
            .exec(&sql, &[Value::Text(id.to_string())])
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        if affected == 0 {
            return Err(ServiceError::NotFound(format!("{}/{}", table, id)));
        }
        Ok(())
    }

    /// List records with optional filters, ordering, pagination, and
    /// total count.
    pub(crate) fn list_records<T: DeserializeOwned>(
        &self,
        table: &str,
        filters: &[(&str, Value)],
        order_by: &str,
        limit: usize,
        offset: usize,
    ) -> Result<ListResult<T>, ServiceError>
    where
        T: Serialize,
    {
        let mut where_clauses = Vec::new();
        let mut params = Vec::new();

        for (i, (col, val)) in filters.iter().enumerate() {
            let idx = i + 1;
            where_clauses.push(format!("{} = ?{}", col, idx));
            params.push(val.clone());
        }

        let where_sql = if where_clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", where_clauses.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) as cnt FROM {}{}", table, where_sql);
        let rows = self.sql
            .query(&count_sql, &params)
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        let total = rows.first().and_then(|r| r.get_i64("cnt")).unwrap_or(0) as usize;

        let limit_idx = params.len() + 1;
        let offset_idx = params.len() + 2;
        params.push(Value::Integer(limit as i64));
        params.push(Value::Integer(offset as i64));

        let sql = format!(
            "SELECT data FROM {}{} ORDER BY {} LIMIT ?{} OFFSET ?{}",
            table, where_sql, order_by, limit_idx, offset_idx,
        );

        let rows = self.sql
            .query(&sql, &params)
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        let mut items = Vec::new();
        for row in &rows {
            let data = row.get_str("data")
                .ok_or_else(|| ServiceError::Internal("missing data column".into()))?;
            let item: T = serde_json::from_str(data)
                .map_err(|e| ServiceError::Internal(e.to_string()))?;
            items.push(item);
        }

        Ok(ListResult { items, total })
    }

    /// Apply a JSON merge-patch to a record, protecting immutable
    /// fields. Slugs are never regenerated or patched after first save.
    pub(crate) fn apply_patch<T: Serialize + DeserializeOwned>(
        current: &T,
        patch: serde_json::Value,
    ) -> Result<T, ServiceError> {
        let mut json = serde_json::to_value(current)
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        let now = now_rfc3339();

        let mut patch_filtered = patch;
        if let Some(obj) = patch_filtered.as_object_mut() {
            obj.remove("id");
            obj.remove("slug");
            obj.remove("createAt");
            obj.insert("updateAt".into(), serde_json::json!(now));
        }

        merge_patch(&mut json, &patch_filtered);
        serde_json::from_value(json).map_err(|e| ServiceError::Internal(e.to_string()))
    }

    // ── Localization helpers ──

    /// Overlay the translation for one entity, if any. Fail-soft: a
    /// translation fetch failure behaves as "no translation".
    pub(crate) fn apply_translation<T: Localized>(&self, base: T, language: Language) -> T {
        if language.is_primary() {
            return base;
        }
        let tr = self.translation_for(T::ENTITY_TYPE, base.id(), language);
        merge::merged(&base, tr.as_ref())
    }

    /// Overlay translations for a whole list in one store round trip.
    /// Visibility and ordering were already applied to the base rows
    /// by the caller's query, so a missing translation can never hide
    /// or reorder an entity.
    pub(crate) fn merged_list<T: Localized>(&self, rows: Vec<T>, language: Language) -> Vec<T> {
        if language.is_primary() || rows.is_empty() {
            return rows;
        }
        let ids: Vec<String> = rows.iter().map(|r| r.id().to_string()).collect();
        let map = self.translations_for(T::ENTITY_TYPE, &ids, language);
        rows.into_iter()
            .map(|base| {
                let tr = map.get(base.id());
                merge::merged(&base, tr)
            })
            .collect()
    }
}
