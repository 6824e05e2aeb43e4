//! Legal documents — CRUD, merged public views, admin write-back.

use serde::Deserialize;

use vitrina_core::{new_id, now_rfc3339, ListParams, ListResult, ServiceError};
use vitrina_sql::Value;

use crate::model::{EntityType, Language, LegalDocument};
use super::services::derive_slug;
use super::{ContentService, TranslationInput};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveLegalDocument {
    #[serde(default)]
    pub id: Option<String>,

    pub title: String,

    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub effective_date: Option<String>,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub translation: Option<TranslationInput>,
}

fn default_true() -> bool {
    true
}

impl ContentService {
    pub fn save_legal_document(
        &self,
        input: SaveLegalDocument,
    ) -> Result<LegalDocument, ServiceError> {
        if input.title.trim().is_empty() {
            return Err(ServiceError::Validation("title must be non-empty".into()));
        }

        let now = now_rfc3339();
        let translation = input.translation.clone();

        let record = match &input.id {
            Some(id) => {
                let current: LegalDocument = self.get_record("legal_documents", id)?;
                let record = LegalDocument {
                    id: current.id.clone(),
                    slug: current.slug.clone(),
                    title: input.title,
                    body: input.body,
                    effective_date: input.effective_date,
                    is_active: input.is_active,
                    create_at: current.create_at.clone(),
                    update_at: Some(now.clone()),
                };
                self.update_record("legal_documents", id, &record, &legal_indexes(&record, &now))?;
                record
            }
            None => {
                let id = new_id();
                let slug = derive_slug(&input.title, &id);
                let record = LegalDocument {
                    id: id.clone(),
                    slug,
                    title: input.title,
                    body: input.body,
                    effective_date: input.effective_date,
                    is_active: input.is_active,
                    create_at: Some(now.clone()),
                    update_at: Some(now.clone()),
                };
                self.insert_record("legal_documents", &id, &record, &legal_indexes(&record, &now))?;
                record
            }
        };

        if let Some(tr) = translation {
            self.upsert_translation(EntityType::LegalDocument, &record.id, tr.language, tr.fields)?;
        }

        Ok(record)
    }

    pub fn get_legal_document(&self, id: &str) -> Result<LegalDocument, ServiceError> {
        self.get_record("legal_documents", id)
    }

    pub fn get_legal_by_slug(
        &self,
        slug: &str,
        language: Language,
    ) -> Result<LegalDocument, ServiceError> {
        let rows = self.sql
            .query(
                "SELECT data FROM legal_documents WHERE slug = ?1 AND is_active = 1",
                &[Value::Text(slug.to_string())],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        let row = rows
            .first()
            .ok_or_else(|| ServiceError::NotFound(format!("legal_documents/{}", slug)))?;
        let data = row.get_str("data")
            .ok_or_else(|| ServiceError::Internal("missing data column".into()))?;
        let base: LegalDocument = serde_json::from_str(data)
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        Ok(self.apply_translation(base, language))
    }

    pub fn list_legal_documents(
        &self,
        language: Language,
        include_inactive: bool,
        params: &ListParams,
    ) -> Result<ListResult<LegalDocument>, ServiceError> {
        let mut filters: Vec<(&str, Value)> = Vec::new();
        if !include_inactive {
            filters.push(("is_active", Value::Integer(1)));
        }

        let limit = params.limit.min(500);
        let result: ListResult<LegalDocument> = self.list_records(
            "legal_documents",
            &filters,
            "create_at ASC",
            limit,
            params.offset,
        )?;

        Ok(ListResult {
            items: self.merged_list(result.items, language),
            total: result.total,
        })
    }

    pub fn patch_legal_document(
        &self,
        id: &str,
        patch: serde_json::Value,
    ) -> Result<LegalDocument, ServiceError> {
        let current: LegalDocument = self.get_record("legal_documents", id)?;
        let updated: LegalDocument = Self::apply_patch(&current, patch)?;
        let now = updated.update_at.clone().unwrap_or_default();
        self.update_record("legal_documents", id, &updated, &legal_indexes(&updated, &now))?;
        Ok(updated)
    }

    pub fn delete_legal_document(&self, id: &str) -> Result<(), ServiceError> {
        self.delete_record("legal_documents", id)?;
        self.delete_translations(EntityType::LegalDocument, id)
    }
}

fn legal_indexes<'a>(record: &'a LegalDocument, now: &'a str) -> Vec<(&'a str, Value)> {
    vec![
        ("slug", Value::Text(record.slug.clone())),
        ("is_active", Value::bool(record.is_active)),
        ("create_at", Value::opt_text(record.create_at.as_deref())),
        ("update_at", Value::Text(now.to_string())),
    ]
}
