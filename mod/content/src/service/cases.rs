//! Case studies — CRUD, merged public views, admin write-back.

use serde::Deserialize;

use vitrina_core::{new_id, now_rfc3339, ListParams, ListResult, ServiceError};
use vitrina_sql::Value;

use crate::model::{CaseStudy, EntityType, Language};
use super::services::derive_slug;
use super::{ContentService, TranslationInput};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveCase {
    #[serde(default)]
    pub id: Option<String>,

    pub title: String,

    #[serde(default)]
    pub client: Option<String>,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub sort_order: i64,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default)]
    pub translation: Option<TranslationInput>,
}

fn default_true() -> bool {
    true
}

impl ContentService {
    pub fn save_case(&self, input: SaveCase) -> Result<CaseStudy, ServiceError> {
        if input.title.trim().is_empty() {
            return Err(ServiceError::Validation("title must be non-empty".into()));
        }

        let now = now_rfc3339();
        let translation = input.translation.clone();

        let record = match &input.id {
            Some(id) => {
                let current: CaseStudy = self.get_record("case_studies", id)?;
                let record = CaseStudy {
                    id: current.id.clone(),
                    slug: current.slug.clone(),
                    title: input.title,
                    client: input.client,
                    summary: input.summary,
                    body: input.body,
                    tags: input.tags,
                    image: input.image,
                    sort_order: input.sort_order,
                    is_active: input.is_active,
                    is_featured: input.is_featured,
                    create_at: current.create_at.clone(),
                    update_at: Some(now.clone()),
                };
                self.update_record("case_studies", id, &record, &case_indexes(&record, &now))?;
                record
            }
            None => {
                let id = new_id();
                let slug = derive_slug(&input.title, &id);
                let record = CaseStudy {
                    id: id.clone(),
                    slug,
                    title: input.title,
                    client: input.client,
                    summary: input.summary,
                    body: input.body,
                    tags: input.tags,
                    image: input.image,
                    sort_order: input.sort_order,
                    is_active: input.is_active,
                    is_featured: input.is_featured,
                    create_at: Some(now.clone()),
                    update_at: Some(now.clone()),
                };
                self.insert_record("case_studies", &id, &record, &case_indexes(&record, &now))?;
                record
            }
        };

        if let Some(tr) = translation {
            self.upsert_translation(EntityType::CaseStudy, &record.id, tr.language, tr.fields)?;
        }

        Ok(record)
    }

    pub fn get_case(&self, id: &str) -> Result<CaseStudy, ServiceError> {
        self.get_record("case_studies", id)
    }

    pub fn get_case_by_slug(&self, slug: &str, language: Language) -> Result<CaseStudy, ServiceError> {
        let rows = self.sql
            .query(
                "SELECT data FROM case_studies WHERE slug = ?1 AND is_active = 1",
                &[Value::Text(slug.to_string())],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        let row = rows
            .first()
            .ok_or_else(|| ServiceError::NotFound(format!("case_studies/{}", slug)))?;
        let data = row.get_str("data")
            .ok_or_else(|| ServiceError::Internal("missing data column".into()))?;
        let base: CaseStudy = serde_json::from_str(data)
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        Ok(self.apply_translation(base, language))
    }

    pub fn list_cases(
        &self,
        language: Language,
        include_inactive: bool,
        params: &ListParams,
    ) -> Result<ListResult<CaseStudy>, ServiceError> {
        let mut filters: Vec<(&str, Value)> = Vec::new();
        if !include_inactive {
            filters.push(("is_active", Value::Integer(1)));
        }

        let limit = params.limit.min(500);
        let result: ListResult<CaseStudy> = self.list_records(
            "case_studies",
            &filters,
            "sort_order ASC, create_at ASC",
            limit,
            params.offset,
        )?;

        Ok(ListResult {
            items: self.merged_list(result.items, language),
            total: result.total,
        })
    }

    pub fn patch_case(&self, id: &str, patch: serde_json::Value) -> Result<CaseStudy, ServiceError> {
        let current: CaseStudy = self.get_record("case_studies", id)?;
        let updated: CaseStudy = Self::apply_patch(&current, patch)?;
        let now = updated.update_at.clone().unwrap_or_default();
        self.update_record("case_studies", id, &updated, &case_indexes(&updated, &now))?;
        Ok(updated)
    }

    pub fn delete_case(&self, id: &str) -> Result<(), ServiceError> {
        self.delete_record("case_studies", id)?;
        self.delete_translations(EntityType::CaseStudy, id)
    }
}

fn case_indexes<'a>(record: &'a CaseStudy, now: &'a str) -> Vec<(&'a str, Value)> {
    vec![
        ("slug", Value::Text(record.slug.clone())),
        ("sort_order", Value::Integer(record.sort_order)),
        ("is_active", Value::bool(record.is_active)),
        ("is_featured", Value::bool(record.is_featured)),
        ("create_at", Value::opt_text(record.create_at.as_deref())),
        ("update_at", Value::Text(now.to_string())),
    ]
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use vitrina_sql::SqliteStore;

    use super::*;
    use crate::service::FallbackTable;

    fn svc() -> ContentService {
        let sql = Arc::new(SqliteStore::open_in_memory().unwrap());
        ContentService::new(sql, FallbackTable::new()).unwrap()
    }

    fn save_input(title: &str) -> SaveCase {
        SaveCase {
            id: None,
            title: title.into(),
            client: None,
            summary: None,
            body: None,
            tags: vec![],
            image: None,
            sort_order: 0,
            is_active: true,
            is_featured: false,
            translation: None,
        }
    }

    #[test]
    fn tags_translate_but_client_does_not() {
        let svc = svc();
        let mut input = save_input("Портал для финтеха");
        input.client = Some("Acme".into());
        input.tags = vec!["веб".into()];
        input.translation = Some(TranslationInput {
            language: Language::En,
            fields: json!({"title": "Fintech portal", "tags": ["web"]}),
        });
        let created = svc.save_case(input).unwrap();

        let en = svc.get_case_by_slug(&created.slug, Language::En).unwrap();
        assert_eq!(en.title, "Fintech portal");
        assert_eq!(en.tags, vec!["web".to_string()]);
        assert_eq!(en.client.as_deref(), Some("Acme"));
    }

    #[test]
    fn inactive_case_is_hidden_from_public_list() {
        let svc = svc();
        let mut input = save_input("Черновик");
        input.is_active = false;
        svc.save_case(input).unwrap();

        let listed = svc
            .list_cases(Language::Ru, false, &ListParams::default())
            .unwrap();
        assert_eq!(listed.total, 0);
    }
}
