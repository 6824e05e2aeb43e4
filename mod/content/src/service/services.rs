//! Service offerings — CRUD, merged public views, and the admin
//! write-back path.

use serde::Deserialize;

use vitrina_core::{new_id, now_rfc3339, ListParams, ListResult, ServiceError};
use vitrina_sql::Value;

use crate::model::{EntityType, FaqItem, Language, ServiceOffering};
use crate::slug::slugify;
use super::{ContentService, TranslationInput};

/// Admin save payload: full base fields plus an optional translation
/// overlay, persisted in one call (base first, then translation).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveService {
    /// Present for updates, absent for creation.
    #[serde(default)]
    pub id: Option<String>,

    pub title: String,

    #[serde(default)]
    pub short_description: Option<String>,

    #[serde(default)]
    pub full_description: Option<String>,

    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default)]
    pub faq: Vec<FaqItem>,

    #[serde(default)]
    pub price: Option<String>,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub sort_order: i64,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default)]
    pub meta_title: Option<String>,

    #[serde(default)]
    pub meta_description: Option<String>,

    #[serde(default)]
    pub meta_keywords: Option<String>,

    #[serde(default)]
    pub translation: Option<TranslationInput>,
}

fn default_true() -> bool {
    true
}

impl ContentService {
    /// Save a service offering (insert if new, update if existing).
    ///
    /// The slug is derived from the primary-language title at creation
    /// only; later edits never regenerate it. The base write and the
    /// optional translation write are not one transaction — if the
    /// translation write fails the base row persists and the error
    /// surfaces to the operator.
    pub fn save_service(&self, input: SaveService) -> Result<ServiceOffering, ServiceError> {
        if input.title.trim().is_empty() {
            return Err(ServiceError::Validation("title must be non-empty".into()));
        }

        let now = now_rfc3339();
        let translation = input.translation.clone();

        let record = match &input.id {
            Some(id) => {
                let current: ServiceOffering = self.get_record("services", id)?;
                let record = ServiceOffering {
                    id: current.id.clone(),
                    slug: current.slug.clone(),
                    title: input.title,
                    short_description: input.short_description,
                    full_description: input.full_description,
                    features: input.features,
                    faq: input.faq,
                    price: input.price,
                    image: input.image,
                    sort_order: input.sort_order,
                    is_active: input.is_active,
                    is_featured: input.is_featured,
                    meta_title: input.meta_title,
                    meta_description: input.meta_description,
                    meta_keywords: input.meta_keywords,
                    create_at: current.create_at.clone(),
                    update_at: Some(now.clone()),
                };
                self.update_record("services", id, &record, &service_indexes(&record, &now))?;
                record
            }
            None => {
                let id = new_id();
                let slug = derive_slug(&input.title, &id);
                let record = ServiceOffering {
                    id: id.clone(),
                    slug,
                    title: input.title,
                    short_description: input.short_description,
                    full_description: input.full_description,
                    features: input.features,
                    faq: input.faq,
                    price: input.price,
                    image: input.image,
                    sort_order: input.sort_order,
                    is_active: input.is_active,
                    is_featured: input.is_featured,
                    meta_title: input.meta_title,
                    meta_description: input.meta_description,
                    meta_keywords: input.meta_keywords,
                    create_at: Some(now.clone()),
                    update_at: Some(now.clone()),
                };
                self.insert_record("services", &id, &record, &service_indexes(&record, &now))?;
                record
            }
        };

        if let Some(tr) = translation {
            self.upsert_translation(EntityType::Service, &record.id, tr.language, tr.fields)?;
        }

        Ok(record)
    }

    pub fn get_service(&self, id: &str) -> Result<ServiceOffering, ServiceError> {
        self.get_record("services", id)
    }

    /// Public detail view: the active service with this slug, merged
    /// for the requested language.
    pub fn get_service_by_slug(
        &self,
        slug: &str,
        language: Language,
    ) -> Result<ServiceOffering, ServiceError> {
        let rows = self.sql
            .query(
                "SELECT data FROM services WHERE slug = ?1 AND is_active = 1",
                &[Value::Text(slug.to_string())],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        let row = rows
            .first()
            .ok_or_else(|| ServiceError::NotFound(format!("services/{}", slug)))?;
        let data = row.get_str("data")
            .ok_or_else(|| ServiceError::Internal("missing data column".into()))?;
        let base: ServiceOffering = serde_json::from_str(data)
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        Ok(self.apply_translation(base, language))
    }

    /// List services for one language. Visibility and ordering come
    /// from base rows and are applied before translations are merged.
    pub fn list_services(
        &self,
        language: Language,
        include_inactive: bool,
        params: &ListParams,
    ) -> Result<ListResult<ServiceOffering>, ServiceError> {
        let mut filters: Vec<(&str, Value)> = Vec::new();
        if !include_inactive {
            filters.push(("is_active", Value::Integer(1)));
        }

        let limit = params.limit.min(500);
        let result: ListResult<ServiceOffering> = self.list_records(
            "services",
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

    /// Admin PATCH edit (JSON merge-patch, immutable fields protected).
    pub fn patch_service(
        &self,
        id: &str,
        patch: serde_json::Value,
    ) -> Result<ServiceOffering, ServiceError> {
        let current: ServiceOffering = self.get_record("services", id)?;
        let updated: ServiceOffering = Self::apply_patch(&current, patch)?;
        let now = updated.update_at.clone().unwrap_or_default();
        self.update_record("services", id, &updated, &service_indexes(&updated, &now))?;
        Ok(updated)
    }

    /// Explicit admin delete; the entity's translations go with it.
    pub fn delete_service(&self, id: &str) -> Result<(), ServiceError> {
        self.delete_record("services", id)?;
        self.delete_translations(EntityType::Service, id)
    }
}

fn service_indexes<'a>(record: &'a ServiceOffering, now: &'a str) -> Vec<(&'a str, Value)> {
    vec![
        ("slug", Value::Text(record.slug.clone())),
        ("sort_order", Value::Integer(record.sort_order)),
        ("is_active", Value::bool(record.is_active)),
        ("is_featured", Value::bool(record.is_featured)),
        ("create_at", Value::opt_text(record.create_at.as_deref())),
        ("update_at", Value::Text(now.to_string())),
    ]
}

/// Slug from the primary-language title; a title that transliterates
/// to nothing falls back to the record id.
pub(crate) fn derive_slug(title: &str, id: &str) -> String {
    let slug = slugify(title);
    if slug.is_empty() {
        id.to_string()
    } else {
        slug
    }
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

    fn save_input(title: &str) -> SaveService {
        SaveService {
            id: None,
            title: title.into(),
            short_description: None,
            full_description: None,
            features: vec![],
            faq: vec![],
            price: None,
            image: None,
            sort_order: 0,
            is_active: true,
            is_featured: false,
            meta_title: None,
            meta_description: None,
            meta_keywords: None,
            translation: None,
        }
    }

    #[test]
    fn create_derives_slug_from_primary_title() {
        let svc = svc();
        let created = svc.save_service(save_input("Корпоративный сайт")).unwrap();
        assert_eq!(created.slug, "korporativnyi-sait");
        assert!(created.create_at.is_some());
    }

    #[test]
    fn slug_is_stable_across_title_edits() {
        let svc = svc();
        let created = svc.save_service(save_input("Корпоративный сайт")).unwrap();

        let mut edit = save_input("Совсем другое название");
        edit.id = Some(created.id.clone());
        let updated = svc.save_service(edit).unwrap();

        assert_eq!(updated.slug, created.slug);
        assert_eq!(updated.title, "Совсем другое название");
        assert_eq!(updated.create_at, created.create_at);
    }

    #[test]
    fn save_with_translation_round_trips_through_merge() {
        let svc = svc();
        let mut input = save_input("Корпоративный сайт");
        input.short_description = Some("Сайт под ключ".into());
        input.translation = Some(TranslationInput {
            language: Language::En,
            fields: json!({"title": "Corporate Website"}),
        });

        let created = svc.save_service(input).unwrap();

        let en = svc.get_service_by_slug(&created.slug, Language::En).unwrap();
        assert_eq!(en.title, "Corporate Website");
        // Untranslated field falls back to base; slug never translates.
        assert_eq!(en.short_description.as_deref(), Some("Сайт под ключ"));
        assert_eq!(en.slug, "korporativnyi-sait");

        let ru = svc.get_service_by_slug(&created.slug, Language::Ru).unwrap();
        assert_eq!(ru.title, "Корпоративный сайт");
    }

    #[test]
    fn empty_translation_payload_is_not_persisted() {
        let svc = svc();
        let mut input = save_input("Лендинг");
        input.translation = Some(TranslationInput {
            language: Language::En,
            fields: json!({"title": "", "features": []}),
        });

        let created = svc.save_service(input).unwrap();
        let tr = svc
            .get_translation(EntityType::Service, &created.id, Language::En)
            .unwrap();
        assert!(tr.is_none());
    }

    #[test]
    fn translation_for_primary_language_is_rejected() {
        let svc = svc();
        let created = svc.save_service(save_input("Лендинг")).unwrap();
        let err = svc
            .upsert_translation(
                EntityType::Service,
                &created.id,
                Language::Ru,
                json!({"title": "x"}),
            )
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn visibility_is_independent_of_translation() {
        let svc = svc();

        let mut hidden = save_input("Скрытая услуга");
        hidden.is_active = false;
        hidden.translation = Some(TranslationInput {
            language: Language::En,
            fields: json!({"title": "Hidden service"}),
        });
        svc.save_service(hidden).unwrap();

        // Active but never translated.
        svc.save_service(save_input("Поддержка")).unwrap();

        let listed = svc
            .list_services(Language::En, false, &ListParams::default())
            .unwrap();
        assert_eq!(listed.total, 1);
        assert_eq!(listed.items.len(), 1);
        // Included in the base language despite the missing translation.
        assert_eq!(listed.items[0].title, "Поддержка");

        // Admin view still sees both.
        let all = svc
            .list_services(Language::Ru, true, &ListParams::default())
            .unwrap();
        assert_eq!(all.total, 2);
    }

    #[test]
    fn list_orders_by_base_sort_order_before_merging() {
        let svc = svc();
        let mut a = save_input("Первая");
        a.sort_order = 2;
        let mut b = save_input("Вторая");
        b.sort_order = 1;
        svc.save_service(a).unwrap();
        svc.save_service(b).unwrap();

        let listed = svc
            .list_services(Language::En, false, &ListParams::default())
            .unwrap();
        assert_eq!(listed.items[0].title, "Вторая");
        assert_eq!(listed.items[1].title, "Первая");
    }

    #[test]
    fn patch_cannot_touch_slug_or_id() {
        let svc = svc();
        let created = svc.save_service(save_input("Лендинг")).unwrap();

        let patched = svc
            .patch_service(
                &created.id,
                json!({"slug": "hacked", "id": "other", "title": "Лендинг 2.0"}),
            )
            .unwrap();
        assert_eq!(patched.slug, created.slug);
        assert_eq!(patched.id, created.id);
        assert_eq!(patched.title, "Лендинг 2.0");
    }

    #[test]
    fn delete_removes_base_and_translations() {
        let svc = svc();
        let mut input = save_input("Лендинг");
        input.translation = Some(TranslationInput {
            language: Language::En,
            fields: json!({"title": "Landing"}),
        });
        let created = svc.save_service(input).unwrap();

        svc.delete_service(&created.id).unwrap();
        assert!(matches!(
            svc.get_service(&created.id),
            Err(ServiceError::NotFound(_))
        ));
        assert!(svc
            .get_translation(EntityType::Service, &created.id, Language::En)
            .unwrap()
            .is_none());
    }

    #[test]
    fn duplicate_slug_is_a_conflict() {
        let svc = svc();
        svc.save_service(save_input("Лендинг")).unwrap();
        let err = svc.save_service(save_input("Лендинг")).unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }
}
