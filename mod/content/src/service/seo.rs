//! The page metadata resolver.
//!
//! Most pages have a `page_seo` row per `(page_slug, language)`.
//! Service detail pages do not — their SEO fields live on the service
//! base/translation rows and are projected into a
//! [`PageSeoRecord`]-shaped object here, so callers never see the
//! schema inconsistency.

use vitrina_core::{now_rfc3339, ListParams, ListResult, ServiceError};
use vitrina_sql::Value;

use crate::model::{Language, PageSeoRecord, ServiceOffering};
use super::ContentService;

/// Route prefix marking a service detail page.
pub const SERVICE_PAGE_PREFIX: &str = "services/";

impl ContentService {
    /// Upsert the SEO record for one `(page_slug, language)` (admin
    /// write-back).
    ///
    /// Service detail slugs are rejected — their metadata lives on the
    /// service rows and is edited through the service save path.
    pub fn upsert_page_seo(&self, mut record: PageSeoRecord) -> Result<PageSeoRecord, ServiceError> {
        let slug = record.page_slug.trim().trim_matches('/').to_string();
        if slug.is_empty() {
            return Err(ServiceError::Validation("pageSlug must be non-empty".into()));
        }
        if slug.starts_with(SERVICE_PAGE_PREFIX) {
            return Err(ServiceError::Validation(format!(
                "SEO for '{}' is edited on the service itself",
                slug
            )));
        }
        record.page_slug = slug;

        let now = now_rfc3339();
        if record.create_at.is_none() {
            record.create_at = Some(now.clone());
        }
        record.update_at = Some(now.clone());

        let id = PageSeoRecord::storage_id(&record.page_slug, record.language);
        self.upsert_record(
            "page_seo",
            &id,
            &record,
            &[
                ("page_slug", Value::Text(record.page_slug.clone())),
                ("language", Value::Text(record.language.as_str().into())),
                ("update_at", Value::Text(now)),
            ],
        )?;

        Ok(record)
    }

    /// The stored SEO record for one `(page_slug, language)`, if any.
    pub fn get_page_seo(
        &self,
        page_slug: &str,
        language: Language,
    ) -> Result<Option<PageSeoRecord>, ServiceError> {
        let id = PageSeoRecord::storage_id(page_slug, language);
        self.get_record_opt("page_seo", &id)
    }

    /// All stored SEO records (admin listing).
    pub fn list_page_seo(&self, params: &ListParams) -> Result<ListResult<PageSeoRecord>, ServiceError> {
        let limit = params.limit.min(500);
        self.list_records("page_seo", &[], "page_slug ASC, language ASC", limit, params.offset)
    }

    pub fn delete_page_seo(&self, page_slug: &str, language: Language) -> Result<(), ServiceError> {
        let id = PageSeoRecord::storage_id(page_slug, language);
        self.delete_record("page_seo", &id)
    }

    /// Resolve the metadata record for a page.
    ///
    /// Fail-soft: store failures degrade to `None` with a diagnostic —
    /// a broken SEO fetch must never keep the page body from
    /// rendering. A missing record for the requested language falls
    /// back to the primary-language record before giving up.
    pub fn resolve_metadata(&self, page_slug: &str, language: Language) -> Option<PageSeoRecord> {
        let slug = page_slug.trim().trim_matches('/');

        if let Some(service_slug) = slug.strip_prefix(SERVICE_PAGE_PREFIX) {
            return match self.get_service_by_slug(service_slug, language) {
                Ok(svc) => Some(project_service_seo(&svc, language)),
                Err(ServiceError::NotFound(_)) => None,
                Err(e) => {
                    tracing::warn!(page_slug = slug, %language, error = %e, "metadata resolve failed");
                    None
                }
            };
        }

        for lang in candidate_languages(language) {
            match self.get_page_seo(slug, lang) {
                Ok(Some(record)) => return Some(record),
                Ok(None) => continue,
                Err(e) => {
                    tracing::warn!(page_slug = slug, %language, error = %e, "metadata resolve failed");
                    return None;
                }
            }
        }
        None
    }
}

/// The requested language first, then the primary as a fallback.
fn candidate_languages(language: Language) -> Vec<Language> {
    if language.is_primary() {
        vec![language]
    } else {
        vec![language, Language::PRIMARY]
    }
}

/// Project a (merged) service row into the generic metadata shape.
fn project_service_seo(svc: &ServiceOffering, language: Language) -> PageSeoRecord {
    let title = svc.meta_title.clone().unwrap_or_else(|| svc.title.clone());
    PageSeoRecord {
        page_title: Some(title.clone()),
        meta_title: Some(title.clone()),
        meta_description: svc.meta_description.clone().or_else(|| svc.short_description.clone()),
        meta_keywords: svc.meta_keywords.clone(),
        h1_tag: Some(svc.title.clone()),
        og_title: Some(title),
        og_description: svc.meta_description.clone().or_else(|| svc.short_description.clone()),
        og_image: svc.image.clone(),
        ..PageSeoRecord::empty(&format!("{}{}", SERVICE_PAGE_PREFIX, svc.slug), language)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use vitrina_sql::SqliteStore;

    use super::*;
    use crate::service::services::SaveService;
    use crate::service::{FallbackTable, TranslationInput};

    fn svc() -> ContentService {
        let sql = Arc::new(SqliteStore::open_in_memory().unwrap());
        ContentService::new(sql, FallbackTable::new()).unwrap()
    }

    fn seo_record(page_slug: &str, language: Language, title: &str) -> PageSeoRecord {
        PageSeoRecord {
            page_title: Some(title.into()),
            meta_description: Some(format!("{} description", title)),
            ..PageSeoRecord::empty(page_slug, language)
        }
    }

    #[test]
    fn upsert_and_resolve_roundtrip() {
        let svc = svc();
        svc.upsert_page_seo(seo_record("about", Language::Ru, "О студии")).unwrap();
        svc.upsert_page_seo(seo_record("about", Language::En, "About us")).unwrap();

        let en = svc.resolve_metadata("about", Language::En).unwrap();
        assert_eq!(en.page_title.as_deref(), Some("About us"));

        // Overwrite is idempotent per (slug, language).
        svc.upsert_page_seo(seo_record("about", Language::En, "About the studio")).unwrap();
        let en = svc.resolve_metadata("about", Language::En).unwrap();
        assert_eq!(en.page_title.as_deref(), Some("About the studio"));
        assert_eq!(svc.list_page_seo(&ListParams::default()).unwrap().total, 2);
    }

    #[test]
    fn missing_language_falls_back_to_primary_record() {
        let svc = svc();
        svc.upsert_page_seo(seo_record("contact", Language::Ru, "Контакты")).unwrap();

        let en = svc.resolve_metadata("contact", Language::En).unwrap();
        assert_eq!(en.page_title.as_deref(), Some("Контакты"));
    }

    #[test]
    fn unknown_page_resolves_to_none() {
        let svc = svc();
        assert!(svc.resolve_metadata("nonexistent", Language::Ru).is_none());
    }

    #[test]
    fn service_detail_pages_project_from_the_service_table() {
        let svc = svc();
        let created = svc
            .save_service(SaveService {
                id: None,
                title: "Корпоративный сайт".into(),
                short_description: Some("Сайт под ключ".into()),
                full_description: None,
                features: vec![],
                faq: vec![],
                price: None,
                image: Some("corp.png".into()),
                sort_order: 0,
                is_active: true,
                is_featured: false,
                meta_title: Some("Корпоративный сайт — разработка".into()),
                meta_description: None,
                meta_keywords: None,
                translation: Some(TranslationInput {
                    language: Language::En,
                    fields: json!({
                        "title": "Corporate Website",
                        "metaTitle": "Corporate Website — development",
                    }),
                }),
            })
            .unwrap();

        let slug = format!("services/{}", created.slug);

        let ru = svc.resolve_metadata(&slug, Language::Ru).unwrap();
        assert_eq!(ru.page_title.as_deref(), Some("Корпоративный сайт — разработка"));
        assert_eq!(ru.h1_tag.as_deref(), Some("Корпоративный сайт"));
        // metaDescription falls back to the short description.
        assert_eq!(ru.meta_description.as_deref(), Some("Сайт под ключ"));
        assert_eq!(ru.og_image.as_deref(), Some("corp.png"));

        let en = svc.resolve_metadata(&slug, Language::En).unwrap();
        assert_eq!(en.page_title.as_deref(), Some("Corporate Website — development"));
        assert_eq!(en.h1_tag.as_deref(), Some("Corporate Website"));

        // Unknown service slug: no record, not an error.
        assert!(svc.resolve_metadata("services/none", Language::Ru).is_none());
    }

    #[test]
    fn service_slugs_are_rejected_by_the_generic_upsert() {
        let svc = svc();
        let err = svc
            .upsert_page_seo(seo_record("services/corporate", Language::Ru, "x"))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn inactive_service_has_no_metadata() {
        let svc = svc();
        let created = svc
            .save_service(SaveService {
                id: None,
                title: "Скрытая".into(),
                short_description: None,
                full_description: None,
                features: vec![],
                faq: vec![],
                price: None,
                image: None,
                sort_order: 0,
                is_active: false,
                is_featured: false,
                meta_title: None,
                meta_description: None,
                meta_keywords: None,
                translation: None,
            })
            .unwrap();

        let slug = format!("services/{}", created.slug);
        assert!(svc.resolve_metadata(&slug, Language::Ru).is_none());
    }
}
