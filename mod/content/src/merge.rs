//! The entity translation merger.
//!
//! One generic code path merges a base row with an optional
//! translation row for every entity type, parameterized by the type's
//! declared localizable field list. A translation value wins only when
//! it is non-empty; everything else stays as the base row wrote it.

use serde_json::Value;

use crate::model::{EntityType, Localized, TranslationRow};
use crate::model::{CaseStudy, LegalDocument, ServiceOffering, TeamMember};

/// Whether a translation value counts as "absent" for merge purposes:
/// null, a blank string, or an empty array.
pub fn is_empty_value(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(a) => a.is_empty(),
        _ => false,
    }
}

/// Whether an entire translation payload is empty — nothing worth
/// persisting. Non-object payloads count as empty.
pub fn payload_is_empty(fields: &Value) -> bool {
    match fields.as_object() {
        Some(map) => map.values().all(is_empty_value),
        None => true,
    }
}

/// The localizable field list for an entity type known only at runtime
/// (write-back path, where the type arrives as a request tag).
pub fn localizable_fields(entity_type: EntityType) -> &'static [&'static str] {
    match entity_type {
        EntityType::Service => ServiceOffering::LOCALIZABLE_FIELDS,
        EntityType::CaseStudy => CaseStudy::LOCALIZABLE_FIELDS,
        EntityType::TeamMember => TeamMember::LOCALIZABLE_FIELDS,
        EntityType::LegalDocument => LegalDocument::LOCALIZABLE_FIELDS,
    }
}

/// Overlay non-empty translation values onto a base JSON object, for
/// the declared localizable fields only.
pub fn merge_fields(base: &mut Value, translation: &Value, localizable: &[&str]) {
    let base_obj = match base.as_object_mut() {
        Some(o) => o,
        None => return,
    };
    let tr_obj = match translation.as_object() {
        Some(o) => o,
        None => return,
    };

    for field in localizable {
        if let Some(v) = tr_obj.get(*field) {
            if !is_empty_value(v) {
                base_obj.insert((*field).to_string(), v.clone());
            }
        }
    }
}

/// Merge a base row with an optional translation row.
///
/// Fail-soft: a malformed translation payload degrades to the base
/// row (with a diagnostic) rather than failing the page.
pub fn merged<T: Localized>(base: &T, translation: Option<&TranslationRow>) -> T {
    let tr = match translation {
        Some(t) => t,
        None => return base.clone(),
    };

    let mut json = match serde_json::to_value(base) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(entity = T::ENTITY_TYPE.as_str(), error = %e, "merge: base serialization failed");
            return base.clone();
        }
    };

    merge_fields(&mut json, &tr.fields, T::LOCALIZABLE_FIELDS);

    match serde_json::from_value(json) {
        Ok(m) => m,
        Err(e) => {
            tracing::warn!(
                entity = T::ENTITY_TYPE.as_str(),
                id = base.id(),
                error = %e,
                "merge: translation overlay produced an invalid record, using base"
            );
            base.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Language;
    use serde_json::json;

    fn base_service() -> ServiceOffering {
        ServiceOffering {
            id: "s1".into(),
            slug: "corporate".into(),
            title: "Корпоративный сайт".into(),
            short_description: Some("Сайт под ключ".into()),
            full_description: None,
            features: vec!["CMS".into()],
            faq: vec![],
            price: Some("от 90 000 ₽".into()),
            image: Some("corp.png".into()),
            sort_order: 1,
            is_active: true,
            is_featured: false,
            meta_title: None,
            meta_description: None,
            meta_keywords: None,
            create_at: None,
            update_at: None,
        }
    }

    fn translation(fields: Value) -> TranslationRow {
        TranslationRow {
            entity_type: "service".into(),
            entity_id: "s1".into(),
            language: Language::En,
            fields,
            update_at: None,
        }
    }

    #[test]
    fn translated_fields_override_base() {
        let tr = translation(json!({
            "title": "Corporate Website",
            "shortDescription": "Turnkey website",
        }));
        let m = merged(&base_service(), Some(&tr));
        assert_eq!(m.title, "Corporate Website");
        assert_eq!(m.short_description.as_deref(), Some("Turnkey website"));
    }

    #[test]
    fn slug_and_price_never_translated() {
        // Even a hostile payload naming non-localizable fields cannot
        // touch them.
        let tr = translation(json!({
            "title": "Corporate Website",
            "slug": "hacked",
            "price": "$1",
            "isActive": false,
        }));
        let m = merged(&base_service(), Some(&tr));
        assert_eq!(m.slug, "corporate");
        assert_eq!(m.price.as_deref(), Some("от 90 000 ₽"));
        assert!(m.is_active);
    }

    #[test]
    fn empty_translation_values_do_not_shadow_base() {
        let tr = translation(json!({
            "title": "",
            "shortDescription": "Turnkey website",
            "features": [],
        }));
        let m = merged(&base_service(), Some(&tr));
        // Base title survives the empty translated title; the non-empty
        // description wins.
        assert_eq!(m.title, "Корпоративный сайт");
        assert_eq!(m.short_description.as_deref(), Some("Turnkey website"));
        assert_eq!(m.features, vec!["CMS".to_string()]);
    }

    #[test]
    fn no_translation_returns_base() {
        let m = merged(&base_service(), None);
        assert_eq!(m, base_service());
    }

    #[test]
    fn malformed_payload_degrades_to_base() {
        // `features` must be an array of strings; a number is invalid.
        let tr = translation(json!({"features": [1, 2, 3]}));
        let m = merged(&base_service(), Some(&tr));
        assert_eq!(m, base_service());
    }

    #[test]
    fn payload_emptiness() {
        assert!(payload_is_empty(&json!({})));
        assert!(payload_is_empty(&json!({"title": "", "tags": [], "body": null})));
        assert!(payload_is_empty(&json!(null)));
        assert!(!payload_is_empty(&json!({"title": "x"})));
    }

    #[test]
    fn localizable_fields_by_runtime_tag() {
        assert_eq!(
            localizable_fields(EntityType::TeamMember),
            TeamMember::LOCALIZABLE_FIELDS
        );
    }
}
