use serde::{Deserialize, Serialize};

use super::{EntityType, Localized};

/// One FAQ entry shown on a service detail page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// ServiceOffering — one service the studio sells.
///
/// The base row is written in the primary language and also carries
/// everything that never varies by language: slug, price, image,
/// ordering and visibility flags. SEO fields are folded directly into
/// this row (service detail pages have no separate `page_seo` record —
/// the metadata resolver hides that).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOffering {
    /// Primary identifier.
    pub id: String,

    /// URL slug, derived from the primary-language title at creation
    /// and never regenerated afterwards.
    pub slug: String,

    /// Title in the primary language.
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,

    /// Bullet-point feature list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub faq: Vec<FaqItem>,

    /// Display price ("от 90 000 ₽"). Not localizable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default)]
    pub sort_order: i64,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub is_featured: bool,

    // ── Folded SEO fields ──

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_at: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Localized for ServiceOffering {
    const ENTITY_TYPE: EntityType = EntityType::Service;
    const LOCALIZABLE_FIELDS: &'static [&'static str] = &[
        "title",
        "shortDescription",
        "fullDescription",
        "features",
        "faq",
        "metaTitle",
        "metaDescription",
        "metaKeywords",
    ];

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_json_roundtrip() {
        let s = ServiceOffering {
            id: "a1".into(),
            slug: "corporate".into(),
            title: "Корпоративный сайт".into(),
            short_description: Some("Сайт под ключ".into()),
            full_description: None,
            features: vec!["CMS".into(), "SEO".into()],
            faq: vec![FaqItem {
                question: "Сколько времени?".into(),
                answer: "От месяца.".into(),
            }],
            price: Some("от 90 000 ₽".into()),
            image: None,
            sort_order: 1,
            is_active: true,
            is_featured: false,
            meta_title: None,
            meta_description: None,
            meta_keywords: None,
            create_at: None,
            update_at: None,
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: ServiceOffering = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }

    #[test]
    fn localizable_fields_exclude_base_only_attributes() {
        for field in ["slug", "price", "image", "sortOrder", "isActive", "isFeatured"] {
            assert!(!ServiceOffering::LOCALIZABLE_FIELDS.contains(&field));
        }
    }
}
