use serde::{Deserialize, Serialize};

use super::Language;

/// PageSeoRecord — the per-page, per-language SEO metadata record.
///
/// Unique per `(page_slug, language)`. Service detail pages
/// (`services/<slug>`) have no row of their own — their SEO fields are
/// projected out of the service table by the metadata resolver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageSeoRecord {
    /// Page route relative to the site root (e.g. "about",
    /// "services/corporate").
    pub page_slug: String,

    pub language: Language,

    /// Document title (`<title>`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h1_tag: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_at: Option<String>,
}

impl PageSeoRecord {
    /// Deterministic storage id — one row per (page_slug, language).
    pub fn storage_id(page_slug: &str, language: Language) -> String {
        format!("{}:{}", page_slug, language.as_str())
    }

    /// An empty record for a given page/language, useful as a starting
    /// point for projections.
    pub fn empty(page_slug: &str, language: Language) -> Self {
        Self {
            page_slug: page_slug.to_string(),
            language,
            page_title: None,
            meta_title: None,
            meta_description: None,
            meta_keywords: None,
            h1_tag: None,
            canonical_url: None,
            og_title: None,
            og_description: None,
            og_image: None,
            create_at: None,
            update_at: None,
        }
    }
}
