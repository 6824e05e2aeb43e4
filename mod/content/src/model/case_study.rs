use serde::{Deserialize, Serialize};

use super::{EntityType, Localized};

/// CaseStudy — one portfolio case shown on the cases page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub id: String,

    /// URL slug, fixed at creation.
    pub slug: String,

    pub title: String,

    /// Client name. Shown as-is in both languages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,

    /// One-paragraph teaser for the list page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Full case write-up for the detail page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default)]
    pub sort_order: i64,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_at: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Localized for CaseStudy {
    const ENTITY_TYPE: EntityType = EntityType::CaseStudy;
    const LOCALIZABLE_FIELDS: &'static [&'static str] =
        &["title", "summary", "body", "tags"];

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_json_roundtrip() {
        let c = CaseStudy {
            id: "c1".into(),
            slug: "fintech-portal".into(),
            title: "Портал для финтеха".into(),
            client: Some("Acme".into()),
            summary: Some("Личный кабинет и витрина.".into()),
            body: None,
            tags: vec!["web".into(), "fintech".into()],
            image: None,
            sort_order: 0,
            is_active: true,
            is_featured: true,
            create_at: None,
            update_at: None,
        };
        let json = serde_json::to_string(&c).unwrap();
        let back: CaseStudy = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
