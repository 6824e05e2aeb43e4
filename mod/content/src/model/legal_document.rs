use serde::{Deserialize, Serialize};

use super::{EntityType, Localized};

/// LegalDocument — privacy policy, offer terms and similar pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LegalDocument {
    pub id: String,

    /// URL slug, fixed at creation.
    pub slug: String,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Date the current revision took effect (RFC 3339 date).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<String>,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_at: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Localized for LegalDocument {
    const ENTITY_TYPE: EntityType = EntityType::LegalDocument;
    const LOCALIZABLE_FIELDS: &'static [&'static str] = &["title", "body"];

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_json_roundtrip() {
        let d = LegalDocument {
            id: "l1".into(),
            slug: "privacy".into(),
            title: "Политика конфиденциальности".into(),
            body: Some("Текст политики.".into()),
            effective_date: Some("2026-01-01".into()),
            is_active: true,
            create_at: None,
            update_at: None,
        };
        let json = serde_json::to_string(&d).unwrap();
        let back: LegalDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(d, back);
    }
}
