use serde::{Deserialize, Serialize};

use super::{EntityType, Localized};

/// TeamMember — one person on the team page. Keyed by id only; team
/// members have no public slug.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,

    /// Name in the primary language (translations may transliterate).
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,

    #[serde(default)]
    pub sort_order: i64,

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

impl Localized for TeamMember {
    const ENTITY_TYPE: EntityType = EntityType::TeamMember;
    const LOCALIZABLE_FIELDS: &'static [&'static str] = &["name", "position", "bio"];

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_json_roundtrip() {
        let m = TeamMember {
            id: "m1".into(),
            name: "Анна Петрова".into(),
            position: Some("Арт-директор".into()),
            bio: None,
            photo: None,
            sort_order: 2,
            is_active: true,
            create_at: None,
            update_at: None,
        };
        let json = serde_json::to_string(&m).unwrap();
        let back: TeamMember = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
