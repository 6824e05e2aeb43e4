//! Team members — CRUD, merged public views, admin write-back. Team
//! members have no public slug; they are keyed by id only.

use serde::Deserialize;

use vitrina_core::{new_id, now_rfc3339, ListParams, ListResult, ServiceError};
use vitrina_sql::Value;

use crate::model::{EntityType, Language, TeamMember};
use super::{ContentService, TranslationInput};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveTeamMember {
    #[serde(default)]
    pub id: Option<String>,

    pub name: String,

    #[serde(default)]
    pub position: Option<String>,

    #[serde(default)]
    pub bio: Option<String>,

    #[serde(default)]
    pub photo: Option<String>,

    #[serde(default)]
    pub sort_order: i64,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub translation: Option<TranslationInput>,
}

fn default_true() -> bool {
    true
}

impl ContentService {
    pub fn save_team_member(&self, input: SaveTeamMember) -> Result<TeamMember, ServiceError> {
        if input.name.trim().is_empty() {
            return Err(ServiceError::Validation("name must be non-empty".into()));
        }

        let now = now_rfc3339();
        let translation = input.translation.clone();

        let record = match &input.id {
            Some(id) => {
                let current: TeamMember = self.get_record("team_members", id)?;
                let record = TeamMember {
                    id: current.id.clone(),
                    name: input.name,
                    position: input.position,
                    bio: input.bio,
                    photo: input.photo,
                    sort_order: input.sort_order,
                    is_active: input.is_active,
                    create_at: current.create_at.clone(),
                    update_at: Some(now.clone()),
                };
                self.update_record("team_members", id, &record, &member_indexes(&record, &now))?;
                record
            }
            None => {
                let id = new_id();
                let record = TeamMember {
                    id: id.clone(),
                    name: input.name,
                    position: input.position,
                    bio: input.bio,
                    photo: input.photo,
                    sort_order: input.sort_order,
                    is_active: input.is_active,
                    create_at: Some(now.clone()),
                    update_at: Some(now.clone()),
                };
                self.insert_record("team_members", &id, &record, &member_indexes(&record, &now))?;
                record
            }
        };

        if let Some(tr) = translation {
            self.upsert_translation(EntityType::TeamMember, &record.id, tr.language, tr.fields)?;
        }

        Ok(record)
    }

    pub fn get_team_member(&self, id: &str, language: Language) -> Result<TeamMember, ServiceError> {
        let base: TeamMember = self.get_record("team_members", id)?;
        Ok(self.apply_translation(base, language))
    }

    pub fn list_team(
        &self,
        language: Language,
        include_inactive: bool,
        params: &ListParams,
    ) -> Result<ListResult<TeamMember>, ServiceError> {
        let mut filters: Vec<(&str, Value)> = Vec::new();
        if !include_inactive {
            filters.push(("is_active", Value::Integer(1)));
        }

        let limit = params.limit.min(500);
        let result: ListResult<TeamMember> = self.list_records(
            "team_members",
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

    pub fn patch_team_member(
        &self,
        id: &str,
        patch: serde_json::Value,
    ) -> Result<TeamMember, ServiceError> {
        let current: TeamMember = self.get_record("team_members", id)?;
        let updated: TeamMember = Self::apply_patch(&current, patch)?;
        let now = updated.update_at.clone().unwrap_or_default();
        self.update_record("team_members", id, &updated, &member_indexes(&updated, &now))?;
        Ok(updated)
    }

    pub fn delete_team_member(&self, id: &str) -> Result<(), ServiceError> {
        self.delete_record("team_members", id)?;
        self.delete_translations(EntityType::TeamMember, id)
    }
}

fn member_indexes<'a>(record: &'a TeamMember, now: &'a str) -> Vec<(&'a str, Value)> {
    vec![
        ("sort_order", Value::Integer(record.sort_order)),
        ("is_active", Value::bool(record.is_active)),
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

    #[test]
    fn name_and_position_translate() {
        let svc = svc();
        let created = svc
            .save_team_member(SaveTeamMember {
                id: None,
                name: "Анна Петрова".into(),
                position: Some("Арт-директор".into()),
                bio: None,
                photo: Some("anna.png".into()),
                sort_order: 1,
                is_active: true,
                translation: Some(TranslationInput {
                    language: Language::En,
                    fields: json!({"name": "Anna Petrova", "position": "Art Director"}),
                }),
            })
            .unwrap();

        let en = svc.get_team_member(&created.id, Language::En).unwrap();
        assert_eq!(en.name, "Anna Petrova");
        assert_eq!(en.position.as_deref(), Some("Art Director"));
        // Photo is never localized.
        assert_eq!(en.photo.as_deref(), Some("anna.png"));
    }

    #[test]
    fn untranslated_member_is_listed_in_base_language() {
        let svc = svc();
        svc.save_team_member(SaveTeamMember {
            id: None,
            name: "Иван Сидоров".into(),
            position: None,
            bio: None,
            photo: None,
            sort_order: 0,
            is_active: true,
            translation: None,
        })
        .unwrap();

        let listed = svc
            .list_team(Language::En, false, &ListParams::default())
            .unwrap();
        assert_eq!(listed.total, 1);
        assert_eq!(listed.items[0].name, "Иван Сидоров");
    }
}
