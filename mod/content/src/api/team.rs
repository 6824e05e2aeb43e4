use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};

use vitrina_core::{ListParams, ListResult, ServiceError};

use crate::model::{EntityType, TeamMember, TranslationRow};
use crate::service::team::SaveTeamMember;
use crate::service::TranslationInput;
use super::{ok_json, AppState, LangParams};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/team", post(save_member).get(list_team))
        .route(
            "/team/{id}",
            get(get_member).patch(patch_member).delete(delete_member),
        )
        .route("/team/{id}/translation", put(upsert_translation))
}

async fn save_member(
    State(state): State<AppState>,
    Json(body): Json<SaveTeamMember>,
) -> Result<Json<TeamMember>, ServiceError> {
    ok_json(state.svc.save_team_member(body))
}

async fn list_team(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
    Query(lang): Query<LangParams>,
) -> Result<Json<ListResult<TeamMember>>, ServiceError> {
    ok_json(state.svc.list_team(lang.lang, lang.all, &params))
}

async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(lang): Query<LangParams>,
) -> Result<Json<TeamMember>, ServiceError> {
    ok_json(state.svc.get_team_member(&id, lang.lang))
}

async fn patch_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<serde_json::Value>,
) -> Result<Json<TeamMember>, ServiceError> {
    ok_json(state.svc.patch_team_member(&id, patch))
}

async fn upsert_translation(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<TranslationInput>,
) -> Result<Json<Option<TranslationRow>>, ServiceError> {
    ok_json(
        state
            .svc
            .upsert_translation(EntityType::TeamMember, &id, body.language, body.fields),
    )
}

async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    state.svc.delete_team_member(&id)?;
    Ok(Json(serde_json::json!({"ok": true})))
}
