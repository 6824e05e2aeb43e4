use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};

use vitrina_core::{ListParams, ListResult, ServiceError};

use crate::model::{CaseStudy, EntityType, TranslationRow};
use crate::service::cases::SaveCase;
use crate::service::TranslationInput;
use super::{ok_json, AppState, LangParams};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/cases", post(save_case).get(list_cases))
        .route(
            "/cases/{id}",
            get(get_case).patch(patch_case).delete(delete_case),
        )
        .route("/cases/{id}/translation", put(upsert_translation))
        .route("/cases/by-slug/{slug}", get(get_by_slug))
}

async fn save_case(
    State(state): State<AppState>,
    Json(body): Json<SaveCase>,
) -> Result<Json<CaseStudy>, ServiceError> {
    ok_json(state.svc.save_case(body))
}

async fn list_cases(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
    Query(lang): Query<LangParams>,
) -> Result<Json<ListResult<CaseStudy>>, ServiceError> {
    ok_json(state.svc.list_cases(lang.lang, lang.all, &params))
}

async fn get_case(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CaseStudy>, ServiceError> {
    ok_json(state.svc.get_case(&id))
}

async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(lang): Query<LangParams>,
) -> Result<Json<CaseStudy>, ServiceError> {
    ok_json(state.svc.get_case_by_slug(&slug, lang.lang))
}

async fn patch_case(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<serde_json::Value>,
) -> Result<Json<CaseStudy>, ServiceError> {
    ok_json(state.svc.patch_case(&id, patch))
}

async fn upsert_translation(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<TranslationInput>,
) -> Result<Json<Option<TranslationRow>>, ServiceError> {
    ok_json(
        state
            .svc
            .upsert_translation(EntityType::CaseStudy, &id, body.language, body.fields),
    )
}

async fn delete_case(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    state.svc.delete_case(&id)?;
    Ok(Json(serde_json::json!({"ok": true})))
}
