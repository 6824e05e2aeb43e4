use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};

use vitrina_core::{ListParams, ListResult, ServiceError};

use crate::model::{EntityType, LegalDocument, TranslationRow};
use crate::service::legal::SaveLegalDocument;
use crate::service::TranslationInput;
use super::{ok_json, AppState, LangParams};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/legal", post(save_document).get(list_documents))
        .route(
            "/legal/{id}",
            get(get_document).patch(patch_document).delete(delete_document),
        )
        .route("/legal/{id}/translation", put(upsert_translation))
        .route("/legal/by-slug/{slug}", get(get_by_slug))
}

async fn save_document(
    State(state): State<AppState>,
    Json(body): Json<SaveLegalDocument>,
) -> Result<Json<LegalDocument>, ServiceError> {
    ok_json(state.svc.save_legal_document(body))
}

async fn list_documents(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
    Query(lang): Query<LangParams>,
) -> Result<Json<ListResult<LegalDocument>>, ServiceError> {
    ok_json(state.svc.list_legal_documents(lang.lang, lang.all, &params))
}

async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LegalDocument>, ServiceError> {
    ok_json(state.svc.get_legal_document(&id))
}

async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(lang): Query<LangParams>,
) -> Result<Json<LegalDocument>, ServiceError> {
    ok_json(state.svc.get_legal_by_slug(&slug, lang.lang))
}

async fn patch_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<serde_json::Value>,
) -> Result<Json<LegalDocument>, ServiceError> {
    ok_json(state.svc.patch_legal_document(&id, patch))
}

async fn upsert_translation(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<TranslationInput>,
) -> Result<Json<Option<TranslationRow>>, ServiceError> {
    ok_json(
        state
            .svc
            .upsert_translation(EntityType::LegalDocument, &id, body.language, body.fields),
    )
}

async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    state.svc.delete_legal_document(&id)?;
    Ok(Json(serde_json::json!({"ok": true})))
}
