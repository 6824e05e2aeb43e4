use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};

use vitrina_core::{ListParams, ListResult, ServiceError};

use crate::model::{EntityType, ServiceOffering, TranslationRow};
use crate::service::services::SaveService;
use crate::service::TranslationInput;
use super::{ok_json, AppState, LangParams};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/services", post(save_service).get(list_services))
        .route(
            "/services/{id}",
            get(get_service).patch(patch_service).delete(delete_service),
        )
        .route("/services/{id}/translation", put(upsert_translation))
        .route("/services/by-slug/{slug}", get(get_by_slug))
}

async fn save_service(
    State(state): State<AppState>,
    Json(body): Json<SaveService>,
) -> Result<Json<ServiceOffering>, ServiceError> {
    ok_json(state.svc.save_service(body))
}

async fn list_services(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
    Query(lang): Query<LangParams>,
) -> Result<Json<ListResult<ServiceOffering>>, ServiceError> {
    ok_json(state.svc.list_services(lang.lang, lang.all, &params))
}

async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ServiceOffering>, ServiceError> {
    ok_json(state.svc.get_service(&id))
}

async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(lang): Query<LangParams>,
) -> Result<Json<ServiceOffering>, ServiceError> {
    ok_json(state.svc.get_service_by_slug(&slug, lang.lang))
}

async fn patch_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<serde_json::Value>,
) -> Result<Json<ServiceOffering>, ServiceError> {
    ok_json(state.svc.patch_service(&id, patch))
}

async fn upsert_translation(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<TranslationInput>,
) -> Result<Json<Option<TranslationRow>>, ServiceError> {
    ok_json(
        state
            .svc
            .upsert_translation(EntityType::Service, &id, body.language, body.fields),
    )
}

async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    state.svc.delete_service(&id)?;
    Ok(Json(serde_json::json!({"ok": true})))
}
