use axum::{
    extract::{Path, Query, State},
    response::Html,
    routing::{delete, get},
    Json, Router,
};

use vitrina_core::{ListParams, ListResult, ServiceError};

use crate::head::HeadDocument;
use crate::model::PageSeoRecord;
use super::{ok_json, AppState, LangParams};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/seo", get(list_seo).put(upsert_seo))
        .route("/seo/{*page_slug}", delete(delete_seo))
        .route("/meta/{*page_slug}", get(resolve_meta))
        .route("/head/{*page_slug}", get(render_head))
}

async fn list_seo(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResult<PageSeoRecord>>, ServiceError> {
    ok_json(state.svc.list_page_seo(&params))
}

async fn upsert_seo(
    State(state): State<AppState>,
    Json(record): Json<PageSeoRecord>,
) -> Result<Json<PageSeoRecord>, ServiceError> {
    ok_json(state.svc.upsert_page_seo(record))
}

async fn delete_seo(
    State(state): State<AppState>,
    Path(page_slug): Path<String>,
    Query(lang): Query<LangParams>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    state.svc.delete_page_seo(&page_slug, lang.lang)?;
    Ok(Json(serde_json::json!({"ok": true})))
}

/// Resolved metadata for a page. Hides the service-detail special
/// case; 404 means "no record for any language variant" and the page
/// falls back to its own literal defaults.
async fn resolve_meta(
    State(state): State<AppState>,
    Path(page_slug): Path<String>,
    Query(lang): Query<LangParams>,
) -> Result<Json<PageSeoRecord>, ServiceError> {
    state
        .svc
        .resolve_metadata(&page_slug, lang.lang)
        .map(Json)
        .ok_or_else(|| ServiceError::NotFound(format!("no metadata for '{}'", page_slug)))
}

/// The server-rendered head fragment for a page: resolved metadata
/// applied to a fresh head model. An unknown page yields the forced
/// tags only (og:type, og:url).
async fn render_head(
    State(state): State<AppState>,
    Path(page_slug): Path<String>,
    Query(lang): Query<LangParams>,
) -> Html<String> {
    let page_url = state.config.page_url(&page_slug);
    let mut head = HeadDocument::new();

    match state.svc.resolve_metadata(&page_slug, lang.lang) {
        Some(record) => head.apply(&record, &page_url),
        None => head.apply(&PageSeoRecord::empty(&page_slug, lang.lang), &page_url),
    }

    Html(head.render())
}
