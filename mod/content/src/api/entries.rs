use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use vitrina_core::ServiceError;

use crate::model::{ContentEntry, Language};
use super::{ok_json, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/entries", get(list_entries).put(upsert_entry))
        .route("/resolve", get(resolve))
        .route("/sections/{section}", get(resolve_section))
}

#[derive(Deserialize)]
struct EntriesQuery {
    #[serde(default)]
    section: Option<String>,
}

async fn list_entries(
    State(state): State<AppState>,
    Query(q): Query<EntriesQuery>,
) -> Result<Json<Vec<ContentEntry>>, ServiceError> {
    ok_json(state.svc.get_content_entries(q.section.as_deref()))
}

async fn upsert_entry(
    State(state): State<AppState>,
    Json(entry): Json<ContentEntry>,
) -> Result<Json<ContentEntry>, ServiceError> {
    ok_json(state.svc.upsert_content_entry(entry))
}

#[derive(Deserialize)]
struct ResolveQuery {
    section: String,
    key: String,
    #[serde(default)]
    lang: Language,
    /// Caller-supplied fallback literal; wins over the injected table.
    #[serde(default)]
    fallback: Option<String>,
}

async fn resolve(
    State(state): State<AppState>,
    Query(q): Query<ResolveQuery>,
) -> Json<serde_json::Value> {
    let value = state
        .svc
        .resolve_with(&q.section, &q.key, q.lang, q.fallback.as_deref());
    Json(serde_json::json!({ "value": value }))
}

#[derive(Deserialize)]
struct SectionQuery {
    #[serde(default)]
    lang: Language,
}

async fn resolve_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
    Query(q): Query<SectionQuery>,
) -> Json<HashMap<String, String>> {
    Json(state.svc.resolve_section(&section, q.lang))
}
