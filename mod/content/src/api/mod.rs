pub mod cases;
pub mod entries;
pub mod legal;
pub mod seo;
pub mod services;
pub mod team;

use std::sync::Arc;

use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use vitrina_core::{ServiceConfig, ServiceError};

use crate::model::Language;
use crate::service::ContentService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub svc: Arc<ContentService>,
    pub config: Arc<ServiceConfig>,
}

/// Build the content API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/v1", api_routes())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(entries::routes())
        .merge(services::routes())
        .merge(cases::routes())
        .merge(team::routes())
        .merge(legal::routes())
        .merge(seo::routes())
}

/// Language + visibility query parameters shared by the read endpoints.
///
/// `lang` tolerates any string — malformed codes resolve as the
/// primary language at the deserialization boundary.
#[derive(Debug, Default, Deserialize)]
pub struct LangParams {
    #[serde(default)]
    pub lang: Language,

    /// Include inactive records (admin listings).
    #[serde(default)]
    pub all: bool,
}

/// Wrap a Result<T, ServiceError> into a JSON response. Write-path
/// errors pass through unchanged so the operator sees the failure.
pub(crate) fn ok_json<T: Serialize>(
    result: Result<T, ServiceError>,
) -> Result<Json<T>, ServiceError> {
    result.map(Json)
}
