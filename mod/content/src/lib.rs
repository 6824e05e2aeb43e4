//! Content module — bilingual content localization, SEO metadata
//! resolution, and the admin write-back path.

pub mod api;
pub mod head;
pub mod merge;
pub mod model;
pub mod service;
pub mod slug;

use std::sync::Arc;

use axum::Router;

use vitrina_core::{Module, ServiceConfig, ServiceError};
use vitrina_sql::SQLStore;

use service::{ContentService, FallbackTable};

/// The content module — owns the content service and contributes the
/// `/content` routes.
pub struct ContentModule {
    service: Arc<ContentService>,
    config: Arc<ServiceConfig>,
}

impl ContentModule {
    /// Create the content module and initialise the storage schema.
    pub fn new(
        sql: Arc<dyn SQLStore>,
        fallbacks: FallbackTable,
        config: ServiceConfig,
    ) -> Result<Self, ServiceError> {
        let service = Arc::new(ContentService::new(sql, fallbacks)?);
        Ok(Self {
            service,
            config: Arc::new(config),
        })
    }

    /// Direct access to the content service, for embedding callers.
    pub fn service(&self) -> &Arc<ContentService> {
        &self.service
    }
}

impl Module for ContentModule {
    fn name(&self) -> &str {
        "content"
    }

    fn routes(&self) -> Router {
        api::router(api::AppState {
            svc: Arc::clone(&self.service),
            config: Arc::clone(&self.config),
        })
    }
}
