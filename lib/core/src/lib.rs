pub mod config;
pub mod error;
pub mod module;
pub mod types;

pub use config::ServiceConfig;
pub use error::{error_code, ServiceError};
pub use module::Module;
pub use types::{merge_patch, new_id, now_rfc3339, ListParams, ListResult};
