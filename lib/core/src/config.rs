use std::path::PathBuf;

/// Common service configuration shared by the server binary and tests.
///
/// The binary parses these from its TOML config file and command-line
/// arguments, then passes them to storage layer initialization.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Directory holding all persistent data.
    pub data_dir: Option<PathBuf>,

    /// Path to the SQLite database file.
    /// Defaults to `{data_dir}/content.sqlite` if not specified.
    pub sqlite_path: Option<PathBuf>,

    /// Listen address for the HTTP server.
    pub listen: String,

    /// Public base URL of the site, used to build `og:url` and the
    /// rendered head fragment (e.g. `https://example.com`).
    pub site_base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            sqlite_path: None,
            listen: "0.0.0.0:8080".to_string(),
            site_base_url: "http://localhost:8080".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Resolve the SQLite database path, falling back to `{data_dir}/content.sqlite`.
    pub fn resolve_sqlite_path(&self) -> PathBuf {
        self.sqlite_path
            .clone()
            .unwrap_or_else(|| self.resolve_data_subpath("content.sqlite"))
    }

    /// Build the public URL of a page from its slug.
    ///
    /// The base URL never carries a trailing slash; slugs never carry a
    /// leading one.
    pub fn page_url(&self, page_slug: &str) -> String {
        let base = self.site_base_url.trim_end_matches('/');
        let slug = page_slug.trim_start_matches('/');
        if slug.is_empty() {
            format!("{}/", base)
        } else {
            format!("{}/{}", base, slug)
        }
    }

    fn resolve_data_subpath(&self, name: &str) -> PathBuf {
        self.data_dir
            .as_ref()
            .map(|d| d.join(name))
            .unwrap_or_else(|| PathBuf::from(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let config = ServiceConfig {
            data_dir: Some(PathBuf::from("/data")),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_sqlite_path(),
            PathBuf::from("/data/content.sqlite")
        );
    }

    #[test]
    fn test_page_url() {
        let config = ServiceConfig {
            site_base_url: "https://example.com/".into(),
            ..Default::default()
        };
        assert_eq!(config.page_url("about"), "https://example.com/about");
        assert_eq!(config.page_url("/services/corporate"), "https://example.com/services/corporate");
        assert_eq!(config.page_url(""), "https://example.com/");
    }
}
