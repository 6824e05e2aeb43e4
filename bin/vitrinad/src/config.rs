//! Server configuration — a TOML file resolved from a context name.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use vitrina_content::model::Language;
use vitrina_content::service::FallbackTable;

/// Server configuration file shape.
///
/// ```toml
/// [storage]
/// data_dir = "/var/lib/vitrina"
///
/// [site]
/// base_url = "https://example.com"
///
/// [[fallbacks]]
/// section = "about"
/// key = "mission_text"
/// lang = "en"
/// value = "We build software."
/// ```
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    pub storage: StorageConfig,

    #[serde(default)]
    pub site: SiteConfig,

    /// Fallback literals injected into the key resolver.
    #[serde(default)]
    pub fallbacks: Vec<FallbackEntry>,
}

#[derive(Debug, Deserialize)]
pub struct StorageConfig {
    pub data_dir: String,
}

#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

#[derive(Debug, Deserialize)]
pub struct FallbackEntry {
    pub section: String,
    pub key: String,
    pub lang: String,
    pub value: String,
}

impl ServerConfig {
    /// Resolve a context name to `/etc/vitrina/<name>.toml`. A value
    /// containing `/` or `.` is used as a path directly.
    pub fn resolve_path(name_or_path: &str) -> PathBuf {
        if name_or_path.contains('/') || name_or_path.contains('.') {
            PathBuf::from(name_or_path)
        } else {
            PathBuf::from(format!("/etc/vitrina/{}.toml", name_or_path))
        }
    }

    /// Load and parse the configuration file.
    pub fn load(path: &Path) -> anyhow::Result<ServerConfig> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path.display(), e))?;
        let config: ServerConfig = toml::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("failed to parse {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Verify the configuration is ready for use.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.storage.data_dir.is_empty() {
            anyhow::bail!("storage data_dir is empty in configuration");
        }
        if self.site.base_url.is_empty() {
            anyhow::bail!("site base_url is empty in configuration");
        }
        Ok(())
    }

    /// Build the resolver's fallback-literal table.
    pub fn fallback_table(&self) -> FallbackTable {
        let mut table = FallbackTable::new();
        for entry in &self.fallbacks {
            table.insert(
                entry.section.clone(),
                entry.key.clone(),
                Language::parse(&entry.lang),
                entry.value.clone(),
            );
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_path_context_name() {
        assert_eq!(
            ServerConfig::resolve_path("prod"),
            PathBuf::from("/etc/vitrina/prod.toml")
        );
        assert_eq!(
            ServerConfig::resolve_path("./local.toml"),
            PathBuf::from("./local.toml")
        );
    }

    #[test]
    fn load_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.toml");
        std::fs::write(
            &path,
            r#"
[storage]
data_dir = "/tmp/vitrina"

[site]
base_url = "https://example.com"

[[fallbacks]]
section = "about"
key = "mission_text"
lang = "en"
value = "We build software."
"#,
        )
        .unwrap();

        let config = ServerConfig::load(&path).unwrap();
        config.validate().unwrap();
        assert_eq!(config.storage.data_dir, "/tmp/vitrina");
        assert_eq!(config.site.base_url, "https://example.com");

        let table = config.fallback_table();
        assert_eq!(
            table.get("about", "mission_text", Language::En),
            Some("We build software.")
        );
    }

    #[test]
    fn validate_rejects_empty_data_dir() {
        let config = ServerConfig {
            storage: StorageConfig {
                data_dir: String::new(),
            },
            site: SiteConfig::default(),
            fallbacks: vec![],
        };
        assert!(config.validate().is_err());
    }
}
