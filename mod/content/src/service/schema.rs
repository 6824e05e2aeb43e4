use vitrina_core::ServiceError;
use vitrina_sql::SQLStore;

/// SQL DDL statements to initialize the content database schema.
///
/// Each table stores the full JSON document in a `data` TEXT column,
/// with indexed columns extracted for efficient filtering and
/// uniqueness. Translation rows for all entity types share one table
/// keyed by `(entity_type, entity_id, language)`.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS content_entries (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        section TEXT,
        key TEXT,
        language TEXT,
        update_at TEXT,
        UNIQUE(section, key, language)
    )",
    "CREATE TABLE IF NOT EXISTS services (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        slug TEXT UNIQUE,
        sort_order INTEGER,
        is_active INTEGER,
        is_featured INTEGER,
        create_at TEXT,
        update_at TEXT
    )",
    "CREATE TABLE IF NOT EXISTS case_studies (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        slug TEXT UNIQUE,
        sort_order INTEGER,
        is_active INTEGER,
        is_featured INTEGER,
        create_at TEXT,
        update_at TEXT
    )",
    "CREATE TABLE IF NOT EXISTS team_members (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        sort_order INTEGER,
        is_active INTEGER,
        create_at TEXT,
        update_at TEXT
    )",
    "CREATE TABLE IF NOT EXISTS legal_documents (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        slug TEXT UNIQUE,
        is_active INTEGER,
        create_at TEXT,
        update_at TEXT
    )",
    "CREATE TABLE IF NOT EXISTS translations (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        entity_type TEXT,
        entity_id TEXT,
        language TEXT,
        update_at TEXT,
        UNIQUE(entity_type, entity_id, language)
    )",
    "CREATE TABLE IF NOT EXISTS page_seo (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        page_slug TEXT,
        language TEXT,
        update_at TEXT,
        UNIQUE(page_slug, language)
    )",
    // Indexes
    "CREATE INDEX IF NOT EXISTS idx_entries_section ON content_entries(section, language)",
    "CREATE INDEX IF NOT EXISTS idx_tr_entity ON translations(entity_type, entity_id)",
    "CREATE INDEX IF NOT EXISTS idx_svc_active ON services(is_active)",
    "CREATE INDEX IF NOT EXISTS idx_case_active ON case_studies(is_active)",
    "CREATE INDEX IF NOT EXISTS idx_team_active ON team_members(is_active)",
    "CREATE INDEX IF NOT EXISTS idx_seo_slug ON page_seo(page_slug)",
];

pub fn init_schema(sql: &dyn SQLStore) -> Result<(), ServiceError> {
    for stmt in SCHEMA {
        sql.exec(stmt, &[])
            .map_err(|e| ServiceError::Storage(format!("schema init failed: {}", e)))?;
    }
    Ok(())
}
