use crate::error::SqlError;

/// A dynamically-typed SQL parameter value.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl Value {
    /// Convert a boolean to its stored integer form (SQLite has no
    /// native boolean type).
    pub fn bool(b: bool) -> Value {
        Value::Integer(if b { 1 } else { 0 })
    }

    /// Text value, or Null when the option is empty.
    pub fn opt_text(s: Option<&str>) -> Value {
        match s {
            Some(s) => Value::Text(s.to_string()),
            None => Value::Null,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Value {
        Value::Integer(i)
    }
}

/// A row returned from a SQL query — column name to value.
#[derive(Debug, Clone)]
pub struct Row {
    pub columns: Vec<(String, Value)>,
}

impl Row {
    /// Get a column value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Get a text column value by name.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(Value::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get an integer column value by name.
    pub fn get_i64(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(Value::Integer(i)) => Some(*i),
            _ => None,
        }
    }

    /// Get a stored integer column as a boolean (non-zero = true).
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get_i64(name).map(|i| i != 0)
    }
}

/// SQLStore provides a SQL execution interface backed by an embedded
/// database. The content module depends only on this trait; the
/// hosted relational service is swappable behind it.
pub trait SQLStore: Send + Sync {
    /// Execute a query and return rows.
    fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, SqlError>;

    /// Execute a statement (INSERT/UPDATE/DELETE) and return affected row count.
    fn exec(&self, sql: &str, params: &[Value]) -> Result<u64, SqlError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_bool_roundtrip() {
        match Value::bool(true) {
            Value::Integer(1) => {}
            other => panic!("unexpected {:?}", other),
        }
        match Value::bool(false) {
            Value::Integer(0) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn row_accessors() {
        let row = Row {
            columns: vec![
                ("slug".into(), Value::Text("corporate".into())),
                ("sort_order".into(), Value::Integer(3)),
                ("is_active".into(), Value::Integer(1)),
            ],
        };
        assert_eq!(row.get_str("slug"), Some("corporate"));
        assert_eq!(row.get_i64("sort_order"), Some(3));
        assert_eq!(row.get_bool("is_active"), Some(true));
        assert!(row.get("missing").is_none());
    }
}
