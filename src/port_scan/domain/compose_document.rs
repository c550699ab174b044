use serde_yaml_ng::Value;
use std::collections::BTreeMap;
use std::fmt;

/// A node of a parsed compose file.
///
/// YAML is reduced to the three shapes the port lookup cares about. Scalars
/// keep their textual form (`3306` and `"3306"` both become `"3306"`), so the
/// port normalization works on strings only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeValue {
    Null,
    Scalar(String),
    Sequence(Vec<ComposeValue>),
    Mapping(BTreeMap<String, ComposeValue>),
}

impl ComposeValue {
    /// Looks up a direct child of a mapping node
    pub fn get(&self, key: &str) -> Option<&ComposeValue> {
        match self {
            ComposeValue::Mapping(map) => map.get(key),
            _ => None,
        }
    }

    /// Follows `keys` through nested mappings.
    ///
    /// Returns `None` as soon as a key is missing or an intermediate node is
    /// not a mapping.
    pub fn get_path(&self, keys: &[&str]) -> Option<&ComposeValue> {
        keys.iter().try_fold(self, |node, key| node.get(key))
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            ComposeValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ComposeValue::Null)
    }
}

impl fmt::Display for ComposeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeValue::Null => write!(f, "null"),
            ComposeValue::Scalar(s) => write!(f, "{}", s),
            ComposeValue::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            ComposeValue::Mapping(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<Value> for ComposeValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ComposeValue::Null,
            Value::Bool(b) => ComposeValue::Scalar(b.to_string()),
            Value::Number(n) => ComposeValue::Scalar(n.to_string()),
            Value::String(s) => ComposeValue::Scalar(s),
            Value::Sequence(items) => {
                ComposeValue::Sequence(items.into_iter().map(ComposeValue::from).collect())
            }
            Value::Mapping(map) => ComposeValue::Mapping(
                map.into_iter()
                    .filter_map(|(key, value)| mapping_key(key).map(|k| (k, value.into())))
                    .collect(),
            ),
            Value::Tagged(tagged) => ComposeValue::from(tagged.value),
        }
    }
}

/// Keys that are not scalars (complex YAML keys) can never match a service
/// name, so they are dropped.
fn mapping_key(key: Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// A compose file that failed to parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeParseError {
    pub message: String,
    /// 1-based line of the failure, when the parser knows it
    pub line: Option<usize>,
}

impl fmt::Display for ComposeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{} (line {})", self.message, line),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ComposeParseError {}

impl From<serde_yaml_ng::Error> for ComposeParseError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        Self {
            line: err.location().map(|location| location.line()),
            message: err.to_string(),
        }
    }
}

/// A successfully parsed compose file
#[derive(Debug, Clone, PartialEq)]
pub struct ComposeDocument {
    root: ComposeValue,
}

impl ComposeDocument {
    /// Parses YAML text. Merge keys (`<<: *defaults`) are resolved so
    /// ports inherited from an anchor are visible.
    pub fn parse(content: &str) -> std::result::Result<Self, ComposeParseError> {
        let mut value: Value = serde_yaml_ng::from_str(content)?;
        value.apply_merge()?;
        Ok(Self { root: value.into() })
    }

    #[cfg(test)]
    fn root(&self) -> &ComposeValue {
        &self.root
    }

    /// The raw `services.<name>.ports` entry, if declared and not null
    pub fn service_ports(&self, service: &str) -> Option<&ComposeValue> {
        self.root
            .get_path(&["services", service, "ports"])
            .filter(|value| !value.is_null())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalar_and_sequence_ports() {
        let doc = ComposeDocument::parse(
            r#"
services:
  db:
    image: mysql:8
    ports:
      - "3306:3306"
      - 3307
  cache:
    ports: "6379"
"#,
        )
        .unwrap();

        let db_ports = doc.service_ports("db").unwrap();
        assert_eq!(
            db_ports,
            &ComposeValue::Sequence(vec![
                ComposeValue::Scalar("3306:3306".to_string()),
                ComposeValue::Scalar("3307".to_string()),
            ])
        );
        assert_eq!(
            doc.service_ports("cache"),
            Some(&ComposeValue::Scalar("6379".to_string()))
        );
    }

    #[test]
    fn test_service_ports_missing_paths() {
        let doc = ComposeDocument::parse("services:\n  web:\n    image: nginx\n").unwrap();
        assert!(doc.service_ports("web").is_none());
        assert!(doc.service_ports("db").is_none());

        let doc = ComposeDocument::parse("version: '3'\n").unwrap();
        assert!(doc.service_ports("db").is_none());
    }

    #[test]
    fn test_service_ports_null_is_absent() {
        let doc = ComposeDocument::parse("services:\n  db:\n    ports:\n").unwrap();
        assert!(doc.service_ports("db").is_none());
    }

    #[test]
    fn test_non_mapping_root_has_no_ports() {
        let doc = ComposeDocument::parse("- just\n- a list\n").unwrap();
        assert!(doc.service_ports("db").is_none());

        let doc = ComposeDocument::parse("").unwrap();
        assert!(doc.service_ports("db").is_none());
    }

    #[test]
    fn test_intermediate_scalar_stops_lookup() {
        let doc = ComposeDocument::parse("services: nothing-here\n").unwrap();
        assert!(doc.root().get_path(&["services", "db", "ports"]).is_none());
    }

    #[test]
    fn test_merge_keys_are_resolved() {
        let doc = ComposeDocument::parse(
            r#"
x-db: &db-defaults
  ports:
    - "3310:3306"
services:
  db:
    <<: *db-defaults
    image: mariadb
"#,
        )
        .unwrap();
        assert_eq!(
            doc.service_ports("db"),
            Some(&ComposeValue::Sequence(vec![ComposeValue::Scalar(
                "3310:3306".to_string()
            )]))
        );
    }

    #[test]
    fn test_parse_error_reports_line() {
        let err = ComposeDocument::parse("services:\n  db:\n    ports: [3306\n").unwrap_err();
        assert!(!err.message.is_empty());
        assert!(err.line.is_some());
        assert!(err.line.unwrap() >= 1);
    }

    #[test]
    fn test_display_of_nested_value() {
        let doc = ComposeDocument::parse("a:\n  b: [1, two]\n").unwrap();
        assert_eq!(doc.root().to_string(), "{a: {b: [1, two]}}");
    }
}
