//! Field path resolution and value rendering for detail views.
//!
//! A [`FieldMap`] is an ordered list of `path -> label` pairs. Paths are
//! dotted addresses into a JSON tree (`user.emails.primary`,
//! `integration_type.name`, `layers.0.name`, `emails[primary=true].email`).
//! Each path is parsed once into [`PathSegment`]s. Resolution runs in two
//! stages: first a structured descent along the segments, then, when parsing
//! failed or the descent found nothing, a lookup of the whole path as one flat
//! top-level key. Whatever is found is rendered by [`format_value`].

use serde_json::{Map, Value};

/// Rendered in place of any value that could not be resolved
pub const NOT_AVAILABLE: &str = "N/A";
/// Rendered for empty sequences and mappings
pub const NONE: &str = "None";
pub const YES: &str = "Yes";
pub const NO: &str = "No";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object member; on an array, the first element whose member of this
    /// name is `true`
    Key(String),
    /// Array element; on an object, the member with this numeric name
    Index(usize),
    /// `key[field=value]`: first element of the array under `key` whose
    /// `field` renders as `value`
    Filter {
        key: String,
        field: String,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldPathError {
    #[error("field path is empty")]
    Empty,
    #[error("empty segment in field path {0:?}")]
    EmptySegment(String),
    #[error("malformed filter {0:?}, expected name[field=value]")]
    MalformedFilter(String),
}

fn parse_segment(raw: &str, path: &str) -> Result<PathSegment, FieldPathError> {
    if raw.is_empty() {
        return Err(FieldPathError::EmptySegment(path.to_string()));
    }

    match (raw.find('['), raw.ends_with(']')) {
        (None, false) => {
            if raw.contains(']') {
                return Err(FieldPathError::MalformedFilter(raw.to_string()));
            }
            Ok(match raw.parse::<usize>() {
                Ok(index) => PathSegment::Index(index),
                Err(_) => PathSegment::Key(raw.to_string()),
            })
        }
        (Some(open), true) => {
            let key = &raw[..open];
            let inner = &raw[open + 1..raw.len() - 1];
            let (field, value) = inner
                .split_once('=')
                .ok_or_else(|| FieldPathError::MalformedFilter(raw.to_string()))?;
            if key.is_empty() || field.is_empty() || inner.contains(['[', ']']) {
                return Err(FieldPathError::MalformedFilter(raw.to_string()));
            }
            Ok(PathSegment::Filter {
                key: key.to_string(),
                field: field.to_string(),
                value: value.to_string(),
            })
        }
        _ => Err(FieldPathError::MalformedFilter(raw.to_string())),
    }
}

/// A parsed field path that remembers its raw text for the flat-key fallback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    raw: String,
    segments: Result<Vec<PathSegment>, FieldPathError>,
}

impl FieldPath {
    pub fn parse(raw: &str) -> FieldPath {
        let segments = if raw.is_empty() {
            Err(FieldPathError::Empty)
        } else {
            raw.split('.').map(|segment| parse_segment(segment, raw)).collect()
        };
        FieldPath {
            raw: raw.to_string(),
            segments,
        }
    }

    pub fn segments(&self) -> Result<&[PathSegment], &FieldPathError> {
        self.segments.as_deref()
    }

    /// Resolve the path against `item`.
    ///
    /// Structured descent is tried first. A parse error, a missing member or
    /// a `null` along the way falls back to treating the whole path as a flat
    /// top-level key.
    pub fn resolve<'a>(&self, item: &'a Value) -> Option<&'a Value> {
        let structured = match &self.segments {
            Ok(segments) => descend(item, segments),
            Err(_) => None,
        };
        structured
            .filter(|value| !value.is_null())
            .or_else(|| item.get(&self.raw))
    }
}

fn flag_is_set(element: &Value, flag: &str) -> bool {
    element.get(flag).and_then(Value::as_bool) == Some(true)
}

/// Member of a matched element named after its array, e.g. `email` for an
/// element of `emails`. Elements without such a member are kept whole.
fn principal<'a>(element: &'a Value, array_key: Option<&str>) -> &'a Value {
    array_key
        .and_then(|key| key.strip_suffix('s'))
        .and_then(|member| element.get(member))
        .unwrap_or(element)
}

/// Whether a filtered member equals the text of a `[field=value]` filter
fn filter_matches(member: &Value, expected: &str) -> bool {
    match member {
        Value::String(s) => s == expected,
        Value::Bool(b) => b.to_string() == expected,
        Value::Number(n) => n.to_string() == expected,
        other => render(other) == expected,
    }
}

fn descend<'a>(root: &'a Value, segments: &[PathSegment]) -> Option<&'a Value> {
    let mut current = root;
    let mut array_key: Option<&str> = None;
    let last = segments.len().saturating_sub(1);

    for (position, segment) in segments.iter().enumerate() {
        current = match (segment, current) {
            (PathSegment::Key(key), Value::Object(map)) => {
                array_key = Some(key.as_str());
                map.get(key)?
            }
            (PathSegment::Key(flag), Value::Array(items)) => {
                let matched = items.iter().find(|e| flag_is_set(e, flag))?;
                if position == last {
                    principal(matched, array_key)
                } else {
                    matched
                }
            }
            (PathSegment::Index(index), Value::Array(items)) => items.get(*index)?,
            (PathSegment::Index(index), Value::Object(map)) => map.get(&index.to_string())?,
            (PathSegment::Filter { key, field, value }, Value::Object(map)) => match map.get(key)? {
                Value::Array(items) => items
                    .iter()
                    .find(|e| e.get(field).is_some_and(|member| filter_matches(member, value)))?,
                _ => return None,
            },
            _ => return None,
        };
    }

    Some(current)
}

fn render_mapping(map: &Map<String, Value>) -> String {
    if map.is_empty() {
        return NONE.to_string();
    }
    if map.values().all(Value::is_boolean) {
        let enabled: Vec<&str> = map
            .iter()
            .filter(|(_, v)| v.as_bool() == Some(true))
            .map(|(k, _)| k.as_str())
            .collect();
        return if enabled.is_empty() {
            NONE.to_string()
        } else {
            enabled.join(", ")
        };
    }
    Value::Object(map.clone()).to_string()
}

fn render(value: &Value) -> String {
    match value {
        Value::Null => NOT_AVAILABLE.to_string(),
        Value::Bool(true) => YES.to_string(),
        Value::Bool(false) => NO.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) if items.is_empty() => NONE.to_string(),
        Value::Array(items) => items.iter().map(render).collect::<Vec<_>>().join(", "),
        Value::Object(map) => render_mapping(map),
    }
}

/// Render a resolved value for display.
///
/// Absent and `null` values become [`NOT_AVAILABLE`], booleans become
/// [`YES`]/[`NO`], sequences are comma-joined (or [`NONE`] when empty) and
/// mappings of flags list the keys that are set.
pub fn format_value(value: Option<&Value>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), render)
}

/// One row of a detail view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
}

/// Ordered mapping from field path to display label
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMap {
    entries: Vec<(FieldPath, String)>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, path: &str, label: &str) -> Self {
        self.entries.push((FieldPath::parse(path), label.to_string()));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|(_, label)| label.clone()).collect()
    }

    /// Resolve every entry against `item`, in order
    pub fn resolve(&self, item: &Value) -> Vec<DetailRow> {
        self.entries
            .iter()
            .map(|(path, label)| DetailRow {
                label: label.clone(),
                value: format_value(path.resolve(item)),
            })
            .collect()
    }

    /// Resolved values only, for use as one row of a list table
    pub fn values(&self, item: &Value) -> Vec<String> {
        self.entries
            .iter()
            .map(|(path, _)| format_value(path.resolve(item)))
            .collect()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for FieldMap {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(FieldMap::new(), |map, (path, label)| map.field(path, label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn account_user() -> Value {
        json!({
            "id": "au_1",
            "tiny_id": 7,
            "user": {
                "name": "Ada Lovelace",
                "emails": [
                    {"email": "old@example.com", "primary": false},
                    {"email": "ada@example.com", "primary": true}
                ],
                "phones": []
            },
            "roles": {"admin": true, "billing": false, "broadcaster": true},
            "user.name": "flat value",
            "enabled": false,
            "tags": ["db", "prod"],
            "created_at": null
        })
    }

    #[test]
    fn test_parse_segments() {
        let path = FieldPath::parse("layers.0.user[role=admin]");
        assert_eq!(
            path.segments().unwrap(),
            &[
                PathSegment::Key("layers".to_string()),
                PathSegment::Index(0),
                PathSegment::Filter {
                    key: "user".to_string(),
                    field: "role".to_string(),
                    value: "admin".to_string()
                }
            ]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(FieldPath::parse("").segments(), Err(&FieldPathError::Empty));
        assert!(matches!(
            FieldPath::parse("a..b").segments(),
            Err(FieldPathError::EmptySegment(_))
        ));
        assert!(matches!(
            FieldPath::parse("a[b").segments(),
            Err(FieldPathError::MalformedFilter(_))
        ));
        assert!(matches!(
            FieldPath::parse("a[b]").segments(),
            Err(FieldPathError::MalformedFilter(_))
        ));
    }

    #[test]
    fn test_nested_object_resolution() {
        let item = account_user();
        let path = FieldPath::parse("user.name");
        assert_eq!(path.resolve(&item), Some(&json!("Ada Lovelace")));
    }

    #[test]
    fn test_predicate_on_array_yields_flagged_address() {
        let item = account_user();
        let rows = FieldMap::new()
            .field("user.emails.primary", "Primary Email")
            .field("user.phones.primary", "Primary Phone")
            .resolve(&item);
        assert_eq!(rows[0].value, "ada@example.com");
        assert_eq!(rows[1].value, NOT_AVAILABLE);
    }

    #[test]
    fn test_predicate_yields_member_named_after_array() {
        let item = json!({
            "emails": [{"id": "em_1", "email": "ada@example.com", "primary": true}],
            "phones": [{"country": "US", "phone": "+15550100", "primary": true}],
            "labels": [{"id": "l1", "primary": true}]
        });
        assert_eq!(format_value(FieldPath::parse("emails.primary").resolve(&item)), "ada@example.com");
        assert_eq!(format_value(FieldPath::parse("phones.primary").resolve(&item)), "+15550100");
        assert_eq!(
            FieldPath::parse("labels.primary").resolve(&item),
            Some(&json!({"id": "l1", "primary": true}))
        );
    }

    #[test]
    fn test_predicate_mid_path_keeps_element() {
        let item = account_user();
        let path = FieldPath::parse("user.emails.primary.email");
        assert_eq!(path.resolve(&item), Some(&json!("ada@example.com")));
    }

    #[test]
    fn test_filter_segment() {
        let item = account_user();
        let path = FieldPath::parse("user.emails[primary=false].email");
        assert_eq!(path.resolve(&item), Some(&json!("old@example.com")));
        let phones = json!({"phones": [{"kind": "home", "phone": "1"}, {"kind": "work", "phone": "2"}]});
        assert_eq!(FieldPath::parse("phones[kind=work].phone").resolve(&phones), Some(&json!("2")));
        assert_eq!(FieldPath::parse("user.emails[primary=Yes].email").resolve(&item), None);
    }

    #[test]
    fn test_index_segment() {
        let item = account_user();
        assert_eq!(FieldPath::parse("tags.1").resolve(&item), Some(&json!("prod")));
        assert_eq!(FieldPath::parse("tags.5").resolve(&item), None);
    }

    #[test]
    fn test_fallback_to_flat_key_when_descent_finds_nothing() {
        let item = json!({"integration_type.name": "Email", "integration_type": {}});
        let path = FieldPath::parse("integration_type.name");
        assert_eq!(path.resolve(&item), Some(&json!("Email")));
    }

    #[test]
    fn test_fallback_to_flat_key_on_parse_error() {
        let item = json!({"odd..key": "value"});
        assert_eq!(FieldPath::parse("odd..key").resolve(&item), Some(&json!("value")));
    }

    #[test]
    fn test_structured_result_wins_over_flat_key() {
        let item = account_user();
        assert_eq!(format_value(FieldPath::parse("user.name").resolve(&item)), "Ada Lovelace");
    }

    #[test]
    fn test_missing_paths_render_sentinel() {
        let item = account_user();
        let rows = FieldMap::from_iter([
            ("does.not.exist", "Missing"),
            ("created_at", "Created At"),
            ("user.name.first", "Too Deep"),
        ])
        .resolve(&item);
        for row in rows {
            assert_eq!(row.value, NOT_AVAILABLE, "{}", row.label);
        }
    }

    #[test]
    fn test_booleans_render_yes_no() {
        assert_eq!(format_value(Some(&json!(true))), "Yes");
        assert_eq!(format_value(Some(&json!(false))), "No");
        let item = account_user();
        assert_eq!(format_value(FieldPath::parse("enabled").resolve(&item)), "No");
    }

    #[test]
    fn test_sequences_render_joined_or_none() {
        assert_eq!(format_value(Some(&json!(["db", "prod"]))), "db, prod");
        assert_eq!(format_value(Some(&json!([]))), "None");
        assert_eq!(format_value(Some(&json!([1, true, null]))), "1, Yes, N/A");
    }

    #[test]
    fn test_mappings_render_best_effort() {
        let item = account_user();
        assert_eq!(format_value(FieldPath::parse("roles").resolve(&item)), "admin, broadcaster");
        assert_eq!(format_value(Some(&json!({"admin": false}))), "None");
        assert_eq!(format_value(Some(&json!({}))), "None");
        assert_eq!(format_value(Some(&json!({"a": 1}))), r#"{"a":1}"#);
    }

    #[test]
    fn test_field_map_preserves_order_and_labels() {
        let map = FieldMap::new().field("tiny_id", "ID").field("user.name", "Name");
        assert_eq!(map.labels(), vec!["ID", "Name"]);
        assert_eq!(map.values(&account_user()), vec!["7", "Ada Lovelace"]);
        assert_eq!(map.len(), 2);
    }
}
