use crate::ast::UiDataSource;
use crate::mock::{MockRecord, MockSynthesizer};
use log::{trace, warn};
use rand::Rng;
use serde_json::Value;

const DEFAULT_MOCK_COUNT: usize = 3;

/// Resolves a data source to a concrete value, falling back to `default_data`.
///
/// Total: every kind, including unknown ones, yields a value. The `http` kind
/// never performs a request; it yields a design placeholder string naming the
/// URL followed by the serialized default.
pub fn resolve_data_source(source: Option<&UiDataSource>, default_data: Value) -> Value {
    resolve_data_source_with(source, default_data, &mut MockSynthesizer::system())
}

/// Like [`resolve_data_source`] with an injected synthesizer for the `mock` kind.
pub fn resolve_data_source_with<R: Rng>(
    source: Option<&UiDataSource>,
    default_data: Value,
    synthesizer: &mut MockSynthesizer<R>,
) -> Value {
    let Some(source) = source else {
        return default_data;
    };

    match source {
        UiDataSource::Placeholder => {
            trace!("Placeholder data source, using default");
            default_data
        }
        UiDataSource::Static { data } => {
            trace!("Static data source (present: {})", data.is_some());
            data.clone().unwrap_or(default_data)
        }
        UiDataSource::Http { url } => {
            trace!("Http data source {url} rendered as placeholder");
            Value::String(http_placeholder(url, &default_data))
        }
        UiDataSource::Mock { schema, count } => match schema {
            Some(schema) => {
                let count = count.unwrap_or(DEFAULT_MOCK_COUNT);
                trace!("Mock data source, {count} record(s)");
                Value::Array(
                    synthesizer
                        .generate(schema, count)
                        .into_iter()
                        .map(Value::Object)
                        .collect(),
                )
            }
            None => default_data,
        },
        UiDataSource::Unknown => {
            warn!("Unknown data source kind, using default");
            default_data
        }
    }
}

/// The text the `http` kind resolves to.
pub fn http_placeholder(url: &str, default_data: &Value) -> String {
    format!("/* Data from {url} */ {default_data}")
}

/// A module's records after resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedRecords {
    pub records: Vec<MockRecord>,
    /// Set when the source resolved to text (the `http` placeholder) instead of a list.
    pub note: Option<String>,
}

/// Resolves a module's data to a list of records.
///
/// Anything that is not an array (the `http` placeholder, a static object)
/// falls back to `default_records`; non-object elements are skipped.
pub fn resolve_records(source: Option<&UiDataSource>, default_records: Value) -> ResolvedRecords {
    let resolved = resolve_data_source(source, default_records.clone());
    let (items, note) = match resolved {
        Value::Array(items) => (items, None),
        other => {
            trace!("Resolved data is not a list ({}), using default", kind_name(&other));
            let note = match other {
                Value::String(text) => Some(text),
                _ => None,
            };
            match default_records {
                Value::Array(items) => (items, note),
                _ => (Vec::new(), note),
            }
        }
    };
    let records = items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(record) => Some(record),
            _ => None,
        })
        .collect();
    ResolvedRecords { records, note }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{FieldSpec, FieldType};
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    #[test]
    fn test_http_placeholder_embeds_url_and_default() {
        let source = UiDataSource::Http { url: "https://api.test/rows".to_string() };
        let value = resolve_data_source(Some(&source), json!([1, 2]));
        assert_eq!(value, json!("/* Data from https://api.test/rows */ [1,2]"));
    }

    #[test]
    fn test_mock_count_defaults_to_three() {
        let mut schema = crate::ast::MockDataSchema::new();
        schema.insert("n".to_string(), FieldSpec::new(FieldType::Number));
        let source = UiDataSource::Mock { schema: Some(schema), count: None };
        let mut synth = MockSynthesizer::new(StdRng::seed_from_u64(1), Utc::now());
        let value = resolve_data_source_with(Some(&source), json!([]), &mut synth);
        assert_eq!(value, json!([{ "n": 1 }, { "n": 2 }, { "n": 3 }]));
    }

    #[test]
    fn test_records_fall_back_when_not_a_list() {
        let source = UiDataSource::Http { url: "/x".to_string() };
        let resolved = resolve_records(Some(&source), json!([{ "a": 1 }, "skipped"]));
        assert_eq!(resolved.records.len(), 1);
        assert_eq!(resolved.records[0]["a"], 1);
        assert_eq!(resolved.note.as_deref(), Some("/* Data from /x */ [{\"a\":1},\"skipped\"]"));
    }
}
