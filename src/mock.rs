use crate::ast::{FieldGenerator, FieldSpec, FieldType, MockDataSchema};
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use log::trace;
use rand::rngs::ThreadRng;
use rand::Rng;
use serde_json::{json, Map, Value};

pub type MockRecord = Map<String, Value>;

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.";
const DEFAULT_ARRAY_LEN: usize = 3;
const DEFAULT_NUMBER_MIN: f64 = 0.0;
const DEFAULT_NUMBER_MAX: f64 = 100.0;

/// Synthesizes records from a [`MockDataSchema`].
///
/// Randomness and the clock are injected, so a seeded rng and a fixed `now`
/// make every field deterministic.
pub struct MockSynthesizer<R> {
    rng: R,
    now: DateTime<Utc>,
}

impl MockSynthesizer<ThreadRng> {
    /// Thread-local randomness and the current time.
    pub fn system() -> Self {
        Self::new(rand::thread_rng(), Utc::now())
    }
}

impl<R: Rng> MockSynthesizer<R> {
    pub fn new(rng: R, now: DateTime<Utc>) -> Self {
        Self { rng, now }
    }

    /// Produces exactly `count` records. Record `i` uses `i + 1` in its templates.
    pub fn generate(&mut self, schema: &MockDataSchema, count: usize) -> Vec<MockRecord> {
        trace!("Synthesizing {count} record(s) over {} field(s)", schema.len());
        (0..count).map(|index| self.record(schema, index)).collect()
    }

    fn record(&mut self, schema: &MockDataSchema, index: usize) -> MockRecord {
        schema
            .iter()
            .map(|(name, spec)| (name.clone(), self.field(name, spec, index)))
            .collect()
    }

    fn field(&mut self, name: &str, spec: &FieldSpec, index: usize) -> Value {
        let n = index + 1;
        match spec.field_type {
            FieldType::String => Value::String(string_value(name, spec.generator, n)),
            FieldType::Number => match spec.generator {
                Some(FieldGenerator::Number) => json!(self.random_int(spec.min, spec.max)),
                _ => json!(n),
            },
            FieldType::Boolean => match spec.generator {
                Some(FieldGenerator::Boolean) => Value::Bool(self.rng.gen_bool(0.5)),
                _ => Value::Bool(true),
            },
            FieldType::Date => match spec.generator {
                Some(FieldGenerator::Date) => {
                    let day = self.now + Duration::days(index as i64);
                    Value::String(day.format("%Y-%m-%d").to_string())
                }
                _ => Value::String(self.now.to_rfc3339_opts(SecondsFormat::Millis, true)),
            },
            FieldType::Array => match &spec.items {
                Some(items) => {
                    let len = spec
                        .min
                        .map_or(DEFAULT_ARRAY_LEN, |min| min.max(0.0) as usize);
                    Value::Array(
                        self.generate(items, len)
                            .into_iter()
                            .map(Value::Object)
                            .collect(),
                    )
                }
                None => Value::Array(Vec::new()),
            },
            FieldType::Object => {
                let record = match &spec.items {
                    Some(items) => self.generate(items, 1).into_iter().next(),
                    None => None,
                };
                Value::Object(record.unwrap_or_default())
            }
        }
    }

    /// Uniform integer in `[ceil(min), floor(max)]`; an empty range yields the lower bound.
    fn random_int(&mut self, min: Option<f64>, max: Option<f64>) -> i64 {
        let low = min.unwrap_or(DEFAULT_NUMBER_MIN).ceil() as i64;
        let high = max.unwrap_or(DEFAULT_NUMBER_MAX).floor() as i64;
        if low >= high {
            return low;
        }
        self.rng.gen_range(low..=high)
    }
}

fn string_value(name: &str, generator: Option<FieldGenerator>, n: usize) -> String {
    match generator {
        Some(FieldGenerator::Name) => format!("Name {n}"),
        Some(FieldGenerator::Email) => format!("user{n}@example.com"),
        Some(FieldGenerator::Phone) => format!("+1 (555) 000-{n:04}"),
        Some(FieldGenerator::Url) => format!("https://example.com/{n}"),
        Some(FieldGenerator::Lorem) => LOREM.to_string(),
        _ => format!("{name} {n}"),
    }
}

/// Synthesizes `count` records using thread-local randomness and the current time.
pub fn generate_mock_data(schema: &MockDataSchema, count: usize) -> Vec<MockRecord> {
    MockSynthesizer::system().generate(schema, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed() -> MockSynthesizer<StdRng> {
        let now = Utc.with_ymd_and_hms(2024, 2, 28, 9, 30, 0).unwrap();
        MockSynthesizer::new(StdRng::seed_from_u64(7), now)
    }

    fn schema(fields: &[(&str, FieldSpec)]) -> MockDataSchema {
        fields
            .iter()
            .map(|(name, spec)| (name.to_string(), spec.clone()))
            .collect()
    }

    #[test]
    fn test_string_templates() {
        let s = schema(&[
            ("name", FieldSpec::new(FieldType::String).generator(FieldGenerator::Name)),
            ("email", FieldSpec::new(FieldType::String).generator(FieldGenerator::Email)),
            ("phone", FieldSpec::new(FieldType::String).generator(FieldGenerator::Phone)),
            ("title", FieldSpec::new(FieldType::String)),
        ]);
        let records = fixed().generate(&s, 2);
        assert_eq!(records[1]["name"], "Name 2");
        assert_eq!(records[0]["email"], "user1@example.com");
        assert_eq!(records[1]["phone"], "+1 (555) 000-0002");
        assert_eq!(records[0]["title"], "title 1");
    }

    #[test]
    fn test_dates_cross_month_boundary() {
        let s = schema(&[
            ("due", FieldSpec::new(FieldType::Date).generator(FieldGenerator::Date)),
            ("created", FieldSpec::new(FieldType::Date)),
        ]);
        let records = fixed().generate(&s, 3);
        assert_eq!(records[0]["due"], "2024-02-28");
        assert_eq!(records[2]["due"], "2024-03-01");
        assert_eq!(records[2]["created"], "2024-02-28T09:30:00.000Z");
    }

    #[test]
    fn test_random_int_respects_bounds() {
        let spec = FieldSpec::new(FieldType::Number)
            .generator(FieldGenerator::Number)
            .range(Some(5.0), Some(9.0));
        let records = fixed().generate(&schema(&[("score", spec)]), 50);
        for record in records {
            let score = record["score"].as_i64().unwrap();
            assert!((5..=9).contains(&score));
        }
    }

    #[test]
    fn test_inverted_range_collapses() {
        let spec = FieldSpec::new(FieldType::Number)
            .generator(FieldGenerator::Number)
            .range(Some(10.0), Some(1.0));
        let records = fixed().generate(&schema(&[("n", spec)]), 1);
        assert_eq!(records[0]["n"], 10);
    }

    #[test]
    fn test_object_without_items_is_empty() {
        let records = fixed().generate(&schema(&[("meta", FieldSpec::new(FieldType::Object))]), 1);
        assert_eq!(records[0]["meta"], json!({}));
    }
}
