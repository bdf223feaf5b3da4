//! Typed module props.
//!
//! Every field is optional and decoded leniently: a value of the wrong shape
//! is treated as absent, so it falls back to the generator's literal default
//! without disturbing sibling fields.

use crate::ast::UiModule;
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Decodes `module.props` into a generator's props struct.
pub fn module_props<T>(module: &UiModule) -> T
where
    T: DeserializeOwned + Default,
{
    match serde_json::from_value(Value::Object(module.props.clone())) {
        Ok(props) => props,
        Err(err) => {
            debug!("Props of module '{}' ignored: {err}", module.id);
            T::default()
        }
    }
}

/// Empty text counts as absent.
pub fn present(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}

/// `deserialize_with` helper turning shape mismatches, nulls and empty strings into `None`.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() || value.as_str() == Some("") {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(err) => {
            debug!("Ignoring malformed prop: {err}");
            Ok(None)
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Link {
    #[serde(default, deserialize_with = "lenient")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub href: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub icon: Option<String>,
}

impl Link {
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or("Link")
    }

    pub fn href(&self) -> &str {
        self.href.as_deref().unwrap_or("#")
    }
}

/// Builds `(label, href)` default link lists.
pub fn default_links(links: &[(&str, &str)]) -> Vec<Link> {
    links
        .iter()
        .map(|(label, href)| Link {
            label: Some((*label).to_string()),
            href: Some((*href).to_string()),
            icon: None,
        })
        .collect()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Logo {
    #[serde(default, deserialize_with = "lenient")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub src: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub alt: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserMenu {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub avatar: Option<String>,
}

impl UserMenu {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("User")
    }

    /// Up to two uppercase initials taken from the name's words.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name()
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            "U".to_string()
        } else {
            initials
        }
    }
}

/// Decodes a literal default, falling back to `T::default()` if it does not fit.
pub fn from_literal<T>(value: Value) -> T
where
    T: DeserializeOwned + Default,
{
    serde_json::from_value(value).unwrap_or_default()
}

/// A text-or-number value such as a price.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Text(text) => f.write_str(text),
            Scalar::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A list entry given either as a bare label or as a full link.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LinkEntry {
    Label(String),
    Link(Link),
}

impl LinkEntry {
    pub fn label(&self) -> &str {
        match self {
            LinkEntry::Label(label) => label,
            LinkEntry::Link(link) => link.label(),
        }
    }

    pub fn href(&self) -> &str {
        match self {
            LinkEntry::Label(_) => "#",
            LinkEntry::Link(link) => link.href(),
        }
    }
}

/// Reads the first of `keys` holding a non-empty string, a number or a boolean.
pub fn record_text(record: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match record.get(*key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Sample {
        #[serde(default, deserialize_with = "lenient")]
        cta_text: Option<String>,
        #[serde(default, deserialize_with = "lenient")]
        show_search: Option<bool>,
    }

    #[test]
    fn test_malformed_field_does_not_poison_siblings() {
        let module = UiModule::new("m", "hero")
            .with_props(json!({ "ctaText": 42, "showSearch": false }));
        let props: Sample = module_props(&module);
        assert_eq!(props.cta_text, None);
        assert_eq!(props.show_search, Some(false));
    }

    #[test]
    fn test_initials() {
        let menu = UserMenu { name: Some("ada lovelace byron".into()), ..Default::default() };
        assert_eq!(menu.initials(), "AL");
        let anon = UserMenu { name: Some("   ".into()), ..Default::default() };
        assert_eq!(anon.initials(), "U");
    }

    #[test]
    fn test_record_text_prefers_first_key() {
        let record = json!({ "message": "m", "text": "t" });
        let record = record.as_object().unwrap();
        assert_eq!(record_text(record, &["text", "message"]), Some("t".to_string()));
        assert_eq!(record_text(record, &["quote"]), None);
    }

    #[test]
    fn test_record_text_skips_empty_strings() {
        let record = json!({ "text": "", "message": "Great support" });
        let record = record.as_object().unwrap();
        assert_eq!(record_text(record, &["text", "message"]), Some("Great support".to_string()));
    }

    #[test]
    fn test_empty_string_prop_is_absent() {
        let module = UiModule::new("m", "hero").with_props(json!({ "ctaText": "" }));
        let props: Sample = module_props(&module);
        assert_eq!(props.cta_text, None);
        assert_eq!(present(Some("")), None);
        assert_eq!(present(Some("x")), Some("x"));
    }
}
