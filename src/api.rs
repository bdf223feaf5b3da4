use crate::ast::{PageOutput, UiCommon, UiModule};
use crate::dispatcher::{generate_module, generate_page};
use crate::error::UiDslError;
use crate::options::GeneratorOptions;
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;

/// Serialization format of a DSL document, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// # Errors
    /// Returns `UiDslError::UnsupportedFormat` for anything but `.json`, `.yaml` and `.yml`.
    pub fn from_file_name(file_name: &str) -> Result<Self, UiDslError> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(DocumentFormat::Json),
            Some("yaml" | "yml") => Ok(DocumentFormat::Yaml),
            _ => Err(UiDslError::UnsupportedFormat {
                file_name: file_name.to_string(),
            }),
        }
    }
}

fn decode<T: DeserializeOwned>(source: &str, file_name: &str) -> Result<T, UiDslError> {
    match DocumentFormat::from_file_name(file_name)? {
        DocumentFormat::Json => serde_json::from_str(source)
            .map_err(|e| UiDslError::from_json(&e, file_name, source)),
        DocumentFormat::Yaml => serde_yaml::from_str(source)
            .map_err(|e| UiDslError::from_yaml(&e, file_name, source)),
    }
}

/// Parses a single module document.
///
/// # Errors
/// Returns a `UiDslError` if the format is unsupported or the document is malformed.
pub fn parse_module(source: &str, file_name: &str) -> Result<UiModule, UiDslError> {
    decode(source, file_name)
}

/// Parses a page document (an object with a `modules` list).
///
/// # Errors
/// Returns a `UiDslError` if the format is unsupported or the document is malformed.
pub fn parse_page(source: &str, file_name: &str) -> Result<UiCommon, UiDslError> {
    decode(source, file_name)
}

/// Generates markup from a DSL document holding either a page or a single module.
///
/// A page goes through [`generate_page`]; a single module is emitted bare, with
/// its imports as-is.
///
/// # Errors
/// Returns a `UiDslError` if the format is unsupported or the document is malformed.
pub fn generate(
    source: &str,
    file_name: &str,
    options: &GeneratorOptions,
) -> Result<PageOutput, UiDslError> {
    let document: Value = decode(source, file_name)?;
    if document.get("modules").is_some() {
        debug!("{file_name}: page document");
        let page = parse_page(source, file_name)?;
        Ok(generate_page(&page, options))
    } else {
        debug!("{file_name}: module document");
        let module = parse_module(source, file_name)?;
        let output = generate_module(&module, None, options);
        Ok(PageOutput {
            jsx: output.jsx,
            imports: output.imports,
        })
    }
}

/// Reads a DSL document from disk and generates markup from it.
///
/// # Errors
/// Returns `UiDslError::Io` if the file cannot be read, otherwise as [`generate`].
pub fn generate_file(
    path: impl AsRef<Path>,
    options: &GeneratorOptions,
) -> Result<PageOutput, UiDslError> {
    let path = path.as_ref();
    let file_name = path.to_string_lossy().to_string();
    let source = std::fs::read_to_string(path).map_err(|source| UiDslError::Io {
        path: file_name.clone(),
        source,
    })?;
    generate(&source, &file_name, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_file_name("page.JSON").unwrap(), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_file_name("a/b.yml").unwrap(), DocumentFormat::Yaml);
        assert!(matches!(
            DocumentFormat::from_file_name("page.toml"),
            Err(UiDslError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_generate_single_module() {
        let source = r#"{ "id": "hero-1", "type": "hero", "title": "Hello" }"#;
        let output = generate(source, "hero.json", &GeneratorOptions::default()).unwrap();
        assert!(output.jsx.starts_with("<section data-ui-id=\"hero-1\""));
        assert_eq!(output.imports, vec!["Button"]);
    }

    #[test]
    fn test_generate_yaml_page() {
        let source = "id: landing\nmodules:\n  - id: c\n    type: cta\n  - id: d\n    type: cta\n";
        let output = generate(source, "landing.yaml", &GeneratorOptions::default()).unwrap();
        assert!(output.jsx.starts_with("<main data-ui-page=\"landing\">"));
        assert_eq!(output.imports, vec!["Button"]);
    }
}
