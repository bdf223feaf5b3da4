use crate::error::UiDslError;
use serde::{Deserialize, Serialize};

/// Rendering configuration shared by every generator call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorOptions {
    /// Spaces per nesting level.
    pub indent: usize,
    /// Deduplicate page imports, keeping first appearance.
    pub dedupe_imports: bool,
    /// Wrap page output in a `<main>` element.
    pub wrap_page: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            dedupe_imports: true,
            wrap_page: true,
        }
    }
}

impl GeneratorOptions {
    /// # Errors
    /// Returns `UiDslError::Json` if the text is not a valid options object.
    pub fn from_json(source: &str) -> Result<Self, UiDslError> {
        serde_json::from_str(source).map_err(|e| UiDslError::from_json(&e, "options.json", source))
    }

    /// # Errors
    /// Returns `UiDslError::Yaml` if the text is not a valid options mapping.
    pub fn from_yaml(source: &str) -> Result<Self, UiDslError> {
        serde_yaml::from_str(source).map_err(|e| UiDslError::from_yaml(&e, "options.yaml", source))
    }
}
