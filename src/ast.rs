use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt::Display;

/// One block instance on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiModule {
    pub id: String,
    #[serde(rename = "type")]
    pub module_type: ModuleType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub props: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<UiDataSource>,
}

impl UiModule {
    pub fn new(id: impl Into<String>, module_type: impl Into<ModuleType>) -> Self {
        Self {
            id: id.into(),
            module_type: module_type.into(),
            title: None,
            description: None,
            props: Map::new(),
            data: None,
        }
    }

    /// The title, unless absent or empty.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// The description, unless absent or empty.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_prop(mut self, key: impl Into<String>, value: Value) -> Self {
        self.props.insert(key.into(), value);
        self
    }

    /// Replaces all props. Anything but a JSON object is ignored.
    #[must_use]
    pub fn with_props(mut self, props: Value) -> Self {
        if let Value::Object(map) = props {
            self.props = map;
        }
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: UiDataSource) -> Self {
        self.data = Some(data);
        self
    }
}

/// The discriminant selecting a generator. Unrecognized tags are kept verbatim
/// in [`ModuleType::Other`] so they survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModuleType {
    Hero,
    Pricing,
    Faq,
    Testimonials,
    KpiHeader,
    Navigation,
    NavigationHeader,
    NavigationSidebar,
    Footer,
    Features,
    Proof,
    Cta,
    Breadcrumbs,
    DataTableSection,
    Other(String),
}

impl ModuleType {
    pub fn as_str(&self) -> &str {
        match self {
            ModuleType::Hero => "hero",
            ModuleType::Pricing => "pricing",
            ModuleType::Faq => "faq",
            ModuleType::Testimonials => "testimonials",
            ModuleType::KpiHeader => "kpi-header",
            ModuleType::Navigation => "navigation",
            ModuleType::NavigationHeader => "navigation-header",
            ModuleType::NavigationSidebar => "navigation-sidebar",
            ModuleType::Footer => "footer",
            ModuleType::Features => "features",
            ModuleType::Proof => "proof",
            ModuleType::Cta => "cta",
            ModuleType::Breadcrumbs => "breadcrumbs",
            ModuleType::DataTableSection => "data-table-section",
            ModuleType::Other(tag) => tag,
        }
    }
}

impl From<&str> for ModuleType {
    fn from(tag: &str) -> Self {
        match tag {
            "hero" => ModuleType::Hero,
            "pricing" => ModuleType::Pricing,
            "faq" => ModuleType::Faq,
            "testimonials" => ModuleType::Testimonials,
            "kpi-header" => ModuleType::KpiHeader,
            "navigation" => ModuleType::Navigation,
            "navigation-header" => ModuleType::NavigationHeader,
            "navigation-sidebar" => ModuleType::NavigationSidebar,
            "footer" => ModuleType::Footer,
            "features" => ModuleType::Features,
            "proof" => ModuleType::Proof,
            "cta" => ModuleType::Cta,
            "breadcrumbs" => ModuleType::Breadcrumbs,
            "data-table-section" => ModuleType::DataTableSection,
            other => ModuleType::Other(other.to_string()),
        }
    }
}

impl From<String> for ModuleType {
    fn from(tag: String) -> Self {
        ModuleType::from(tag.as_str())
    }
}

impl From<ModuleType> for String {
    fn from(module_type: ModuleType) -> Self {
        module_type.as_str().to_string()
    }
}

impl Display for ModuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a module's list or record content comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum UiDataSource {
    Placeholder,
    Static {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<Value>,
    },
    Http {
        url: String,
    },
    Mock {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        schema: Option<MockDataSchema>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        count: Option<usize>,
    },
    #[serde(other)]
    Unknown,
}

/// Field name to field spec. Ordered, so synthesized records are stable.
pub type MockDataSchema = BTreeMap<String, FieldSpec>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<FieldGenerator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<MockDataSchema>,
}

impl FieldSpec {
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            generator: None,
            min: None,
            max: None,
            items: None,
        }
    }

    #[must_use]
    pub fn generator(mut self, generator: FieldGenerator) -> Self {
        self.generator = Some(generator);
        self
    }

    #[must_use]
    pub fn range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    #[must_use]
    pub fn items(mut self, items: MockDataSchema) -> Self {
        self.items = Some(items);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Date,
    Array,
    Object,
}

/// Sub-kind hint for scalar synthesis. Unknown hints behave like no hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldGenerator {
    Name,
    Email,
    Phone,
    Url,
    Lorem,
    Number,
    Boolean,
    Date,
    #[serde(other)]
    Other,
}

/// A page-level DSL document: the context handed to the dispatcher.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiCommon {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub modules: Vec<UiModule>,
}

/// Markup for one module plus the component symbols it references beyond its root tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneratorOutput {
    pub jsx: String,
    pub imports: Vec<String>,
}

/// Markup for a whole page with the imports of every module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageOutput {
    pub jsx: String,
    pub imports: Vec<String>,
}

impl PageOutput {
    /// # Errors
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// # Errors
    /// Returns a `serde_yaml::Error` if serialization fails.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
