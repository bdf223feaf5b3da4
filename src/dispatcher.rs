use crate::ast::{GeneratorOutput, ModuleType, PageOutput, UiCommon, UiModule};
use crate::generators::{
    breadcrumbs, cta, data_table, faq, features, footer, hero, kpi_header, navigation, pricing,
    proof, section_description, section_title, testimonials,
};
use crate::markup::Element;
use crate::options::GeneratorOptions;
use log::{debug, warn};

const CARD_CONTENT: &[&str] = &["Card", "CardContent"];
const CARD_FULL: &[&str] = &["Card", "CardHeader", "CardTitle", "CardContent"];
const TABLE: &[&str] = &[
    "Table",
    "TableHeader",
    "TableBody",
    "TableRow",
    "TableHead",
    "TableCell",
];

/// Compiles one module into markup plus the component imports it needs.
///
/// `_dsl` is the page the module belongs to. No generator reads it yet.
pub fn generate_module(
    module: &UiModule,
    _dsl: Option<&UiCommon>,
    options: &GeneratorOptions,
) -> GeneratorOutput {
    let (element, imports) = build_module(module);
    GeneratorOutput {
        jsx: element.render(options.indent),
        imports,
    }
}

/// Compiles every module of a page, in order, into a single fragment.
pub fn generate_page(dsl: &UiCommon, options: &GeneratorOptions) -> PageOutput {
    let mut elements = Vec::with_capacity(dsl.modules.len());
    let mut imports: Vec<String> = Vec::new();

    for module in &dsl.modules {
        let (element, module_imports) = build_module(module);
        elements.push(element);
        for import in module_imports {
            if !options.dedupe_imports || !imports.contains(&import) {
                imports.push(import);
            }
        }
    }

    let jsx = if options.wrap_page {
        let mut main = Element::new("main");
        if let Some(id) = &dsl.id {
            main = main.attr("data-ui-page", id.as_str());
        }
        main.children(elements).render(options.indent)
    } else {
        elements
            .iter()
            .map(|element| element.render(options.indent))
            .collect::<Vec<_>>()
            .join("\n")
    };

    debug!(
        "Generated page with {} module(s) and {} import(s)",
        dsl.modules.len(),
        imports.len()
    );
    PageOutput { jsx, imports }
}

fn build_module(module: &UiModule) -> (Element, Vec<String>) {
    debug!("Generating module '{}' of type {}", module.id, module.module_type);
    let (element, imports): (Element, Vec<&str>) = match &module.module_type {
        ModuleType::Hero => (hero::generate(module), vec!["Button"]),
        ModuleType::Pricing => {
            let mut imports = CARD_FULL.to_vec();
            imports.push("Button");
            (pricing::generate(module), imports)
        }
        ModuleType::Faq => (faq::generate(module), Vec::new()),
        ModuleType::Testimonials => (testimonials::generate(module), CARD_CONTENT.to_vec()),
        ModuleType::KpiHeader => (kpi_header::generate(module), CARD_CONTENT.to_vec()),
        ModuleType::NavigationHeader => {
            let (element, search) = navigation::header(module);
            let imports = if search { vec!["Input"] } else { Vec::new() };
            (element, imports)
        }
        ModuleType::Navigation | ModuleType::NavigationSidebar => {
            (navigation::generate(module), Vec::new())
        }
        ModuleType::Footer => (footer::generate(module), Vec::new()),
        ModuleType::Features => (features::generate(module), CARD_FULL.to_vec()),
        ModuleType::Proof => (proof::generate(module), Vec::new()),
        ModuleType::Cta => (cta::generate(module), vec!["Button"]),
        ModuleType::Breadcrumbs => (breadcrumbs::generate(module), Vec::new()),
        ModuleType::DataTableSection => (data_table::generate(module), TABLE.to_vec()),
        ModuleType::Other(tag) => {
            warn!("No generator for module type '{tag}' (module '{}'), using fallback", module.id);
            (fallback(module), Vec::new())
        }
    };
    (element, imports.into_iter().map(String::from).collect())
}

/// Generic block for unrecognized types: title and description when present.
fn fallback(module: &UiModule) -> Element {
    Element::root("div", &module.id, module.module_type.as_str())
        .class("p-4")
        .child_opt(section_title(module.title()))
        .child_opt(section_description(module.description()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fallback_for_unknown_type() {
        let module = UiModule::new("u1", "unknown-type")
            .with_title("Mystery")
            .with_description("Not yet supported");
        let output = generate_module(&module, None, &GeneratorOptions::default());
        assert!(output.jsx.starts_with("<div data-ui-id=\"u1\" data-module-type=\"unknown-type\""));
        assert!(output.jsx.contains(">Mystery</h2>"));
        assert!(output.jsx.contains(">Not yet supported</p>"));
        assert!(output.imports.is_empty());
    }

    #[test]
    fn test_bare_fallback_self_closes() {
        let module = UiModule::new("u2", "spacer");
        let output = generate_module(&module, None, &GeneratorOptions::default());
        assert_eq!(
            output.jsx,
            "<div data-ui-id=\"u2\" data-module-type=\"spacer\" className=\"p-4\" />"
        );
    }

    #[test]
    fn test_header_imports_follow_search_flag() {
        let options = GeneratorOptions::default();
        let with_search = UiModule::new("n1", "navigation-header");
        assert_eq!(generate_module(&with_search, None, &options).imports, vec!["Input"]);

        let without = UiModule::new("n2", "navigation-header").with_prop("showSearch", json!(false));
        assert!(generate_module(&without, None, &options).imports.is_empty());
    }

    #[test]
    fn test_page_dedupes_imports_in_order() {
        let page = UiCommon {
            id: Some("home".to_string()),
            modules: vec![
                UiModule::new("a", "cta"),
                UiModule::new("b", "features"),
                UiModule::new("c", "testimonials"),
            ],
            ..Default::default()
        };
        let output = generate_page(&page, &GeneratorOptions::default());
        assert_eq!(
            output.imports,
            vec!["Button", "Card", "CardHeader", "CardTitle", "CardContent"]
        );
        assert!(output.jsx.starts_with("<main data-ui-page=\"home\">\n  <section data-ui-id=\"a\""));
    }

    #[test]
    fn test_page_without_dedupe_or_wrapper() {
        let page = UiCommon {
            modules: vec![UiModule::new("a", "cta"), UiModule::new("b", "cta")],
            ..Default::default()
        };
        let options = GeneratorOptions {
            dedupe_imports: false,
            wrap_page: false,
            ..Default::default()
        };
        let output = generate_page(&page, &options);
        assert_eq!(output.imports, vec!["Button", "Button"]);
        assert!(output.jsx.starts_with("<section data-ui-id=\"a\""));
        assert!(!output.jsx.contains("<main"));
    }
}
