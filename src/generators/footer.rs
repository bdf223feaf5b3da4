use crate::ast::UiModule;
use crate::markup::Element;
use crate::props::{lenient, module_props, LinkEntry};
use chrono::{Datelike, Utc};
use log::debug;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Default, Deserialize)]
pub struct FooterProps {
    /// Category name to link labels (or `{ label, href }` objects), in document order.
    #[serde(default, deserialize_with = "lenient")]
    pub links: Option<Map<String, Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub copyright: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub tagline: Option<String>,
}

const DEFAULT_LINKS: &[(&str, &[&str])] = &[
    ("Product", &["Features", "Pricing", "Changelog"]),
    ("Company", &["About", "Blog", "Careers"]),
    ("Legal", &["Privacy", "Terms"]),
];

pub fn generate(module: &UiModule) -> Element {
    let props: FooterProps = module_props(module);

    let categories: Vec<(String, Vec<LinkEntry>)> = match &props.links {
        Some(links) => links
            .iter()
            .map(|(category, entries)| (category.clone(), category_entries(category, entries)))
            .collect(),
        None => DEFAULT_LINKS
            .iter()
            .map(|(category, labels)| {
                let entries: Vec<LinkEntry> = labels.iter().map(|l| LinkEntry::Label((*l).to_string())).collect();
                ((*category).to_string(), entries)
            })
            .collect(),
    };

    let copyright = props.copyright.unwrap_or_else(|| {
        format!("© {} Company. All rights reserved.", Utc::now().year())
    });

    let tagline = props.tagline.as_deref().or(module.description());
    let brand = (module.title().is_some() || tagline.is_some()).then(|| {
        Element::new("div")
            .class("space-y-2")
            .child_opt(
                module
                    .title()
                    .map(|title| Element::new("p").class("text-lg font-bold").text(title)),
            )
            .child_opt(
                tagline.map(|t| Element::new("p").class("text-sm text-muted-foreground").text(t)),
            )
    });

    Element::root("footer", &module.id, module.module_type.as_str())
        .class("border-t bg-background px-4 py-12")
        .child(
            Element::new("div")
                .class("container mx-auto grid gap-8 md:grid-cols-4")
                .child_opt(brand)
                .children(categories.iter().map(|(category, entries)| link_column(category, entries))),
        )
        .child(
            Element::new("p")
                .class("mt-8 text-center text-sm text-muted-foreground")
                .text(copyright),
        )
}

fn category_entries(category: &str, entries: &Value) -> Vec<LinkEntry> {
    match serde_json::from_value(entries.clone()) {
        Ok(entries) => entries,
        Err(err) => {
            debug!("Footer category '{category}' ignored: {err}");
            Vec::new()
        }
    }
}

fn link_column(category: &str, entries: &[LinkEntry]) -> Element {
    Element::new("div")
        .child(Element::new("h3").class("mb-3 font-semibold").text(category))
        .child(
            Element::new("ul")
                .class("space-y-2 text-sm text-muted-foreground")
                .children(entries.iter().map(|entry| {
                    Element::new("li").child(
                        Element::new("a")
                            .attr("href", entry.href())
                            .class("hover:text-foreground")
                            .text(entry.label()),
                    )
                })),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_categories_and_copyright() {
        let jsx = generate(&UiModule::new("ft", "footer")).to_string();
        assert!(jsx.contains(">Product</h3>"));
        assert!(jsx.contains(">Careers</a>"));
        assert!(jsx.contains(&format!("© {} Company", Utc::now().year())));
    }

    #[test]
    fn test_category_order_is_preserved() {
        let module = UiModule::new("ft2", "footer").with_props(json!({
            "links": {
                "Resources": ["Docs", { "label": "API", "href": "/api" }],
                "About": ["Team"]
            },
            "copyright": "© Initech"
        }));
        let jsx = generate(&module).to_string();
        let resources = jsx.find(">Resources</h3>").unwrap();
        let about = jsx.find(">About</h3>").unwrap();
        assert!(resources < about);
        assert!(jsx.contains("<a href=\"/api\" className=\"hover:text-foreground\">API</a>"));
        assert!(jsx.contains(">© Initech</p>"));
        assert!(!jsx.contains(">Product</h3>"));
    }
}
