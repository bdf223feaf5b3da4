use crate::ast::UiModule;
use crate::markup::Element;
use crate::props::{from_literal, lenient, module_props, LinkEntry};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Default, Deserialize)]
pub struct BreadcrumbsProps {
    #[serde(default, deserialize_with = "lenient")]
    pub items: Option<Vec<LinkEntry>>,
    #[serde(default, deserialize_with = "lenient")]
    pub separator: Option<String>,
}

fn default_items() -> Vec<LinkEntry> {
    from_literal(json!([
        { "label": "Home", "href": "/" },
        { "label": "Products", "href": "/products" },
        "Current"
    ]))
}

/// Every crumb but the last is a link followed by a separator; the last is plain bold text.
pub fn generate(module: &UiModule) -> Element {
    let props: BreadcrumbsProps = module_props(module);
    let items = props.items.unwrap_or_else(default_items);
    let separator = props.separator.as_deref().unwrap_or("/");
    let last = items.len().saturating_sub(1);

    let crumbs = items.iter().enumerate().map(|(index, item)| {
        if index == last {
            Element::new("li").child(
                Element::new("span")
                    .class("font-bold text-foreground")
                    .attr("aria-current", "page")
                    .text(item.label()),
            )
        } else {
            Element::new("li")
                .class("flex items-center gap-2")
                .child(
                    Element::new("a")
                        .attr("href", item.href())
                        .class("hover:text-foreground")
                        .text(item.label()),
                )
                .child(Element::new("span").attr("aria-hidden", "true").text(separator))
        }
    });

    Element::root("nav", &module.id, module.module_type.as_str())
        .attr("aria-label", "Breadcrumb")
        .class("px-4 py-2")
        .child(
            Element::new("ol")
                .class("flex items-center gap-2 text-sm text-muted-foreground")
                .children(crumbs),
        )
}
