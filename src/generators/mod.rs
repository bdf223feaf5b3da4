//! One generator per block type. Each takes a module and returns its root element;
//! absent or malformed props fall back to literal defaults, so none of them fail.

pub mod breadcrumbs;
pub mod cta;
pub mod data_table;
pub mod faq;
pub mod features;
pub mod footer;
pub mod hero;
pub mod kpi_header;
pub mod navigation;
pub mod pricing;
pub mod proof;
pub mod testimonials;

use crate::markup::{Element, Node};
use crate::props::present;

const SECTION_TITLE_CLASS: &str = "text-3xl font-bold tracking-tight";
const SECTION_DESCRIPTION_CLASS: &str = "mt-2 text-muted-foreground";

/// Section `<h2>`, only when a non-empty title is present.
pub(crate) fn section_title(title: Option<&str>) -> Option<Element> {
    present(title).map(|t| Element::new("h2").class(SECTION_TITLE_CLASS).text(t))
}

/// Section lead paragraph, only when a non-empty description is present.
pub(crate) fn section_description(description: Option<&str>) -> Option<Element> {
    present(description).map(|d| Element::new("p").class(SECTION_DESCRIPTION_CLASS).text(d))
}

/// Surfaces the `http` design placeholder as a JSX comment.
pub(crate) fn data_note(note: Option<String>) -> Option<Node> {
    note.map(Node::Comment)
}

/// A JavaScript string literal for embedding text inside an expression attribute.
pub(crate) fn js_string(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}
