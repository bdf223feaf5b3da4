//! Structured JSX construction.
//!
//! Generators build a tree of [`Node`]s and render it once, so user supplied
//! text and attribute values are escaped in a single place.

use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// `name="value"`, escaped.
    Text(String),
    /// `name={expr}`, emitted verbatim.
    Expr(String),
    /// A bare boolean attribute.
    Flag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Rendered as a JSX comment, `{/* ... */}`.
    Comment(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, AttrValue)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// A module root, tagged for later DOM lookup.
    pub fn root(tag: impl Into<String>, id: &str, module_type: &str) -> Self {
        Self::new(tag)
            .attr("data-ui-id", id)
            .attr("data-module-type", module_type)
    }

    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), AttrValue::Text(value.into())));
        self
    }

    #[must_use]
    pub fn class(self, class_name: impl Into<String>) -> Self {
        self.attr("className", class_name)
    }

    #[must_use]
    pub fn expr(mut self, name: impl Into<String>, expr: impl Into<String>) -> Self {
        self.attrs.push((name.into(), AttrValue::Expr(expr.into())));
        self
    }

    #[must_use]
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.attrs.push((name.into(), AttrValue::Flag));
        self
    }

    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends the child only when present; absent content produces no markup.
    #[must_use]
    pub fn child_opt<N: Into<Node>>(mut self, child: Option<N>) -> Self {
        if let Some(child) = child {
            self.children.push(child.into());
        }
        self
    }

    #[must_use]
    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Looks up a text attribute by name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find_map(|(n, v)| match v {
            AttrValue::Text(value) if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// Renders the element, indenting nested children by `indent` spaces per level.
    pub fn render(&self, indent: usize) -> String {
        let mut out = String::new();
        write_element(&mut out, self, 0, indent);
        out
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(2))
    }
}

fn write_node(out: &mut String, node: &Node, depth: usize, indent: usize) {
    match node {
        Node::Element(element) => write_element(out, element, depth, indent),
        Node::Text(text) => {
            pad(out, depth, indent);
            out.push_str(&escape_text(text));
        }
        Node::Comment(comment) => {
            pad(out, depth, indent);
            out.push_str("{/* ");
            out.push_str(&comment.replace("*/", "* /"));
            out.push_str(" */}");
        }
    }
}

fn write_element(out: &mut String, element: &Element, depth: usize, indent: usize) {
    pad(out, depth, indent);
    out.push('<');
    out.push_str(&element.tag);
    for (name, value) in &element.attrs {
        out.push(' ');
        out.push_str(name);
        match value {
            AttrValue::Text(text) => {
                out.push_str("=\"");
                out.push_str(&escape_attr(text));
                out.push('"');
            }
            AttrValue::Expr(expr) => {
                out.push_str("={");
                out.push_str(expr);
                out.push('}');
            }
            AttrValue::Flag => {}
        }
    }

    match element.children.as_slice() {
        [] => out.push_str(" />"),
        [Node::Text(text)] => {
            out.push('>');
            out.push_str(&escape_text(text));
            close(out, &element.tag);
        }
        children => {
            out.push_str(">\n");
            for child in children {
                write_node(out, child, depth + 1, indent);
                out.push('\n');
            }
            pad(out, depth, indent);
            close(out, &element.tag);
        }
    }
}

fn close(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn pad(out: &mut String, depth: usize, indent: usize) {
    out.extend(std::iter::repeat(' ').take(depth * indent));
}

/// Escapes characters that would otherwise open a tag, an entity or a JSX expression.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '{' => escaped.push_str("&#123;"),
            '}' => escaped.push_str("&#125;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
