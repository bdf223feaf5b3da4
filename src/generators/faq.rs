use crate::ast::UiModule;
use crate::generators::{section_description, section_title};
use crate::markup::Element;
use crate::props::{from_literal, lenient, module_props};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Default, Deserialize)]
pub struct FaqProps {
    #[serde(default, deserialize_with = "lenient")]
    pub items: Option<Vec<FaqItem>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FaqItem {
    #[serde(default, deserialize_with = "lenient")]
    pub question: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub answer: Option<String>,
}

fn default_items() -> Vec<FaqItem> {
    from_literal(json!([
        {
            "question": "How do I get started?",
            "answer": "Sign up for an account and follow the onboarding guide."
        },
        {
            "question": "Can I cancel anytime?",
            "answer": "Yes, you can cancel your subscription at any time."
        }
    ]))
}

pub fn generate(module: &UiModule) -> Element {
    let props: FaqProps = module_props(module);
    let items = props.items.unwrap_or_else(default_items);
    let title = module.title().unwrap_or("Frequently Asked Questions");

    Element::root("section", &module.id, module.module_type.as_str())
        .class("px-4 py-16")
        .child(
            Element::new("div")
                .class("mx-auto max-w-3xl")
                .child(
                    Element::new("div")
                        .class("mb-8 text-center")
                        .child_opt(section_title(Some(title)))
                        .child_opt(section_description(module.description())),
                )
                .child(
                    Element::new("div")
                        .class("space-y-4")
                        .children(items.iter().map(faq_entry)),
                ),
        )
}

fn faq_entry(item: &FaqItem) -> Element {
    Element::new("details")
        .class("group rounded-lg border p-4")
        .child(
            Element::new("summary")
                .class("cursor-pointer font-medium")
                .text(item.question.as_deref().unwrap_or("Question")),
        )
        .child_opt(
            item.answer
                .as_deref()
                .map(|a| Element::new("p").class("mt-2 text-muted-foreground").text(a)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let jsx = generate(&UiModule::new("f1", "faq")).to_string();
        assert!(jsx.contains("Frequently Asked Questions"));
        assert_eq!(jsx.matches("<details").count(), 2);
    }

    #[test]
    fn test_custom_items() {
        let module = UiModule::new("f2", "faq")
            .with_title("Help")
            .with_props(json!({ "items": [{ "question": "Why?", "answer": "Because." }] }));
        let jsx = generate(&module).to_string();
        assert!(jsx.contains(">Help</h2>"));
        assert!(jsx.contains(">Why?</summary>"));
        assert!(jsx.contains(">Because.</p>"));
        assert_eq!(jsx.matches("<details").count(), 1);
    }
}
