use crate::ast::UiModule;
use crate::generators::section_description;
use crate::markup::Element;
use crate::props::{lenient, module_props};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaProps {
    #[serde(default, deserialize_with = "lenient")]
    pub button_text: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub button_href: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub secondary_button_text: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub secondary_button_href: Option<String>,
}

pub fn generate(module: &UiModule) -> Element {
    let props: CtaProps = module_props(module);
    let title = module.title().unwrap_or("Ready to get started?");

    let secondary = props.secondary_button_text.as_deref().map(|text| {
        Element::new("Button")
            .attr("size", "lg")
            .attr("variant", "outline")
            .flag("asChild")
            .child(
                Element::new("a")
                    .attr("href", props.secondary_button_href.as_deref().unwrap_or("#"))
                    .text(text),
            )
    });

    Element::root("section", &module.id, module.module_type.as_str())
        .class("bg-primary/5 px-4 py-20 text-center")
        .child(
            Element::new("div")
                .class("mx-auto max-w-2xl space-y-6")
                .child(Element::new("h2").class("text-3xl font-bold tracking-tight").text(title))
                .child_opt(section_description(module.description()))
                .child(
                    Element::new("div")
                        .class("flex flex-wrap items-center justify-center gap-4")
                        .child(
                            Element::new("Button").attr("size", "lg").flag("asChild").child(
                                Element::new("a")
                                    .attr("href", props.button_href.as_deref().unwrap_or("#"))
                                    .text(props.button_text.as_deref().unwrap_or("Get Started")),
                            ),
                        )
                        .child_opt(secondary),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let jsx = generate(&UiModule::new("c1", "cta")).to_string();
        assert!(jsx.contains(">Ready to get started?</h2>"));
        assert!(jsx.contains("<a href=\"#\">Get Started</a>"));
        assert_eq!(jsx.matches("<Button").count(), 1);
    }

    #[test]
    fn test_secondary_button() {
        let module = UiModule::new("c2", "cta")
            .with_props(json!({ "buttonText": "Sign up", "secondaryButtonText": "Talk to sales" }));
        let jsx = generate(&module).to_string();
        assert!(jsx.contains(">Sign up</a>"));
        assert!(jsx.contains("variant=\"outline\""));
        assert_eq!(jsx.matches("<Button").count(), 2);
    }
}
