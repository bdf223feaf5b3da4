use crate::ast::UiModule;
use crate::generators::{js_string, section_description};
use crate::markup::Element;
use crate::props::{lenient, module_props};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroProps {
    #[serde(default, deserialize_with = "lenient")]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub cta_text: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub cta_href: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub secondary_cta_text: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub secondary_cta_href: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub background_image: Option<String>,
}

pub fn generate(module: &UiModule) -> Element {
    let props: HeroProps = module_props(module);
    let title = module.title().unwrap_or("Welcome");

    let primary = link_button(
        props.cta_text.as_deref().unwrap_or("Get Started"),
        props.cta_href.as_deref().unwrap_or("#"),
        None,
    );
    let secondary = props.secondary_cta_text.as_deref().map(|text| {
        link_button(
            text,
            props.secondary_cta_href.as_deref().unwrap_or("#"),
            Some("outline"),
        )
    });

    let mut root = Element::root("section", &module.id, module.module_type.as_str())
        .class("relative px-4 py-24 text-center");
    if let Some(image) = &props.background_image {
        root = root.expr(
            "style",
            format!("{{ backgroundImage: {} }}", js_string(&format!("url({image})"))),
        );
    }

    root.child(
        Element::new("div")
            .class("mx-auto max-w-3xl space-y-6")
            .child(
                Element::new("h1")
                    .class("text-4xl font-bold tracking-tight sm:text-6xl")
                    .text(title),
            )
            .child_opt(
                props
                    .subtitle
                    .as_deref()
                    .map(|s| Element::new("p").class("text-xl font-medium").text(s)),
            )
            .child_opt(section_description(module.description()))
            .child(
                Element::new("div")
                    .class("flex flex-wrap items-center justify-center gap-4")
                    .child(primary)
                    .child_opt(secondary),
            ),
    )
}

fn link_button(text: &str, href: &str, variant: Option<&str>) -> Element {
    let mut button = Element::new("Button").attr("size", "lg");
    if let Some(variant) = variant {
        button = button.attr("variant", variant);
    }
    button
        .flag("asChild")
        .child(Element::new("a").attr("href", href).text(text))
}
