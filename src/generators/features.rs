use crate::ast::UiModule;
use crate::generators::{section_description, section_title};
use crate::markup::Element;
use crate::props::{from_literal, lenient, module_props};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Default, Deserialize)]
pub struct FeaturesProps {
    #[serde(default, deserialize_with = "lenient")]
    pub features: Option<Vec<Feature>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Feature {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub icon: Option<String>,
}

fn default_features() -> Vec<Feature> {
    from_literal(json!([
        { "title": "Fast", "description": "Optimized for speed out of the box.", "icon": "⚡" },
        { "title": "Secure", "description": "Security best practices built in.", "icon": "🔒" },
        { "title": "Scalable", "description": "Grows with your business.", "icon": "📈" }
    ]))
}

pub fn generate(module: &UiModule) -> Element {
    let props: FeaturesProps = module_props(module);
    let features = props.features.unwrap_or_else(default_features);
    let title = module.title().unwrap_or("Features");

    Element::root("section", &module.id, module.module_type.as_str())
        .class("px-4 py-16")
        .child(
            Element::new("div")
                .class("mx-auto max-w-6xl")
                .child(
                    Element::new("div")
                        .class("mb-12 text-center")
                        .child_opt(section_title(Some(title)))
                        .child_opt(section_description(module.description())),
                )
                .child(
                    Element::new("div")
                        .class("grid gap-6 md:grid-cols-3")
                        .children(features.iter().map(feature_card)),
                ),
        )
}

fn feature_card(feature: &Feature) -> Element {
    Element::new("Card")
        .child(
            Element::new("CardHeader")
                .child_opt(
                    feature
                        .icon
                        .as_deref()
                        .map(|icon| Element::new("div").class("mb-2 text-3xl").text(icon)),
                )
                .child(Element::new("CardTitle").text(feature.title.as_deref().unwrap_or("Feature"))),
        )
        .child(
            Element::new("CardContent").child_opt(
                feature
                    .description
                    .as_deref()
                    .map(|d| Element::new("p").class("text-muted-foreground").text(d)),
            ),
        )
}
