use crate::ast::UiModule;
use crate::generators::section_title;
use crate::markup::Element;
use crate::props::{lenient, module_props};
use serde::Deserialize;

const DEFAULT_LOGOS: &[&str] = &["Acme", "Globex", "Initech", "Umbrella", "Hooli"];

#[derive(Debug, Default, Deserialize)]
pub struct ProofProps {
    #[serde(default, deserialize_with = "lenient")]
    pub logos: Option<Vec<ProofLogo>>,
    #[serde(default, deserialize_with = "lenient")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProofLogo {
    Name(String),
    Image {
        name: String,
        #[serde(default, deserialize_with = "lenient")]
        src: Option<String>,
    },
}

pub fn generate(module: &UiModule) -> Element {
    let props: ProofProps = module_props(module);
    let logos = props.logos.unwrap_or_else(|| {
        DEFAULT_LOGOS
            .iter()
            .map(|name| ProofLogo::Name((*name).to_string()))
            .collect()
    });

    Element::root("section", &module.id, module.module_type.as_str())
        .class("px-4 py-12 text-center")
        .child_opt(section_title(module.title()))
        .child(
            Element::new("p")
                .class("text-sm font-medium uppercase tracking-wide text-muted-foreground")
                .text(props.caption.as_deref().unwrap_or("Trusted by leading companies")),
        )
        .child(
            Element::new("div")
                .class("mt-8 flex flex-wrap items-center justify-center gap-8")
                .children(logos.iter().map(logo)),
        )
}

fn logo(logo: &ProofLogo) -> Element {
    match logo {
        ProofLogo::Image { name, src: Some(src) } => Element::new("img")
            .attr("src", src.as_str())
            .attr("alt", name.as_str())
            .class("h-8 opacity-70 grayscale"),
        ProofLogo::Name(name) | ProofLogo::Image { name, src: None } => Element::new("span")
            .class("text-lg font-semibold text-muted-foreground")
            .text(name.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_logos() {
        let jsx = generate(&UiModule::new("pr", "proof")).to_string();
        assert!(jsx.contains("Trusted by leading companies"));
        assert_eq!(jsx.matches("text-lg font-semibold").count(), DEFAULT_LOGOS.len());
    }

    #[test]
    fn test_mixed_logo_shapes() {
        let module = UiModule::new("pr2", "proof")
            .with_props(json!({ "logos": ["Stark", { "name": "Wayne", "src": "/wayne.svg" }] }));
        let jsx = generate(&module).to_string();
        assert!(jsx.contains(">Stark</span>"));
        assert!(jsx.contains("<img src=\"/wayne.svg\" alt=\"Wayne\""));
    }
}
