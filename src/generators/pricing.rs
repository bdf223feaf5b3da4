use crate::ast::UiModule;
use crate::generators::{section_description, section_title};
use crate::markup::Element;
use crate::props::{from_literal, lenient, module_props, Scalar};
use serde::Deserialize;
use serde_json::json;

const CHECK_GLYPH: &str = "✓";
const CROSS_GLYPH: &str = "✗";

#[derive(Debug, Default, Deserialize)]
pub struct PricingProps {
    #[serde(default, deserialize_with = "lenient")]
    pub tiers: Option<Vec<Tier>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tier {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub price: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    pub period: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub features: Option<Vec<PlanFeature>>,
    #[serde(default, deserialize_with = "lenient")]
    pub popular: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub cta_text: Option<String>,
}

/// A plain string is always included.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PlanFeature {
    Included(String),
    Detailed {
        name: String,
        #[serde(default = "included_by_default")]
        included: bool,
    },
}

fn included_by_default() -> bool {
    true
}

impl PlanFeature {
    fn parts(&self) -> (&str, bool) {
        match self {
            PlanFeature::Included(name) => (name, true),
            PlanFeature::Detailed { name, included } => (name, *included),
        }
    }
}

fn default_tiers() -> Vec<Tier> {
    from_literal(json!([
        {
            "name": "Starter",
            "price": "$9",
            "description": "For individuals getting started",
            "features": [
                "Up to 3 projects",
                "Basic analytics",
                { "name": "Priority support", "included": false }
            ]
        },
        {
            "name": "Pro",
            "price": "$29",
            "description": "For growing teams",
            "popular": true,
            "features": ["Unlimited projects", "Advanced analytics", "Priority support"]
        },
        {
            "name": "Enterprise",
            "price": "Custom",
            "period": "",
            "description": "For large organizations",
            "features": ["Everything in Pro", "SSO", "Dedicated support"],
            "ctaText": "Contact Sales"
        }
    ]))
}

pub fn generate(module: &UiModule) -> Element {
    let props: PricingProps = module_props(module);
    let tiers = props.tiers.unwrap_or_else(default_tiers);

    let header = Element::new("div")
        .class("mb-12 text-center")
        .child_opt(section_title(module.title()))
        .child_opt(section_description(module.description()));

    Element::root("section", &module.id, module.module_type.as_str())
        .class("px-4 py-16")
        .child(
            Element::new("div")
                .class("mx-auto max-w-6xl")
                .child_opt((!header.children.is_empty()).then_some(header))
                .child(
                    Element::new("div")
                        .class("grid gap-8 md:grid-cols-3")
                        .children(tiers.iter().map(tier_card)),
                ),
        )
}

fn tier_card(tier: &Tier) -> Element {
    let name = tier.name.as_deref().unwrap_or("Plan");
    let popular = tier.popular.unwrap_or(false);
    let cta = tier
        .cta_text
        .clone()
        .unwrap_or_else(|| format!("Choose {name}"));

    let card_class = if popular {
        "relative border-2 border-primary shadow-lg"
    } else {
        "relative"
    };

    let price = Element::new("div")
        .class("mt-2 flex items-baseline gap-1")
        .child(
            Element::new("span")
                .class("text-4xl font-bold")
                .text(tier.price.as_ref().map_or_else(|| "$0".to_string(), ToString::to_string)),
        )
        .child_opt(
            Some(tier.period.as_deref().unwrap_or("/month"))
                .filter(|period| !period.is_empty())
                .map(|period| Element::new("span").class("text-muted-foreground").text(period)),
        );

    let features = tier.features.as_deref().unwrap_or_default();

    Element::new("Card")
        .class(card_class)
        .child_opt(popular.then(|| {
            Element::new("div")
                .class("absolute -top-3 left-1/2 -translate-x-1/2 rounded-full bg-primary px-3 py-1 text-xs text-primary-foreground")
                .text("Most Popular")
        }))
        .child(
            Element::new("CardHeader")
                .child(Element::new("CardTitle").text(name))
                .child(price)
                .child_opt(tier.description.as_deref().map(|d| {
                    Element::new("p").class("text-sm text-muted-foreground").text(d)
                })),
        )
        .child(
            Element::new("CardContent")
                .child(
                    Element::new("ul")
                        .class("space-y-2")
                        .children(features.iter().map(feature_item)),
                )
                .child(
                    Element::new("Button")
                        .class("mt-6 w-full")
                        .attr("variant", if popular { "default" } else { "outline" })
                        .text(cta),
                ),
        )
}

fn feature_item(feature: &PlanFeature) -> Element {
    let (name, included) = feature.parts();
    if included {
        Element::new("li")
            .class("flex items-center gap-2")
            .child(Element::new("span").class("text-green-600").text(CHECK_GLYPH))
            .child(Element::new("span").text(name))
    } else {
        Element::new("li")
            .class("flex items-center gap-2 text-muted-foreground")
            .child(Element::new("span").text(CROSS_GLYPH))
            .child(Element::new("span").class("line-through").text(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tiers() {
        let jsx = generate(&UiModule::new("p1", "pricing")).to_string();
        assert!(jsx.contains("data-module-type=\"pricing\""));
        assert!(jsx.contains(">Choose Starter</Button>"));
        assert!(jsx.contains(">Contact Sales</Button>"));
        assert!(jsx.contains("border-primary"));
        assert!(jsx.contains(CROSS_GLYPH));
        assert!(!jsx.contains("<h2"));
    }

    #[test]
    fn test_feature_shapes() {
        let module = UiModule::new("p2", "pricing").with_props(json!({
            "tiers": [{
                "name": "Solo",
                "price": 5,
                "features": ["Sync", { "name": "API", "included": false }, { "name": "Export" }]
            }]
        }));
        let jsx = generate(&module).to_string();
        assert!(jsx.contains(">5</span>"));
        assert!(jsx.contains(">/month</span>"));
        assert!(jsx.contains("<span className=\"line-through\">API</span>"));
        assert_eq!(jsx.matches(CHECK_GLYPH).count(), 2);
        assert!(jsx.contains(">Choose Solo</Button>"));
        assert!(!jsx.contains("Most Popular"));
    }
}
