use crate::ast::UiModule;
use crate::generators::{data_note, section_description, section_title};
use crate::markup::Element;
use crate::props::record_text;
use crate::resolver::resolve_records;
use serde_json::{json, Map, Value};

fn default_testimonials() -> Value {
    json!([
        {
            "text": "This product changed how our team works.",
            "name": "Jane Cooper",
            "role": "CEO",
            "company": "Acme"
        },
        {
            "text": "Setup took minutes and support has been fantastic.",
            "name": "Wade Warren",
            "role": "CTO",
            "company": "Globex"
        }
    ])
}

/// Records come from `data`, falling back to `props.testimonials`, then to literal defaults.
pub fn generate(module: &UiModule) -> Element {
    let fallback = match module.props.get("testimonials") {
        Some(list @ Value::Array(_)) => list.clone(),
        _ => default_testimonials(),
    };
    let resolved = resolve_records(module.data.as_ref(), fallback);
    let title = module.title().unwrap_or("What Our Customers Say");

    Element::root("section", &module.id, module.module_type.as_str())
        .class("bg-muted/50 px-4 py-16")
        .child_opt(data_note(resolved.note))
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
                        .class("grid gap-6 md:grid-cols-2 lg:grid-cols-3")
                        .children(resolved.records.iter().map(testimonial_card)),
                ),
        )
}

fn testimonial_card(record: &Map<String, Value>) -> Element {
    let text = record_text(record, &["text", "message", "quote"]).unwrap_or_default();
    let name = record_text(record, &["name", "author"]).unwrap_or_else(|| "Anonymous".to_string());
    let byline = match (record_text(record, &["role"]), record_text(record, &["company"])) {
        (Some(role), Some(company)) => Some(format!("{role}, {company}")),
        (Some(single), None) | (None, Some(single)) => Some(single),
        (None, None) => None,
    };
    let avatar = record_text(record, &["avatar", "image"]).map(|src| {
        Element::new("img")
            .attr("src", src)
            .attr("alt", name.as_str())
            .class("h-10 w-10 rounded-full object-cover")
    });

    Element::new("Card").child(
        Element::new("CardContent")
            .class("pt-6")
            .child(
                Element::new("p")
                    .class("italic text-muted-foreground")
                    .text(format!("“{text}”")),
            )
            .child(
                Element::new("div")
                    .class("mt-4 flex items-center gap-3")
                    .child_opt(avatar)
                    .child(
                        Element::new("div")
                            .child(Element::new("p").class("font-semibold").text(name.as_str()))
                            .child_opt(byline.map(|b| {
                                Element::new("p").class("text-sm text-muted-foreground").text(b)
                            })),
                    ),
            ),
    )
}
