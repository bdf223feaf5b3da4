use crate::ast::UiModule;
use crate::generators::{data_note, section_description, section_title};
use crate::markup::Element;
use crate::props::record_text;
use crate::resolver::resolve_records;
use serde_json::{json, Map, Value};

fn default_kpis() -> Value {
    json!([
        { "label": "Total Revenue", "value": "$45,231", "change": "+20.1%", "trend": "up" },
        { "label": "Active Users", "value": "2,350", "change": "+180", "trend": "up" },
        { "label": "Churn Rate", "value": "1.2%", "change": "-0.3%", "trend": "down" }
    ])
}

pub fn generate(module: &UiModule) -> Element {
    let fallback = match module.props.get("kpis") {
        Some(list @ Value::Array(_)) => list.clone(),
        _ => default_kpis(),
    };
    let resolved = resolve_records(module.data.as_ref(), fallback);

    Element::root("section", &module.id, module.module_type.as_str())
        .class("px-4 py-8")
        .child_opt(data_note(resolved.note))
        .child_opt(section_title(module.title()))
        .child_opt(section_description(module.description()))
        .child(
            Element::new("div")
                .class("mt-6 grid gap-4 md:grid-cols-3")
                .children(resolved.records.iter().map(kpi_card)),
        )
}

fn kpi_card(record: &Map<String, Value>) -> Element {
    let label = record_text(record, &["label", "name", "title"]).unwrap_or_default();
    let value = record_text(record, &["value", "metric"]).unwrap_or_else(|| "0".to_string());
    let change = record_text(record, &["change"]).map(|change| {
        let down = record_text(record, &["trend"]).as_deref() == Some("down");
        let (class, arrow) = if down {
            ("text-sm text-red-600", "▼")
        } else {
            ("text-sm text-green-600", "▲")
        };
        Element::new("p").class(class).text(format!("{arrow} {change}"))
    });

    Element::new("Card").child(
        Element::new("CardContent")
            .class("pt-6")
            .child(Element::new("p").class("text-sm text-muted-foreground").text(label))
            .child(Element::new("p").class("text-3xl font-bold").text(value))
            .child_opt(change),
    )
}
