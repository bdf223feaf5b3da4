use crate::ast::UiModule;
use crate::generators::{data_note, section_description, section_title};
use crate::markup::Element;
use crate::props::{from_literal, lenient, module_props};
use crate::resolver::resolve_records;
use serde::Deserialize;
use serde_json::{json, Map, Value};

#[derive(Debug, Default, Deserialize)]
pub struct DataTableProps {
    #[serde(default, deserialize_with = "lenient")]
    pub columns: Option<Vec<Column>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Column {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub label: Option<String>,
    /// Row field to read; defaults to `id`.
    #[serde(default, deserialize_with = "lenient")]
    pub key: Option<String>,
}

impl Column {
    fn field(&self) -> &str {
        self.key.as_deref().or(self.id.as_deref()).unwrap_or_default()
    }

    fn header(&self) -> &str {
        self.label.as_deref().or(self.id.as_deref()).unwrap_or_default()
    }
}

fn default_columns() -> Vec<Column> {
    from_literal(json!([
        { "id": "id", "label": "ID" },
        { "id": "name", "label": "Name" },
        { "id": "status", "label": "Status" }
    ]))
}

fn default_rows() -> Value {
    json!([
        { "id": 1, "name": "Item 1", "status": "Active" },
        { "id": 2, "name": "Item 2", "status": "Inactive" },
        { "id": 3, "name": "Item 3", "status": "Active" }
    ])
}

pub fn generate(module: &UiModule) -> Element {
    let props: DataTableProps = module_props(module);
    let columns = props.columns.unwrap_or_else(default_columns);
    let fallback = match module.props.get("rows") {
        Some(rows @ Value::Array(_)) => rows.clone(),
        _ => default_rows(),
    };
    let resolved = resolve_records(module.data.as_ref(), fallback);

    let head = Element::new("TableHeader").child(
        Element::new("TableRow").children(
            columns
                .iter()
                .map(|column| Element::new("TableHead").text(column.header())),
        ),
    );
    let body = Element::new("TableBody").children(
        resolved
            .records
            .iter()
            .map(|row| table_row(row, &columns)),
    );

    Element::root("section", &module.id, module.module_type.as_str())
        .class("px-4 py-8")
        .child_opt(data_note(resolved.note))
        .child_opt(section_title(module.title()))
        .child_opt(section_description(module.description()))
        .child(
            Element::new("div")
                .class("mt-4 rounded-md border")
                .child(Element::new("Table").child(head).child(body)),
        )
}

fn table_row(row: &Map<String, Value>, columns: &[Column]) -> Element {
    Element::new("TableRow").children(columns.iter().map(|column| {
        let text = cell_text(row.get(column.field()));
        if text.is_empty() {
            Element::new("TableCell")
        } else {
            Element::new("TableCell").text(text)
        }
    }))
}

/// Strings render verbatim, absent and null cells are empty, anything else as JSON text.
fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::UiDataSource;

    #[test]
    fn test_default_shape() {
        let jsx = generate(&UiModule::new("d1", "data-table-section")).to_string();
        assert_eq!(jsx.matches("<TableHead>").count(), 3);
        assert_eq!(jsx.matches("<TableRow>").count(), 4);
        assert!(jsx.contains("<TableCell>Item 2</TableCell>"));
        assert!(jsx.contains("<TableCell>3</TableCell>"));
    }

    #[test]
    fn test_column_key_and_missing_cells() {
        let module = UiModule::new("d2", "data-table-section")
            .with_props(json!({
                "columns": [{ "id": "who", "label": "Who", "key": "name" }, { "id": "age" }]
            }))
            .with_data(UiDataSource::Static {
                data: Some(json!([{ "name": "Ann", "age": 31 }, { "name": "Bo" }])),
            });
        let jsx = generate(&module).to_string();
        assert!(jsx.contains("<TableHead>Who</TableHead>"));
        assert!(jsx.contains("<TableHead>age</TableHead>"));
        assert!(jsx.contains("<TableCell>Ann</TableCell>"));
        assert!(jsx.contains("<TableCell>31</TableCell>"));
        assert!(jsx.contains("<TableCell />"));
    }
}
