use ui_dsl_core::{generate, GeneratorOptions};

fn main() {
    let page = r#"
        {
            "id": "home",
            "modules": [
                { "id": "hero", "type": "hero", "title": "Hello" },
                {
                    "id": "users",
                    "type": "data-table-section",
                    "title": "Users",
                    "props": { "columns": [{ "id": "name" }, { "id": "email" }] },
                    "data": {
                        "kind": "mock",
                        "count": 2,
                        "schema": {
                            "name": { "type": "string", "generator": "name" },
                            "email": { "type": "string", "generator": "email" }
                        }
                    }
                }
            ]
        }
    "#;

    match generate(page, "home.json", &GeneratorOptions::default()) {
        Ok(output) => {
            println!("// imports: {}", output.imports.join(", "));
            println!("{}", output.jsx);
        }
        Err(e) => {
            eprintln!("Failed to generate page: {:?}", miette::Report::new(e));
        }
    }
}
