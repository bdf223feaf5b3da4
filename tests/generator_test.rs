use serde_json::json;
use ui_dsl_core::{generate_module, GeneratorOptions, UiDataSource, UiModule};

const ALL_TYPES: &[&str] = &[
    "hero",
    "pricing",
    "faq",
    "testimonials",
    "kpi-header",
    "navigation",
    "navigation-header",
    "navigation-sidebar",
    "footer",
    "features",
    "proof",
    "cta",
    "breadcrumbs",
    "data-table-section",
    "unknown-type",
];

fn render(module: &UiModule) -> String {
    generate_module(module, None, &GeneratorOptions::default()).jsx
}

#[test]
fn test_every_root_is_tagged() {
    for module_type in ALL_TYPES {
        let jsx = render(&UiModule::new("m-1", *module_type));
        let first_line = jsx.lines().next().unwrap();
        assert!(
            first_line.contains(&format!(
                "data-ui-id=\"m-1\" data-module-type=\"{module_type}\""
            )),
            "{module_type} root is not tagged: {first_line}"
        );
    }
}

#[test]
fn test_total_over_optional_fields() {
    let data = UiDataSource::Static { data: Some(json!([{ "value": 1 }])) };
    for module_type in ALL_TYPES {
        for mask in 0..16u8 {
            let mut module = UiModule::new("t", *module_type);
            if mask & 1 != 0 {
                module = module.with_title("Title");
            }
            if mask & 2 != 0 {
                module = module.with_description("Description");
            }
            if mask & 4 != 0 {
                module = module.with_props(json!({ "items": [], "columns": [{ "id": "value" }] }));
            }
            if mask & 8 != 0 {
                module = module.with_data(data.clone());
            }
            assert!(!render(&module).is_empty(), "{module_type} with mask {mask}");
        }
    }
}

#[test]
fn test_malformed_props_degrade_to_defaults() {
    let garbage = json!({
        "tiers": "lots",
        "items": 7,
        "features": { "not": "a list" },
        "links": ["not", "a", "map"],
        "columns": null,
        "logo": 3,
        "userMenu": [],
        "showSearch": "yes"
    });
    for module_type in ALL_TYPES {
        let module = UiModule::new("g", *module_type).with_props(garbage.clone());
        assert!(!render(&module).is_empty());
    }

    let pricing = render(&UiModule::new("g", "pricing").with_props(garbage.clone()));
    assert!(pricing.contains("Choose Starter"));

    let nav = render(&UiModule::new("g", "navigation").with_props(garbage));
    assert!(nav.contains(">About</a>"));
}

#[test]
fn test_hero_scenario() {
    let jsx = render(&UiModule::new("h1", "hero"));
    assert!(jsx.contains("data-ui-id=\"h1\""));
    assert!(jsx.contains("data-module-type=\"hero\""));
    assert!(jsx.contains("Welcome"));
    assert!(jsx.contains("Get Started"));
}

#[test]
fn test_absent_fields_emit_no_empty_elements() {
    let jsx = render(&UiModule::new("d", "data-table-section"));
    assert!(!jsx.contains("<h2"));
    assert!(!jsx.contains("<p"));
}

#[test]
fn test_empty_title_and_description_emit_no_empty_elements() {
    for module_type in ALL_TYPES {
        let module = UiModule::new("e", *module_type)
            .with_title("")
            .with_description("");
        let jsx = render(&module);
        assert!(!jsx.contains("></h2>"), "{module_type} emitted an empty heading:\n{jsx}");
        assert!(!jsx.contains("></p>"), "{module_type} emitted an empty paragraph:\n{jsx}");
    }
}

#[test]
fn test_empty_title_keeps_literal_default() {
    let jsx = render(&UiModule::new("h2", "hero").with_title(""));
    assert!(jsx.contains(">Welcome</h1>"));

    let jsx = render(&UiModule::new("c2", "cta").with_title("").with_prop("buttonText", json!("")));
    assert!(jsx.contains(">Ready to get started?</h2>"));
    assert!(jsx.contains(">Get Started</a>"));
}

#[test]
fn test_empty_record_text_falls_through_to_alias() {
    let module = UiModule::new("t2", "testimonials").with_data(UiDataSource::Static {
        data: Some(json!([{ "text": "", "message": "Fast and friendly", "name": "Kim" }])),
    });
    assert!(render(&module).contains("Fast and friendly"));
}

#[test]
fn test_user_text_is_escaped() {
    let module = UiModule::new("x\"y", "cta").with_title("<script>{alert(1)}</script>");
    let jsx = render(&module);
    assert!(jsx.contains("data-ui-id=\"x&quot;y\""));
    assert!(jsx.contains("&lt;script&gt;&#123;alert(1)&#125;&lt;/script&gt;"));
    assert!(!jsx.contains("<script>"));
}

#[test]
fn test_indent_option() {
    let options = GeneratorOptions { indent: 4, ..Default::default() };
    let jsx = generate_module(&UiModule::new("c", "cta"), None, &options).jsx;
    assert!(jsx.contains("\n    <div className=\"mx-auto max-w-2xl space-y-6\">"));
}

#[test]
fn test_imports_per_type() {
    let cases: &[(&str, &[&str])] = &[
        ("testimonials", &["Card", "CardContent"]),
        ("features", &["Card", "CardHeader", "CardTitle", "CardContent"]),
        ("cta", &["Button"]),
        (
            "data-table-section",
            &["Table", "TableHeader", "TableBody", "TableRow", "TableHead", "TableCell"],
        ),
        ("faq", &[]),
        ("unknown-type", &[]),
    ];
    for (module_type, expected) in cases {
        let output = generate_module(&UiModule::new("i", *module_type), None, &GeneratorOptions::default());
        assert_eq!(output.imports, *expected, "{module_type}");
    }
}
