use labelforge_designer::model::{Element, ElementContent, ElementKind};
use labelforge_designer::placeholder::{
    element_tokens, extract_tokens, resolve, resolve_element, suggestions, SuggestionKind,
};
use labelforge_designer::SampleData;

fn data() -> SampleData {
    [
        ("invoice.number", "INV-2025-001"),
        ("invoice.total", "$1,250.00"),
        ("customer.name", "John Doe"),
        ("product.sku", "PWD-001"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn resolves_single_token() {
    assert_eq!(
        resolve("Invoice {{invoice.number}}", &data()),
        "Invoice INV-2025-001"
    );
}

#[test]
fn resolves_multiple_and_repeated_tokens() {
    let text = "{{customer.name}} owes {{invoice.total}} ({{customer.name}})";
    assert_eq!(resolve(text, &data()), "John Doe owes $1,250.00 (John Doe)");
}

#[test]
fn unresolved_token_stays_verbatim() {
    assert_eq!(
        resolve("Hello {{missing.path}}!", &data()),
        "Hello {{missing.path}}!"
    );
}

#[test]
fn token_paths_are_trimmed() {
    assert_eq!(resolve("{{  invoice.number  }}", &data()), "INV-2025-001");
}

#[test]
fn section_path_does_not_resolve() {
    // "invoice" is a section, not a leaf.
    assert_eq!(resolve("{{invoice}}", &data()), "{{invoice}}");
}

#[test]
fn resolves_deeply_nested_dictionaries() {
    let value = serde_json::json!({
        "a": { "b": { "c": { "d": "deep" } } }
    });
    let data = SampleData::from_json(&value);
    assert_eq!(resolve("{{a.b.c.d}}", &data), "deep");
}

#[test]
fn resolution_is_idempotent_on_resolved_text() {
    let data = data();
    let once = resolve("Invoice {{invoice.number}} for {{customer.name}}", &data);
    assert_eq!(resolve(&once, &data), once);
}

#[test]
fn resolved_tokens_never_appear_literally() {
    let data = data();
    let text = "{{invoice.number}} {{missing.key}} {{product.sku}}";
    let resolved = resolve(text, &data);
    for token in extract_tokens(text) {
        if data.get(&token).is_some() {
            assert!(!resolved.contains(&format!("{{{{{token}}}}}")));
        }
    }
    assert!(resolved.contains("{{missing.key}}"));
}

#[test]
fn extract_tokens_dedupes_in_first_occurrence_order() {
    let tokens = extract_tokens("{{b.x}} {{a.y}} {{b.x}}");
    assert_eq!(tokens, vec!["b.x".to_string(), "a.y".to_string()]);
}

#[test]
fn extract_tokens_empty_without_tokens() {
    assert!(extract_tokens("no placeholders here").is_empty());
}

#[test]
fn suggestions_match_case_insensitively_and_sort() {
    let found = suggestions("INVOICE", &data());
    let keys: Vec<&str> = found.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, vec!["invoice", "invoice.number", "invoice.total"]);
    assert_eq!(found[0].kind, SuggestionKind::Section);
    assert_eq!(found[1].kind, SuggestionKind::Value);
    assert_eq!(found[1].value, "INV-2025-001");
}

#[test]
fn suggestions_for_empty_partial_cover_everything() {
    let found = suggestions("", &data());
    // 4 leaves plus 3 sections.
    assert_eq!(found.len(), 7);
    let mut sorted = found.clone();
    sorted.sort_by(|a, b| a.key.cmp(&b.key));
    assert_eq!(found, sorted);
}

#[test]
fn resolve_element_covers_text() {
    let mut el = Element::new(ElementKind::Text, 0.0, 0.0);
    if let ElementContent::Text(text) = &mut el.content {
        text.text = "No. {{invoice.number}}".to_string();
    }
    let resolved = resolve_element(&el, &data());
    let ElementContent::Text(text) = &resolved.content else {
        panic!("expected text");
    };
    assert_eq!(text.text, "No. INV-2025-001");
}

#[test]
fn resolve_element_covers_barcode_and_qrcode_values() {
    let mut barcode = Element::new(ElementKind::Barcode, 0.0, 0.0);
    if let ElementContent::Barcode(b) = &mut barcode.content {
        b.value = "{{product.sku}}".to_string();
    }
    let resolved = resolve_element(&barcode, &data());
    let ElementContent::Barcode(b) = &resolved.content else {
        panic!("expected barcode");
    };
    assert_eq!(b.value, "PWD-001");

    let mut qr = Element::new(ElementKind::Qrcode, 0.0, 0.0);
    if let ElementContent::Qrcode(q) = &mut qr.content {
        q.value = "{{invoice.number}}".to_string();
    }
    let resolved = resolve_element(&qr, &data());
    let ElementContent::Qrcode(q) = &resolved.content else {
        panic!("expected qrcode");
    };
    assert_eq!(q.value, "INV-2025-001");
}

#[test]
fn resolve_element_covers_every_table_cell() {
    let mut el = Element::new(ElementKind::Table, 0.0, 0.0);
    if let ElementContent::Table(table) = &mut el.content {
        table.rows = vec![
            vec!["{{product.sku}}".to_string(), "{{invoice.total}}".to_string()],
            vec!["{{customer.name}}".to_string(), "plain".to_string()],
        ];
    }
    let resolved = resolve_element(&el, &data());
    let ElementContent::Table(table) = &resolved.content else {
        panic!("expected table");
    };
    assert_eq!(table.rows[0], vec!["PWD-001", "$1,250.00"]);
    assert_eq!(table.rows[1], vec!["John Doe", "plain"]);
}

#[test]
fn resolve_element_recurses_into_groups() {
    let mut child = Element::new(ElementKind::Text, 0.0, 0.0);
    if let ElementContent::Text(text) = &mut child.content {
        text.text = "{{customer.name}}".to_string();
    }
    let mut group = Element::new(ElementKind::Group, 0.0, 0.0);
    if let ElementContent::Group(g) = &mut group.content {
        g.children.push(child);
    }
    let resolved = resolve_element(&group, &data());
    let ElementContent::Group(g) = &resolved.content else {
        panic!("expected group");
    };
    let ElementContent::Text(text) = &g.children[0].content else {
        panic!("expected text child");
    };
    assert_eq!(text.text, "John Doe");
}

#[test]
fn resolve_element_covers_stamp_text() {
    let mut el = Element::new(ElementKind::Stamp, 0.0, 0.0);
    if let ElementContent::Stamp(stamp) = &mut el.content {
        stamp.text = "{{invoice.number}}".to_string();
    }
    let resolved = resolve_element(&el, &data());
    let ElementContent::Stamp(stamp) = &resolved.content else {
        panic!("expected stamp");
    };
    assert_eq!(stamp.text, "INV-2025-001");
}

#[test]
fn element_tokens_collects_and_dedupes() {
    let mut el = Element::new(ElementKind::Table, 0.0, 0.0);
    if let ElementContent::Table(table) = &mut el.content {
        table.rows = vec![vec![
            "{{product.sku}}".to_string(),
            "{{product.sku}} / {{invoice.total}}".to_string(),
        ]];
    }
    assert_eq!(
        element_tokens(&el),
        vec!["product.sku".to_string(), "invoice.total".to_string()]
    );
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn text_without_tokens_is_untouched(text in "[a-zA-Z0-9 .,!?-]{0,60}") {
            prop_assert_eq!(resolve(&text, &data()), text);
        }

        #[test]
        fn resolution_is_idempotent(text in "[a-zA-Z ]{0,20}") {
            let tokenized = format!("{text} {{{{invoice.number}}}} {{{{unknown.key}}}}");
            let data = data();
            let once = resolve(&tokenized, &data);
            prop_assert_eq!(resolve(&once, &data), once);
        }
    }
}
